pub mod listing;
pub mod solidity;

use crate::layout::Constant;

/* Rendered artifact formats */
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum OutputFormat {
    /* `library <Contract>StorageConstants { ... }` */
    #[default]
    Solidity,
    Json,
    Yaml,
}

/* Where the constants go: the contract they describe and the compiler version
   the generated file declares */
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryTarget {
    pub contract_name: String,
    pub solidity_version: String,
}

impl LibraryTarget {
    pub fn new(contract_name: impl Into<String>, solidity_version: impl Into<String>) -> Self {
        Self {
            contract_name: contract_name.into(),
            solidity_version: solidity_version.into(),
        }
    }

    pub fn library_name(&self) -> String {
        format!("{}StorageConstants", self.contract_name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("failed to render JSON listing: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to render YAML listing: {0}")]
    Yaml(#[from] serde_yml::Error),
}

/* Render `constants` in order. No reordering or deduplication happens here. */
pub fn emit(format: OutputFormat, target: &LibraryTarget, constants: &[Constant]) -> Result<String, EmitError> {
    match format {
        OutputFormat::Solidity => Ok(solidity::emit_library(target, constants)),
        OutputFormat::Json => listing::emit_json(target, constants),
        OutputFormat::Yaml => listing::emit_yaml(target, constants),
    }
}
