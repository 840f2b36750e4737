use crate::error::LoadError;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use storage_types::StorageLayout;
use tracing::debug;

/* ============================================================================
   Document Shapes
   ============================================================================ */

/* Where the layout was found inside the input document */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutFormat {
    /* `{ "storage": [...], "types": {...} }` as printed by `forge inspect` or `solc --storage-layout` */
    Bare,
    /* A build artifact carrying the layout under `storageLayout` */
    Artifact,
    /* solc standard-json output: `contracts.<source>.<name>.storageLayout` */
    StandardJson,
}

/* A layout read from disk together with where it came from */
#[derive(Debug, Clone)]
pub struct LoadedLayout {
    pub path: PathBuf,
    pub format: LayoutFormat,
    pub layout: StorageLayout,
}

/* ============================================================================
   Loading
   ============================================================================ */

/// Read and decode the layout document at `path`.
///
/// `contract` selects the contract when the document is a standard-json
/// output holding several of them; it is ignored for the other shapes.
pub fn load_layout(path: &Path, contract: Option<&str>) -> Result<LoadedLayout, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_layout(&text, path, contract)
}

/// Decode a layout document already held in memory. `path` is only used for
/// error messages.
pub fn parse_layout(
    text: &str,
    path: &Path,
    contract: Option<&str>,
) -> Result<LoadedLayout, LoadError> {
    let document: Value = serde_json::from_str(text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let (format, layout) = extract_layout(document, path, contract)?;
    debug!(
        path = %path.display(),
        ?format,
        variables = layout.storage.len(),
        types = layout.types.len(),
        "loaded storage layout"
    );

    Ok(LoadedLayout {
        path: path.to_path_buf(),
        format,
        layout,
    })
}

/// Locate the layout inside a parsed document and decode it.
pub fn extract_layout(
    document: Value,
    path: &Path,
    contract: Option<&str>,
) -> Result<(LayoutFormat, StorageLayout), LoadError> {
    let Value::Object(mut root) = document else {
        return Err(LoadError::MissingLayout { path: path.to_path_buf() });
    };

    if root.contains_key("storage") {
        return decode(Value::Object(root), path).map(|layout| (LayoutFormat::Bare, layout));
    }

    if let Some(inner) = root.remove("storageLayout") {
        return decode(inner, path).map(|layout| (LayoutFormat::Artifact, layout));
    }

    if let Some(Value::Object(sources)) = root.remove("contracts") {
        return select_contract(sources, path, contract)
            .map(|layout| (LayoutFormat::StandardJson, layout));
    }

    Err(LoadError::MissingLayout { path: path.to_path_buf() })
}

fn decode(value: Value, path: &Path) -> Result<StorageLayout, LoadError> {
    serde_json::from_value(value).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/* Pick `contracts.<source>.<contract>` out of a standard-json output */
fn select_contract(
    sources: Map<String, Value>,
    path: &Path,
    contract: Option<&str>,
) -> Result<StorageLayout, LoadError> {
    /* (source file, contract name, contract output) */
    let mut candidates: Vec<(String, String, Value)> = Vec::new();
    for (source, contracts) in sources {
        let Value::Object(contracts) = contracts else {
            continue;
        };
        for (name, output) in contracts {
            if contract.map_or(true, |wanted| wanted == name) {
                candidates.push((source.clone(), name, output));
            }
        }
    }

    let wanted = contract.unwrap_or("*").to_string();
    match candidates.len() {
        0 => Err(LoadError::ContractNotFound {
            path: path.to_path_buf(),
            contract: wanted,
        }),
        1 => {
            let (source, name, output) = candidates.remove(0);
            debug!(%source, contract = %name, "selected contract from standard-json output");
            match output {
                Value::Object(mut fields) => match fields.remove("storageLayout") {
                    Some(layout) => decode(layout, path),
                    None => Err(LoadError::LayoutNotRequested {
                        path: path.to_path_buf(),
                        contract: name,
                    }),
                },
                _ => Err(LoadError::LayoutNotRequested {
                    path: path.to_path_buf(),
                    contract: name,
                }),
            }
        }
        _ => Err(LoadError::AmbiguousContract {
            path: path.to_path_buf(),
            contract: wanted,
            sources: candidates
                .into_iter()
                .map(|(source, name, _)| format!("{}:{}", source, name))
                .collect(),
        }),
    }
}
