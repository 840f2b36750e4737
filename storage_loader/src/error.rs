use std::path::PathBuf;
use thiserror::Error;

/* Errors that can occur while reading a layout document */
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /* Malformed JSON, or a required key (`storage`, `types`, `label`, ...) is absent */
    #[error("malformed storage layout in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} contains no storage layout (expected `storage`, `storageLayout` or `contracts`)", .path.display())]
    MissingLayout { path: PathBuf },

    #[error("contract `{contract}` not found in {}", .path.display())]
    ContractNotFound { path: PathBuf, contract: String },

    #[error("contract `{contract}` is defined in several sources of {}: {}", .path.display(), .sources.join(", "))]
    AmbiguousContract {
        path: PathBuf,
        contract: String,
        sources: Vec<String>,
    },

    #[error("contract `{contract}` in {} was compiled without a storage layout output", .path.display())]
    LayoutNotRequested { path: PathBuf, contract: String },
}
