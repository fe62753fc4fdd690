use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read member sheet {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read overlay {path}: {source}")]
    OverlayIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse overlay {path}: {source}")]
    OverlayJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
