use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read input {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input is not parseable as a table: {message}")]
    NotATable { message: String },

    #[error("failed to write csv output: {0}")]
    Write(#[from] std::io::Error),

    #[error("failed to encode csv output: {0}")]
    Csv(#[from] csv::Error),
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IngestError::Io {
            path: path.into(),
            source,
        }
    }
}
