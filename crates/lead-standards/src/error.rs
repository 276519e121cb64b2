use std::path::PathBuf;

/// Failures while fetching or decoding reference data.
///
/// These are warnings, not pipeline failures: every caller degrades to an
/// empty dataset when one of these occurs.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    #[error("locality reference request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode reference payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to read reference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
