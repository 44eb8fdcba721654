use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions that abort a combine run
#[derive(Debug, Error)]
pub enum CombineError {
    /// The requested output directory path exists but is a regular file
    #[error("output directory path is a file: {0}")]
    OutputPathIsFile(PathBuf),

    /// A located model file parsed to something other than a JSON object
    #[error("model file is not a JSON object: {0}")]
    ModelNotAnObject(PathBuf),
}
