// doc-search/src/error.rs
//! Error taxonomy for corpus searches.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("corpus directory not found: {0:?}")]
    DirectoryNotFound(PathBuf),

    /// The file's bytes could not be decoded as text, even after
    /// encoding detection.
    #[error("cannot decode {path:?} as text (tried {encoding})")]
    Decode { path: PathBuf, encoding: &'static str },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
