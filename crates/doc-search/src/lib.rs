// doc-search/src/lib.rs
//! Plain-text corpus search.
//!
//! Scans a flat directory of `.txt` documents for a case-insensitive
//! substring and reports the matches in directory order. No index is
//! kept; every search reads the corpus fresh.

pub mod config;
pub mod corpus;
pub mod error;
pub mod extract;
pub mod search;

pub use config::{DEFAULT_CORPUS_DIR, SearchConfig};
pub use corpus::{Document, list_documents};
pub use error::{Result, SearchError};
pub use extract::read_document;
pub use search::{SearchHit, print_results, search_corpus};

use std::path::Path;

/// Search entry point: a corpus configuration validated up front.
#[derive(Debug)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    /// Create a searcher, failing fast when the corpus directory is
    /// missing.
    pub fn new(config: SearchConfig) -> Result<Self> {
        if !config.corpus_dir.is_dir() {
            return Err(SearchError::DirectoryNotFound(config.corpus_dir.clone()));
        }
        Ok(Self { config })
    }

    pub fn corpus_dir(&self) -> &Path {
        &self.config.corpus_dir
    }

    /// Run a search over the configured corpus.
    pub fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        search_corpus(query, &self.config.corpus_dir)
    }
}
