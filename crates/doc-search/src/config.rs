// doc-search/src/config.rs
//! Search configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Corpus directory used when no configuration overrides it.
pub const DEFAULT_CORPUS_DIR: &str = "./docs";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Directory holding the searchable documents
    pub corpus_dir: PathBuf,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            corpus_dir: PathBuf::from(DEFAULT_CORPUS_DIR),
        }
    }
}
