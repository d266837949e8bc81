use super::Command;
use crate::config::Config;
use crate::error::Result;
use std::path::PathBuf;
use tracing::info;

use doc_search::{SearchConfig, Searcher, print_results};

pub struct SearchCommand {
    config: Config,
    term: String,
    dir: Option<PathBuf>,
}

impl SearchCommand {
    pub fn new(cfg: Config, term: String, dir: Option<PathBuf>) -> Self {
        Self {
            config: cfg,
            term,
            dir,
        }
    }
}

impl Command for SearchCommand {
    fn execute(&self) -> Result<()> {
        let corpus_dir = self
            .dir
            .clone()
            .unwrap_or_else(|| self.config.corpus_dir.clone());

        let searcher = Searcher::new(SearchConfig { corpus_dir })?;
        info!("scanning {:?}", searcher.corpus_dir());

        let hits = searcher.search(&self.term)?;
        print_results(&self.term, &hits);

        Ok(())
    }
}
