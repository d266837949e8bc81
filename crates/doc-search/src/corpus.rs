// doc-search/src/corpus.rs
//! Corpus enumeration.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SearchError};

/// Only files with this suffix belong to the corpus.
pub const DOCUMENT_SUFFIX: &str = ".txt";

/// A corpus entry: file name (identity) plus full path.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub path: PathBuf,
}

/// List the `.txt` files directly under `dir`.
///
/// Order is directory enumeration order, unsorted. Subdirectories are
/// not descended into, and entries whose names are not valid Unicode
/// are skipped.
pub fn list_documents(dir: &Path) -> Result<Vec<Document>> {
    if !dir.is_dir() {
        return Err(SearchError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut documents = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            tracing::debug!("skipping non-unicode file name: {:?}", name);
            continue;
        };
        if !name.ends_with(DOCUMENT_SUFFIX) {
            continue;
        }

        documents.push(Document {
            name: name.to_owned(),
            path,
        });
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn lists_only_txt_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "alpha").unwrap();
        fs::write(dir.path().join("b.log"), "beta").unwrap();
        fs::write(dir.path().join("c.md"), "gamma").unwrap();

        let mut names: Vec<String> = list_documents(dir.path())
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        names.sort();
        assert_eq!(names, ["a.txt"]);
    }

    #[test]
    fn ignores_directories_even_with_the_suffix() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested.txt")).unwrap();
        fs::write(dir.path().join("real.txt"), "delta").unwrap();

        let documents = list_documents(dir.path()).unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].name, "real.txt");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let err = list_documents(Path::new("/no/such/corpus")).unwrap_err();
        assert!(matches!(err, SearchError::DirectoryNotFound(_)));
    }
}
