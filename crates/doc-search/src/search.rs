// doc-search/src/search.rs
//! Linear corpus search.

use std::path::{Path, PathBuf};

use crate::corpus::{self, Document};
use crate::error::{Result, SearchError};
use crate::extract::read_document;

/// A corpus document containing the query.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub name: String,
    pub path: PathBuf,
}

/// Scan every `.txt` file under `dir` for `query`, case-insensitively.
///
/// Each document is read fresh; nothing is cached between calls. The
/// result keeps directory enumeration order. The empty query matches
/// every document. A document that cannot be decoded is skipped with a
/// warning rather than failing the whole scan.
pub fn search_corpus(query: &str, dir: &Path) -> Result<Vec<SearchHit>> {
    let needle = query.to_lowercase();
    let mut hits = Vec::new();

    for Document { name, path } in corpus::list_documents(dir)? {
        let content = match read_document(&path) {
            Ok(content) => content,
            Err(e @ SearchError::Decode { .. }) => {
                tracing::warn!("skipping document: {e}");
                continue;
            }
            Err(e) => return Err(e),
        };

        if content.to_lowercase().contains(&needle) {
            hits.push(SearchHit { name, path });
        }
    }

    tracing::debug!("query {:?} matched {} document(s)", query, hits.len());
    Ok(hits)
}

/// Print a match list (used by the CLI).
pub fn print_results(query: &str, hits: &[SearchHit]) {
    if hits.is_empty() {
        println!("The term '{query}' does not appear in any document.");
        return;
    }

    println!("The term '{query}' was found in the following documents:");
    for hit in hits {
        println!("  - {}", hit.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    fn corpus(files: &[(&str, &[u8])]) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    fn names(hits: &[SearchHit]) -> Vec<&str> {
        hits.iter().map(|h| h.name.as_str()).collect()
    }

    #[test]
    fn matches_only_documents_containing_the_term() {
        let dir = corpus(&[
            ("a.txt", b"the quick fox".as_slice()),
            ("b.txt", b"the lazy dog"),
            ("c.log", b"the quick fox"),
        ]);

        let hits = search_corpus("quick", dir.path()).unwrap();
        assert_eq!(names(&hits), ["a.txt"]);
    }

    #[rstest]
    #[case("Hello")]
    #[case("hello")]
    #[case("HELLO")]
    fn query_case_is_ignored(#[case] query: &str) {
        let dir = corpus(&[
            ("a.txt", b"say Hello out there".as_slice()),
            ("b.txt", b"nothing of note"),
        ]);

        let hits = search_corpus(query, dir.path()).unwrap();
        assert_eq!(names(&hits), ["a.txt"]);
    }

    #[test]
    fn content_case_is_ignored() {
        let dir = corpus(&[("a.txt", b"Hello World".as_slice())]);

        let hits = search_corpus("WORLD", dir.path()).unwrap();
        assert_eq!(names(&hits), ["a.txt"]);
    }

    #[test]
    fn empty_query_matches_every_document() {
        let dir = corpus(&[
            ("a.txt", b"alpha".as_slice()),
            ("b.txt", b"beta"),
            ("c.log", b"gamma"),
        ]);

        let hits = search_corpus("", dir.path()).unwrap();
        let mut found = names(&hits);
        found.sort();
        assert_eq!(found, ["a.txt", "b.txt"]);
    }

    #[test]
    fn empty_corpus_yields_no_hits() {
        let dir = corpus(&[]);

        let hits = search_corpus("anything", dir.path()).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let err = search_corpus("anything", Path::new("/no/such/corpus")).unwrap_err();
        assert!(matches!(err, SearchError::DirectoryNotFound(_)));
    }

    #[test]
    fn undecodable_document_is_skipped() {
        let dir = corpus(&[
            ("good.txt", b"alpha beta".as_slice()),
            // malformed UTF-16: byte-order mark plus a lone trailing byte
            ("bad.txt", b"\xff\xfe\x41\x00\x42"),
        ]);

        let hits = search_corpus("alpha", dir.path()).unwrap();
        assert_eq!(names(&hits), ["good.txt"]);
    }
}
