// doc-search/src/extract.rs
//! Text decoding for corpus files.

use std::fs;
use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::Encoding;

use crate::error::{Result, SearchError};

/// Read a corpus file, tolerating legacy encodings.
///
/// A byte-order mark wins outright; otherwise UTF-8 is tried first and
/// anything else goes through chardetng detection. A decode that still
/// produces replacement characters is reported as an error, and the
/// caller decides whether to skip the file.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;

    if let Some((encoding, _bom_len)) = Encoding::for_bom(&bytes) {
        tracing::debug!("{} byte-order mark in {:?}", encoding.name(), path);
        return decode_bytes(encoding, &bytes, path);
    }

    if let Ok(text) = std::str::from_utf8(&bytes) {
        return Ok(text.to_owned());
    }

    let mut detector = EncodingDetector::new();
    detector.feed(&bytes, true);
    let encoding = detector.guess(None, true);
    tracing::debug!("detected {} for {:?}", encoding.name(), path);

    decode_bytes(encoding, &bytes, path)
}

fn decode_bytes(encoding: &'static Encoding, bytes: &[u8], path: &Path) -> Result<String> {
    let (decoded, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(SearchError::Decode {
            path: path.to_path_buf(),
            encoding: used.name(),
        });
    }
    Ok(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn reads_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "Hello World").unwrap();

        assert_eq!(read_document(&path).unwrap(), "Hello World");
    }

    #[test]
    fn reads_utf16_with_byte_order_mark() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        let mut bytes = vec![0xff, 0xfe];
        for unit in "Hola mundo".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        fs::write(&path, bytes).unwrap();

        assert_eq!(read_document(&path).unwrap(), "Hola mundo");
    }

    #[test]
    fn truncated_utf16_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        // UTF-16LE byte-order mark, one code unit, then a lone byte
        fs::write(&path, b"\xff\xfe\x41\x00\x42").unwrap();

        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, SearchError::Decode { .. }));
    }
}
