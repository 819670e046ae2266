// crates/citygeo-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and JSON
//! (de)serialization around the three transforms. Reading is whole-file
//! and in-memory; writing is pretty-printed with 2-space indentation and
//! overwrites any existing output.

use crate::error::{GeoJsonError, Result};
use crate::model::{CityCollection, RawCollection};
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

mod common_io;

pub use common_io::open_stream;

/// Reads a raw source GeoJSON file (normalizer input).
///
/// Fails with [`GeoJsonError::NotFound`] when the file is absent and
/// [`GeoJsonError::Malformed`] when the JSON does not parse or lacks a
/// `features` sequence.
pub fn read_raw_collection(path: impl AsRef<Path>) -> Result<RawCollection> {
    let path = path.as_ref();
    let reader = open_stream(path)?;
    serde_json::from_reader(reader)
        .map_err(|e| GeoJsonError::Malformed(format!("{}: {}", path.display(), e)))
}

/// Reads a canonical city collection (filter input).
pub fn read_collection(path: impl AsRef<Path>) -> Result<CityCollection> {
    let path = path.as_ref();
    let reader = open_stream(path)?;
    serde_json::from_reader(reader)
        .map_err(|e| GeoJsonError::Malformed(format!("{}: {}", path.display(), e)))
}

/// Reads a file as a loosely-typed JSON document (merger input).
///
/// Shape validation is the merger's job; only JSON syntax errors are
/// rejected here.
pub fn read_document(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let reader = open_stream(path)?;
    serde_json::from_reader(reader)
        .map_err(|e| GeoJsonError::Malformed(format!("{}: {}", path.display(), e)))
}

/// Writes a value as pretty-printed JSON, overwriting `path`.
pub fn write_pretty<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_collection(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, GeoJsonError::NotFound(_)), "got: {err:?}");
    }

    #[test]
    fn unparsable_json_is_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = read_document(file.path()).unwrap_err();
        assert!(matches!(err, GeoJsonError::Malformed(_)), "got: {err:?}");
    }

    #[test]
    fn missing_features_is_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ \"type\": \"FeatureCollection\" }}").unwrap();
        let err = read_collection(file.path()).unwrap_err();
        assert!(matches!(err, GeoJsonError::Malformed(_)), "got: {err:?}");
    }

    #[test]
    fn write_is_pretty_printed_and_reparses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let doc = serde_json::json!({ "type": "FeatureCollection", "features": [] });
        write_pretty(&path, &doc).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("  \"type\""), "2-space indent expected: {text}");
        assert_eq!(read_document(&path).unwrap(), doc);
    }
}
