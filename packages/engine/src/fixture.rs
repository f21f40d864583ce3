//! Loading a [`MemoryEngine`] from a JSON document.
//!
//! Mapping from JSON to the store:
//! - object → container, one entry per member
//! - array → container keyed by decimal element index
//! - string → value holding the UTF-8 bytes
//! - `null` → empty value
//! - number / bool → value holding its JSON text
//!
//! The document itself must be an object whose members are all objects or
//! arrays: the root namespace only holds containers.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value as JsonValue;

use crate::{EngineError, MemoryBucket, MemoryEngine};

impl MemoryEngine {
    /// Build an engine from a parsed JSON document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nestview_engine::MemoryEngine;
    ///
    /// let engine = MemoryEngine::from_json(&serde_json::json!({
    ///     "users": {"alice": "1", "bob": "2"},
    ///     "logs": {}
    /// }))
    /// .unwrap();
    /// assert_eq!(engine.snapshot().len(), 2);
    /// ```
    pub fn from_json(document: &JsonValue) -> Result<Self, EngineError> {
        let root = root_from_json(document)?;
        tracing::debug!(top_level = root.len(), "loaded JSON fixture");
        Ok(MemoryEngine::new(root))
    }

    /// Build an engine from JSON read off `reader`.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, EngineError> {
        let document: JsonValue = serde_json::from_reader(reader)?;
        Self::from_json(&document)
    }

    /// Build an engine from a JSON file on disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening JSON fixture");
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }
}

fn root_from_json(document: &JsonValue) -> Result<MemoryBucket, EngineError> {
    let JsonValue::Object(members) = document else {
        return Err(EngineError::fixture(format!(
            "document root must be an object, found {}",
            kind_of(document)
        )));
    };

    let mut root = MemoryBucket::new();
    for (name, member) in members {
        if !matches!(member, JsonValue::Object(_) | JsonValue::Array(_)) {
            return Err(EngineError::fixture(format!(
                "root member {:?} must be an object or array, found {}",
                name,
                kind_of(member)
            )));
        }
        root.insert_bucket(name.clone(), bucket_from_json(member));
    }
    Ok(root)
}

fn bucket_from_json(value: &JsonValue) -> MemoryBucket {
    let mut bucket = MemoryBucket::new();
    match value {
        JsonValue::Object(members) => {
            for (key, member) in members {
                insert_member(&mut bucket, key.clone(), member);
            }
        }
        JsonValue::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                insert_member(&mut bucket, index.to_string(), item);
            }
        }
        _ => {}
    }
    bucket
}

fn insert_member(bucket: &mut MemoryBucket, key: String, member: &JsonValue) {
    match member {
        JsonValue::Object(_) | JsonValue::Array(_) => {
            bucket.insert_bucket(key, bucket_from_json(member));
        }
        JsonValue::String(s) => bucket.insert_value(key, s.clone()),
        JsonValue::Null => bucket.insert_value(key, ""),
        JsonValue::Bool(_) | JsonValue::Number(_) => bucket.insert_value(key, member.to_string()),
    }
}

fn kind_of(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn objects_become_containers_and_scalars_values() {
        let engine = MemoryEngine::from_json(&json!({
            "users": {
                "alice": "1",
                "age": 30,
                "admin": true,
                "nothing": null,
                "prefs": {"theme": "dark"}
            }
        }))
        .unwrap();

        let root = engine.snapshot();
        let users = root.bucket(b"users").unwrap();
        assert_eq!(users.get(b"alice").unwrap().as_ref(), b"1");
        assert_eq!(users.get(b"age").unwrap().as_ref(), b"30");
        assert_eq!(users.get(b"admin").unwrap().as_ref(), b"true");
        assert!(users.get(b"nothing").unwrap().is_empty());
        assert_eq!(
            users.bucket(b"prefs").unwrap().get(b"theme").unwrap().as_ref(),
            b"dark"
        );
    }

    #[test]
    fn arrays_are_keyed_by_index() {
        let engine = MemoryEngine::from_json(&json!({"tags": ["x", "y", ["z"]]})).unwrap();
        let root = engine.snapshot();
        let tags = root.bucket(b"tags").unwrap();
        assert_eq!(tags.len(), 3);
        assert_eq!(tags.get(b"0").unwrap().as_ref(), b"x");
        assert_eq!(tags.get(b"1").unwrap().as_ref(), b"y");
        assert_eq!(tags.bucket(b"2").unwrap().get(b"0").unwrap().as_ref(), b"z");
    }

    #[test]
    fn root_must_be_an_object() {
        let err = MemoryEngine::from_json(&json!(["users"])).unwrap_err();
        assert!(matches!(err, EngineError::Fixture { .. }));
        assert!(err.to_string().contains("found an array"));
    }

    #[test]
    fn root_members_must_be_containers() {
        let err = MemoryEngine::from_json(&json!({"ok": {}, "version": "3"})).unwrap_err();
        assert!(err.to_string().contains("\"version\""));
        assert!(err.to_string().contains("found a string"));
    }

    #[test]
    fn empty_document_is_an_empty_store() {
        let engine = MemoryEngine::from_json(&json!({})).unwrap();
        assert!(engine.snapshot().is_empty());
    }

    #[test]
    fn from_reader_reports_bad_json() {
        let err = MemoryEngine::from_json_reader("{\"users\":".as_bytes()).unwrap_err();
        assert!(matches!(err, EngineError::Json(_)));
    }

    #[test]
    fn open_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"users": {{"alice": "1"}}}}"#).unwrap();

        let engine = MemoryEngine::open(file.path()).unwrap();
        let root = engine.snapshot();
        assert_eq!(
            root.bucket(b"users").unwrap().get(b"alice").unwrap().as_ref(),
            b"1"
        );
    }

    #[test]
    fn open_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = MemoryEngine::open(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, EngineError::Io(_)));
    }
}
