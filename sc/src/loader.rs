//! Reading collection documents from disk

use log::debug;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::model::CollectionDefinition;

/// Read and decode the collection document at `path`
pub fn load_collections(path: impl AsRef<Path>) -> Result<Vec<CollectionDefinition>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("load_collections: read {} bytes from {}", content.len(), path.display());
    decode(&content, path)
}

/// Decode a collection document held in memory
pub fn parse_collections(content: &str) -> Result<Vec<CollectionDefinition>, LoadError> {
    decode(content, Path::new("<input>"))
}

fn decode(content: &str, path: &Path) -> Result<Vec<CollectionDefinition>, LoadError> {
    let value: Value = serde_json::from_str(content).map_err(|source| LoadError::Parse {
        path: PathBuf::from(path),
        source,
    })?;

    if !value.is_array() {
        return Err(LoadError::NotAList {
            path: PathBuf::from(path),
            found: kind_of(&value),
        });
    }

    serde_json::from_value(value).map_err(|source| LoadError::Parse {
        path: PathBuf::from(path),
        source,
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
