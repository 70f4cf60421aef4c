//! File loading and writing for the assembly pipeline.
//!
//! Inputs are JSON, or YAML when the file ends in `.yaml` / `.yml`. Outputs are always
//! pretty-printed JSON.
use crate::collection::Folder;
use crate::error::LoadError;
use crate::openapi::ApiSpecification;
use crate::suite::TestSuiteSpecification;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Loads an OpenAPI document.
pub fn load_api_specification(path: impl AsRef<Path>) -> Result<ApiSpecification, LoadError> {
    read_document(path)
}

/// Loads a request collection; its root object is read as the root folder.
pub fn load_collection(path: impl AsRef<Path>) -> Result<Folder, LoadError> {
    read_document(path)
}

/// Loads a test suite specification.
pub fn load_suite(path: impl AsRef<Path>) -> Result<TestSuiteSpecification, LoadError> {
    read_document(path)
}

/// Writes a request collection, e.g. after example injection.
pub fn save_collection(path: impl AsRef<Path>, collection: &Folder) -> Result<(), LoadError> {
    write_json(path, collection)
}

pub(crate) fn read_document<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let parse_error = |message: String| LoadError::Parse {
        path: path.display().to_string(),
        message,
    };
    if is_yaml(path) {
        serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))
    } else {
        serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))
    }
}

pub(crate) fn write_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<(), LoadError> {
    let path = path.as_ref();
    let io_error = |source: std::io::Error| LoadError::Io {
        path: path.display().to_string(),
        source,
    };

    let json = serde_json::to_string_pretty(value).map_err(|e| LoadError::Serialize {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, json).map_err(io_error)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}
