use crate::collection::Request;
use crate::error::LoadError;
use crate::source;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// The assembled test suite: one folder per test flow, in suite order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterCollection {
    pub name: String,
    pub version: String,
    pub items: Vec<FlowFolder>,
    #[serde(default)]
    pub environments: Vec<Value>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub root: Value,
}

impl MasterCollection {
    /// Writes the collection as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        source::write_json(path, self)
    }

    /// Loads a previously saved master collection.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        source::read_document(path)
    }

    /// Total number of resolved requests across all flows.
    pub fn request_count(&self) -> usize {
        self.items.iter().map(|flow| flow.items.len()).sum()
    }
}

/// The resolved requests of one test flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "folder")]
pub struct FlowFolder {
    pub name: String,
    pub seq: u32,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub root: Value,
    pub items: Vec<MasterRequest>,
}

/// A request ready for the test runner, overrides already applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "http")]
pub struct MasterRequest {
    pub name: String,
    pub filename: String,
    pub seq: u32,
    #[serde(default)]
    pub settings: Map<String, Value>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub request: Request,
}
