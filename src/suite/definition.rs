use crate::collection::node::present;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The top-level test suite input: which requests to chain, in which flows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TestSuiteSpecification {
    pub name: String,
    #[serde(default)]
    pub test_flows: Vec<TestFlowSpecification>,
    #[serde(default)]
    pub environments: Vec<Value>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub root: Value,
}

/// A named, ordered group of chained calls.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TestFlowSpecification {
    pub flow_name: String,
    #[serde(default)]
    pub seq: u32,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub root: Value,
    #[serde(default)]
    pub requests: Vec<FlowStepSpecification>,
}

/// One call of a flow, with the fields it overrides on the referenced request.
///
/// `parameters`, `script` and `url` distinguish an absent key (`None`) from an explicit
/// `null` (`Some(Value::Null)`); the latter still counts as an override.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlowStepSpecification {
    pub request_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default)]
    pub seq: u32,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub parameters: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub script: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl FlowStepSpecification {
    pub fn new(request_id: impl Into<String>, seq: u32) -> Self {
        Self {
            request_id: request_id.into(),
            seq,
            ..Self::default()
        }
    }
}
