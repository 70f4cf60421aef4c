use super::definition::FlowStepSpecification;
use crate::collection::Request;
use serde_json::Value;

/// Builds the request a flow step runs: `original` with the step's overrides laid on top.
///
/// `parameters` replaces `params`; `script` and `url` replace their namesakes. Each is
/// applied whenever the step declares it. `body` is applied only when it is a non-empty
/// value, so `body: {}` keeps the original body. `original` is never modified.
pub fn apply_overrides(original: &Request, step: &FlowStepSpecification) -> Request {
    Request {
        url: step.url.clone().or_else(|| original.url.clone()),
        params: step.parameters.clone().or_else(|| original.params.clone()),
        script: step.script.clone().or_else(|| original.script.clone()),
        body: step
            .body
            .as_ref()
            .filter(|body| is_body_override(body))
            .unwrap_or(&original.body)
            .clone(),
        rest: original.rest.clone(),
    }
}

/// Whether a step's `body` replaces the request body: not null, not `{}` and not `[]`.
/// Scalars, including `""`, `0` and `false`, always replace it.
pub fn is_body_override(body: &Value) -> bool {
    match body {
        Value::Null => false,
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}
