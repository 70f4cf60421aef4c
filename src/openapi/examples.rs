use super::document::{ApiSpecification, JSON_MEDIA_TYPE};
use crate::error::ExampleError;
use serde_json::Value;

/// Returns the first example declared for the JSON request body of `operation_id`.
///
/// Operations are searched paths-first then methods, in declaration order, and the
/// first one with a matching `operationId` wins. Only the head of its `examples` map is
/// ever considered.
pub fn extract_example<'a>(
    spec: &'a ApiSpecification,
    operation_id: &str,
) -> Result<&'a Value, ExampleError> {
    let operation = spec
        .find_operation(operation_id)
        .ok_or_else(|| ExampleError::OperationNotFound {
            operation_id: operation_id.to_string(),
        })?;

    let media_type = operation
        .request_body
        .as_ref()
        .and_then(|body| body.content.get(JSON_MEDIA_TYPE))
        .ok_or_else(|| ExampleError::NoRequestBody {
            operation_id: operation_id.to_string(),
        })?;

    let (example_name, example) = media_type
        .examples
        .as_ref()
        .and_then(|examples| examples.first())
        .ok_or_else(|| ExampleError::NoExamplesDeclared {
            operation_id: operation_id.to_string(),
        })?;

    spec.example_value(example).ok_or_else(|| ExampleError::UnresolvedExample {
        operation_id: operation_id.to_string(),
        example: example_name.to_string(),
    })
}
