use crate::collection::LookupScope;
use thiserror::Error;

/// Errors raised while walking a request collection to find a folder or request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("Folder path '{path}' could not be resolved: no child named '{segment}'")]
    FolderNotFound { path: String, segment: String },

    #[error("Folder path '{path}' could not be resolved: '{segment}' is a request, not a folder")]
    NotAFolder { path: String, segment: String },

    #[error("Folder '{path}' was resolved but contains no items")]
    EmptyFolder { path: String },

    #[error("Request '{name}' not found in {scope}")]
    RequestNotFound { name: String, scope: LookupScope },
}

/// Errors raised while looking up an example payload in an API specification.
///
/// These never abort an assembly; callers log them and keep the request body as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExampleError {
    #[error("No operation with operationId '{operation_id}' in the API specification")]
    OperationNotFound { operation_id: String },

    #[error("Operation '{operation_id}' declares no application/json request body")]
    NoRequestBody { operation_id: String },

    #[error("Operation '{operation_id}' declares no request body examples")]
    NoExamplesDeclared { operation_id: String },

    #[error("Example '{example}' of operation '{operation_id}' has no resolvable value")]
    UnresolvedExample {
        operation_id: String,
        example: String,
    },
}

/// Errors raised by the file loaders and writers in [`crate::source`].
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not access '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("Failed to serialize '{path}': {message}")]
    Serialize { path: String, message: String },
}
