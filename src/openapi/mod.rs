//! The parts of an OpenAPI document needed to find request body examples.
pub mod document;
pub mod examples;

pub use document::*;
pub use examples::*;
