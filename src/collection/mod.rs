//! The request collection tree and the lookups that run over it.
pub mod lint;
pub mod node;
pub mod resolver;

pub use lint::*;
pub use node::*;
pub use resolver::*;
