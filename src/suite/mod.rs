pub mod definition;
pub mod overrides;

pub use definition::*;
pub use overrides::*;
