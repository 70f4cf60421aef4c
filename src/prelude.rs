//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the flowsuite
//! crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowsuite::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let collection = load_collection("path/to/collection.json")?;
//! let suite = load_suite("path/to/test_suite.json")?;
//!
//! let assembly = Assembler::builder(&collection).build().assemble(&suite);
//! assembly.master.save("path/to/master_collection.json")?;
//! # Ok(())
//! # }
//! ```

// Assembly
pub use crate::assembler::{
    Assembler, AssemblerBuilder, Assembly, AssemblyReport, Injection, InjectionReport,
    MissingExample, SkippedStep, inject_examples,
};

// Collection model and lookups
pub use crate::collection::{
    DuplicateName, Folder, Item, LookupScope, Request, RequestItem, duplicate_names,
    locate_request, resolve_folder,
};

// Inputs and outputs
pub use crate::master::{FlowFolder, MasterCollection, MasterRequest};
pub use crate::openapi::{ApiSpecification, extract_example};
pub use crate::source::{load_api_specification, load_collection, load_suite, save_collection};
pub use crate::suite::{
    FlowStepSpecification, TestFlowSpecification, TestSuiteSpecification, apply_overrides,
};

// Error types
pub use crate::error::{ExampleError, LoadError, ResolveError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
