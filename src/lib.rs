//! # Flowsuite - Test Flow Assembly Engine
//!
//! **Flowsuite** builds executable API test suites. It takes a request collection
//! (a folder tree of request definitions generated from an API specification) and a
//! declarative test suite describing which requests to chain, in what order and with
//! which overrides, and produces a single "master collection" ready for a test runner.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Inputs**: Read the OpenAPI document, the request collection and the
//!     test suite with the loaders in [`source`] (JSON or YAML), or build them in code.
//! 2.  **Inject Examples**: [`assembler::inject_examples`] returns a copy of the collection
//!     whose JSON request bodies carry the first example the API specification declares.
//! 3.  **Assemble**: Create an [`assembler::Assembler`] over the enriched collection and
//!     call `assemble` with the suite. Each flow step is located by name (optionally
//!     scoped to a folder path), its overrides are applied to a private copy, and the
//!     result is placed in the flow's folder.
//! 4.  **Save**: Write the [`master::MasterCollection`] with `save`.
//!
//! Steps that cannot be resolved are logged, reported and skipped; assembly never aborts.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowsuite::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let spec = load_api_specification("openapi.yaml")?;
//!     let collection = load_collection("collection.json")?;
//!     let suite = load_suite("test_suite.json")?;
//!
//!     let enriched = inject_examples(&spec, &collection);
//!     for missing in &enriched.report.missing {
//!         println!("No example for '{}': {}", missing.request_name, missing.error);
//!     }
//!
//!     let assembler = Assembler::builder(&enriched.collection)
//!         .with_filename_extension(".bru")
//!         .build();
//!     let assembly = assembler.assemble(&suite);
//!
//!     println!(
//!         "{} flows, {} requests, {} skipped steps",
//!         assembly.report.flows,
//!         assembly.report.resolved,
//!         assembly.report.skipped.len()
//!     );
//!     assembly.master.save("out/master_collection.json")?;
//!     Ok(())
//! }
//! ```

pub mod assembler;
pub mod collection;
pub mod error;
pub mod master;
pub mod openapi;
pub mod prelude;
pub mod source;
pub mod suite;
