use crate::collection::{Folder, LookupScope, locate_request};
use crate::error::ResolveError;
use crate::master::{FlowFolder, MasterCollection, MasterRequest};
use crate::suite::{
    FlowStepSpecification, TestFlowSpecification, TestSuiteSpecification, apply_overrides,
};
use serde_json::Map;

mod injector;

pub use injector::*;

/// Version tag written into every master collection unless overridden.
pub const DEFAULT_VERSION: &str = "1";

/// Suffix appended to a request name to form its `filename`.
pub const DEFAULT_FILENAME_EXTENSION: &str = ".bru";

/// A flow step that could not be resolved and was left out of its flow.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedStep {
    pub flow_name: String,
    /// Position of the step in the flow's `requests` list.
    pub step_index: usize,
    pub request_id: String,
    pub scope: LookupScope,
    pub error: ResolveError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssemblyReport {
    pub flows: usize,
    pub resolved: usize,
    pub skipped: Vec<SkippedStep>,
}

impl AssemblyReport {
    /// True when every step of every flow was resolved.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// The result of one assembly pass.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub master: MasterCollection,
    pub report: AssemblyReport,
}

/// Resolves test suite specifications against one request collection.
///
/// The collection is only ever read; each resolved request is a fresh value.
pub struct Assembler<'a> {
    collection: &'a Folder,
    version: String,
    filename_extension: String,
}

pub struct AssemblerBuilder<'a> {
    collection: &'a Folder,
    version: String,
    filename_extension: String,
}

impl<'a> AssemblerBuilder<'a> {
    pub fn new(collection: &'a Folder) -> Self {
        Self {
            collection,
            version: DEFAULT_VERSION.to_string(),
            filename_extension: DEFAULT_FILENAME_EXTENSION.to_string(),
        }
    }
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }
    pub fn with_filename_extension(mut self, extension: &str) -> Self {
        self.filename_extension = extension.to_string();
        self
    }
    pub fn build(self) -> Assembler<'a> {
        Assembler {
            collection: self.collection,
            version: self.version,
            filename_extension: self.filename_extension,
        }
    }
}

impl<'a> Assembler<'a> {
    pub fn builder(collection: &'a Folder) -> AssemblerBuilder<'a> {
        AssemblerBuilder::new(collection)
    }

    /// Builds the master collection for `suite`.
    ///
    /// Flows keep the order of the suite, and requests the order of their flow; `seq`
    /// values are copied, never used for sorting. A step that cannot be resolved is
    /// dropped from its flow and recorded in the report; assembly always completes.
    pub fn assemble(&self, suite: &TestSuiteSpecification) -> Assembly {
        let mut report = AssemblyReport::default();
        let items = suite
            .test_flows
            .iter()
            .map(|flow| self.assemble_flow(flow, &mut report))
            .collect();
        report.flows = suite.test_flows.len();

        Assembly {
            master: MasterCollection {
                name: suite.name.clone(),
                version: self.version.clone(),
                items,
                environments: suite.environments.clone(),
                root: suite.root.clone(),
            },
            report,
        }
    }

    fn assemble_flow(
        &self,
        flow: &TestFlowSpecification,
        report: &mut AssemblyReport,
    ) -> FlowFolder {
        let mut items = Vec::with_capacity(flow.requests.len());
        for (step_index, step) in flow.requests.iter().enumerate() {
            match self.resolve_step(step) {
                Ok(request) => {
                    log::debug!(
                        "Flow '{}': resolved step {} ('{}')",
                        flow.flow_name,
                        step_index,
                        step.request_id
                    );
                    items.push(request);
                }
                Err(error) => {
                    log::warn!(
                        "Flow '{}': skipping step {} ('{}'): {}",
                        flow.flow_name,
                        step_index,
                        step.request_id,
                        error
                    );
                    report.skipped.push(SkippedStep {
                        flow_name: flow.flow_name.clone(),
                        step_index,
                        request_id: step.request_id.clone(),
                        scope: step_scope(step),
                        error,
                    });
                }
            }
        }

        report.resolved += items.len();
        log::info!(
            "Flow '{}': {} of {} steps resolved",
            flow.flow_name,
            items.len(),
            flow.requests.len()
        );

        FlowFolder {
            name: flow.flow_name.clone(),
            seq: flow.seq,
            root: flow.root.clone(),
            items,
        }
    }

    /// Locates the request a step refers to and applies the step's overrides.
    pub fn resolve_step(
        &self,
        step: &FlowStepSpecification,
    ) -> Result<MasterRequest, ResolveError> {
        let located =
            locate_request(&step.request_id, step.file_path.as_deref(), self.collection)?;
        Ok(MasterRequest {
            name: step.request_id.clone(),
            filename: format!("{}{}", step.request_id, self.filename_extension),
            seq: step.seq,
            settings: Map::new(),
            tags: Vec::new(),
            request: apply_overrides(&located.request, step),
        })
    }
}

fn step_scope(step: &FlowStepSpecification) -> LookupScope {
    match step.file_path.as_deref().filter(|path| !path.trim().is_empty()) {
        Some(path) => LookupScope::Folder(path.to_string()),
        None => LookupScope::Collection,
    }
}
