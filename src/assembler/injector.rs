use crate::collection::{Folder, Item, RequestItem};
use crate::error::ExampleError;
use crate::openapi::{ApiSpecification, extract_example};

/// A request whose JSON body could not be given an example.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingExample {
    pub request_name: String,
    pub error: ExampleError,
}

/// What an injection pass did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InjectionReport {
    /// Names of the requests whose payload slot now holds an example.
    pub injected: Vec<String>,
    pub missing: Vec<MissingExample>,
}

/// The enriched collection and the report of the pass that produced it.
#[derive(Debug, Clone)]
pub struct Injection {
    pub collection: Folder,
    pub report: InjectionReport,
}

/// Returns a copy of `collection` whose JSON-mode request bodies carry the first example
/// the specification declares for the operation of the same name.
///
/// Only requests directly inside top-level folders are visited. The example is written
/// as pretty-printed JSON. A request without a resolvable example keeps its body and is
/// listed in the report. Running the pass twice yields the same tree.
pub fn inject_examples(spec: &ApiSpecification, collection: &Folder) -> Injection {
    let mut report = InjectionReport::default();
    let mut items = Vec::with_capacity(collection.items.len());

    for item in &collection.items {
        let item = match item {
            Item::Folder(folder) => Item::Folder(inject_folder(spec, folder, &mut report)),
            Item::Request(_) => item.clone(),
        };
        items.push(item);
    }

    Injection {
        collection: Folder {
            name: collection.name.clone(),
            items,
            extra: collection.extra.clone(),
        },
        report,
    }
}

fn inject_folder(spec: &ApiSpecification, folder: &Folder, report: &mut InjectionReport) -> Folder {
    let items = folder
        .items
        .iter()
        .map(|item| match item {
            Item::Request(request) if request.request.has_json_body() => {
                Item::Request(inject_request(spec, request, report))
            }
            other => other.clone(),
        })
        .collect();

    Folder {
        name: folder.name.clone(),
        items,
        extra: folder.extra.clone(),
    }
}

fn inject_request(
    spec: &ApiSpecification,
    item: &RequestItem,
    report: &mut InjectionReport,
) -> RequestItem {
    // Serializing a `Value` cannot fail.
    let payload = extract_example(spec, &item.name).map(|example| {
        serde_json::to_string_pretty(example).unwrap_or_else(|_| example.to_string())
    });

    match payload {
        Ok(payload) => {
            log::debug!("Injected example into request '{}'", item.name);
            report.injected.push(item.name.clone());
            RequestItem {
                name: item.name.clone(),
                request: item.request.with_json_payload(payload),
                extra: item.extra.clone(),
            }
        }
        Err(error) => {
            log::warn!("Request '{}' keeps its body: {}", item.name, error);
            report.missing.push(MissingExample {
                request_name: item.name.clone(),
                error,
            });
            item.clone()
        }
    }
}
