//! Tests for flow assembly into a master collection.
mod common;
use common::*;
use flowsuite::assembler::{DEFAULT_FILENAME_EXTENSION, DEFAULT_VERSION};
use flowsuite::prelude::*;
use serde_json::json;

fn suite_with_flow(flow: serde_json::Value) -> TestSuiteSpecification {
    serde_json::from_value(json!({ "name": "suite", "test_flows": [flow] }))
        .expect("suite fixture must deserialize")
}

#[test]
fn test_missing_step_is_skipped_and_order_kept() {
    let collection = booking_collection();
    let suite = suite_with_flow(json!({
        "flow_name": "booking",
        "seq": 1,
        "requests": [
            { "request_id": "CreateBooking", "file_path": "bookings", "seq": 1 },
            { "request_id": "DoesNotExist", "seq": 2 },
            { "request_id": "GetBooking", "seq": 3 }
        ]
    }));

    let assembly = Assembler::builder(&collection).build().assemble(&suite);

    let flow = &assembly.master.items[0];
    let names: Vec<_> = flow.items.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["CreateBooking", "GetBooking"]);
    assert_eq!(flow.items[0].seq, 1);
    assert_eq!(flow.items[1].seq, 3);

    assert_eq!(assembly.report.resolved, 2);
    assert_eq!(assembly.report.skipped.len(), 1);
    let skipped = &assembly.report.skipped[0];
    assert_eq!(skipped.flow_name, "booking");
    assert_eq!(skipped.step_index, 1);
    assert_eq!(skipped.request_id, "DoesNotExist");
    assert_eq!(skipped.scope, LookupScope::Collection);
    assert!(!assembly.report.is_complete());
}

#[test]
fn test_checkin_scenario_keeps_only_resolvable_request() {
    let collection = Folder::new(
        "root",
        vec![Item::from(RequestItem::new("A", Request::default()))],
    );
    let suite = suite_with_flow(json!({
        "flow_name": "checkin",
        "seq": 1,
        "requests": [
            { "request_id": "A", "seq": 1 },
            { "request_id": "Z", "seq": 2 }
        ]
    }));

    let assembly = Assembler::builder(&collection).build().assemble(&suite);

    let flow = &assembly.master.items[0];
    assert_eq!(flow.name, "checkin");
    assert_eq!(flow.items.len(), 1);
    assert_eq!(flow.items[0].name, "A");
}

#[test]
fn test_flows_keep_suite_order_regardless_of_seq() {
    let collection = booking_collection();
    let suite = booking_suite();

    let assembly = Assembler::builder(&collection).build().assemble(&suite);

    let flows: Vec<_> = assembly
        .master
        .items
        .iter()
        .map(|f| (f.name.as_str(), f.seq))
        .collect();
    assert_eq!(flows, vec![("checkin", 2), ("booking", 1)]);
    assert_eq!(assembly.report.flows, 2);
}

#[test]
fn test_master_carries_suite_metadata() {
    let collection = booking_collection();
    let suite = booking_suite();

    let master = Assembler::builder(&collection).build().assemble(&suite).master;

    assert_eq!(master.name, "Booking journeys");
    assert_eq!(master.version, DEFAULT_VERSION);
    assert_eq!(master.environments, suite.environments);
    assert_eq!(master.root, json!({ "docs": "Smoke journeys" }));
    assert_eq!(master.items[0].root, json!({ "request": { "headers": [] } }));
    assert!(master.items[1].root.is_null());
}

#[test]
fn test_request_nodes_are_fully_shaped() {
    let collection = booking_collection();
    let suite = booking_suite();

    let master = Assembler::builder(&collection).build().assemble(&suite).master;
    let request = &master.items[0].items[0];

    assert_eq!(request.name, "CreateBooking");
    assert_eq!(
        request.filename,
        format!("CreateBooking{}", DEFAULT_FILENAME_EXTENSION)
    );
    assert!(request.settings.is_empty());
    assert!(request.tags.is_empty());
    // Scoped to `checkin`, so the checkin copy is used.
    assert_eq!(request.request.url, Some(json!("{{baseUrl}}/checkin/bookings")));

    let serialized = serde_json::to_value(request).unwrap();
    assert_eq!(serialized["type"], "http");
    assert_eq!(serialized["filename"], "CreateBooking.bru");
    assert_eq!(serialized["settings"], json!({}));
    assert_eq!(serialized["tags"], json!([]));
    assert_eq!(serialized["request"]["method"], "POST");
}

#[test]
fn test_overrides_reach_the_master_collection() {
    let collection = booking_collection();
    let suite = booking_suite();

    let master = Assembler::builder(&collection).build().assemble(&suite).master;

    let add_passenger = &master.items[0].items[1];
    assert_eq!(
        add_passenger.request.body,
        json!({ "mode": "json", "json": "{\"name\":\"Bob\"}" })
    );

    let booking = &master.items[1];
    assert_eq!(booking.items.len(), 2);
    assert_eq!(
        booking.items[0].request.url,
        Some(json!("{{baseUrl}}/v2/bookings"))
    );
    assert_eq!(
        booking.items[1].request.params,
        Some(json!([{ "name": "id", "value": "{{bookingId}}", "type": "path" }]))
    );
}

#[test]
fn test_assembly_does_not_mutate_collection() {
    let collection = booking_collection();
    let snapshot = collection.clone();

    let _ = Assembler::builder(&collection).build().assemble(&booking_suite());

    assert_eq!(collection, snapshot);
}

#[test]
fn test_builder_options() {
    let collection = booking_collection();
    let suite = booking_suite();

    let master = Assembler::builder(&collection)
        .with_version("2")
        .with_filename_extension(".json")
        .build()
        .assemble(&suite)
        .master;

    assert_eq!(master.version, "2");
    assert_eq!(master.items[0].items[0].filename, "CreateBooking.json");
}

#[test]
fn test_folder_errors_are_step_local() {
    let collection = booking_collection();
    let suite = suite_with_flow(json!({
        "flow_name": "broken",
        "seq": 1,
        "requests": [
            { "request_id": "CreateBooking", "file_path": "empty", "seq": 1 },
            { "request_id": "CreateBooking", "file_path": "missing/folder", "seq": 2 },
            { "request_id": "DailyReport", "file_path": "admin/reports/daily", "seq": 3 }
        ]
    }));

    let assembly = Assembler::builder(&collection).build().assemble(&suite);

    assert_eq!(assembly.master.items[0].items.len(), 1);
    let errors: Vec<_> = assembly.report.skipped.iter().map(|s| &s.error).collect();
    assert!(matches!(errors[0], ResolveError::EmptyFolder { .. }));
    assert!(matches!(errors[1], ResolveError::FolderNotFound { .. }));
    assert_eq!(
        assembly.report.skipped[1].scope,
        LookupScope::Folder("missing/folder".to_string())
    );
}

#[test]
fn test_empty_suite_yields_empty_master() {
    let collection = booking_collection();
    let suite = TestSuiteSpecification {
        name: "nothing".to_string(),
        ..TestSuiteSpecification::default()
    };

    let assembly = Assembler::builder(&collection).build().assemble(&suite);

    assert!(assembly.master.items.is_empty());
    assert_eq!(assembly.master.request_count(), 0);
    assert!(assembly.report.is_complete());
}
