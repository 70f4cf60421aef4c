//! Common test fixtures: collections, API specifications and test suites.
use flowsuite::prelude::*;
use serde_json::json;

/// A booking API collection.
///
/// ```text
/// Bookings API
/// ├── bookings/        CreateBooking (json), GetBooking (none)
/// ├── checkin/         CreateBooking (json, other url), passengers/AddPassenger (json)
/// ├── admin/reports/daily/DailyReport (json)
/// ├── empty/
/// └── Health (root-level request)
/// ```
#[allow(dead_code)]
pub fn booking_collection() -> Folder {
    serde_json::from_value(json!({
        "name": "Bookings API",
        "version": "1",
        "items": [
            {
                "type": "folder",
                "name": "bookings",
                "items": [
                    {
                        "type": "http",
                        "name": "CreateBooking",
                        "seq": 1,
                        "request": {
                            "method": "POST",
                            "url": "{{baseUrl}}/bookings",
                            "params": [],
                            "body": { "mode": "json", "json": "" },
                            "script": { "req": "", "res": "" }
                        }
                    },
                    {
                        "type": "http",
                        "name": "GetBooking",
                        "seq": 2,
                        "request": {
                            "method": "GET",
                            "url": "{{baseUrl}}/bookings/:id",
                            "params": [{ "name": "id", "value": "1", "type": "path" }],
                            "body": { "mode": "none" }
                        }
                    }
                ]
            },
            {
                "type": "folder",
                "name": "checkin",
                "items": [
                    {
                        "type": "http",
                        "name": "CreateBooking",
                        "request": {
                            "method": "POST",
                            "url": "{{baseUrl}}/checkin/bookings",
                            "body": { "mode": "json", "json": "" }
                        }
                    },
                    {
                        "type": "folder",
                        "name": "passengers",
                        "items": [
                            {
                                "type": "http",
                                "name": "AddPassenger",
                                "request": {
                                    "method": "POST",
                                    "url": "{{baseUrl}}/passengers",
                                    "body": { "mode": "json", "json": "" }
                                }
                            }
                        ]
                    }
                ]
            },
            {
                "type": "folder",
                "name": "admin",
                "items": [
                    {
                        "type": "folder",
                        "name": "reports",
                        "items": [
                            {
                                "type": "folder",
                                "name": "daily",
                                "items": [
                                    {
                                        "type": "http",
                                        "name": "DailyReport",
                                        "request": {
                                            "method": "POST",
                                            "url": "{{baseUrl}}/reports/daily",
                                            "body": { "mode": "json", "json": "{}" }
                                        }
                                    }
                                ]
                            }
                        ]
                    }
                ]
            },
            { "type": "folder", "name": "empty", "items": [] },
            {
                "type": "http",
                "name": "Health",
                "request": {
                    "method": "POST",
                    "url": "{{baseUrl}}/health",
                    "body": { "mode": "json", "json": "" }
                }
            }
        ]
    }))
    .expect("booking collection fixture must deserialize")
}

/// The OpenAPI document the booking collection was generated from.
#[allow(dead_code)]
pub fn booking_spec() -> ApiSpecification {
    // Parsed from text so declaration order survives: `standard` comes before `full`.
    serde_json::from_str(BOOKING_SPEC_JSON).expect("booking spec fixture must deserialize")
}

#[allow(dead_code)]
const BOOKING_SPEC_JSON: &str = r##"{
    "openapi": "3.0.3",
    "info": { "title": "Bookings", "version": "1.0.0" },
    "paths": {
        "/bookings": {
            "summary": "Bookings",
            "parameters": [{ "name": "tenant", "in": "header" }],
            "post": {
                "operationId": "CreateBooking",
                "requestBody": {
                    "content": {
                        "application/json": {
                            "examples": {
                                "standard": { "value": { "id": "abc" } },
                                "full": { "value": { "id": "xyz", "seats": 2 } }
                            }
                        }
                    }
                }
            },
            "get": { "operationId": "ListBookings" }
        },
        "/passengers": {
            "post": {
                "operationId": "AddPassenger",
                "requestBody": {
                    "content": {
                        "application/json": {
                            "examples": {
                                "adult": { "$ref": "#/components/examples/Adult" }
                            }
                        }
                    }
                }
            }
        },
        "/reports/daily": {
            "post": {
                "operationId": "DailyReport",
                "requestBody": {
                    "content": { "application/xml": { "examples": { "x": { "value": "<r/>" } } } }
                }
            }
        },
        "/health": {
            "post": {
                "operationId": "Health",
                "requestBody": { "content": { "application/json": {} } }
            }
        }
    },
    "components": {
        "examples": {
            "Adult": { "summary": "An adult", "value": { "name": "Ada", "age": 36 } }
        }
    }
}"##;

/// A collection with two folders holding a request of the same name.
///
/// `A/X` is reached first in pre-order; `B/X` differs only in its url.
#[allow(dead_code)]
pub fn twin_collection() -> Folder {
    serde_json::from_value(json!({
        "name": "Twins",
        "items": [
            {
                "type": "folder",
                "name": "A",
                "items": [
                    { "type": "http", "name": "X", "request": { "url": "https://a.example/x" } }
                ]
            },
            {
                "type": "folder",
                "name": "B",
                "items": [
                    { "type": "http", "name": "X", "request": { "url": "https://b.example/x" } }
                ]
            }
        ]
    }))
    .expect("twin collection fixture must deserialize")
}

/// Builds a step from a JSON literal, the way a suite file declares it.
#[allow(dead_code)]
pub fn step(value: serde_json::Value) -> FlowStepSpecification {
    serde_json::from_value(value).expect("step fixture must deserialize")
}

/// A two-flow suite against [`booking_collection`].
#[allow(dead_code)]
pub fn booking_suite() -> TestSuiteSpecification {
    serde_json::from_value(json!({
        "name": "Booking journeys",
        "environments": [{ "name": "local", "variables": [{ "name": "baseUrl", "value": "http://localhost" }] }],
        "root": { "docs": "Smoke journeys" },
        "test_flows": [
            {
                "flow_name": "checkin",
                "seq": 2,
                "root": { "request": { "headers": [] } },
                "requests": [
                    { "request_id": "CreateBooking", "file_path": "checkin", "seq": 1 },
                    { "request_id": "AddPassenger", "file_path": "checkin/passengers", "seq": 2,
                      "body": { "mode": "json", "json": "{\"name\":\"Bob\"}" } }
                ]
            },
            {
                "flow_name": "booking",
                "seq": 1,
                "requests": [
                    { "request_id": "CreateBooking", "seq": 1, "url": "{{baseUrl}}/v2/bookings" },
                    { "request_id": "Missing", "seq": 2 },
                    { "request_id": "GetBooking", "file_path": "bookings", "seq": 3,
                      "parameters": [{ "name": "id", "value": "{{bookingId}}", "type": "path" }] }
                ]
            }
        ]
    }))
    .expect("booking suite fixture must deserialize")
}
