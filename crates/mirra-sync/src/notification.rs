// SPDX-FileCopyrightText: 2026 Mirra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification document construction.
//!
//! Warning payloads are open mappings with every field optional; each
//! notification field is resolved independently as the first present value
//! among its candidate keys, falling back to a device-derived or constant
//! default. Missing fields are normal input, never an error.

use serde_json::{Map, Value, json};

/// Builds the notification document for one observed warning creation.
///
/// `server_timestamp` is the document store's write-time sentinel; it is
/// used only when the payload supplies neither `device_timestamp` nor `ts`.
pub fn build_notification(device_id: &str, payload: &Value, server_timestamp: Value) -> Value {
    let mut doc = Map::new();

    doc.insert(
        "title".to_string(),
        field_or(payload, &["title"], || json!(format!("Warning from {device_id}"))),
    );
    doc.insert(
        "message".to_string(),
        field_or(payload, &["message", "msg"], || json!("")),
    );
    doc.insert(
        "level".to_string(),
        field_or(payload, &["level"], || json!("warning")),
    );
    doc.insert(
        "sensor".to_string(),
        field_or(payload, &["sensor"], || json!(device_id)),
    );
    doc.insert(
        "source".to_string(),
        field_or(payload, &["source"], || json!(device_id)),
    );
    doc.insert(
        "data".to_string(),
        field_or(payload, &["data"], || payload.clone()),
    );
    doc.insert(
        "timestamp".to_string(),
        field_or(payload, &["device_timestamp", "ts"], move || server_timestamp),
    );

    Value::Object(doc)
}

/// First present value among the candidate keys, else the default.
///
/// A key counts as present when it exists and its value is not null.
fn field_or(payload: &Value, candidates: &[&str], default: impl FnOnce() -> Value) -> Value {
    candidates
        .iter()
        .find_map(|key| payload.get(key).filter(|v| !v.is_null()).cloned())
        .unwrap_or_else(default)
}
