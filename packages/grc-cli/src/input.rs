//! Reading JSON exports from disk.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

pub fn read_json(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not valid JSON", path.display()))
}

/// Strip a GraphQL response envelope.
///
/// `{ "data": { "policies": [...] } }` yields the `policies` payload. Only
/// documents whose top-level keys are all `data` or `errors` are envelopes;
/// any other document is returned unchanged.
pub fn unwrap_response(value: Value) -> Value {
    match value {
        Value::Object(mut map) if is_envelope(&map) => match map.remove("data") {
            Some(Value::Object(data)) => data
                .into_iter()
                .next()
                .map(|(_, payload)| payload)
                .unwrap_or(Value::Null),
            Some(other) => other,
            None => Value::Null,
        },
        other => other,
    }
}

fn is_envelope(map: &Map<String, Value>) -> bool {
    map.contains_key("data") && map.keys().all(|key| key == "data" || key == "errors")
}
