//! Record access helpers.
//!
//! Records arrive as opaque JSON documents from the GraphQL layer. Fields are
//! addressed with lodash-style paths (`metadata.name`, `spec.items[0].kind`)
//! and every lookup is total: a missing segment yields `None` or the caller's
//! default, never an error.

use serde_json::Value;

/// One resource (policy, cluster, template...) as returned by the API.
pub type Record = Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

fn parse_path(path: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    for part in path.split('.') {
        let (head, mut rest) = match part.find('[') {
            Some(open) => (&part[..open], &part[open..]),
            None => (part, ""),
        };
        if !head.is_empty() || rest.is_empty() {
            segments.push(Segment::Key(head));
        }
        while let Some(stripped) = rest.strip_prefix('[') {
            let Some(close) = stripped.find(']') else {
                // Unterminated bracket: treat the remainder as a literal key.
                segments.push(Segment::Key(rest));
                break;
            };
            let inner = stripped[..close].trim_matches(|c: char| c == '"' || c == '\'');
            match inner.parse::<usize>() {
                Ok(index) => segments.push(Segment::Index(index)),
                Err(_) => segments.push(Segment::Key(inner)),
            }
            rest = &stripped[close + 1..];
        }
    }
    segments
}

fn step<'a>(value: &'a Value, segment: Segment<'_>) -> Option<&'a Value> {
    match (value, segment) {
        (Value::Object(map), Segment::Key(key)) => map.get(key),
        (Value::Object(map), Segment::Index(index)) => map.get(&index.to_string()),
        (Value::Array(items), Segment::Index(index)) => items.get(index),
        (Value::Array(items), Segment::Key(key)) => {
            key.parse::<usize>().ok().and_then(|index| items.get(index))
        }
        _ => None,
    }
}

/// Resolve `path` inside `record`.
///
/// A top-level key that literally equals `path` wins over path splitting, so
/// keys containing dots stay addressable.
pub fn get_field<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    if let Some(direct) = record.as_object().and_then(|map| map.get(path)) {
        return Some(direct);
    }
    parse_path(path)
        .into_iter()
        .try_fold(record, |current, segment| step(current, segment))
}

/// Resolve `path`, falling back to `default` when any segment is missing.
pub fn get_field_or<'a>(record: &'a Value, path: &str, default: &'a Value) -> &'a Value {
    get_field(record, path).unwrap_or(default)
}

/// Render a field value the way it reads inside a key or a table cell.
///
/// `null` renders empty; compound values render as compact JSON.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Flatten a record collection into records in document order.
///
/// Arrays yield their elements, objects yield their values (the keys are
/// discarded), anything else is treated as an empty collection.
pub fn records_from_json(value: Value) -> Vec<Record> {
    match value {
        Value::Array(items) => items,
        Value::Object(map) => map.into_iter().map(|(_, record)| record).collect(),
        _ => Vec::new(),
    }
}

/// Human readable name of a JSON value's kind, for error messages.
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
