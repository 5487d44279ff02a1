//! Structured-list details: label/value pairs laid out side by side.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::get_field;

/// Shown for any field the record does not have.
pub const PLACEHOLDER: &str = "-";

/// Split `items` into consecutive groups of `size`; the last may be shorter.
///
/// A zero `size` produces no groups.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    items.chunks(size).map(<[T]>::to_vec).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailCell {
    pub resource_key: String,
}

/// One row of a details list. The first cell holds the label's message key,
/// the second the record path of the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailItem {
    pub cells: Vec<DetailCell>,
}

impl DetailItem {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            cells: vec![
                DetailCell {
                    resource_key: label.into(),
                },
                DetailCell {
                    resource_key: path.into(),
                },
            ],
        }
    }

    pub fn label(&self) -> &str {
        self.cells
            .first()
            .map(|cell| cell.resource_key.as_str())
            .unwrap_or_default()
    }

    pub fn path(&self) -> Option<&str> {
        self.cells.get(1).map(|cell| cell.resource_key.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailEntry {
    pub label: String,
    pub value: String,
}

/// Text shown for a details value. Compound values are flattened to their
/// JSON text with brackets and quotes blanked out.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => value
            .to_string()
            .chars()
            .map(|c| if matches!(c, '[' | ']' | '"') { ' ' } else { c })
            .collect(),
    }
}

fn entry_for(item: &DetailItem, data: &Value) -> DetailEntry {
    let value = item
        .path()
        .and_then(|path| get_field(data, path))
        .map(display_value)
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    DetailEntry {
        label: item.label().to_string(),
        value,
    }
}

/// Resolve every item against `data` and group the entries into columns of
/// `num_rows`.
pub fn format_details(
    items: &[DetailItem],
    data: &Value,
    num_rows: usize,
) -> Vec<Vec<DetailEntry>> {
    chunk(items, num_rows)
        .iter()
        .map(|column| column.iter().map(|item| entry_for(item, data)).collect())
        .collect()
}

/// Fixed grid a details module renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsLayout {
    pub num_rows: usize,
    pub num_columns: usize,
}

impl DetailsLayout {
    pub fn new(num_rows: usize, num_columns: usize) -> Self {
        Self {
            num_rows,
            num_columns,
        }
    }

    /// Columns that fit the grid; items past the last column are not shown.
    pub fn columns(&self, items: &[DetailItem], data: &Value) -> Vec<Vec<DetailEntry>> {
        let mut columns = format_details(items, data, self.num_rows);
        columns.truncate(self.num_columns);
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chunk_sizes() {
        let items: Vec<u32> = (0..10).collect();
        let sizes: Vec<usize> = chunk(&items, 4).iter().map(Vec::len).collect();

        assert_eq!(sizes, vec![4, 4, 2]);
        assert_eq!(chunk(&items, 10).len(), 1);
        assert!(chunk::<u32>(&[], 3).is_empty());
        assert!(chunk(&items, 0).is_empty());
    }

    #[test]
    fn compound_values_are_flattened() {
        assert_eq!(display_value(&json!(["NIST", "PCI"])), "  NIST , PCI  ");
        assert_eq!(display_value(&json!({ "a": 1 })), "{ a :1}");
        assert_eq!(display_value(&json!("inform")), "inform");
        assert_eq!(display_value(&Value::Null), "null");
    }

    #[test]
    fn missing_paths_show_placeholder() {
        let data = json!({ "metadata": { "name": "policy-1" } });
        let columns = format_details(
            &[
                DetailItem::new("name", "metadata.name"),
                DetailItem::new("namespace", "metadata.namespace"),
            ],
            &data,
            5,
        );

        assert_eq!(
            columns,
            vec![vec![
                DetailEntry { label: "name".into(), value: "policy-1".into() },
                DetailEntry { label: "namespace".into(), value: "-".into() },
            ]]
        );
    }
}
