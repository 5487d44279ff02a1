//! Sort direction and natural value ordering for table columns.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The direction a second click on the same column applies.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparable projection of a cell value. Variant order is the cross-kind
/// order: numbers, then text, then booleans, then compound values.
#[derive(Debug, PartialEq)]
enum SortKey<'a> {
    Number(f64),
    Text(&'a str),
    Bool(bool),
    Compound(String),
}

impl SortKey<'_> {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Number(_) => 0,
            SortKey::Text(_) => 1,
            SortKey::Bool(_) => 2,
            SortKey::Compound(_) => 3,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Bool(a), SortKey::Bool(b)) => a.cmp(b),
            (SortKey::Compound(a), SortKey::Compound(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

fn sort_key(value: &Value) -> Option<SortKey<'_>> {
    match value {
        Value::Null => None,
        Value::Number(n) => n.as_f64().map(SortKey::Number),
        Value::String(s) => match s.parse::<f64>() {
            Ok(n) if n.is_finite() => Some(SortKey::Number(n)),
            _ => Some(SortKey::Text(s)),
        },
        Value::Bool(b) => Some(SortKey::Bool(*b)),
        Value::Array(_) | Value::Object(_) => Some(SortKey::Compound(value.to_string())),
    }
}

/// Ascending natural order of two optional cell values.
///
/// Numeric strings compare as numbers. Missing and `null` values sort after
/// every present value.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a.and_then(sort_key), b.and_then(sort_key)) {
        (Some(a), Some(b)) => a.compare(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
