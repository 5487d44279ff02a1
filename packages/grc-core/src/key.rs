//! Record identity.
//!
//! A record's key is its primary field followed by its qualifier field, e.g.
//! a policy `name` plus the `cluster` it was propagated to. Two records with
//! the same key are the same row in a table.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::{display_text, get_field};

/// Default primary field when no definition names one.
pub const DEFAULT_PRIMARY_FIELD: &str = "name";

/// Which fields make up a record's key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyOptions {
    pub primary: String,
    #[serde(default)]
    pub qualifier: Option<String>,
}

impl Default for KeyOptions {
    fn default() -> Self {
        Self::new(DEFAULT_PRIMARY_FIELD)
    }
}

impl KeyOptions {
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            qualifier: None,
        }
    }

    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    /// Compute the key for `record`. Missing fields contribute nothing.
    pub fn key_for(&self, record: &Value) -> String {
        let mut key = field_text(record, &self.primary);
        if let Some(qualifier) = &self.qualifier {
            key.push_str(&field_text(record, qualifier));
        }
        key
    }
}

fn field_text(record: &Value, path: &str) -> String {
    get_field(record, path).map(display_text).unwrap_or_default()
}
