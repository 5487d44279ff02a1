//! Static table definitions.
//!
//! Each resource page ships a definition describing its table: the field used
//! to key rows and the columns it displays. Column ids double as the record
//! field a click on that column sorts by.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GrcError, Result};
use crate::key::{KeyOptions, DEFAULT_PRIMARY_FIELD};
use crate::record::kind_name;

/// Qualifier appended to the primary key whenever a definition names one.
pub const CLUSTER_QUALIFIER: &str = "cluster";

/// One displayed column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableKey {
    /// Message key of the column header.
    #[serde(default)]
    pub msg_key: Option<String>,
    /// Record field shown in (and sorted by) this column.
    pub resource_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDefinition {
    #[serde(default)]
    pub normalized_key: Option<String>,
    #[serde(default)]
    pub table_keys: Vec<TableKey>,
}

impl TableDefinition {
    /// Map a clicked column id to the record field it sorts by.
    pub fn resolve_sort_field(&self, selector: &str) -> Option<&str> {
        self.table_keys
            .iter()
            .find(|column| column.resource_key == selector)
            .map(|column| column.resource_key.as_str())
    }

    /// Key fields for rows of this table.
    ///
    /// Tables with an explicit normalized key are per-cluster views, so the
    /// cluster name is appended; plain tables key on `name` alone.
    pub fn key_options(&self) -> KeyOptions {
        match &self.normalized_key {
            Some(primary) => KeyOptions::new(primary.clone()).with_qualifier(CLUSTER_QUALIFIER),
            None => KeyOptions::new(DEFAULT_PRIMARY_FIELD),
        }
    }
}

/// All table definitions, keyed by page (`policies`, `policyClusters`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceDefinitions(BTreeMap<String, TableDefinition>);

impl ResourceDefinitions {
    pub fn from_json(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(GrcError::UnexpectedShape {
                expected: "object of table definitions",
                found: kind_name(&value),
            });
        };
        // Static resource data mixes table definitions with other page
        // metadata; only object entries are definitions.
        let mut definitions: BTreeMap<String, TableDefinition> = BTreeMap::new();
        for (key, entry) in map {
            if entry.is_object() {
                definitions.insert(key, serde_json::from_value(entry)?);
            }
        }
        Ok(Self(definitions))
    }

    pub fn get(&self, key: &str) -> Result<&TableDefinition> {
        self.0
            .get(key)
            .ok_or_else(|| GrcError::UnknownDefinition(key.to_string()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
