//! Display-ready table state and the UI events that drive it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::definitions::TableDefinition;
use crate::index::ResourceIndex;
use crate::record::Record;
use crate::sort::SortDirection;

/// Snapshot handed to the table renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableModel {
    pub items: IndexMap<String, Record>,
    pub item_ids: Vec<String>,
    pub total_filtered_items: usize,
    pub sort_direction: SortDirection,
    pub search_value: String,
}

impl From<&ResourceIndex> for TableModel {
    fn from(index: &ResourceIndex) -> Self {
        Self {
            items: index.items().clone(),
            item_ids: index.ordered_ids().map(str::to_string).collect(),
            total_filtered_items: index.len(),
            sort_direction: index.sort_direction(),
            search_value: index.search_term().to_string(),
        }
    }
}

/// User input a resource table reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TableEvent {
    SearchChanged { value: String },
    /// `data_key` is the clicked header's `data-key` attribute, if it has one.
    SortColumnClicked {
        #[serde(default, rename = "dataKey")]
        data_key: Option<String>,
    },
}

impl TableEvent {
    pub fn search(value: impl Into<String>) -> Self {
        TableEvent::SearchChanged {
            value: value.into(),
        }
    }

    pub fn sort(data_key: impl Into<String>) -> Self {
        TableEvent::SortColumnClicked {
            data_key: Some(data_key.into()),
        }
    }
}

/// A resource table: one definition plus the index of its rows.
#[derive(Debug, Clone)]
pub struct ResourceTable {
    definition: TableDefinition,
    index: ResourceIndex,
}

impl ResourceTable {
    pub fn new(definition: TableDefinition) -> Self {
        Self {
            definition,
            index: ResourceIndex::new(),
        }
    }

    /// Rebuild from a fresh upstream record list, keeping search and sort state.
    pub fn refresh<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = Record>,
    {
        self.index.load(records, self.definition.key_options());
    }

    /// Apply `event`. Returns whether the table state changed.
    pub fn handle(&mut self, event: TableEvent) -> bool {
        match event {
            TableEvent::SearchChanged { value } => {
                self.index.search(&value);
                true
            }
            TableEvent::SortColumnClicked { data_key: None } => {
                debug!("sort click without a column key");
                false
            }
            TableEvent::SortColumnClicked {
                data_key: Some(selector),
            } => self.index.sort_column(&self.definition, &selector).is_some(),
        }
    }

    pub fn model(&self) -> TableModel {
        TableModel::from(&self.index)
    }

    pub fn definition(&self) -> &TableDefinition {
        &self.definition
    }
}
