//! Keyed, searchable, sortable projection of a resource list.
//!
//! [`ResourceIndex`] keeps two ordered maps: every record from the last
//! [`load`](ResourceIndex::load), and the subset currently visible in display
//! order. The visible map's key order *is* the display order, so the id list
//! and the item map can never disagree.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::definitions::TableDefinition;
use crate::key::KeyOptions;
use crate::record::{get_field, Record};
use crate::sort::{compare_values, SortDirection};

/// The column and direction that produced the current display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSort {
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Default)]
pub struct ResourceIndex {
    loaded: IndexMap<String, Record>,
    visible: IndexMap<String, Record>,
    search_term: String,
    active_sort: Option<ActiveSort>,
    /// Direction the next column click applies.
    sort_direction: SortDirection,
}

impl ResourceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole record set.
    ///
    /// Keys are computed with `options`; a later record with an already seen
    /// key replaces the earlier one but keeps its position. The current search
    /// term and sort column are re-applied to the new set.
    pub fn load<I>(&mut self, records: I, options: KeyOptions)
    where
        I: IntoIterator<Item = Record>,
    {
        let mut loaded = IndexMap::new();
        let mut replaced = 0usize;
        for record in records {
            let key = options.key_for(&record);
            if loaded.insert(key, record).is_some() {
                replaced += 1;
            }
        }

        debug!(
            records = loaded.len(),
            replaced,
            search = %self.search_term,
            "loaded resource index"
        );

        self.loaded = loaded;
        self.visible = if self.search_term.is_empty() {
            self.loaded.clone()
        } else {
            let term = self.search_term.as_str();
            self.loaded
                .iter()
                .filter(|(key, _)| key.contains(term))
                .map(|(key, record)| (key.clone(), record.clone()))
                .collect()
        };

        if let Some(active) = self.active_sort.clone() {
            self.reorder(&active.field, active.direction);
        }
    }

    /// Filter the visible rows to keys containing `term`.
    ///
    /// An empty term restores every loaded row in load order and drops the
    /// active sort column. A non-empty term narrows the rows currently shown.
    pub fn search(&mut self, term: &str) {
        if term.is_empty() {
            self.search_term.clear();
            self.active_sort = None;
            self.visible = self.loaded.clone();
            debug!(visible = self.visible.len(), "cleared resource search");
            return;
        }

        self.visible.retain(|key, _| key.contains(term));
        self.search_term = term.to_string();
        debug!(search = term, visible = self.visible.len(), "filtered resource index");
    }

    /// Sort the visible rows by `field` in `direction`.
    ///
    /// Ties keep their current relative order. The next column click will
    /// apply the opposite direction.
    pub fn sort_by_field(&mut self, field: &str, direction: SortDirection) {
        self.reorder(field, direction);
        self.active_sort = Some(ActiveSort {
            field: field.to_string(),
            direction,
        });
        self.sort_direction = direction.toggled();
        debug!(field, %direction, visible = self.visible.len(), "sorted resource index");
    }

    /// Handle a click on column `selector` of a table described by `definition`.
    ///
    /// Returns the direction the next click will use, or `None` if the column
    /// is not part of the definition (nothing changes in that case).
    pub fn sort_column(
        &mut self,
        definition: &TableDefinition,
        selector: &str,
    ) -> Option<SortDirection> {
        let Some(field) = definition.resolve_sort_field(selector) else {
            trace!(selector, "ignoring sort on unknown column");
            return None;
        };
        self.sort_by_field(field, self.sort_direction);
        Some(self.sort_direction)
    }

    fn reorder(&mut self, field: &str, direction: SortDirection) {
        self.visible.sort_by(|_, a, _, b| {
            direction.apply(compare_values(get_field(a, field), get_field(b, field)))
        });
    }

    /// Visible records keyed by id, in display order.
    pub fn items(&self) -> &IndexMap<String, Record> {
        &self.visible
    }

    /// Visible ids in display order.
    pub fn ordered_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.visible.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Record> {
        self.visible.get(key)
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Number of rows from the last load, ignoring the search filter.
    pub fn loaded_len(&self) -> usize {
        self.loaded.len()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn active_sort(&self) -> Option<&ActiveSort> {
        self.active_sort.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids(index: &ResourceIndex) -> Vec<&str> {
        index.ordered_ids().collect()
    }

    #[test]
    fn fresh_index_is_empty_and_ascending() {
        let index = ResourceIndex::new();

        assert!(index.is_empty());
        assert_eq!(index.search_term(), "");
        assert_eq!(index.sort_direction(), SortDirection::Asc);
        assert!(index.active_sort().is_none());
    }

    #[test]
    fn load_of_nothing_yields_empty_index() {
        let mut index = ResourceIndex::new();
        index.load(Vec::new(), KeyOptions::default());

        assert!(index.items().is_empty());
        assert!(ids(&index).is_empty());
    }

    #[test]
    fn search_narrows_the_rows_already_shown() {
        let mut index = ResourceIndex::new();
        index.load(
            vec![json!({ "name": "abc" }), json!({ "name": "abd" }), json!({ "name": "xyz" })],
            KeyOptions::default(),
        );

        index.search("ab");
        assert_eq!(ids(&index), vec!["abc", "abd"]);

        index.search("c");
        assert_eq!(ids(&index), vec!["abc"]);
        assert_eq!(index.loaded_len(), 3);
    }

    #[test]
    fn empty_search_drops_the_active_sort() {
        let mut index = ResourceIndex::new();
        index.load(vec![json!({ "name": "b" }), json!({ "name": "a" })], KeyOptions::default());
        index.sort_by_field("name", SortDirection::Asc);
        assert_eq!(ids(&index), vec!["a", "b"]);

        index.search("");

        assert_eq!(ids(&index), vec!["b", "a"]);
        assert!(index.active_sort().is_none());
        assert_eq!(index.sort_direction(), SortDirection::Desc);
    }
}
