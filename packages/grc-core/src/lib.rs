//! # grc-core
//!
//! Client-side data shaping for the governance, risk and compliance console.
//!
//! ```text
//! GraphQL records ─► KeyOptions::key_for ─► ResourceIndex::load
//!                                               │
//!                     TableEvent::SearchChanged ├─► search (substring on key)
//!                  TableEvent::SortColumnClicked └─► sort_column (stable, toggles)
//!                                               │
//!                                               ▼
//!                                          TableModel ─► renderer
//! ```
//!
//! Everything here is synchronous and rendering-agnostic. Missing data falls
//! back to placeholders; only JSON decoding at the edges can fail.

pub mod activity;
pub mod definitions;
pub mod details;
pub mod error;
pub mod index;
pub mod key;
pub mod record;
pub mod sort;
pub mod table;

pub use activity::{ViolationCard, ViolationSummary, ViolationType};
pub use definitions::{ResourceDefinitions, TableDefinition, TableKey};
pub use details::{chunk, format_details, DetailEntry, DetailItem, DetailsLayout};
pub use error::{GrcError, Result};
pub use index::{ActiveSort, ResourceIndex};
pub use key::KeyOptions;
pub use record::{get_field, get_field_or, records_from_json, Record};
pub use sort::SortDirection;
pub use table::{ResourceTable, TableEvent, TableModel};
