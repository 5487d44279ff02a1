//! Error type for the fallible edges of the crate.
//!
//! Index operations never fail: unknown columns are ignored, missing fields
//! fall back to placeholders and duplicate keys resolve last-write-wins.
//! Errors only come from parsing caller-supplied JSON.

use thiserror::Error;

/// Errors raised while decoding definitions or record payloads.
#[derive(Debug, Error)]
pub enum GrcError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown table definition: {0}")]
    UnknownDefinition(String),

    #[error("expected {expected}, found {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, GrcError>;
