//! Error types for block parsing and construction.

use thiserror::Error;

use crate::block::BlockType;

/// Errors that can occur while parsing or constructing blocks.
#[derive(Error, Debug)]
pub enum BlockError {
    /// Envelope type tag does not match the typed block being built.
    ///
    /// For example, handing a `paragraph` envelope to `Toggle::from_parts`.
    #[error("block must be of type {expected}, found {found}")]
    TypeMismatch { expected: BlockType, found: BlockType },

    /// Type tag names a block kind this crate does not model.
    #[error("unknown block type {0:?}")]
    UnknownBlockType(String),

    /// A required key is absent from the JSON object.
    #[error("missing field {0:?}")]
    MissingField(&'static str),

    /// A key is present but holds the wrong JSON shape.
    #[error("field {field:?} must be {expected}")]
    InvalidShape {
        field: &'static str,
        expected: &'static str,
    },

    /// Serde-level failure (bad rich text entry, bad timestamp, bad UUID).
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
