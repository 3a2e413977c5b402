//! Typed, immutable block values for the Notion block API.
//!
//! This crate mirrors the API's block JSON as plain Rust values. Every block
//! parses from a `serde_json::Value` and prints back to the same JSON, and
//! edits return a new value instead of mutating. There is no HTTP client
//! here. Feed it whatever JSON you fetched.
//!
//! # Shape Overview
//!
//! ```text
//! AnyBlock ← closed set of block variants (BlockFactory dispatches on "type")
//!     └── Toggle / Paragraph / ToDo / ...
//!             └── Block (envelope: id, timestamps, has_children, type, parent)
//!             └── Vec<RichText> (label, rendered left to right)
//!             └── Vec<AnyBlock> (children, document order)
//! ```
//!
//! # Key Types
//!
//! |------------------|------------------------------------------------|
//! | Type             | Purpose                                        |
//! |------------------|------------------------------------------------|
//! | [`Block`]        | Envelope shared by every variant               |
//! | [`BlockType`]    | Wire type tag                                  |
//! | [`RichText`]     | One formatted text span                        |
//! | [`Toggle`]       | Collapsible label with nested children         |
//! | [`AnyBlock`]     | Any variant, for polymorphic child lists       |
//! | [`BlockFactory`] | JSON → `AnyBlock` dispatch on the type tag     |
//! | [`BlockError`]   | Everything that can go wrong while parsing     |
//! |------------------|------------------------------------------------|

pub mod block;
pub mod blocks;
pub mod error;
pub mod factory;
pub mod ids;
pub mod rich_text;
pub mod toggle;

// Re-export primary types at crate root for convenience.
pub use block::{Block, BlockType, Parent};
pub use blocks::{
    BulletedListItem, Divider, Heading1, Heading2, Heading3, NumberedListItem, Paragraph, Quote,
    ToDo,
};
pub use error::BlockError;
pub use factory::{AnyBlock, BlockFactory, BlockVariant};
pub use ids::{BlockId, PageId};
pub use rich_text::{Annotations, Color, RichText, RichTextContent};
pub use toggle::Toggle;

/// Result type for block parsing and construction.
pub type Result<T> = std::result::Result<T, BlockError>;
