//! Sibling block variants that share the toggle's envelope and editing model.
//!
//! - `text`: label plus children (paragraph, list items, quote)
//! - `heading`: label only, three levels
//! - `to_do`: label, checkbox, children
//! - `divider`: envelope only

mod divider;
mod heading;
mod text;
mod to_do;

pub use divider::Divider;
pub use heading::{Heading1, Heading2, Heading3};
pub(crate) use text::text_block;
pub use text::{BulletedListItem, NumberedListItem, Paragraph, Quote};
pub use to_do::ToDo;
