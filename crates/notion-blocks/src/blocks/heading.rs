//! Headings: a label and nothing else. Payload `{ "text": [...] }`.

use std::fmt;

use serde_json::{json, Value};

use crate::block::{self, Block, BlockType};
use crate::rich_text::RichText;
use crate::Result;

macro_rules! heading_block {
    ($(#[$meta:meta])* $T:ident, $tag:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $T {
            block: Block,
            text: Vec<RichText>,
        }

        impl $T {
            pub fn from_parts(block: Block, text: Vec<RichText>) -> Result<Self> {
                block.expect_type($tag)?;
                Ok(Self { block, text })
            }

            pub fn create() -> Self {
                Self {
                    block: Block::create($tag),
                    text: Vec::new(),
                }
            }

            pub fn from_string(content: impl Into<String>) -> Self {
                Self {
                    block: Block::create($tag),
                    text: vec![RichText::create_text(content)],
                }
            }

            pub fn from_json(value: &Value) -> Result<Self> {
                let block = Block::from_json(value)?;
                block.expect_type($tag)?;
                let text = block::rich_text_array(block::payload(value, $tag)?, "text")?;
                Self::from_parts(block, text)
            }

            pub fn to_json(&self) -> Value {
                let mut json = self.block.to_json();
                json[$tag.as_str()] = json!({ "text": self.text });
                json
            }

            pub fn block(&self) -> &Block {
                &self.block
            }

            pub fn text(&self) -> &[RichText] {
                &self.text
            }

            pub fn with_text(mut self, text: impl IntoIterator<Item = RichText>) -> Self {
                self.text = text.into_iter().collect();
                self
            }

            pub fn append_text(mut self, text: RichText) -> Self {
                self.text.push(text);
                self
            }
        }

        impl fmt::Display for $T {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for span in &self.text {
                    f.write_str(span.plain_text())?;
                }
                Ok(())
            }
        }
    };
}

heading_block!(
    /// Top-level heading.
    Heading1,
    BlockType::Heading1
);
heading_block!(Heading2, BlockType::Heading2);
heading_block!(Heading3, BlockType::Heading3);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_heading_payload_has_no_children_key() {
        let json = Heading2::from_string("Setup").to_json();
        assert_eq!(json["heading_2"], json!({ "text": [RichText::create_text("Setup")] }));
    }

    #[test]
    fn test_heading_roundtrip() {
        let heading = Heading3::create()
            .append_text(RichText::create_text("API "))
            .append_text(RichText::create_text("v2").code());
        let parsed = Heading3::from_json(&heading.to_json()).unwrap();
        assert_eq!(parsed, heading);
        assert_eq!(parsed.to_string(), "API v2");
    }

    #[test]
    fn test_heading_levels_are_distinct() {
        let json = Heading1::from_string("x").to_json();
        assert!(Heading1::from_json(&json).is_ok());
        assert!(Heading2::from_json(&json).is_err());
    }
}
