//! Text blocks with nested children.
//!
//! Paragraphs, list items, quotes and [`Toggle`](crate::Toggle) share one
//! payload (`{ "text": [...], "children": [...] }`) and one set of editing
//! rules, including the `has_children` bookkeeping on `with_children` /
//! `append_child`. `text_block!` generates all of them.

macro_rules! text_block {
    ($(#[$meta:meta])* $T:ident, $tag:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $T {
            block: $crate::block::Block,
            text: Vec<$crate::rich_text::RichText>,
            children: Vec<$crate::factory::AnyBlock>,
        }

        impl $T {
            /// Assemble from parts.
            ///
            /// Fails with [`BlockError::TypeMismatch`](crate::BlockError::TypeMismatch)
            /// unless the envelope carries this block's tag.
            pub fn from_parts(
                block: $crate::block::Block,
                text: Vec<$crate::rich_text::RichText>,
                children: Vec<$crate::factory::AnyBlock>,
            ) -> $crate::Result<Self> {
                block.expect_type($tag)?;
                Ok(Self { block, text, children })
            }

            /// Empty block: no label, no children.
            pub fn create() -> Self {
                Self {
                    block: $crate::block::Block::create($tag),
                    text: Vec::new(),
                    children: Vec::new(),
                }
            }

            /// Block labelled with a single plain-text span.
            pub fn from_string(content: impl Into<String>) -> Self {
                Self {
                    block: $crate::block::Block::create($tag),
                    text: vec![$crate::rich_text::RichText::create_text(content)],
                    children: Vec::new(),
                }
            }

            /// Parse a block object.
            ///
            /// The payload's `text` is required. `children` may be absent,
            /// which parses as no children.
            pub fn from_json(value: &::serde_json::Value) -> $crate::Result<Self> {
                let block = $crate::block::Block::from_json(value)?;
                block.expect_type($tag)?;

                let payload = $crate::block::payload(value, $tag)?;
                let text = $crate::block::rich_text_array(payload, "text")?;
                let children = $crate::factory::BlockFactory::from_json_array(
                    $crate::block::optional_array(payload, "children")?,
                )?;

                Self::from_parts(block, text, children)
            }

            pub fn to_json(&self) -> ::serde_json::Value {
                let mut json = self.block.to_json();
                json[$tag.as_str()] = ::serde_json::json!({
                    "text": self.text,
                    "children": self
                        .children
                        .iter()
                        .map($crate::factory::AnyBlock::to_json)
                        .collect::<Vec<_>>(),
                });
                json
            }

            pub fn block(&self) -> &$crate::block::Block {
                &self.block
            }

            pub fn text(&self) -> &[$crate::rich_text::RichText] {
                &self.text
            }

            pub fn children(&self) -> &[$crate::factory::AnyBlock] {
                &self.children
            }

            /// Replace the label wholesale.
            pub fn with_text(
                mut self,
                text: impl IntoIterator<Item = $crate::rich_text::RichText>,
            ) -> Self {
                self.text = text.into_iter().collect();
                self
            }

            pub fn append_text(mut self, text: $crate::rich_text::RichText) -> Self {
                self.text.push(text);
                self
            }

            /// Replace the children wholesale; `has_children` follows the new list.
            pub fn with_children(
                mut self,
                children: impl IntoIterator<Item = $crate::factory::AnyBlock>,
            ) -> Self {
                self.children = children.into_iter().collect();
                self.block = self.block.with_has_children(!self.children.is_empty());
                self
            }

            /// Append one child; `has_children` becomes true.
            pub fn append_child(mut self, child: impl Into<$crate::factory::AnyBlock>) -> Self {
                self.children.push(child.into());
                self.block = self.block.with_has_children(true);
                self
            }
        }

        /// Label plain text, span by span.
        impl ::std::fmt::Display for $T {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                for span in &self.text {
                    f.write_str(span.plain_text())?;
                }
                Ok(())
            }
        }
    };
}

pub(crate) use text_block;

use crate::block::BlockType;

text_block!(
    /// A plain paragraph.
    Paragraph,
    BlockType::Paragraph
);
text_block!(BulletedListItem, BlockType::BulletedListItem);
text_block!(NumberedListItem, BlockType::NumberedListItem);
text_block!(
    /// A block quote.
    Quote,
    BlockType::Quote
);
