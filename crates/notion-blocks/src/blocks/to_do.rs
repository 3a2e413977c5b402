//! Checklist items.

use std::fmt;

use serde_json::{json, Value};

use crate::block::{self, Block, BlockType};
use crate::error::BlockError;
use crate::factory::{AnyBlock, BlockFactory};
use crate::rich_text::RichText;
use crate::Result;

const TYPE: BlockType = BlockType::ToDo;

/// A to-do item: label, checkbox state, and nested children.
///
/// Payload: `{ "text": [...], "checked": bool, "children": [...] }`. A missing
/// `checked` reads as unchecked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToDo {
    block: Block,
    text: Vec<RichText>,
    checked: bool,
    children: Vec<AnyBlock>,
}

impl ToDo {
    pub fn from_parts(
        block: Block,
        text: Vec<RichText>,
        checked: bool,
        children: Vec<AnyBlock>,
    ) -> Result<Self> {
        block.expect_type(TYPE)?;
        Ok(Self {
            block,
            text,
            checked,
            children,
        })
    }

    pub fn create() -> Self {
        Self {
            block: Block::create(TYPE),
            text: Vec::new(),
            checked: false,
            children: Vec::new(),
        }
    }

    pub fn from_string(content: impl Into<String>) -> Self {
        Self {
            block: Block::create(TYPE),
            text: vec![RichText::create_text(content)],
            checked: false,
            children: Vec::new(),
        }
    }

    pub fn from_json(value: &Value) -> Result<Self> {
        let block = Block::from_json(value)?;
        block.expect_type(TYPE)?;

        let to_do = block::payload(value, TYPE)?;
        let text = block::rich_text_array(to_do, "text")?;
        let checked = match to_do.get("checked") {
            None => false,
            Some(v) => v.as_bool().ok_or(BlockError::InvalidShape {
                field: "checked",
                expected: "a boolean",
            })?,
        };
        let children = BlockFactory::from_json_array(block::optional_array(to_do, "children")?)?;

        Self::from_parts(block, text, checked, children)
    }

    pub fn to_json(&self) -> Value {
        let mut json = self.block.to_json();
        json[TYPE.as_str()] = json!({
            "text": self.text,
            "checked": self.checked,
            "children": self.children.iter().map(AnyBlock::to_json).collect::<Vec<_>>(),
        });
        json
    }

    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn text(&self) -> &[RichText] {
        &self.text
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn children(&self) -> &[AnyBlock] {
        &self.children
    }

    pub fn check(mut self) -> Self {
        self.checked = true;
        self
    }

    pub fn uncheck(mut self) -> Self {
        self.checked = false;
        self
    }

    pub fn with_text(mut self, text: impl IntoIterator<Item = RichText>) -> Self {
        self.text = text.into_iter().collect();
        self
    }

    pub fn append_text(mut self, text: RichText) -> Self {
        self.text.push(text);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = AnyBlock>) -> Self {
        self.children = children.into_iter().collect();
        self.block = self.block.with_has_children(!self.children.is_empty());
        self
    }

    pub fn append_child(mut self, child: impl Into<AnyBlock>) -> Self {
        self.children.push(child.into());
        self.block = self.block.with_has_children(true);
        self
    }
}

impl fmt::Display for ToDo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.text {
            f.write_str(span.plain_text())?;
        }
        Ok(())
    }
}
