use std::fmt;

use serde_json::{json, Value};

use crate::block::{self, Block, BlockType};
use crate::Result;

const TYPE: BlockType = BlockType::Divider;

/// Horizontal rule. The payload is an empty object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Divider {
    block: Block,
}

impl Divider {
    pub fn from_parts(block: Block) -> Result<Self> {
        block.expect_type(TYPE)?;
        Ok(Self { block })
    }

    pub fn create() -> Self {
        Self {
            block: Block::create(TYPE),
        }
    }

    pub fn from_json(value: &Value) -> Result<Self> {
        let block = Block::from_json(value)?;
        block.expect_type(TYPE)?;
        block::payload(value, TYPE)?;
        Self::from_parts(block)
    }

    pub fn to_json(&self) -> Value {
        let mut json = self.block.to_json();
        json[TYPE.as_str()] = json!({});
        json
    }

    pub fn block(&self) -> &Block {
        &self.block
    }
}

/// Dividers have no text.
impl fmt::Display for Divider {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}
