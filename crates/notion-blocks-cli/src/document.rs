//! Input documents: one block, an array of blocks, or a paginated list.

use notion_blocks::{AnyBlock, BlockError, BlockFactory};
use serde_json::{Map, Value};

/// What the user fed us, kept in its original shape so `normalize` can
/// print the same shape back.
#[derive(Clone, Debug, PartialEq)]
pub enum Document {
    Single(AnyBlock),
    Many(Vec<AnyBlock>),
    /// A `{"object": "list", "results": [...]}` page. Fields other than
    /// `results` (cursors, `has_more`) are carried through verbatim.
    List {
        results: Vec<AnyBlock>,
        rest: Map<String, Value>,
    },
}

impl Document {
    pub fn from_json(value: &Value) -> notion_blocks::Result<Self> {
        match value {
            Value::Array(items) => Ok(Document::Many(BlockFactory::from_json_array(items)?)),
            Value::Object(map) if map.get("object").and_then(Value::as_str) == Some("list") => {
                let results = map
                    .get("results")
                    .ok_or(BlockError::MissingField("results"))?
                    .as_array()
                    .ok_or(BlockError::InvalidShape {
                        field: "results",
                        expected: "an array",
                    })?;
                let mut rest = map.clone();
                rest.remove("results");
                Ok(Document::List {
                    results: BlockFactory::from_json_array(results)?,
                    rest,
                })
            }
            _ => Ok(Document::Single(BlockFactory::from_json(value)?)),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Document::Single(block) => block.to_json(),
            Document::Many(blocks) => Value::Array(blocks.iter().map(AnyBlock::to_json).collect()),
            Document::List { results, rest } => {
                let mut map = rest.clone();
                map.insert(
                    "results".into(),
                    Value::Array(results.iter().map(AnyBlock::to_json).collect()),
                );
                Value::Object(map)
            }
        }
    }

    /// Top-level blocks in document order.
    pub fn blocks(&self) -> &[AnyBlock] {
        match self {
            Document::Single(block) => std::slice::from_ref(block),
            Document::Many(blocks) => blocks,
            Document::List { results, .. } => results,
        }
    }
}
