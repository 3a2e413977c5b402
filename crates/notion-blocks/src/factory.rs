//! Polymorphic blocks and type-tag dispatch.
//!
//! [`AnyBlock`] is the closed set of block variants this crate models. Child
//! lists hold `AnyBlock` so a toggle can nest a paragraph that nests a to-do,
//! and so on. [`BlockFactory`] reads a JSON object's `type` tag and hands it
//! to the matching variant's parser.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::block::{self, Block, BlockType};
use crate::blocks::{
    BulletedListItem, Divider, Heading1, Heading2, Heading3, NumberedListItem, Paragraph, Quote,
    ToDo,
};
use crate::toggle::Toggle;
use crate::Result;

/// Contract every typed block fulfils.
///
/// The inherent `from_json` / `to_json` on each type are the primary API;
/// this trait lets generic code name them.
pub trait BlockVariant: Sized + Into<AnyBlock> {
    /// Type tag this variant requires on its envelope.
    const TYPE: BlockType;

    fn block(&self) -> &Block;

    fn from_json(value: &Value) -> Result<Self>;

    fn to_json(&self) -> Value;
}

/// Any block variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnyBlock {
    Paragraph(Paragraph),
    Heading1(Heading1),
    Heading2(Heading2),
    Heading3(Heading3),
    BulletedListItem(BulletedListItem),
    NumberedListItem(NumberedListItem),
    ToDo(ToDo),
    Toggle(Toggle),
    Quote(Quote),
    Divider(Divider),
}

/// Run `$body` with `$b` bound to the inner typed block.
macro_rules! dispatch {
    ($any:expr, $b:ident => $body:expr) => {
        match $any {
            AnyBlock::Paragraph($b) => $body,
            AnyBlock::Heading1($b) => $body,
            AnyBlock::Heading2($b) => $body,
            AnyBlock::Heading3($b) => $body,
            AnyBlock::BulletedListItem($b) => $body,
            AnyBlock::NumberedListItem($b) => $body,
            AnyBlock::ToDo($b) => $body,
            AnyBlock::Toggle($b) => $body,
            AnyBlock::Quote($b) => $body,
            AnyBlock::Divider($b) => $body,
        }
    };
}

/// Wire a typed block into [`BlockVariant`] and [`AnyBlock`].
macro_rules! impl_block_variant {
    ($T:ident, $tag:expr) => {
        impl BlockVariant for $T {
            const TYPE: BlockType = $tag;

            fn block(&self) -> &Block {
                $T::block(self)
            }

            fn from_json(value: &Value) -> Result<Self> {
                $T::from_json(value)
            }

            fn to_json(&self) -> Value {
                $T::to_json(self)
            }
        }

        impl From<$T> for AnyBlock {
            fn from(b: $T) -> Self {
                AnyBlock::$T(b)
            }
        }
    };
}

impl_block_variant!(Paragraph, BlockType::Paragraph);
impl_block_variant!(Heading1, BlockType::Heading1);
impl_block_variant!(Heading2, BlockType::Heading2);
impl_block_variant!(Heading3, BlockType::Heading3);
impl_block_variant!(BulletedListItem, BlockType::BulletedListItem);
impl_block_variant!(NumberedListItem, BlockType::NumberedListItem);
impl_block_variant!(ToDo, BlockType::ToDo);
impl_block_variant!(Toggle, BlockType::Toggle);
impl_block_variant!(Quote, BlockType::Quote);
impl_block_variant!(Divider, BlockType::Divider);

impl AnyBlock {
    pub fn block(&self) -> &Block {
        dispatch!(self, b => b.block())
    }

    pub fn block_type(&self) -> BlockType {
        self.block().block_type()
    }

    pub fn to_json(&self) -> Value {
        dispatch!(self, b => b.to_json())
    }

    /// Nested blocks, or an empty slice for variants that cannot nest.
    pub fn children(&self) -> &[AnyBlock] {
        match self {
            AnyBlock::Paragraph(b) => b.children(),
            AnyBlock::BulletedListItem(b) => b.children(),
            AnyBlock::NumberedListItem(b) => b.children(),
            AnyBlock::ToDo(b) => b.children(),
            AnyBlock::Toggle(b) => b.children(),
            AnyBlock::Quote(b) => b.children(),
            AnyBlock::Heading1(_)
            | AnyBlock::Heading2(_)
            | AnyBlock::Heading3(_)
            | AnyBlock::Divider(_) => &[],
        }
    }

    pub fn as_toggle(&self) -> Option<&Toggle> {
        match self {
            AnyBlock::Toggle(t) => Some(t),
            _ => None,
        }
    }
}

/// Plain text of the block's own label (children excluded).
impl fmt::Display for AnyBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, b => fmt::Display::fmt(b, f))
    }
}

impl Serialize for AnyBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AnyBlock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        BlockFactory::from_json(&value).map_err(serde::de::Error::custom)
    }
}

/// Maps a block object's type tag to the matching typed parser.
pub struct BlockFactory;

impl BlockFactory {
    /// Parse any supported block object.
    ///
    /// Errors from the variant parser are returned unchanged.
    pub fn from_json(value: &Value) -> Result<AnyBlock> {
        let block_type = block::type_tag(value)?;
        tracing::trace!(%block_type, "dispatching block");
        Ok(match block_type {
            BlockType::Paragraph => Paragraph::from_json(value)?.into(),
            BlockType::Heading1 => Heading1::from_json(value)?.into(),
            BlockType::Heading2 => Heading2::from_json(value)?.into(),
            BlockType::Heading3 => Heading3::from_json(value)?.into(),
            BlockType::BulletedListItem => BulletedListItem::from_json(value)?.into(),
            BlockType::NumberedListItem => NumberedListItem::from_json(value)?.into(),
            BlockType::ToDo => ToDo::from_json(value)?.into(),
            BlockType::Toggle => Toggle::from_json(value)?.into(),
            BlockType::Quote => Quote::from_json(value)?.into(),
            BlockType::Divider => Divider::from_json(value)?.into(),
        })
    }

    /// Parse a sequence of block objects, stopping at the first failure.
    pub fn from_json_array(values: &[Value]) -> Result<Vec<AnyBlock>> {
        values.iter().map(Self::from_json).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
