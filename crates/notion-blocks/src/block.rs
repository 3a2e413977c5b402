//! The block envelope shared by every block variant.
//!
//! Every object the block API returns carries the same outer fields (`object`,
//! `id`, timestamps, `archived`, `has_children`, `type`, `parent`) plus one
//! payload key named after its type tag. [`Block`] models the outer part. The
//! typed variants ([`Toggle`](crate::Toggle), [`Paragraph`](crate::Paragraph),
//! ...) wrap a `Block` and own the payload.
//!
//! ## Timestamps
//!
//! The API prints times as RFC 3339 UTC with millisecond precision
//! (`2022-03-01T19:05:00.000Z`). Timestamps are kept at that precision so a
//! parsed envelope prints back byte-for-byte.

use std::str::FromStr;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{EnumIter, EnumString};

use crate::error::BlockError;
use crate::ids::{BlockId, PageId};
use crate::rich_text::RichText;
use crate::Result;

/// Which variant a block is: the `type` discriminator on the wire.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BlockType {
    Paragraph,
    #[serde(rename = "heading_1")]
    #[strum(serialize = "heading_1")]
    Heading1,
    #[serde(rename = "heading_2")]
    #[strum(serialize = "heading_2")]
    Heading2,
    #[serde(rename = "heading_3")]
    #[strum(serialize = "heading_3")]
    Heading3,
    BulletedListItem,
    NumberedListItem,
    ToDo,
    Toggle,
    Quote,
    Divider,
}

impl BlockType {
    /// Parse a wire tag. Exact match only; the API never varies case.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    /// The wire tag, which is also the payload key.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::Heading1 => "heading_1",
            BlockType::Heading2 => "heading_2",
            BlockType::Heading3 => "heading_3",
            BlockType::BulletedListItem => "bulleted_list_item",
            BlockType::NumberedListItem => "numbered_list_item",
            BlockType::ToDo => "to_do",
            BlockType::Toggle => "toggle",
            BlockType::Quote => "quote",
            BlockType::Divider => "divider",
        }
    }

    /// Whether blocks of this type may nest children.
    pub fn supports_children(&self) -> bool {
        !matches!(
            self,
            BlockType::Heading1 | BlockType::Heading2 | BlockType::Heading3 | BlockType::Divider
        )
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a block lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Parent {
    /// Top-level block on a page.
    PageId { page_id: PageId },
    /// Nested under another block.
    BlockId { block_id: BlockId },
    /// Workspace root (`"workspace": true` on the wire).
    Workspace { workspace: bool },
}

/// The wire `object` discriminator. Only `"block"` is accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
enum ObjectTag {
    #[default]
    #[serde(rename = "block")]
    Block,
}

/// Common metadata wrapper held by every typed block.
///
/// Immutable: the `with_*` methods consume the envelope and return the
/// edited copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    object: ObjectTag,
    /// Absent until the API has assigned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<BlockId>,
    #[serde(with = "iso_millis")]
    created_time: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    last_edited_time: DateTime<Utc>,
    #[serde(default)]
    archived: bool,
    #[serde(default)]
    has_children: bool,
    #[serde(rename = "type")]
    block_type: BlockType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<Parent>,
}

impl Block {
    /// Fresh, unsaved envelope: no id, no parent, both timestamps now.
    pub fn create(block_type: BlockType) -> Self {
        let now = Utc::now().trunc_subsecs(3);
        Self {
            object: ObjectTag::Block,
            id: None,
            created_time: now,
            last_edited_time: now,
            archived: false,
            has_children: false,
            block_type,
            parent: None,
        }
    }

    /// Parse the envelope fields of a block object.
    ///
    /// The payload key is ignored here; typed blocks read it themselves.
    pub fn from_json(value: &Value) -> Result<Self> {
        // Check the tag first so an unknown tag reports as such rather than
        // as a serde "unknown variant" message.
        type_tag(value)?;
        Ok(Self::deserialize(value)?)
    }

    /// Serialize the envelope as a JSON object (without payload key).
    pub fn to_json(&self) -> Value {
        // Every field serializes to a string, bool or tagged map.
        serde_json::to_value(self).expect("serialize block envelope")
    }

    pub fn id(&self) -> Option<BlockId> {
        self.id
    }

    pub fn created_time(&self) -> DateTime<Utc> {
        self.created_time
    }

    pub fn last_edited_time(&self) -> DateTime<Utc> {
        self.last_edited_time
    }

    pub fn archived(&self) -> bool {
        self.archived
    }

    pub fn has_children(&self) -> bool {
        self.has_children
    }

    pub fn block_type(&self) -> BlockType {
        self.block_type
    }

    pub fn parent(&self) -> Option<Parent> {
        self.parent
    }

    /// Check the type tag.
    pub fn is_type(&self, block_type: BlockType) -> bool {
        self.block_type == block_type
    }

    /// Fail with [`BlockError::TypeMismatch`] unless the tag is `expected`.
    pub fn expect_type(&self, expected: BlockType) -> Result<()> {
        if self.block_type == expected {
            return Ok(());
        }
        tracing::debug!(
            %expected,
            found = %self.block_type,
            "rejecting envelope with mismatched type tag"
        );
        Err(BlockError::TypeMismatch {
            expected,
            found: self.block_type,
        })
    }

    pub fn with_id(mut self, id: BlockId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_has_children(mut self, has_children: bool) -> Self {
        self.has_children = has_children;
        self
    }

    pub fn with_archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    pub fn with_last_edited_time(mut self, time: DateTime<Utc>) -> Self {
        self.last_edited_time = time.trunc_subsecs(3);
        self
    }

    pub fn with_parent(mut self, parent: Parent) -> Self {
        self.parent = Some(parent);
        self
    }
}

// ── JSON shape helpers shared by the typed blocks ───────────────────────────

/// Read and parse the `type` tag of a block object.
pub(crate) fn type_tag(value: &Value) -> Result<BlockType> {
    let tag = value
        .get("type")
        .ok_or(BlockError::MissingField("type"))?
        .as_str()
        .ok_or(BlockError::InvalidShape {
            field: "type",
            expected: "a string",
        })?;
    BlockType::from_str(tag).ok_or_else(|| BlockError::UnknownBlockType(tag.to_string()))
}

/// The payload object stored under the block's type key.
pub(crate) fn payload(value: &Value, block_type: BlockType) -> Result<&Map<String, Value>> {
    let key = block_type.as_str();
    value
        .get(key)
        .ok_or(BlockError::MissingField(key))?
        .as_object()
        .ok_or(BlockError::InvalidShape {
            field: key,
            expected: "an object",
        })
}

/// A required array inside a payload.
pub(crate) fn array<'a>(payload: &'a Map<String, Value>, field: &'static str) -> Result<&'a [Value]> {
    payload
        .get(field)
        .ok_or(BlockError::MissingField(field))?
        .as_array()
        .map(Vec::as_slice)
        .ok_or(BlockError::InvalidShape {
            field,
            expected: "an array",
        })
}

/// A required array of rich text spans inside a payload.
pub(crate) fn rich_text_array(payload: &Map<String, Value>, field: &'static str) -> Result<Vec<RichText>> {
    array(payload, field)?
        .iter()
        .map(|span| RichText::deserialize(span).map_err(BlockError::from))
        .collect()
}

/// An optional array inside a payload. The API omits `children` when it
/// returns blocks one level at a time.
pub(crate) fn optional_array<'a>(
    payload: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a [Value]> {
    match payload.get(field) {
        None => Ok(&[]),
        Some(_) => array(payload, field),
    }
}

/// Serde adapter for the API's millisecond RFC 3339 timestamps.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&time.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|t| t.with_timezone(&Utc).trunc_subsecs(3))
            .map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
