//! Toggle blocks: a collapsible label with nested content.
//!
//! The label is a run of [`RichText`](crate::RichText) spans. The hidden content is an ordered
//! list of child blocks of any type, including further toggles.
//!
//! ```
//! # use notion_blocks::*;
//! let toggle = Toggle::create()
//!     .append_text(RichText::create_text("Details"))
//!     .append_child(Toggle::from_string("Nested"));
//!
//! assert_eq!(toggle.to_string(), "Details");
//! assert_eq!(toggle.children().len(), 1);
//! assert!(toggle.block().has_children());
//! ```
//!
//! ## has_children bookkeeping
//!
//! [`Toggle::with_children`] recomputes the envelope's `has_children` flag
//! from the new list. [`Toggle::append_child`] always sets it. Nothing else
//! touches the flag, so a toggle parsed from JSON keeps whatever the API
//! reported even when `children` was omitted.

use crate::block::BlockType;
use crate::blocks::text_block;

text_block!(
    /// A toggle block.
    Toggle,
    BlockType::Toggle
);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;
    use crate::blocks::Paragraph;
    use crate::error::BlockError;
    use crate::factory::AnyBlock;
    use crate::rich_text::RichText;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn api_toggle() -> Value {
        json!({
            "object": "block",
            "id": "a1d8c5c2-4b7e-4a55-9c4f-2f4f1d0f6b11",
            "created_time": "2022-01-10T08:00:00.000Z",
            "last_edited_time": "2022-01-11T08:30:00.000Z",
            "archived": false,
            "has_children": true,
            "type": "toggle",
            "toggle": {
                "text": [
                    {
                        "plain_text": "FAQ: ",
                        "href": null,
                        "annotations": {
                            "bold": true, "italic": false, "strikethrough": false,
                            "underline": false, "code": false, "color": "default"
                        },
                        "type": "text",
                        "text": { "content": "FAQ: ", "link": null }
                    },
                    {
                        "plain_text": "billing",
                        "href": null,
                        "annotations": {
                            "bold": false, "italic": true, "strikethrough": false,
                            "underline": false, "code": false, "color": "gray"
                        },
                        "type": "text",
                        "text": { "content": "billing", "link": null }
                    }
                ],
                "children": [
                    {
                        "object": "block",
                        "id": "e3b4f0d8-3f7a-4c1c-8a9e-5d2c6b7a8f90",
                        "created_time": "2022-01-10T08:01:00.000Z",
                        "last_edited_time": "2022-01-10T08:01:00.000Z",
                        "archived": false,
                        "has_children": false,
                        "type": "paragraph",
                        "paragraph": {
                            "text": [
                                {
                                    "plain_text": "Invoices go out monthly.",
                                    "href": null,
                                    "annotations": {
                                        "bold": false, "italic": false, "strikethrough": false,
                                        "underline": false, "code": false, "color": "default"
                                    },
                                    "type": "text",
                                    "text": { "content": "Invoices go out monthly.", "link": null }
                                }
                            ],
                            "children": []
                        }
                    }
                ]
            }
        })
    }

    // ── Construction ────────────────────────────────────────────────────

    #[test]
    fn test_create_is_empty() {
        let toggle = Toggle::create();
        assert!(toggle.text().is_empty());
        assert!(toggle.children().is_empty());
        assert!(!toggle.block().has_children());
        assert_eq!(toggle.block().block_type(), BlockType::Toggle);
    }

    #[test]
    fn test_from_string() {
        let toggle = Toggle::from_string("hello");
        assert_eq!(toggle.to_string(), "hello");
        assert_eq!(toggle.text().len(), 1);
        assert!(toggle.children().is_empty());
    }

    #[test]
    fn test_from_parts_rejects_wrong_type() {
        let err = Toggle::from_parts(Block::create(BlockType::Paragraph), vec![], vec![]).unwrap_err();
        assert!(matches!(
            err,
            BlockError::TypeMismatch { expected: BlockType::Toggle, found: BlockType::Paragraph }
        ));
    }

    #[test]
    fn test_from_parts_accepts_toggle_envelope() {
        let toggle = Toggle::from_parts(
            Block::create(BlockType::Toggle),
            vec![RichText::create_text("x")],
            vec![],
        )
        .unwrap();
        assert_eq!(toggle.to_string(), "x");
    }

    // ── JSON ────────────────────────────────────────────────────────────

    #[test]
    fn test_api_roundtrip() {
        let json = api_toggle();
        let toggle = Toggle::from_json(&json).unwrap();
        assert_eq!(toggle.to_string(), "FAQ: billing");
        assert_eq!(toggle.children().len(), 1);
        assert_eq!(toggle.children()[0].block_type(), BlockType::Paragraph);
        assert_eq!(toggle.to_json(), json);
    }

    #[test]
    fn test_microsecond_timestamps_reparse_equal() {
        let mut json = api_toggle();
        json["created_time"] = json!("2022-01-10T08:00:00.123456Z");
        let toggle = Toggle::from_json(&json).unwrap();
        let reparsed = Toggle::from_json(&toggle.to_json()).unwrap();
        assert_eq!(reparsed, toggle);
        assert_eq!(reparsed.to_json()["created_time"], "2022-01-10T08:00:00.123Z");
    }

    #[test]
    fn test_from_json_wrong_type_tag() {
        let json = Paragraph::from_string("not a toggle").to_json();
        let err = Toggle::from_json(&json).unwrap_err();
        assert!(matches!(err, BlockError::TypeMismatch { found: BlockType::Paragraph, .. }));
    }

    #[test]
    fn test_from_json_missing_payload() {
        let mut json = api_toggle();
        json.as_object_mut().unwrap().remove("toggle");
        assert!(matches!(Toggle::from_json(&json), Err(BlockError::MissingField("toggle"))));
    }

    #[test]
    fn test_from_json_missing_text() {
        let mut json = api_toggle();
        json["toggle"].as_object_mut().unwrap().remove("text");
        assert!(matches!(Toggle::from_json(&json), Err(BlockError::MissingField("text"))));
    }

    #[test]
    fn test_from_json_children_not_array() {
        let mut json = api_toggle();
        json["toggle"]["children"] = json!("nope");
        assert!(matches!(
            Toggle::from_json(&json),
            Err(BlockError::InvalidShape { field: "children", .. })
        ));
    }

    #[test]
    fn test_from_json_missing_children_is_empty() {
        let mut json = api_toggle();
        json["toggle"].as_object_mut().unwrap().remove("children");
        let toggle = Toggle::from_json(&json).unwrap();
        assert!(toggle.children().is_empty());
        // The flag is the API's, not recomputed.
        assert!(toggle.block().has_children());
    }

    #[test]
    fn test_from_json_bad_span_propagates() {
        let mut json = api_toggle();
        json["toggle"]["text"][0] = json!({ "plain_text": "x", "type": "text" });
        assert!(matches!(Toggle::from_json(&json), Err(BlockError::Json(_))));
    }

    #[test]
    fn test_from_json_unknown_child_propagates() {
        let mut json = api_toggle();
        json["toggle"]["children"][0]["type"] = json!("table_of_contents");
        let err = Toggle::from_json(&json).unwrap_err();
        assert!(matches!(err, BlockError::UnknownBlockType(t) if t == "table_of_contents"));
    }

    #[test]
    fn test_to_json_shape() {
        let json = Toggle::from_string("Label").to_json();
        assert_eq!(json["type"], "toggle");
        assert_eq!(json["has_children"], false);
        assert_eq!(json["toggle"]["text"][0]["plain_text"], "Label");
        assert_eq!(json["toggle"]["children"], json!([]));
    }

    // ── Editing ─────────────────────────────────────────────────────────

    #[test]
    fn test_with_text_replaces() {
        let a = RichText::create_text("a");
        let b = RichText::create_text("b");
        let toggle = Toggle::from_string("old")
            .append_child(Paragraph::from_string("kept"))
            .with_text([a.clone(), b.clone()]);
        assert_eq!(toggle.text(), &[a, b]);
        assert_eq!(toggle.children().len(), 1);
        assert!(toggle.block().has_children());
    }

    #[test]
    fn test_append_text_keeps_order() {
        let toggle = Toggle::from_string("one")
            .append_text(RichText::create_text(" two"))
            .append_text(RichText::create_text(" three"));
        let texts: Vec<&str> = toggle.text().iter().map(RichText::plain_text).collect();
        assert_eq!(texts, vec!["one", " two", " three"]);
        assert_eq!(toggle.to_string(), "one two three");
    }

    #[test]
    fn test_append_child_sets_has_children() {
        let toggle = Toggle::create();
        assert!(!toggle.block().has_children());
        let toggle = toggle.append_child(Paragraph::from_string("x"));
        assert!(toggle.block().has_children());
    }

    #[test]
    fn test_with_children_recomputes_has_children() {
        let toggle = Toggle::create().append_child(Paragraph::from_string("x"));
        let emptied = toggle.clone().with_children(Vec::<AnyBlock>::new());
        assert!(!emptied.block().has_children());
        assert!(emptied.children().is_empty());

        let refilled = emptied.with_children([Paragraph::from_string("y").into()]);
        assert!(refilled.block().has_children());
        assert_eq!(refilled.children().len(), 1);
    }

    #[test]
    fn test_edits_leave_clone_untouched() {
        let original = Toggle::from_string("keep");
        let edited = original.clone().append_text(RichText::create_text("!"));
        assert_eq!(original.to_string(), "keep");
        assert_eq!(edited.to_string(), "keep!");
    }

    #[test]
    fn test_nested_toggle_scenario() {
        let toggle = Toggle::create()
            .append_text(RichText::create_text("Details"))
            .append_child(Toggle::from_string("Nested"));

        assert_eq!(toggle.to_string(), "Details");
        assert_eq!(toggle.children().len(), 1);
        let json = toggle.to_json();
        assert_eq!(json["toggle"]["children"][0]["toggle"]["text"][0]["plain_text"], "Nested");
    }
}
