//! Formatted text spans.
//!
//! A [`RichText`] is one run of text with uniform formatting. Block labels
//! and paragraphs are `Vec<RichText>`, rendered left to right. Every span
//! carries a `plain_text` projection computed by the API. Spans built locally
//! fill it in from their content.
//!
//! Wire shape:
//!
//! ```text
//! {
//!   "plain_text": "Details",
//!   "href": null,
//!   "annotations": { "bold": false, ..., "color": "default" },
//!   "type": "text",
//!   "text": { "content": "Details", "link": null }
//! }
//! ```

use serde::{Deserialize, Serialize};
use strum::EnumString;

/// One formatted text span.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    plain_text: String,
    #[serde(default)]
    href: Option<String>,
    #[serde(default)]
    annotations: Annotations,
    #[serde(flatten)]
    content: RichTextContent,
}

/// What a span holds, keyed by its `type` tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextContent {
    Text { text: Text },
    Equation { equation: Equation },
}

/// Literal text content with an optional hyperlink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub content: String,
    #[serde(default)]
    pub link: Option<Link>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

/// An inline KaTeX expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equation {
    pub expression: String,
}

/// Styling flags applied to a whole span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub code: bool,
    #[serde(default)]
    pub color: Color,
}

/// Text or background color of a span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Color {
    #[default]
    Default,
    Gray,
    Brown,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Red,
    GrayBackground,
    BrownBackground,
    OrangeBackground,
    YellowBackground,
    GreenBackground,
    BlueBackground,
    PurpleBackground,
    PinkBackground,
    RedBackground,
}

impl Color {
    /// Whether this color paints the background instead of the glyphs.
    pub fn is_background(&self) -> bool {
        matches!(
            self,
            Color::GrayBackground
                | Color::BrownBackground
                | Color::OrangeBackground
                | Color::YellowBackground
                | Color::GreenBackground
                | Color::BlueBackground
                | Color::PurpleBackground
                | Color::PinkBackground
                | Color::RedBackground
        )
    }
}

impl RichText {
    /// Plain, unformatted text span.
    pub fn create_text(content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            plain_text: content.clone(),
            href: None,
            annotations: Annotations::default(),
            content: RichTextContent::Text {
                text: Text { content, link: None },
            },
        }
    }

    /// Inline equation span. Its plain text is the raw expression.
    pub fn create_equation(expression: impl Into<String>) -> Self {
        let expression = expression.into();
        Self {
            plain_text: expression.clone(),
            href: None,
            annotations: Annotations::default(),
            content: RichTextContent::Equation {
                equation: Equation { expression },
            },
        }
    }

    pub fn plain_text(&self) -> &str {
        &self.plain_text
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    pub fn content(&self) -> &RichTextContent {
        &self.content
    }

    pub fn is_text(&self) -> bool {
        matches!(self.content, RichTextContent::Text { .. })
    }

    pub fn is_equation(&self) -> bool {
        matches!(self.content, RichTextContent::Equation { .. })
    }

    pub fn with_plain_text(mut self, plain_text: impl Into<String>) -> Self {
        self.plain_text = plain_text.into();
        self
    }

    /// Link the span. For text spans the link is stored on the content too,
    /// the way the API reports it.
    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        if let RichTextContent::Text { text } = &mut self.content {
            text.link = Some(Link { url: url.clone() });
        }
        self.href = Some(url);
        self
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn bold(mut self) -> Self {
        self.annotations.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.annotations.italic = true;
        self
    }

    pub fn strike_through(mut self) -> Self {
        self.annotations.strikethrough = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.annotations.underline = true;
        self
    }

    pub fn code(mut self) -> Self {
        self.annotations.code = true;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.annotations.color = color;
        self
    }
}

impl From<&str> for RichText {
    fn from(content: &str) -> Self {
        Self::create_text(content)
    }
}

impl From<String> for RichText {
    fn from(content: String) -> Self {
        Self::create_text(content)
    }
}

/// Concatenate the plain text of every span, in order.
pub fn plain_text(spans: &[RichText]) -> String {
    spans.iter().map(RichText::plain_text).collect()
}

// ============================================================================
// Tests
// ============================================================================
