//! Plain-text outline rendering.
//!
//! One line per block, children indented under their parent:
//!
//! ```text
//! ▸ How do refunds work?
//!   Within 30 days.
//!   ▸ Exceptions
//!     • Gift cards
//!     [x] Update policy page
//!   ---
//! ```

use notion_blocks::AnyBlock;

use crate::config::Config;

/// Render blocks (and everything nested under them) as an outline.
pub fn render_outline(blocks: &[AnyBlock], config: &Config) -> String {
    let mut lines = Vec::new();
    render_level(blocks, 0, config, &mut lines);
    lines.join("\n")
}

fn render_level(blocks: &[AnyBlock], depth: usize, config: &Config, lines: &mut Vec<String>) {
    let pad = " ".repeat(depth * config.indent);
    // Numbered items count up through consecutive runs, like the API's UI.
    let mut number = 0;
    for block in blocks {
        number = match block {
            AnyBlock::NumberedListItem(_) => number + 1,
            _ => 0,
        };
        lines.push(format!("{pad}{}", line_for(block, number, config)));
        render_level(block.children(), depth + 1, config, lines);
    }
}

fn line_for(block: &AnyBlock, number: usize, config: &Config) -> String {
    match block {
        AnyBlock::Paragraph(b) => b.to_string(),
        AnyBlock::Heading1(b) => format!("# {b}"),
        AnyBlock::Heading2(b) => format!("## {b}"),
        AnyBlock::Heading3(b) => format!("### {b}"),
        AnyBlock::BulletedListItem(b) => format!("{} {b}", config.bullet_marker),
        AnyBlock::NumberedListItem(b) => format!("{number}. {b}"),
        AnyBlock::ToDo(b) => format!("[{}] {b}", if b.is_checked() { "x" } else { " " }),
        AnyBlock::Toggle(b) => format!("{} {b}", config.toggle_marker),
        AnyBlock::Quote(b) => format!("{} {b}", config.quote_marker),
        AnyBlock::Divider(_) => config.divider.clone(),
    }
}
