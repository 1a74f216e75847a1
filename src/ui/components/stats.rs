//! Stats block renderer.
//!
//! Renders a [`StatsBlock`] as plain lines (no cursor positioning) so it can
//! be printed below the verticals frame or on its own.

use crate::domain::MessageKey;
use crate::stats::{BlockListItem, StatsBlock};
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;

/// Renders `block` into `out`, one line per item.
pub fn render_stats_block(out: &mut String, block: &StatsBlock, theme: &Theme, cols: usize) {
    let items = match block {
        StatsBlock::Error { message } => {
            out.push_str(&Theme::fg(&theme.colors.error_fg));
            out.push_str(&truncate(message, cols));
            out.push_str(Theme::reset());
            out.push('\n');
            return;
        }
        StatsBlock::BlockList { items } => items,
    };

    for item in items {
        match item {
            BlockListItem::Title { text } => {
                out.push_str(Theme::bold());
                out.push_str(&Theme::fg(&theme.colors.title_fg));
                out.push_str(text.text());
                out.push_str(Theme::reset());
                out.push('\n');
            }
            BlockListItem::Empty => {
                out.push_str(&Theme::fg(&theme.colors.text_dim));
                out.push_str(MessageKey::StatsEmpty.text());
                out.push_str(Theme::reset());
                out.push('\n');
            }
            BlockListItem::ListItemWithIcon {
                icon,
                text,
                value,
                show_divider,
            } => {
                let value_width = value.chars().count();
                let text_width = cols.saturating_sub(value_width + 4);
                let text = truncate(text, text_width);
                let padding = text_width.saturating_sub(text.chars().count());

                out.push_str(&Theme::fg(&theme.colors.text_dim));
                out.push_str(icon.glyph());
                out.push(' ');
                out.push_str(&Theme::fg(&theme.colors.text_normal));
                out.push_str(&text);
                out.push_str(&" ".repeat(padding));
                out.push_str("  ");
                out.push_str(&Theme::fg(&theme.colors.value_fg));
                out.push_str(value);
                out.push_str(Theme::reset());
                out.push('\n');

                if *show_divider {
                    out.push_str(&Theme::fg(&theme.colors.divider));
                    out.push_str(&"─".repeat(cols));
                    out.push_str(Theme::reset());
                    out.push('\n');
                }
            }
            BlockListItem::Link { text, .. } => {
                out.push_str(&Theme::fg(&theme.colors.link_fg));
                out.push_str(&format!("{} →", text.text()));
                out.push_str(Theme::reset());
                out.push('\n');
            }
        }
    }
}
