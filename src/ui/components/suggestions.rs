//! Suggestion row renderer.

use crate::ui::helpers::{highlight_ranges, position_cursor, push_highlighted, truncate};
use crate::ui::theme::Theme;

const ROW_INDENT: usize = 4;

/// Renders one numbered suggestion, highlighting characters matched by
/// `query`, and its divider when requested.
///
/// # Returns
///
/// The next available row position.
#[allow(clippy::too_many_arguments)]
pub fn render_suggestion(
    out: &mut String,
    row: usize,
    number: usize,
    title: &str,
    query: &str,
    show_divider: bool,
    theme: &Theme,
    cols: usize,
) -> usize {
    let label = format!("{number:>2}. ");
    let title = truncate(title, cols.saturating_sub(ROW_INDENT + label.len()));
    let ranges = highlight_ranges(&title, query);

    position_cursor(out, row, 1);
    out.push_str(&" ".repeat(ROW_INDENT));
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&label);
    push_highlighted(out, &title, &ranges, theme);
    out.push_str(Theme::reset());

    if !show_divider {
        return row + 1;
    }

    position_cursor(out, row + 1, 1);
    out.push_str(&" ".repeat(ROW_INDENT));
    out.push_str(&Theme::fg(&theme.colors.divider));
    out.push_str(&"─".repeat(cols.saturating_sub(ROW_INDENT * 2)));
    out.push_str(Theme::reset());
    row + 2
}
