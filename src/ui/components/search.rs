//! Search input component renderer.
//!
//! Renders the bordered search field with the query (or the hint while the
//! query is empty), a progress marker while suggestions load, and a clear
//! marker when there is something to clear.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Marker shown while a suggestion fetch is pending.
const PROGRESS_MARKER: &str = "⟳";

/// Marker of the clear affordance.
const CLEAR_MARKER: &str = "✕";

/// Search field content.
#[derive(Debug, Clone, Copy)]
pub struct SearchInputView<'a> {
    pub query: &'a str,
    pub hint: &'a str,
    pub show_progress: bool,
    pub show_clear_button: bool,
}

/// Renders the search input box at `row`.
///
/// # Returns
///
/// The next available row position (row + 3, since the box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────────┐ [margin]
/// [margin] │ query / hint     ⟳ ✕ │ [margin]
/// [margin] └──────────────────────┘ [margin]
/// ```
pub fn render_search_input(
    out: &mut String,
    row: usize,
    input: &SearchInputView<'_>,
    theme: &Theme,
    cols: usize,
) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = Theme::fg(&theme.colors.input_border);

    let mut markers = String::new();
    if input.show_progress {
        markers.push_str(&format!(" {PROGRESS_MARKER}"));
    }
    if input.show_clear_button {
        markers.push_str(&format!(" {CLEAR_MARKER}"));
    }
    if !markers.is_empty() {
        markers.push(' ');
    }
    let markers_width = markers.chars().count();

    let (text, color) = if input.query.is_empty() {
        (input.hint, &theme.colors.input_hint_fg)
    } else {
        (input.query, &theme.colors.text_normal)
    };
    let text = truncate(
        &format!(" {text}"),
        inner_width.saturating_sub(markers_width),
    );
    let padding = inner_width.saturating_sub(text.chars().count() + markers_width);

    position_cursor(out, row, 1);
    out.push_str(&margin);
    out.push_str(&border);
    out.push_str(&format!("┌{}┐", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    position_cursor(out, row + 1, 1);
    out.push_str(&margin);
    out.push_str(&border);
    out.push('│');
    out.push_str(&Theme::fg(color));
    out.push_str(&text);
    out.push_str(&" ".repeat(padding));
    if input.show_progress {
        out.push_str(&Theme::fg(&theme.colors.progress_fg));
        out.push_str(&format!(" {PROGRESS_MARKER}"));
    }
    if input.show_clear_button {
        out.push_str(&Theme::fg(&theme.colors.clear_button_fg));
        out.push_str(&format!(" {CLEAR_MARKER}"));
    }
    if markers_width > 0 {
        out.push(' ');
    }
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    out.push_str(&margin);
    out.push_str(&border);
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    row + 3
}
