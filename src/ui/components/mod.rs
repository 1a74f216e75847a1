//! Composable component renderers.
//!
//! Each component renders one part of the screen into a frame buffer and
//! returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Step title and subtitle
//! - [`search`]: Search input box with progress and clear markers
//! - [`suggestions`]: Numbered suggestion rows with fuzzy highlighting
//! - [`error_row`]: Inline suggestion error with retry
//! - [`fullscreen`]: Full-screen progress and error
//! - [`footer`]: Command hints
//! - [`stats`]: Stats blocks
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header - only while the query is empty]
//! [Search Box - 3 lines]
//! [Suggestions or error row]
//! [Blank padding]
//! [Border]
//! [Footer]
//! ```

mod error_row;
mod footer;
mod fullscreen;
mod header;
mod search;
mod stats;
mod suggestions;

pub use footer::footer_hints;
pub use fullscreen::{render_fullscreen_error, render_fullscreen_progress};
pub use stats::render_stats_block;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{VerticalsListItem, VerticalsUiState};

use error_row::render_suggestion_error;
use footer::render_footer;
use header::render_header;
use search::{render_search_input, SearchInputView};
use suggestions::render_suggestion;

/// Lines kept free at the bottom for the border and footer.
const FOOTER_LINES: usize = 2;

/// Renders a horizontal border line at `row`.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders the content layout: rows top to bottom, then footer.
///
/// Rows that would run into the footer are not drawn.
pub fn render_content(
    out: &mut String,
    state: &VerticalsUiState,
    theme: &Theme,
    rows: usize,
    cols: usize,
) {
    let last_row = rows.saturating_sub(FOOTER_LINES);
    let query = state.query().unwrap_or_default();
    let mut current_row = 2;
    let mut number = 0;

    for item in &state.items {
        if current_row > last_row {
            tracing::trace!(rows, "frame full, remaining rows not drawn");
            break;
        }

        current_row = match item {
            VerticalsListItem::Header { title, subtitle } => {
                render_header(out, current_row, title, subtitle, theme, cols)
            }
            VerticalsListItem::SearchInput {
                query,
                hint,
                show_progress,
                show_clear_button,
            } => render_search_input(
                out,
                current_row,
                &SearchInputView {
                    query,
                    hint,
                    show_progress: *show_progress,
                    show_clear_button: *show_clear_button,
                },
                theme,
                cols,
            ),
            VerticalsListItem::Suggestion {
                title,
                show_divider,
                ..
            } => {
                number += 1;
                render_suggestion(
                    out,
                    current_row,
                    number,
                    title,
                    query,
                    *show_divider,
                    theme,
                    cols,
                )
            }
            VerticalsListItem::SuggestionError { message, retry } => {
                render_suggestion_error(out, current_row, *message, *retry, theme)
            }
        };
    }

    render_chrome(out, state, theme, rows, cols);
}

/// Renders the bottom border and footer.
pub fn render_chrome(
    out: &mut String,
    state: &VerticalsUiState,
    theme: &Theme,
    rows: usize,
    cols: usize,
) {
    let footer_row = rows.saturating_sub(1).max(1);
    let border_row = footer_row.saturating_sub(1).max(1);

    render_border(out, border_row, &theme.colors.divider, cols);
    render_footer(out, footer_row, state.mode, state.show_skip_button, theme, cols);
}
