//! Header component renderer.
//!
//! Renders the step title and subtitle with theme-aware colors and optional
//! title background.

use crate::ui::helpers::{position_cursor, push_centered};
use crate::ui::theme::Theme;

/// Renders the title and subtitle starting at `row`.
///
/// # Returns
///
/// The next available row position (row + 3, title, subtitle and a blank
/// spacer line).
pub fn render_header(
    out: &mut String,
    row: usize,
    title: &str,
    subtitle: &str,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.title_fg));
    if let Some(bg) = &theme.colors.title_bg {
        out.push_str(&Theme::bg(bg));
    }
    push_centered(out, title, cols);
    out.push_str(Theme::reset());

    position_cursor(out, row + 1, 1);
    out.push_str(&Theme::fg(&theme.colors.subtitle_fg));
    push_centered(out, subtitle, cols);
    out.push_str(Theme::reset());

    row + 3
}
