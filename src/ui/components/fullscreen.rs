//! Full-screen progress and error renderers.
//!
//! Shown instead of the row list while header info is loading or after it
//! failed to load.

use crate::domain::MessageKey;
use crate::ui::helpers::{position_cursor, push_centered};
use crate::ui::theme::Theme;

/// Renders a centered loading message.
pub fn render_fullscreen_progress(out: &mut String, theme: &Theme, rows: usize, cols: usize) {
    let row = (rows / 2).max(1);
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.progress_fg));
    push_centered(out, "⟳ Loading…", cols);
    out.push_str(Theme::reset());
}

/// Renders a centered error message with its retry affordance below.
pub fn render_fullscreen_error(out: &mut String, theme: &Theme, rows: usize, cols: usize) {
    let row = (rows / 2).max(1);
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.error_fg));
    push_centered(out, MessageKey::HeaderFailed.text(), cols);
    out.push_str(Theme::reset());

    position_cursor(out, row + 1, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.retry_fg));
    push_centered(out, &format!("[{}]", MessageKey::Retry.text()), cols);
    out.push_str(Theme::reset());
}
