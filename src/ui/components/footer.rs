//! Footer component renderer.
//!
//! Renders the command hints available for the current screen mode.

use crate::app::ScreenMode;
use crate::domain::MessageKey;
use crate::ui::helpers::{position_cursor, push_centered};
use crate::ui::theme::Theme;

/// Command hints for `mode`.
#[must_use]
pub fn footer_hints(mode: ScreenMode, show_skip_button: bool) -> String {
    match mode {
        ScreenMode::FullscreenProgress => ":q quit".to_string(),
        ScreenMode::FullscreenError => ":retry  :q quit".to_string(),
        ScreenMode::Content => {
            let mut hints = String::from(":pick <n>  :clear  :retry-suggestions  :stats");
            if show_skip_button {
                hints.push_str(&format!("  :skip ({})", MessageKey::Skip.text()));
            }
            hints.push_str("  :q quit");
            hints
        }
    }
}

/// Renders the footer hint line at `row`.
pub fn render_footer(
    out: &mut String,
    row: usize,
    mode: ScreenMode,
    show_skip_button: bool,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    push_centered(out, &footer_hints(mode, show_skip_button), cols);
    out.push_str(Theme::reset());
    row + 1
}
