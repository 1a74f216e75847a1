//! Inline suggestion error row renderer.

use crate::domain::MessageKey;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

/// Renders the error message followed by the retry affordance.
pub fn render_suggestion_error(
    out: &mut String,
    row: usize,
    message: MessageKey,
    retry: MessageKey,
    theme: &Theme,
) -> usize {
    position_cursor(out, row, 1);
    out.push_str("    ");
    out.push_str(&Theme::fg(&theme.colors.error_fg));
    out.push_str(message.text());
    out.push_str("  ");
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.retry_fg));
    out.push_str(&format!("[{}]", retry.text()));
    out.push_str(Theme::reset());
    row + 1
}
