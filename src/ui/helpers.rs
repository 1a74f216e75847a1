//! Shared rendering utilities.
//!
//! Low-level helpers used across components. Everything writes into a frame
//! buffer (`&mut String`) rather than stdout so frames can be composed and
//! inspected before they are printed.
//!
//! # Features
//!
//! - **Cursor Positioning**: ANSI absolute cursor moves
//! - **Fuzzy Match Highlighting**: Skim match indices coalesced into ranges
//! - **UTF-8 Safe**: Operates on character indices, not byte indices
//!
//! # Example
//!
//! ```rust
//! use siteflow::ui::helpers::{highlight_ranges, push_highlighted};
//! use siteflow::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! let ranges = highlight_ranges("Landscaping", "land");
//! assert_eq!(ranges, vec![(0, 4)]);
//!
//! let mut out = String::new();
//! push_highlighted(&mut out, "Landscaping", &ranges, &theme);
//! assert!(out.contains("scaping"));
//! ```

use crate::ui::theme::Theme;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Moves the cursor to `row`, `col` (both 1-indexed).
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Writes `text` centered in `cols` columns, padded on both sides.
pub fn push_centered(out: &mut String, text: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = text.chars().count();
    let padding = cols.saturating_sub(len) / 2;

    out.push_str(&" ".repeat(padding));
    out.push_str(&text);
    out.push_str(&" ".repeat(cols.saturating_sub(padding + len)));
}

/// Shortens `text` to at most `width` characters, marking the cut with `…`.
///
/// # Example
///
/// ```rust
/// use siteflow::ui::helpers::truncate;
///
/// assert_eq!(truncate("Landscaping", 6), "Lands…");
/// assert_eq!(truncate("Yoga", 6), "Yoga");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut short: String = text.chars().take(width - 1).collect();
    short.push('…');
    short
}

/// Computes character ranges of `text` matched by `query`.
///
/// Uses the Skim fuzzy matcher to find matching character positions, then
/// coalesces consecutive indices into `(start, end)` ranges with an exclusive
/// end. Whitespace-separated query tokens are matched independently.
///
/// # Returns
///
/// Sorted, non-overlapping ranges; empty if the query is blank or any token
/// does not match.
#[must_use]
pub fn highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let matcher = SkimMatcherV2::default();
    let haystack = text.to_lowercase();

    let mut indices = Vec::new();
    for token in query.split_whitespace() {
        match matcher.fuzzy_indices(&haystack, &token.to_lowercase()) {
            Some((_score, token_indices)) => indices.extend(token_indices),
            None => return vec![],
        }
    }
    indices.sort_unstable();
    indices.dedup();

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

/// Writes `text` with `ranges` in the match highlight colors.
///
/// `ranges` are `(start, end)` character indices with an exclusive end.
/// Outside the ranges the text is written in `text_normal`.
pub fn push_highlighted(out: &mut String, text: &str, ranges: &[(usize, usize)], theme: &Theme) {
    let normal = Theme::fg(&theme.colors.text_normal);
    out.push_str(&normal);

    if ranges.is_empty() {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            out.extend(&chars[current_pos..start]);
        }

        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start.max(current_pos)..end.max(current_pos)]);
        out.push_str(Theme::reset());
        out.push_str(&normal);

        current_pos = current_pos.max(end);
    }

    if current_pos < chars.len() {
        out.extend(&chars[current_pos..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_coalesce_consecutive_matches() {
        assert_eq!(highlight_ranges("Lawn Care", "lawn"), vec![(0, 4)]);
        assert!(highlight_ranges("Lawn Care", "").is_empty());
        assert!(highlight_ranges("Lawn Care", "xyz").is_empty());
    }

    #[test]
    fn multi_token_ranges_merge() {
        let ranges = highlight_ranges("Legal Services", "legal serv");
        assert_eq!(ranges.first(), Some(&(0, 5)));
        assert!(ranges.contains(&(6, 10)));
    }

    #[test]
    fn highlighted_text_keeps_every_character() {
        let theme = Theme::from_name("catppuccin-mocha").unwrap();
        let mut out = String::new();
        push_highlighted(&mut out, "Café Bar", &[(2, 4)], &theme);

        let plain: String = strip_ansi(&out);
        assert_eq!(plain, "Café Bar");
    }

    fn strip_ansi(text: &str) -> String {
        let mut plain = String::new();
        let mut in_escape = false;
        for ch in text.chars() {
            match (in_escape, ch) {
                (false, '\u{1b}') => in_escape = true,
                (true, 'm') => in_escape = false,
                (true, _) => {}
                (false, ch) => plain.push(ch),
            }
        }
        plain
    }
}
