//! Theme management and ANSI escape sequence generation.
//!
//! Built-in themes (Catppuccin variants) are compiled in; custom themes are
//! loaded from TOML files. Colors are hex strings turned into 24-bit ANSI
//! sequences at render time.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! title_fg = "#cdd6f4"
//! subtitle_fg = "#a6adc8"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! divider = "#45475a"
//! input_border = "#f5c2e7"
//! input_hint_fg = "#7f849c"
//! progress_fg = "#89b4fa"
//! clear_button_fg = "#f38ba8"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! error_fg = "#f38ba8"
//! retry_fg = "#a6e3a1"
//! link_fg = "#89b4fa"
//! value_fg = "#f9e2af"
//! ```
//!
//! # Example
//!
//! ```rust
//! use siteflow::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! println!("{}Title{}", Theme::fg(&theme.colors.title_fg), Theme::reset());
//! ```

use crate::domain::error::{Result, SiteflowError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all screen elements.
    pub colors: ThemeColors,
}

/// Color definitions for all screen elements.
///
/// All colors are hex strings (e.g., "#cdd6f4").
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Step title and stats block titles.
    pub title_fg: String,
    /// Optional background behind the step title.
    #[serde(default)]
    pub title_bg: Option<String>,
    pub subtitle_fg: String,

    /// Suggestion titles and list items.
    pub text_normal: String,
    /// Footer and secondary info.
    pub text_dim: String,
    /// Separator lines between rows.
    pub divider: String,

    /// Border around the search field.
    pub input_border: String,
    /// Placeholder shown in an empty search field.
    pub input_hint_fg: String,
    /// Spinner shown while suggestions load.
    pub progress_fg: String,
    pub clear_button_fg: String,

    /// Fuzzy match highlight foreground.
    pub match_highlight_fg: String,
    /// Fuzzy match highlight background.
    pub match_highlight_bg: String,

    /// Error messages, inline and full-screen.
    pub error_fg: String,
    /// Retry affordances.
    pub retry_fg: String,

    /// Link rows under stats blocks.
    pub link_fg: String,
    /// View counts in stats rows.
    pub value_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    ///
    /// # Example
    ///
    /// ```rust
    /// use siteflow::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SiteflowError::Theme`] if:
    /// - The file cannot be read
    /// - The TOML content cannot be parsed (invalid syntax, missing fields)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| SiteflowError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| SiteflowError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Resolves the theme to use.
    ///
    /// A custom file wins over a name; with neither, [`DEFAULT_THEME`] is used.
    ///
    /// # Errors
    ///
    /// Returns [`SiteflowError::Theme`] for an unreadable file or an unknown
    /// name.
    pub fn load(name: Option<&str>, file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            tracing::debug!(path = ?path, "loading custom theme");
            return Self::from_file(path);
        }

        let name = name.unwrap_or(DEFAULT_THEME);
        Self::from_name(name).ok_or_else(|| SiteflowError::Theme(format!("unknown theme '{name}'")))
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color sequence (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color sequence (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling (colors, bold, dim).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}
