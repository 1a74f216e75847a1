//! Top-level rendering coordinator.
//!
//! Turns published snapshots and stats blocks into ANSI frames. The renderer
//! picks the layout from the snapshot's screen mode and delegates to the
//! components.
//!
//! # Example
//!
//! ```rust
//! use siteflow::app::ScreenMode;
//! use siteflow::ui::viewmodel::VerticalsUiState;
//! use siteflow::ui::{render_frame, Theme};
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! let state = VerticalsUiState {
//!     mode: ScreenMode::FullscreenProgress,
//!     show_skip_button: false,
//!     items: vec![],
//! };
//! let frame = render_frame(&state, &theme, 24, 80);
//! assert!(frame.contains("Loading"));
//! ```

use crate::app::ScreenMode;
use crate::stats::StatsBlock;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::VerticalsUiState;

/// Renders a snapshot of the verticals screen.
///
/// # Parameters
///
/// * `state` - Published snapshot
/// * `theme` - Active color theme
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The frame as ANSI-styled text with absolute cursor positioning. The
/// screen is not cleared.
#[must_use]
pub fn render_frame(state: &VerticalsUiState, theme: &Theme, rows: usize, cols: usize) -> String {
    let _span = tracing::trace_span!("render_frame", mode = ?state.mode, rows, cols).entered();
    let mut out = String::new();

    match state.mode {
        ScreenMode::FullscreenProgress => {
            components::render_fullscreen_progress(&mut out, theme, rows, cols);
            components::render_chrome(&mut out, state, theme, rows, cols);
        }
        ScreenMode::FullscreenError => {
            components::render_fullscreen_error(&mut out, theme, rows, cols);
            components::render_chrome(&mut out, state, theme, rows, cols);
        }
        ScreenMode::Content => components::render_content(&mut out, state, theme, rows, cols),
    }

    out
}

/// Renders a stats block as plain lines, `cols` wide.
#[must_use]
pub fn render_stats_block(block: &StatsBlock, theme: &Theme, cols: usize) -> String {
    let mut out = String::new();
    components::render_stats_block(&mut out, block, theme, cols);
    out
}
