//! Coarse screen modes of the verticals step.
//!
//! The state machine reduces its full screen state to a [`ScreenMode`] so a
//! surface can pick between a full-screen progress indicator, a full-screen
//! error and the row list without inspecting the rows.
//!
//! # State Machine
//!
//! - **`FullscreenProgress`**: header info is being fetched
//! - **`FullscreenError`**: header info could not be fetched; retry available
//! - **Content**: header known, rows derived from query and suggestions

/// Coarse summary of the screen state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenMode {
    /// Waiting for header info.
    FullscreenProgress,

    /// Header fetch failed.
    FullscreenError,

    /// Header loaded; the row list is shown.
    Content,
}
