//! Terminal presentation surface.
//!
//! Transforms published snapshots into ANSI-styled frames through composable
//! components, and diffs consecutive row lists.
//!
//! # Architecture
//!
//! ```text
//! ScreenState → rows() → VerticalsUiState → render_frame → ANSI Output
//!                                  ↓
//!                          diff_rows(prev, next)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Row and snapshot types
//! - [`diff`]: Identity-based row differ
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable component renderers
//! - [`helpers`]: Shared rendering utilities (cursor, highlighting)
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod components;
pub mod diff;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use diff::{apply_edits, diff_rows, Diffable, RowEdit};
pub use renderer::{render_frame, render_stats_block};
pub use theme::Theme;
pub use viewmodel::{RowIdentity, VerticalsListItem, VerticalsUiState};
