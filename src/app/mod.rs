//! Application layer of the verticals step.
//!
//! Sits between the presentation surface (the binary and [`crate::ui`]) and
//! the fetch collaborators in [`crate::usecases`].
//!
//! # Architecture
//!
//! ```text
//! Surface Input → Events → Event Handler → State Machine → Snapshots → Surface
//!                               ↓                ↑
//!                            Actions        Collaborators
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Commands for the host emitted by the event handler
//! - [`handler`]: Event processing
//! - [`machine`]: Debounced suggestion state machine
//! - [`modes`]: Coarse screen modes
//! - [`state`]: Screen state and row derivation

pub mod actions;
pub mod handler;
pub mod machine;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use machine::{StateSubscription, VerticalsViewModel, DEFAULT_DEBOUNCE};
pub use modes::ScreenMode;
pub use state::ScreenState;
