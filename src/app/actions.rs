//! Actions representing side effects to be executed by the host.
//!
//! The event handler returns a `Vec<Action>` after processing each event.
//! Actions are what the verticals step reports outward: the screen itself
//! never navigates, it asks its host to.
//!
//! # Example
//!
//! ```rust
//! use siteflow::app::Action;
//!
//! let actions = vec![Action::VerticalSelected {
//!     id: "p1v1".to_string(),
//!     name: "Landscaping".to_string(),
//! }];
//! assert_eq!(actions.len(), 1);
//! ```

/// Commands for the host of the verticals step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The user picked a suggested vertical.
    VerticalSelected {
        /// Vertical id.
        id: String,
        /// Display name as shown in the suggestion row.
        name: String,
    },

    /// The user skipped the step without picking a vertical.
    SkipStep,

    /// The screen was dismissed.
    Close,
}
