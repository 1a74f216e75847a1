//! Domain layer for siteflow.
//!
//! Core types of the verticals step and shared error types, independent of
//! the state machine, the collaborators and the presentation surface.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`list_state`]: Loading/ready/error phases of a fetchable list
//! - [`message`]: Resource keys for user-facing copy
//! - [`vertical`]: Vertical suggestion and header info models

pub mod error;
pub mod list_state;
pub mod message;
pub mod vertical;

pub use error::{
    ErrorKind, FetchHeaderInfoError, FetchVerticalsError, Result, SiteflowError, StatsError,
};
pub use list_state::ListState;
pub use message::MessageKey;
pub use vertical::{HeaderInfo, Vertical};
