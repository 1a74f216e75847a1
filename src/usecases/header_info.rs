//! Header info fetch collaborator.

use crate::domain::{FetchHeaderInfoError, HeaderInfo};
use futures_util::future::BoxFuture;

/// Fetches the copy shown at the top of the verticals screen.
///
/// Called at most once per successful screen load; retries go through the
/// state machine.
pub trait FetchVerticalsHeaderInfo: Send + Sync {
    fn fetch_header_info(&self) -> BoxFuture<'_, Result<HeaderInfo, FetchHeaderInfoError>>;
}
