//! Vertical suggestions fetch collaborator.

use crate::domain::{FetchVerticalsError, Vertical};
use futures_util::future::BoxFuture;

/// Fetches vertical suggestions for a search query.
///
/// Implementations return suggestions in display order. The state machine
/// may drop the returned future at any await point when the query changes.
pub trait FetchVerticals: Send + Sync {
    fn fetch_verticals<'a>(
        &'a self,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Vertical>, FetchVerticalsError>>;
}
