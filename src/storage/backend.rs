//! Catalog backend abstraction.
//!
//! The [`Catalog`] trait is what the catalog-backed collaborators in
//! [`crate::usecases::catalog`] read from. Each method maps to one
//! collaborator; there is no generic query surface.

use crate::domain::{HeaderInfo, Vertical};
use crate::stats::ViewsModel;

/// Read-only source of header copy, verticals and post/page view counts.
///
/// # Implementations
///
/// - [`JsonCatalog`](crate::storage::JsonCatalog): versioned JSON file
///
/// # Examples
///
/// ```no_run
/// use siteflow::storage::{Catalog, JsonCatalog};
///
/// let catalog = JsonCatalog::open("/tmp/catalog.json")?;
/// let verticals = catalog.verticals();
/// # Ok::<(), siteflow::SiteflowError>(())
/// ```
pub trait Catalog: Send + Sync {
    /// Header copy, or `None` when the catalog carries none.
    fn header_info(&self) -> Option<HeaderInfo>;

    /// Every vertical, in catalog order.
    fn verticals(&self) -> Vec<Vertical>;

    /// Every post/page view entry, in catalog order (most viewed first by
    /// convention).
    fn posts_and_pages(&self) -> Vec<ViewsModel>;
}
