//! Vertical and header info domain models.
//!
//! A vertical is a site-category tag offered as an onboarding suggestion while
//! the user types. Header info is the static copy shown above the search
//! field once the screen has loaded.

use serde::{Deserialize, Serialize};

/// A site category suggested to the user.
///
/// Identity for diffing is `id`; content equality is full-field equality.
///
/// # Examples
///
/// ```
/// use siteflow::Vertical;
///
/// let vertical = Vertical::new("p13v1", "Food & Drink");
/// assert_eq!(vertical.id, "p13v1");
/// assert_eq!(vertical.name, "Food & Drink");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertical {
    pub id: String,
    pub name: String,
}

impl Vertical {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Copy shown at the top of the verticals screen.
///
/// Fetched once per screen lifetime; once obtained it is never refetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderInfo {
    /// Large title of the step.
    pub title: String,
    /// Explanatory line under the title.
    pub subtitle: String,
    /// Placeholder shown in the empty search field.
    pub input_hint: String,
}

impl HeaderInfo {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        input_hint: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            input_hint: input_hint.into(),
        }
    }
}
