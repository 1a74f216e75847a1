//! Loading/ready/error phases of a fetchable list.
//!
//! [`ListState`] keeps the previously displayed state while loading or after
//! an error so a surface can keep showing stale content under an indicator.
//! Values are replaced on every transition, never mutated in place.

/// Phase of a fetchable list, retaining prior data during loading and errors.
///
/// # Examples
///
/// ```
/// use siteflow::ListState;
///
/// let ready = ListState::Ready(vec![1, 2]);
/// let loading = ready.clone().into_loading();
/// assert!(loading.is_loading());
/// assert_eq!(loading.data(), &[1, 2]);
///
/// let failed = loading.into_error("timeout");
/// assert!(failed.is_error());
/// assert_eq!(failed.data(), &[1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListState<T> {
    /// Nothing has been requested yet.
    #[default]
    Initial,
    /// A fetch is pending; `previous` is what was shown before it started.
    Loading { previous: Box<ListState<T>> },
    /// The list is available.
    Ready(Vec<T>),
    /// The last fetch failed.
    Error {
        previous: Box<ListState<T>>,
        message: String,
    },
}

impl<T> ListState<T> {
    /// Items to display for this phase.
    ///
    /// `Loading` and `Error` resolve to the data of the state they replaced.
    #[must_use]
    pub fn data(&self) -> &[T] {
        match self {
            Self::Initial => &[],
            Self::Ready(items) => items,
            Self::Loading { previous } | Self::Error { previous, .. } => previous.data(),
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Error message, if this is an `Error` phase.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Moves into `Loading`, keeping `self` as the previous state.
    #[must_use]
    pub fn into_loading(self) -> Self {
        Self::Loading {
            previous: Box::new(self),
        }
    }

    /// Moves into `Error`, keeping `self` as the previous state.
    ///
    /// A `Loading` state is unwrapped first so the retained state is the one
    /// that was actually displayed before the fetch started.
    #[must_use]
    pub fn into_error(self, message: impl Into<String>) -> Self {
        let previous = match self {
            Self::Loading { previous } => previous,
            other => Box::new(other),
        };
        Self::Error {
            previous,
            message: message.into(),
        }
    }
}
