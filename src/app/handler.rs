//! Event handling for the verticals step.
//!
//! Translates surface events into state machine calls and host actions.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the presentation surface
//! 2. [`handle_event`] pattern-matches the event type
//! 3. Transitions happen inside [`VerticalsViewModel`]
//! 4. Actions for the host are collected and returned
//!
//! New snapshots are not returned here; they reach the surface through the
//! view model's subscription.

use crate::app::machine::VerticalsViewModel;
use crate::app::modes::ScreenMode;
use crate::app::Action;
use crate::domain::error::Result;

/// Events raised by the presentation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search field text changed.
    QueryChanged(String),
    /// The clear affordance of the search field was pressed.
    ClearQuery,
    /// Retry on the full-screen header error.
    RetryHeader,
    /// Retry on the inline suggestion error row.
    RetrySuggestions,
    /// A suggestion row was clicked.
    SuggestionClicked {
        /// Id of the clicked suggestion.
        id: String,
    },
    /// The skip affordance was pressed.
    Skip,
    /// The screen is being dismissed.
    Close,
}

/// Processes an event and returns actions for the host.
///
/// # Parameters
///
/// * `vm` - The screen's state machine
/// * `event` - Event to process
///
/// # Returns
///
/// Actions to execute in order. Empty for events that only change the
/// screen state, for clicks on suggestions that are no longer displayed and
/// for skips while the skip affordance is hidden.
///
/// # Errors
///
/// Returns [`SiteflowError::NotReady`](crate::SiteflowError::NotReady) for
/// query edits before header info has loaded.
///
/// # Example
///
/// ```rust,no_run
/// use siteflow::app::{handle_event, Event, VerticalsViewModel};
///
/// # fn demo(vm: &VerticalsViewModel) -> siteflow::Result<()> {
/// let actions = handle_event(vm, &Event::QueryChanged("land".to_string()))?;
/// assert!(actions.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn handle_event(vm: &VerticalsViewModel, event: &Event) -> Result<Vec<Action>> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::QueryChanged(query) => {
            vm.on_query_changed(query.clone())?;
            Ok(vec![])
        }
        Event::ClearQuery => {
            vm.on_query_changed(String::new())?;
            Ok(vec![])
        }
        Event::RetryHeader => {
            vm.retry_header_fetch();
            Ok(vec![])
        }
        Event::RetrySuggestions => {
            vm.retry_suggestions()?;
            Ok(vec![])
        }
        Event::SuggestionClicked { id } => {
            let Some(state) = vm.current() else {
                return Ok(vec![]);
            };

            let selected = state
                .suggestions()
                .find(|(row_id, _)| *row_id == id.as_str())
                .map(|(row_id, title)| Action::VerticalSelected {
                    id: row_id.to_string(),
                    name: title.to_string(),
                });

            match selected {
                Some(action) => {
                    tracing::debug!(vertical_id = %id, "vertical selected");
                    Ok(vec![action])
                }
                None => {
                    tracing::debug!(vertical_id = %id, "clicked suggestion is not displayed");
                    Ok(vec![])
                }
            }
        }
        Event::Skip => {
            let visible = vm
                .current()
                .is_some_and(|state| state.mode == ScreenMode::Content && state.show_skip_button);
            if visible {
                Ok(vec![Action::SkipStep])
            } else {
                tracing::debug!("skip ignored, affordance hidden");
                Ok(vec![])
            }
        }
        Event::Close => {
            vm.close();
            Ok(vec![Action::Close])
        }
    }
}
