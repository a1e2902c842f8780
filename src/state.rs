//! UI state machine for the registration screen.
//!
//! ```text
//! Form / Error --Submit--> Submitting --Succeeded--> Success --Reset--> Form
//!                          Submitting --Failed-----> Error
//! ```
//!
//! `Form` and `Error` are both idle: the form is visible and the submit
//! control is enabled. Any event not listed above is rejected.

use crate::registration::Diagnostic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Form,
    Submitting,
    Success,
    /// Form shown again after a failed request
    Error(Diagnostic),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// A validated input is about to be sent
    Submit,
    Succeeded,
    Failed(Diagnostic),
    Reset,
}

impl UiState {
    /// The state reached by applying `event`, or `None` if the event is not
    /// allowed here.
    pub fn next(self, event: UiEvent) -> Option<UiState> {
        match (self, event) {
            (UiState::Form | UiState::Error(_), UiEvent::Submit) => Some(UiState::Submitting),
            (UiState::Submitting, UiEvent::Succeeded) => Some(UiState::Success),
            (UiState::Submitting, UiEvent::Failed(diagnostic)) => Some(UiState::Error(diagnostic)),
            (UiState::Success, UiEvent::Reset) => Some(UiState::Form),
            _ => None,
        }
    }

    /// Whether the form accepts a new submission.
    pub fn is_idle(&self) -> bool {
        matches!(self, UiState::Form | UiState::Error(_))
    }

    pub fn submit_enabled(&self) -> bool {
        !matches!(self, UiState::Submitting)
    }
}
