//! Registration form controller.
//!
//! Owns the active locale and the UI state, validates input, runs the single
//! request to the registration endpoint and drives the surface between the
//! form and success views.
//!
//! Submission is split in three so an event loop can keep handling input
//! while the request runs:
//!
//! ```rust,ignore
//! match controller.begin_submit(input) {
//!     SubmitStart::Started(submission) => {
//!         let result = submission.send().await;
//!         controller.finish_submit(result).await;
//!     }
//!     SubmitStart::Rejected(_) | SubmitStart::Ignored => {}
//! }
//! ```

use crate::config::Config;
use crate::i18n::{Locale, LocaleStrings, TextKey};
use crate::registration::{Diagnostic, RegistrationClient, RegistrationResult, SubmitError};
use crate::state::{UiEvent, UiState};
use crate::validation::{validate, RegistrationInput, ValidationError};
use crate::view::{Surface, TransitionTiming, View, OPAQUE, TRANSPARENT};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

/// Result of a user-initiated submit, after all errors were handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Registered(RegistrationResult),
    Invalid(ValidationError),
    Failed(Diagnostic),
    /// The form was not accepting submissions (request in flight or success screen)
    Ignored,
}

/// First half of a submission.
#[derive(Debug)]
pub enum SubmitStart {
    /// Input is valid and the controller is now `Submitting`
    Started(Submission),
    Rejected(ValidationError),
    Ignored,
}

/// A validated request, ready to send. Owns everything it needs so it can be
/// polled independently of the controller.
#[derive(Debug)]
pub struct Submission {
    client: RegistrationClient,
    input: RegistrationInput,
}

impl Submission {
    pub fn input(&self) -> &RegistrationInput {
        &self.input
    }

    pub async fn send(self) -> Result<RegistrationResult, SubmitError> {
        self.client.register(&self.input).await
    }
}

/// Localized notice for a failed request: the generic alert followed by the
/// server's own message, or the diagnostic category when there is none.
pub fn error_notice(strings: &LocaleStrings, err: &SubmitError) -> String {
    let detail = err.server_message().unwrap_or(match err.diagnostic() {
        Diagnostic::Network => strings.diagnostic_network,
        Diagnostic::MalformedResponse => strings.diagnostic_malformed,
        Diagnostic::Generic => strings.diagnostic_generic,
    });
    format!("{}\n{}", strings.alert_error, detail)
}

pub fn validation_notice(strings: &LocaleStrings, err: ValidationError) -> &'static str {
    match err {
        ValidationError::InvalidPhone => strings.alert_invalid_phone,
        ValidationError::InvalidAge => strings.alert_invalid_age,
    }
}

pub struct RegistrationFormController<S: Surface> {
    client: RegistrationClient,
    surface: S,
    locale: Locale,
    state: UiState,
    timing: TransitionTiming,
}

impl<S: Surface> RegistrationFormController<S> {
    pub fn new(client: RegistrationClient, surface: S, timing: TransitionTiming) -> Self {
        Self {
            client,
            surface,
            locale: Locale::default(),
            state: UiState::default(),
            timing,
        }
    }

    pub fn from_config(config: &Config, surface: S) -> Self {
        let client = RegistrationClient::new(reqwest::Client::new(), config.endpoint_url.clone());
        Self::new(client, surface, config.transition)
    }

    /// One-time startup: pick the locale from the reported language
    /// preference and apply it.
    pub fn initialize(&mut self, language_preference: Option<&str>) {
        let locale = Locale::from_preference(language_preference);
        info!(
            "Initial locale {} (preference: {:?})",
            locale.code(),
            language_preference
        );
        self.set_language(locale);
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Switch locale and rewrite every tagged text element.
    ///
    /// Tags without a translation keep their current text.
    pub fn set_language(&mut self, locale: Locale) {
        self.locale = locale;
        let strings = locale.strings();

        for key in self.surface.text_keys() {
            match strings.lookup(&key) {
                Some(text) => self.surface.set_text(&key, text),
                None => debug!("No {} translation for '{}'", locale.code(), key),
            }
        }

        if self.state == UiState::Submitting {
            self.surface
                .set_text(TextKey::ButtonGetToken.key(), strings.button_submitting);
        }
        self.surface.set_active_locale(locale);
    }

    /// Validate and start a submission.
    ///
    /// Only an idle form accepts input; the state moves to `Submitting`
    /// before the request exists, so a second call cannot start another one.
    pub fn begin_submit(&mut self, input: RegistrationInput) -> SubmitStart {
        if !self.state.is_idle() {
            debug!("Submit ignored in state {:?}", self.state);
            return SubmitStart::Ignored;
        }

        if let Err(err) = validate(&input) {
            warn!("Registration input rejected: {}", SubmitError::from(err));
            let strings = self.locale.strings();
            self.surface.alert(validation_notice(strings, err));
            return SubmitStart::Rejected(err);
        }

        if !self.apply(UiEvent::Submit) {
            return SubmitStart::Ignored;
        }
        self.set_loading(true);
        info!("Submitting registration to {}", self.client.endpoint_url());

        SubmitStart::Started(Submission {
            client: self.client.clone(),
            input,
        })
    }

    /// Second half of a submission: route the request's result to the
    /// success view or back to the idle form.
    pub async fn finish_submit(
        &mut self,
        result: Result<RegistrationResult, SubmitError>,
    ) -> SubmitOutcome {
        match result {
            Ok(registration) => {
                if !self.apply(UiEvent::Succeeded) {
                    return SubmitOutcome::Ignored;
                }
                info!(
                    "Registered patient {} with token {}",
                    registration.patient_id, registration.token
                );
                self.set_loading(false);
                self.display_result(&registration.patient_id, &registration.token.to_string())
                    .await;
                SubmitOutcome::Registered(registration)
            }
            Err(err) => {
                let diagnostic = err.diagnostic();
                if !self.apply(UiEvent::Failed(diagnostic)) {
                    return SubmitOutcome::Ignored;
                }
                error!("Submission error: {}", err);
                let notice = error_notice(self.locale.strings(), &err);
                self.surface.alert(&notice);
                self.set_loading(false);
                SubmitOutcome::Failed(diagnostic)
            }
        }
    }

    /// Validate, send and handle one submission end to end.
    pub async fn submit(&mut self, input: RegistrationInput) -> SubmitOutcome {
        match self.begin_submit(input) {
            SubmitStart::Started(submission) => {
                let result = submission.send().await;
                self.finish_submit(result).await
            }
            SubmitStart::Rejected(err) => SubmitOutcome::Invalid(err),
            SubmitStart::Ignored => SubmitOutcome::Ignored,
        }
    }

    /// Submit whatever is currently in the form fields.
    pub async fn submit_form(&mut self) -> SubmitOutcome {
        let input = self.surface.form_input();
        self.submit(input).await
    }

    /// Fill in the success view and cross-fade to it.
    pub async fn display_result(&mut self, patient_id: &str, token: &str) {
        self.surface.show_result(patient_id, token);
        self.cross_fade(View::Registration, View::Success).await;
    }

    /// Clear the form and return from the success view to it.
    ///
    /// Returns `false` (and changes nothing) outside the success view.
    pub async fn reset_view(&mut self) -> bool {
        if !self.apply(UiEvent::Reset) {
            return false;
        }
        self.surface.clear_form();
        self.cross_fade(View::Success, View::Registration).await;
        true
    }

    fn apply(&mut self, event: UiEvent) -> bool {
        match self.state.next(event) {
            Some(next) => {
                debug!("UI state {:?} -> {:?}", self.state, next);
                self.state = next;
                true
            }
            None => {
                debug!("Ignoring {:?} in state {:?}", event, self.state);
                false
            }
        }
    }

    fn set_loading(&mut self, loading: bool) {
        let strings = self.locale.strings();
        let label = if loading {
            strings.button_submitting
        } else {
            strings.button_get_token
        };
        self.surface.set_submit_enabled(!loading);
        self.surface.set_text(TextKey::ButtonGetToken.key(), label);
    }

    async fn cross_fade(&mut self, from: View, to: View) {
        self.surface.set_opacity(from, TRANSPARENT);
        pause(self.timing.fade_out).await;
        self.surface.set_hidden(from, true);
        self.surface.set_hidden(to, false);
        self.surface.set_opacity(to, TRANSPARENT);
        pause(self.timing.fade_in_delay).await;
        self.surface.set_opacity(to, OPAQUE);
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        sleep(delay).await;
    }
}
