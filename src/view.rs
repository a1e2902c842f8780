//! Presentation surface for the kiosk.
//!
//! The controller only talks to a [`Surface`]: it rewrites the text of tagged
//! elements and flips a handful of visibility/enabled flags, never the layout
//! itself. [`KioskScreen`] is an in-memory surface that the terminal binary
//! renders after every event.

use crate::i18n::{Locale, LocaleRegistry, TextKey, ENGLISH_STRINGS};
use crate::validation::RegistrationInput;
use std::time::Duration;

/// Delays bounding the cross-fade between views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTiming {
    /// Fade-out of the old view before it is hidden
    pub fade_out: Duration,
    /// Pause between showing the new view and fading it in
    pub fade_in_delay: Duration,
}

impl TransitionTiming {
    pub fn new(fade_out: Duration, fade_in_delay: Duration) -> Self {
        Self {
            fade_out,
            fade_in_delay,
        }
    }

    /// No delays at all.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self::new(Duration::from_millis(500), Duration::from_millis(50))
    }
}

/// The two screens of the kiosk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Registration,
    Success,
}

pub const OPAQUE: f32 = 1.0;
pub const TRANSPARENT: f32 = 0.0;

pub trait Surface {
    /// Translation keys of every tagged element, in document order.
    fn text_keys(&self) -> Vec<String>;

    /// Replace the text of every element tagged with `key`.
    fn set_text(&mut self, key: &str, text: &str);

    /// Highlight the toggle for the active locale.
    fn set_active_locale(&mut self, locale: Locale);

    fn set_submit_enabled(&mut self, enabled: bool);

    /// Current field values, trimmed.
    fn form_input(&self) -> RegistrationInput;

    fn clear_form(&mut self);

    fn show_result(&mut self, patient_id: &str, token: &str);

    fn set_hidden(&mut self, view: View, hidden: bool);

    fn set_opacity(&mut self, view: View, opacity: f32);

    /// Blocking notice shown to the user.
    fn alert(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub view: View,
    pub key: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewStyle {
    pub hidden: bool,
    pub opacity: f32,
}

/// Form field on the registration view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Age,
}

/// In-memory kiosk page.
#[derive(Debug, Clone)]
pub struct KioskScreen {
    elements: Vec<TextElement>,
    name: String,
    phone: String,
    age: String,
    submit_enabled: bool,
    patient_id: String,
    token: String,
    active_locale: Locale,
    registration_style: ViewStyle,
    success_style: ViewStyle,
    alerts: Vec<String>,
}

impl KioskScreen {
    /// The stock kiosk layout, with English text in place.
    pub fn new() -> Self {
        let registration = [
            TextKey::WelcomeHeading,
            TextKey::WelcomeSubheading,
            TextKey::LabelName,
            TextKey::LabelPhone,
            TextKey::LabelAge,
            TextKey::ButtonGetToken,
        ];
        let success = [
            TextKey::SuccessHeading,
            TextKey::SuccessSubheading,
            TextKey::LabelPatientId,
            TextKey::LabelToken,
            TextKey::ButtonRegisterAnother,
        ];

        let elements = registration
            .iter()
            .map(|k| (View::Registration, *k))
            .chain(success.iter().map(|k| (View::Success, *k)))
            .map(|(view, key)| TextElement {
                view,
                key: key.key().to_string(),
                text: ENGLISH_STRINGS.get(key).to_string(),
            })
            .collect();

        Self {
            elements,
            name: String::new(),
            phone: String::new(),
            age: String::new(),
            submit_enabled: true,
            patient_id: String::new(),
            token: String::new(),
            active_locale: Locale::En,
            registration_style: ViewStyle {
                hidden: false,
                opacity: OPAQUE,
            },
            success_style: ViewStyle {
                hidden: true,
                opacity: TRANSPARENT,
            },
            alerts: Vec::new(),
        }
    }

    /// Append a tagged element to a view.
    pub fn with_element(mut self, view: View, key: &str, text: &str) -> Self {
        self.elements.push(TextElement {
            view,
            key: key.to_string(),
            text: text.to_string(),
        });
        self
    }

    pub fn set_field(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Age => &mut self.age,
        };
        *slot = value.to_string();
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Age => &self.age,
        }
    }

    /// Text of the first element tagged with `key`.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.elements
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.text.as_str())
    }

    pub fn elements(&self) -> &[TextElement] {
        &self.elements
    }

    pub fn submit_label(&self) -> Option<&str> {
        self.text(TextKey::ButtonGetToken.key())
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn active_locale(&self) -> Locale {
        self.active_locale
    }

    pub fn style(&self, view: View) -> ViewStyle {
        match view {
            View::Registration => self.registration_style,
            View::Success => self.success_style,
        }
    }

    /// The view currently shown: visible and fully faded in.
    pub fn visible_view(&self) -> Option<View> {
        [View::Registration, View::Success]
            .into_iter()
            .find(|v| !self.style(*v).hidden && self.style(*v).opacity > TRANSPARENT)
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Drain alerts raised since the last call.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    fn style_mut(&mut self, view: View) -> &mut ViewStyle {
        match view {
            View::Registration => &mut self.registration_style,
            View::Success => &mut self.success_style,
        }
    }

    fn view_text(&self, view: View, key: TextKey) -> &str {
        self.elements
            .iter()
            .find(|e| e.view == view && e.key == key.key())
            .map(|e| e.text.as_str())
            .unwrap_or_default()
    }

    /// Plain-text rendering of the visible view.
    pub fn render(&self) -> String {
        let toggle = LocaleRegistry::all()
            .iter()
            .map(|config| {
                if config.locale == self.active_locale {
                    format!("*{}*", config.native_name)
                } else {
                    config.native_name.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" | ");

        let mut lines = vec![format!("[ {} ]", toggle), String::new()];

        match self.visible_view() {
            Some(View::Registration) => {
                let v = View::Registration;
                lines.push(self.view_text(v, TextKey::WelcomeHeading).to_string());
                lines.push(self.view_text(v, TextKey::WelcomeSubheading).to_string());
                lines.push(String::new());
                let label = self.view_text(v, TextKey::LabelName);
                lines.push(format!("  {}: {}", label, self.name));
                let label = self.view_text(v, TextKey::LabelPhone);
                lines.push(format!("  {}: {}", label, self.phone));
                let label = self.view_text(v, TextKey::LabelAge);
                lines.push(format!("  {}: {}", label, self.age));
                lines.push(String::new());
                let label = self.view_text(v, TextKey::ButtonGetToken);
                if self.submit_enabled {
                    lines.push(format!("  [ {} ]", label));
                } else {
                    lines.push(format!("  ( {} )", label));
                }
            }
            Some(View::Success) => {
                let v = View::Success;
                lines.push(self.view_text(v, TextKey::SuccessHeading).to_string());
                lines.push(self.view_text(v, TextKey::SuccessSubheading).to_string());
                lines.push(String::new());
                let label = self.view_text(v, TextKey::LabelPatientId);
                lines.push(format!("  {} {}", label, self.patient_id));
                let label = self.view_text(v, TextKey::LabelToken);
                lines.push(format!("  {} {}", label, self.token));
                lines.push(String::new());
                let label = self.view_text(v, TextKey::ButtonRegisterAnother);
                lines.push(format!("  [ {} ]", label));
            }
            None => lines.push("...".to_string()),
        }

        lines.join("\n")
    }
}

impl Default for KioskScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for KioskScreen {
    fn text_keys(&self) -> Vec<String> {
        self.elements.iter().map(|e| e.key.clone()).collect()
    }

    fn set_text(&mut self, key: &str, text: &str) {
        for element in self.elements.iter_mut().filter(|e| e.key == key) {
            element.text = text.to_string();
        }
    }

    fn set_active_locale(&mut self, locale: Locale) {
        self.active_locale = locale;
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn form_input(&self) -> RegistrationInput {
        RegistrationInput::new(&self.name, &self.phone, &self.age)
    }

    fn clear_form(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.age.clear();
    }

    fn show_result(&mut self, patient_id: &str, token: &str) {
        self.patient_id = patient_id.to_string();
        self.token = token.to_string();
    }

    fn set_hidden(&mut self, view: View, hidden: bool) {
        self.style_mut(view).hidden = hidden;
    }

    fn set_opacity(&mut self, view: View, opacity: f32) {
        self.style_mut(view).opacity = opacity;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
