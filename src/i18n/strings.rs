/// Semantic key carried by a tagged text element on the kiosk screen.
///
/// The string form (`key()`) is what the presentation surface stores on each
/// element; `from_key` is the only fallible step in a translation lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    WelcomeHeading,
    WelcomeSubheading,
    LabelName,
    LabelPhone,
    LabelAge,
    ButtonGetToken,
    ButtonSubmitting,
    SuccessHeading,
    SuccessSubheading,
    LabelPatientId,
    LabelToken,
    ButtonRegisterAnother,
    AlertError,
    AlertInvalidPhone,
    AlertInvalidAge,
    DiagnosticNetwork,
    DiagnosticMalformed,
    DiagnosticGeneric,
}

impl TextKey {
    pub const ALL: [TextKey; 18] = [
        TextKey::WelcomeHeading,
        TextKey::WelcomeSubheading,
        TextKey::LabelName,
        TextKey::LabelPhone,
        TextKey::LabelAge,
        TextKey::ButtonGetToken,
        TextKey::ButtonSubmitting,
        TextKey::SuccessHeading,
        TextKey::SuccessSubheading,
        TextKey::LabelPatientId,
        TextKey::LabelToken,
        TextKey::ButtonRegisterAnother,
        TextKey::AlertError,
        TextKey::AlertInvalidPhone,
        TextKey::AlertInvalidAge,
        TextKey::DiagnosticNetwork,
        TextKey::DiagnosticMalformed,
        TextKey::DiagnosticGeneric,
    ];

    /// The tag value stored on screen elements (e.g. "welcome_heading").
    pub fn key(&self) -> &'static str {
        match self {
            TextKey::WelcomeHeading => "welcome_heading",
            TextKey::WelcomeSubheading => "welcome_subheading",
            TextKey::LabelName => "label_name",
            TextKey::LabelPhone => "label_phone",
            TextKey::LabelAge => "label_age",
            TextKey::ButtonGetToken => "button_get_token",
            TextKey::ButtonSubmitting => "button_submitting",
            TextKey::SuccessHeading => "success_heading",
            TextKey::SuccessSubheading => "success_subheading",
            TextKey::LabelPatientId => "label_patient_id",
            TextKey::LabelToken => "label_token",
            TextKey::ButtonRegisterAnother => "button_register_another",
            TextKey::AlertError => "alert_error",
            TextKey::AlertInvalidPhone => "alert_invalid_phone",
            TextKey::AlertInvalidAge => "alert_invalid_age",
            TextKey::DiagnosticNetwork => "diagnostic_network",
            TextKey::DiagnosticMalformed => "diagnostic_malformed",
            TextKey::DiagnosticGeneric => "diagnostic_generic",
        }
    }

    /// Resolve a tag value back to its key. Unknown tags yield `None`.
    pub fn from_key(key: &str) -> Option<TextKey> {
        TextKey::ALL.iter().copied().find(|k| k.key() == key)
    }
}

/// All localized user-facing strings for a locale
#[derive(Debug, Clone)]
pub struct LocaleStrings {
    // ==================== Registration Form ====================
    pub welcome_heading: &'static str,
    pub welcome_subheading: &'static str,
    pub label_name: &'static str,
    pub label_phone: &'static str,
    pub label_age: &'static str,

    /// Idle label of the submit control
    pub button_get_token: &'static str,

    /// Label of the submit control while a request is in flight
    pub button_submitting: &'static str,

    // ==================== Success Screen ====================
    pub success_heading: &'static str,
    pub success_subheading: &'static str,
    pub label_patient_id: &'static str,
    pub label_token: &'static str,
    pub button_register_another: &'static str,

    // ==================== Alerts ====================
    /// Generic notice shown for every failed submission
    pub alert_error: &'static str,
    pub alert_invalid_phone: &'static str,
    pub alert_invalid_age: &'static str,

    // ==================== Diagnostics ====================
    /// Appended to `alert_error` when the endpoint could not be reached
    pub diagnostic_network: &'static str,

    /// Appended to `alert_error` when the response body was not understood
    pub diagnostic_malformed: &'static str,

    /// Appended to `alert_error` for everything else
    pub diagnostic_generic: &'static str,
}

impl LocaleStrings {
    /// Look up the text for a semantic key.
    pub fn get(&self, key: TextKey) -> &'static str {
        match key {
            TextKey::WelcomeHeading => self.welcome_heading,
            TextKey::WelcomeSubheading => self.welcome_subheading,
            TextKey::LabelName => self.label_name,
            TextKey::LabelPhone => self.label_phone,
            TextKey::LabelAge => self.label_age,
            TextKey::ButtonGetToken => self.button_get_token,
            TextKey::ButtonSubmitting => self.button_submitting,
            TextKey::SuccessHeading => self.success_heading,
            TextKey::SuccessSubheading => self.success_subheading,
            TextKey::LabelPatientId => self.label_patient_id,
            TextKey::LabelToken => self.label_token,
            TextKey::ButtonRegisterAnother => self.button_register_another,
            TextKey::AlertError => self.alert_error,
            TextKey::AlertInvalidPhone => self.alert_invalid_phone,
            TextKey::AlertInvalidAge => self.alert_invalid_age,
            TextKey::DiagnosticNetwork => self.diagnostic_network,
            TextKey::DiagnosticMalformed => self.diagnostic_malformed,
            TextKey::DiagnosticGeneric => self.diagnostic_generic,
        }
    }

    /// Look up the text for a raw tag value.
    ///
    /// Returns `None` for unknown tags and for empty translations, so callers
    /// leave the element's current text in place.
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        TextKey::from_key(key)
            .map(|k| self.get(k))
            .filter(|text| !text.is_empty())
    }
}

// ==================== English Strings ====================

/// English strings (default locale)
pub static ENGLISH_STRINGS: LocaleStrings = LocaleStrings {
    welcome_heading: "Welcome to the Clinic",
    welcome_subheading: "Please fill this form to get your token.",
    label_name: "Full Name",
    label_phone: "Phone Number",
    label_age: "Age",
    button_get_token: "Get My Token",
    button_submitting: "Submitting...",

    success_heading: "Registration Successful!",
    success_subheading: "Please show this screen at the reception.",
    label_patient_id: "Patient ID:",
    label_token: "Today's Token:",
    button_register_another: "Register Another Patient",

    alert_error: "An error occurred. Please try again.",
    alert_invalid_phone: "Please enter a valid phone number.",
    alert_invalid_age: "Please enter a valid age between 1 and 120.",

    diagnostic_network: "Could not reach the registration service. Check the network connection.",
    diagnostic_malformed: "The registration service sent an unexpected response.",
    diagnostic_generic: "The registration could not be completed.",
};

// ==================== Marathi Strings ====================

/// Marathi strings
pub static MARATHI_STRINGS: LocaleStrings = LocaleStrings {
    welcome_heading: "क्लिनिकमध्ये आपले स्वागत आहे",
    welcome_subheading: "कृपया तुमचा टोकन मिळवण्यासाठी हा फॉर्म भरा.",
    label_name: "पूर्ण नाव",
    label_phone: "फोन नंबर",
    label_age: "वय",
    button_get_token: "माझे टोकन मिळवा",
    button_submitting: "सबमिट करत आहे...",

    success_heading: "नोंदणी यशस्वी झाली!",
    success_subheading: "कृपया ही स्क्रीन रिसेप्शनला दाखवा.",
    label_patient_id: "रुग्ण आयडी:",
    label_token: "आजचे टोकन:",
    button_register_another: "दुसऱ्या रुग्णाची नोंदणी करा",

    alert_error: "एक त्रुटी आली. कृपया पुन्हा प्रयत्न करा.",
    alert_invalid_phone: "कृपया वैध फोन नंबर प्रविष्ट करा.",
    alert_invalid_age: "कृपया १ ते १२० दरम्यान वैध वय प्रविष्ट करा.",

    diagnostic_network: "नोंदणी सेवेशी संपर्क होऊ शकला नाही. नेटवर्क कनेक्शन तपासा.",
    diagnostic_malformed: "नोंदणी सेवेकडून अनपेक्षित प्रतिसाद मिळाला.",
    diagnostic_generic: "नोंदणी पूर्ण होऊ शकली नाही.",
};
