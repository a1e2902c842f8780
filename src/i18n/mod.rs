//! Internationalization (i18n) for the kiosk screens.
//!
//! All display-language logic and localized strings live here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported locales and their metadata
//! - `locale`: The `Locale` enum and language-preference matching
//! - `strings`: Semantic text keys and the per-locale string tables
//!
//! # Example
//!
//! ```rust,ignore
//! use clinic_kiosk::i18n::{Locale, TextKey};
//!
//! let locale = Locale::from_preference(Some("mr-IN"));
//! let heading = locale.strings().get(TextKey::WelcomeHeading);
//! ```

mod locale;
mod registry;
mod strings;

pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::{LocaleStrings, TextKey, ENGLISH_STRINGS, MARATHI_STRINGS};
