//! Clinic kiosk patient registration.
//!
//! A bilingual (English/Marathi) registration form that validates name,
//! phone and age, posts them to a remote registration endpoint and shows the
//! returned patient ID and queue token.

pub mod config;
pub mod controller;
pub mod i18n;
pub mod registration;
pub mod state;
pub mod validation;
pub mod view;
