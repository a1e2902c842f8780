//! Startup configuration loaded from the environment.

use crate::view::TransitionTiming;
use anyhow::{Context, Result};
use std::time::Duration;

/// Endpoint URL baked in at build time, if `REGISTRATION_ENDPOINT_URL` was set
/// when the crate was compiled.
pub const BUILD_ENDPOINT_URL: Option<&str> = option_env!("REGISTRATION_ENDPOINT_URL");

#[derive(Debug, Clone)]
pub struct Config {
    // Registration endpoint
    pub endpoint_url: String,

    // Display
    pub language_preference: Option<String>,
    pub transition: TransitionTiming,
}

impl Config {
    /// Load configuration once at startup.
    ///
    /// A deploy-time `REGISTRATION_ENDPOINT_URL` overrides the build-time one.
    pub fn from_env() -> Result<Self> {
        let endpoint_url = std::env::var("REGISTRATION_ENDPOINT_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| BUILD_ENDPOINT_URL.map(str::to_string))
            .context("REGISTRATION_ENDPOINT_URL not set")?;

        reqwest::Url::parse(&endpoint_url).with_context(|| {
            format!("REGISTRATION_ENDPOINT_URL is not a valid URL: {}", endpoint_url)
        })?;

        Ok(Self {
            endpoint_url,

            // First non-empty of the kiosk override and the usual POSIX locale variables
            language_preference: ["KIOSK_LANGUAGE", "LC_ALL", "LANG"]
                .iter()
                .filter_map(|name| std::env::var(name).ok())
                .find(|v| !v.trim().is_empty()),

            transition: TransitionTiming::new(
                Duration::from_millis(
                    std::env::var("KIOSK_FADE_MS")
                        .ok()
                        .and_then(|v| v.parse().ok())
                        .unwrap_or(500),
                ),
                Duration::from_millis(
                    std::env::var("KIOSK_FADE_IN_DELAY_MS")
                        .ok()
                        .and_then(|v| v.parse().ok())
                        .unwrap_or(50),
                ),
            ),
        })
    }
}
