//! Ambient configuration injected into the conversion engine.
//!
//! The engine reads no process-wide state. Everything the host application
//! would normally keep in global configuration or session state (application
//! timezone, the signed-in user's timezone preference, whether the current
//! operation originated from a JSON request, localization) is carried by an
//! [`Environment`] value handed to the builder, immutable for the lifetime of
//! an operation.

use chrono::Locale;

/// Snapshot of host-application state consulted during resolution.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Application-wide timezone name; the storage chain falls back to this
    /// before UTC
    pub app_timezone: Option<String>,
    /// Signed-in user's timezone preference; the display chain falls back to
    /// this before the storage timezone
    pub user_timezone: Option<String>,
    /// Whether incoming text values originate from a JSON request and should
    /// be parsed with the JSON channel's format and timezone
    pub json_request: bool,
    /// Whether display output uses locale-aware month and weekday names
    pub localization: bool,
    /// Locale used when `localization` is on
    pub locale: Locale,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            app_timezone: None,
            user_timezone: None,
            json_request: false,
            localization: false,
            locale: Locale::POSIX,
        }
    }
}

impl Environment {
    /// Creates an environment with no timezones set and localization off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the application-wide timezone name.
    pub fn with_app_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.app_timezone = Some(timezone.into());
        self
    }

    /// Sets the signed-in user's timezone preference.
    pub fn with_user_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.user_timezone = Some(timezone.into());
        self
    }

    /// Marks incoming text values as JSON-originated.
    pub fn with_json_request(mut self, json_request: bool) -> Self {
        self.json_request = json_request;
        self
    }

    /// Turns on locale-aware display formatting with the given locale.
    pub fn with_localization(mut self, locale: Locale) -> Self {
        self.localization = true;
        self.locale = locale;
        self
    }
}

/// Optional per-model timezone capability.
///
/// A model type that wants to pick its own display or JSON timezone (say,
/// per-tenant zones looked up from a related record) installs one of these on
/// the builder. A provider answer takes precedence over the user preference
/// and the storage fallback, but never over an explicit override in
/// [`crate::Overrides`]. Returning `None` defers to the rest of the chain.
pub trait TimezoneProvider {
    /// Timezone name for the display channel, if this model supplies one.
    fn display_timezone(&self) -> Option<String> {
        None
    }

    /// Timezone name for the JSON channel, if this model supplies one.
    fn json_timezone(&self) -> Option<String> {
        None
    }
}
