//! Error types for the attribute conversion library.
//!
//! Configuration resolution never produces an error: every lookup chain in
//! [`crate::Carbonator`] bottoms out in a literal default (UTC for timezones,
//! fixed strftime patterns for formats). Invalid *values* of resolved
//! configuration, such as an unknown IANA name or a malformed pattern, are
//! reported here at the first conversion that uses them. Access to a field
//! outside the classification lists is not an error either; the read and
//! write paths report it as a passthrough outcome instead.

use thiserror::Error;

/// Comprehensive error type for all conversion operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarbonatedError {
    /// An incoming value did not match the parse pattern for its channel
    #[error("Value '{value}' does not match format '{pattern}': {reason}")]
    FormatMismatch {
        value: String,
        pattern: String,
        reason: String,
    },
    /// A resolved timezone name is not a known IANA identifier
    #[error("Invalid timezone '{name}'")]
    InvalidTimezone { name: String },
    /// A resolved format pattern is not valid strftime syntax
    #[error("Invalid format pattern '{pattern}'")]
    InvalidFormat { pattern: String },
    /// A parsed local time falls inside a daylight-saving gap
    #[error("Local time '{value}' does not exist in timezone '{timezone}'")]
    NonexistentLocalTime { value: String, timezone: String },
}

impl CarbonatedError {
    /// Creates a format mismatch error from the failing value and pattern.
    pub fn format_mismatch(
        value: impl Into<String>,
        pattern: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::FormatMismatch {
            value: value.into(),
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid timezone error for a name that failed IANA lookup.
    pub fn invalid_timezone(name: impl Into<String>) -> Self {
        Self::InvalidTimezone { name: name.into() }
    }

    /// Creates an invalid format error for an unparseable strftime pattern.
    pub fn invalid_format(pattern: impl Into<String>) -> Self {
        Self::InvalidFormat {
            pattern: pattern.into(),
        }
    }
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, CarbonatedError>;
