//! Per-model format and timezone overrides.
//!
//! Twelve independent nullable settings: a format for every channel and kind
//! pair, plus one timezone per channel. `None` means "defer to the resolution
//! chain" described in [`crate::Carbonator`]; overrides are plain data and are
//! not validated until the first conversion that uses them.

use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::fields::FieldKind;

/// Default display pattern for timestamp fields (`Dec 31, 2016 7:00pm`).
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%b %d, %Y %-I:%M%P";
/// Default display pattern for date fields (`Dec 31, 2016`).
pub const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y";
/// Default display pattern for time fields (`7:00pm`).
pub const DISPLAY_TIME_FORMAT: &str = "%-I:%M%P";
/// Default storage pattern for timestamp fields (`2016-12-31 19:00:00`).
pub const STORAGE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Default storage pattern for date fields (`2016-12-31`).
pub const STORAGE_DATE_FORMAT: &str = "%Y-%m-%d";
/// Default storage pattern for time fields (`19:00:00`).
pub const STORAGE_TIME_FORMAT: &str = "%H:%M:%S";

/// Returns the built-in display pattern for a kind.
pub fn display_default(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Timestamp => DISPLAY_TIMESTAMP_FORMAT,
        FieldKind::Date => DISPLAY_DATE_FORMAT,
        FieldKind::Time => DISPLAY_TIME_FORMAT,
    }
}

/// Returns the built-in storage pattern for a kind.
pub fn storage_default(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Timestamp => STORAGE_TIMESTAMP_FORMAT,
        FieldKind::Date => STORAGE_DATE_FORMAT,
        FieldKind::Time => STORAGE_TIME_FORMAT,
    }
}

/// Optional per-model overrides for formats and timezones.
///
/// There is no JSON format default of its own: a `None` JSON format falls
/// through to the *resolved* storage format for the kind, so overriding the
/// storage format changes the JSON output too unless the JSON slot is also
/// set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Overrides {
    /// Display pattern for timestamp fields
    pub display_timestamp_format: Option<String>,
    /// Display pattern for date fields
    pub display_date_format: Option<String>,
    /// Display pattern for time fields
    pub display_time_format: Option<String>,
    /// Timezone name for display output
    pub display_timezone: Option<String>,

    /// JSON pattern for timestamp fields
    pub json_timestamp_format: Option<String>,
    /// JSON pattern for date fields
    pub json_date_format: Option<String>,
    /// JSON pattern for time fields
    pub json_time_format: Option<String>,
    /// Timezone name for JSON output
    pub json_timezone: Option<String>,

    /// Storage pattern for timestamp fields
    pub storage_timestamp_format: Option<String>,
    /// Storage pattern for date fields
    pub storage_date_format: Option<String>,
    /// Storage pattern for time fields
    pub storage_time_format: Option<String>,
    /// Timezone name for the persisted form
    pub storage_timezone: Option<String>,
}

impl Overrides {
    /// Returns the override for a channel and kind pair, if set.
    pub fn format(&self, channel: Channel, kind: FieldKind) -> Option<&str> {
        let slot = match (channel, kind) {
            (Channel::Display, FieldKind::Timestamp) => &self.display_timestamp_format,
            (Channel::Display, FieldKind::Date) => &self.display_date_format,
            (Channel::Display, FieldKind::Time) => &self.display_time_format,
            (Channel::Json, FieldKind::Timestamp) => &self.json_timestamp_format,
            (Channel::Json, FieldKind::Date) => &self.json_date_format,
            (Channel::Json, FieldKind::Time) => &self.json_time_format,
            (Channel::Storage, FieldKind::Timestamp) => &self.storage_timestamp_format,
            (Channel::Storage, FieldKind::Date) => &self.storage_date_format,
            (Channel::Storage, FieldKind::Time) => &self.storage_time_format,
        };
        slot.as_deref()
    }

    /// Returns the timezone override for a channel, if set.
    pub fn timezone(&self, channel: Channel) -> Option<&str> {
        match channel {
            Channel::Display => self.display_timezone.as_deref(),
            Channel::Json => self.json_timezone.as_deref(),
            Channel::Storage => self.storage_timezone.as_deref(),
        }
    }
}
