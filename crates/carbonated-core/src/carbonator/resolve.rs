//! Format and timezone resolution chains.
//!
//! Resolution itself never fails; every chain bottoms out in a literal
//! default. What a chain returns may still be invalid (an unknown zone name,
//! a bad pattern), and that surfaces from the conversion that first uses it.
//!
//! The chains, first match wins:
//!
//! - display format: override, kind default
//! - json format: override, *resolved* storage format
//! - storage format: override, kind default
//! - display timezone: override, timezone provider, user preference,
//!   resolved storage timezone
//! - json timezone: override, timezone provider, resolved storage timezone
//! - storage timezone: override, application timezone, UTC
//!
//! Empty-string user and application timezones count as unset, the same as
//! an absent value. Explicit overrides are taken verbatim.

use chrono_tz::Tz;

use crate::channel::Channel;
use crate::convert;
use crate::error::Result;
use crate::fields::FieldKind;
use crate::settings;

impl super::Carbonator {
    /// Resolves the format pattern for a channel and kind.
    pub fn format(&self, channel: Channel, kind: FieldKind) -> String {
        match channel {
            Channel::Display => self
                .overrides
                .format(Channel::Display, kind)
                .unwrap_or_else(|| settings::display_default(kind))
                .to_string(),
            Channel::Json => self
                .overrides
                .format(Channel::Json, kind)
                .map_or_else(|| self.format(Channel::Storage, kind), ToString::to_string),
            Channel::Storage => self
                .overrides
                .format(Channel::Storage, kind)
                .unwrap_or_else(|| settings::storage_default(kind))
                .to_string(),
        }
    }

    /// Resolves the timezone name for a channel, without validating it.
    pub fn timezone_name(&self, channel: Channel) -> String {
        match channel {
            Channel::Display => self
                .overrides
                .timezone(Channel::Display)
                .map(ToString::to_string)
                .or_else(|| self.provider.as_ref().and_then(|p| p.display_timezone()))
                .or_else(|| self.user_timezone())
                .unwrap_or_else(|| self.timezone_name(Channel::Storage)),
            Channel::Json => self
                .overrides
                .timezone(Channel::Json)
                .map(ToString::to_string)
                .or_else(|| self.provider.as_ref().and_then(|p| p.json_timezone()))
                .unwrap_or_else(|| self.timezone_name(Channel::Storage)),
            Channel::Storage => self
                .overrides
                .timezone(Channel::Storage)
                .map(ToString::to_string)
                .or_else(|| self.app_timezone())
                .unwrap_or_else(|| "UTC".to_string()),
        }
    }

    /// Resolves and validates the timezone for a channel.
    ///
    /// # Errors
    ///
    /// Returns `CarbonatedError::InvalidTimezone` when the resolved name is
    /// not a known IANA identifier.
    pub fn timezone(&self, channel: Channel) -> Result<Tz> {
        convert::parse_timezone(&self.timezone_name(channel))
    }

    fn user_timezone(&self) -> Option<String> {
        self.env
            .user_timezone
            .as_deref()
            .filter(|tz| !tz.is_empty())
            .map(ToString::to_string)
    }

    fn app_timezone(&self) -> Option<String> {
        self.env
            .app_timezone
            .as_deref()
            .filter(|tz| !tz.is_empty())
            .map(ToString::to_string)
    }
}
