//! Write path: the mutator and the fresh-timestamp factory.

use chrono::DateTime;
use chrono_tz::Tz;

use crate::channel::Channel;
use crate::convert;
use crate::error::Result;
use crate::fields::FieldKind;
use crate::host::ModelHost;
use crate::value::{Incoming, Stored};

impl super::Carbonator {
    /// Writes a value to a field, normalizing classified values to the
    /// storage format and timezone.
    ///
    /// Dispatch order: a custom mutator on the host runs first
    /// ([`Stored::Mutated`]); unclassified fields defer to the host's default
    /// storage ([`Stored::Passthrough`]). For classified fields, text input
    /// is parsed with the display channel's format and timezone, or the JSON
    /// channel's when the environment marks the operation JSON-originated;
    /// already-parsed input skips parsing entirely. Empty text and
    /// [`Incoming::Null`] store an absent value.
    ///
    /// A populated cache gets the one affected entry refreshed in place; an
    /// unpopulated cache stays unpopulated. Everything fallible, the refresh
    /// conversion included, resolves before the raw write, so an error
    /// leaves the host and the cache both untouched.
    ///
    /// # Errors
    ///
    /// Returns `CarbonatedError::FormatMismatch` when non-empty text does not
    /// match the input channel's format, and `CarbonatedError::InvalidTimezone`
    /// or `CarbonatedError::InvalidFormat` for unusable resolved
    /// configuration. Malformed values are never coerced or stored.
    pub fn store(
        &self,
        host: &mut dyn ModelHost,
        field: &str,
        value: impl Into<Incoming>,
    ) -> Result<Stored> {
        let value = value.into();
        if host.has_custom_mutator(field) {
            host.invoke_custom_mutator(field, value);
            return Ok(Stored::Mutated);
        }
        let Some(kind) = self.classify(field) else {
            return Ok(Stored::Passthrough);
        };

        let parsed = self.parse_incoming(kind, value)?;
        let raw = self.storage_string(kind, parsed)?;

        // Resolve the refresh entry before the write reaches the host; raw
        // storage and a populated cache must never disagree.
        let refresh = if self.cache.borrow().is_populated() {
            let entry = match parsed {
                Some(instant) => Some(instant.with_timezone(&self.timezone(Channel::Display)?)),
                None => None,
            };
            Some(entry)
        } else {
            None
        };

        host.set_raw_attribute(field, raw.clone());
        if let Some(entry) = refresh {
            self.cache.borrow_mut().refresh(field, entry);
        }

        Ok(Stored::Converted(raw))
    }

    /// Converts a value to its storage-channel string without writing it.
    ///
    /// `None` means an absent value (null or empty input). This is the same
    /// conversion [`super::Carbonator::store`] applies before writing.
    pub fn storable(&self, kind: FieldKind, value: impl Into<Incoming>) -> Result<Option<String>> {
        let parsed = self.parse_incoming(kind, value.into())?;
        self.storage_string(kind, parsed)
    }

    /// Returns the current instant in the storage timezone.
    ///
    /// Feeding the result back through [`super::Carbonator::store`] takes the
    /// already-parsed path, so marker columns can be stamped without a
    /// round-trip through text.
    pub fn fresh_timestamp(&self) -> Result<DateTime<Tz>> {
        Ok(convert::now_in_zone(self.timezone(Channel::Storage)?))
    }

    fn parse_incoming(&self, kind: FieldKind, value: Incoming) -> Result<Option<DateTime<Tz>>> {
        match value {
            Incoming::Null => Ok(None),
            Incoming::Parsed(instant) => Ok(Some(instant)),
            Incoming::Text(text) => {
                if text.is_empty() {
                    return Ok(None);
                }
                let input = if self.env.json_request {
                    Channel::Json
                } else {
                    Channel::Display
                };
                let pattern = self.format(input, kind);
                let tz = self.timezone(input)?;
                convert::parse_in_zone(kind, &text, &pattern, tz).map(Some)
            }
        }
    }

    fn storage_string(&self, kind: FieldKind, parsed: Option<DateTime<Tz>>) -> Result<Option<String>> {
        match parsed {
            Some(instant) => {
                let tz = self.timezone(Channel::Storage)?;
                let pattern = self.format(Channel::Storage, kind);
                convert::format_in_zone(instant, tz, &pattern).map(Some)
            }
            None => Ok(None),
        }
    }
}
