//! Read path: batch cache building and the channel accessors.

use chrono::DateTime;
use chrono_tz::Tz;
use log::debug;

use crate::cache::CacheEntries;
use crate::channel::Channel;
use crate::convert;
use crate::error::Result;
use crate::host::ModelHost;
use crate::value::{AttributeValue, Handled};

impl super::Carbonator {
    /// Populates the cache from raw storage if it is not populated yet.
    ///
    /// One batch parses every classified field with the storage format in the
    /// storage timezone and re-expresses it in the display timezone. The
    /// batch is all or nothing: a single unparseable raw value fails the
    /// build and leaves the cache unpopulated.
    fn ensure_cache(&self, host: &dyn ModelHost) -> Result<()> {
        if self.cache.borrow().is_populated() {
            return Ok(());
        }

        let storage_tz = self.timezone(Channel::Storage)?;
        let display_tz = self.timezone(Channel::Display)?;

        let mut entries = CacheEntries::new();
        for (field, kind) in self.classified_fields() {
            // Empty raw text counts as absent
            let raw = host.raw_attribute(&field).filter(|value| !value.is_empty());
            let value = match raw {
                Some(text) => {
                    let pattern = self.format(Channel::Storage, kind);
                    let instant = convert::parse_in_zone(kind, &text, &pattern, storage_tz)?;
                    Some(instant.with_timezone(&display_tz))
                }
                None => None,
            };
            entries.insert(field, value);
        }

        debug!("built conversion cache for {} classified fields", entries.len());
        self.cache.borrow_mut().populate(entries);
        Ok(())
    }

    /// Reads a classified field through the given channel.
    ///
    /// Returns [`Handled::Passthrough`] for fields with a custom accessor and
    /// for unclassified fields, `Ok(Handled::Value(None))` for an absent raw
    /// value, and the channel-formatted text otherwise. The first classified
    /// read on an instance batch-builds the cache; later reads reuse it.
    ///
    /// # Errors
    ///
    /// Returns `CarbonatedError::FormatMismatch` when a raw value does not
    /// match the storage format during the batch build,
    /// `CarbonatedError::InvalidTimezone` or `CarbonatedError::InvalidFormat`
    /// for unusable resolved configuration, and
    /// `CarbonatedError::NonexistentLocalTime` for raw values inside a
    /// daylight-saving gap.
    pub fn channel_value(
        &self,
        host: &dyn ModelHost,
        field: &str,
        channel: Channel,
    ) -> Result<Handled<Option<String>>> {
        if host.has_custom_accessor(field) {
            return Ok(Handled::Passthrough);
        }
        let Some(kind) = self.classify(field) else {
            return Ok(Handled::Passthrough);
        };

        self.ensure_cache(host)?;
        let Some(instant) = self.cache.borrow().get(field).flatten() else {
            return Ok(Handled::Value(None));
        };

        let tz = self.timezone(channel)?;
        let pattern = self.format(channel, kind);
        let text = if channel == Channel::Display && self.env.localization {
            convert::format_localized_in_zone(instant, tz, &pattern, self.env.locale)?
        } else {
            convert::format_in_zone(instant, tz, &pattern)?
        };
        Ok(Handled::Value(Some(text)))
    }

    /// Reads a classified field formatted for the display channel.
    ///
    /// Uses locale-aware names when localization is enabled in the
    /// environment; the other channels always format unlocalized.
    pub fn display_value(
        &self,
        host: &dyn ModelHost,
        field: &str,
    ) -> Result<Handled<Option<String>>> {
        self.channel_value(host, field, Channel::Display)
    }

    /// Reads a classified field formatted for the JSON channel.
    pub fn json_value(&self, host: &dyn ModelHost, field: &str) -> Result<Handled<Option<String>>> {
        self.channel_value(host, field, Channel::Json)
    }

    /// Reads a classified field as its cached parsed value.
    ///
    /// The value carries the display timezone the cache was built or
    /// refreshed with. Custom-accessor and unclassified fields pass through,
    /// like every other read.
    pub fn carbon(
        &self,
        host: &dyn ModelHost,
        field: &str,
    ) -> Result<Handled<Option<DateTime<Tz>>>> {
        if host.has_custom_accessor(field) {
            return Ok(Handled::Passthrough);
        }
        if self.classify(field).is_none() {
            return Ok(Handled::Passthrough);
        }

        self.ensure_cache(host)?;
        Ok(Handled::Value(self.cache.borrow().get(field).flatten()))
    }

    /// Reads a classified field in this engine's read mode: parsed after
    /// [`super::Carbonator::with_carbon`], display-formatted otherwise.
    pub fn attribute(
        &self,
        host: &dyn ModelHost,
        field: &str,
    ) -> Result<Handled<Option<AttributeValue>>> {
        if self.return_parsed {
            Ok(self
                .carbon(host, field)?
                .map(|value| value.map(AttributeValue::Parsed)))
        } else {
            Ok(self
                .display_value(host, field)?
                .map(|value| value.map(AttributeValue::Formatted)))
        }
    }
}
