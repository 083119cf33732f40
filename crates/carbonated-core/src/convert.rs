//! Checked parse and format primitives over chrono.
//!
//! Everything here validates its inputs before touching chrono's formatting
//! machinery: `DelayedFormat` panics on malformed patterns when rendered, so
//! patterns are scanned for error items first and reported as
//! [`CarbonatedError::InvalidFormat`] instead.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, LocalResult, Locale, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{CarbonatedError, Result};
use crate::fields::FieldKind;

/// Checks that a strftime pattern is well formed.
pub(crate) fn validate_pattern(pattern: &str) -> Result<()> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(CarbonatedError::invalid_format(pattern));
    }
    Ok(())
}

/// Looks up an IANA timezone by name.
pub(crate) fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| CarbonatedError::invalid_timezone(name))
}

/// Parses a raw value with the given pattern and resolves it in `tz`.
///
/// Date-kind values anchor at midnight and time-kind values anchor on the
/// epoch date, so every kind round-trips through the same timezone-aware
/// representation. Ambiguous local times (the daylight-saving fold) resolve
/// to the earliest offset; times inside a gap are an error.
pub(crate) fn parse_in_zone(
    kind: FieldKind,
    value: &str,
    pattern: &str,
    tz: Tz,
) -> Result<DateTime<Tz>> {
    validate_pattern(pattern)?;
    let naive = match kind {
        FieldKind::Timestamp => NaiveDateTime::parse_from_str(value, pattern)
            .map_err(|e| CarbonatedError::format_mismatch(value, pattern, e.to_string()))?,
        FieldKind::Date => NaiveDate::parse_from_str(value, pattern)
            .map_err(|e| CarbonatedError::format_mismatch(value, pattern, e.to_string()))?
            .and_time(NaiveTime::default()),
        FieldKind::Time => NaiveDate::default().and_time(
            NaiveTime::parse_from_str(value, pattern)
                .map_err(|e| CarbonatedError::format_mismatch(value, pattern, e.to_string()))?,
        ),
    };
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(instant) => Ok(instant),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(CarbonatedError::NonexistentLocalTime {
            value: value.to_string(),
            timezone: tz.name().to_string(),
        }),
    }
}

/// Re-expresses an instant in `tz` and formats it with the given pattern.
pub(crate) fn format_in_zone(instant: DateTime<Tz>, tz: Tz, pattern: &str) -> Result<String> {
    validate_pattern(pattern)?;
    Ok(instant.with_timezone(&tz).format(pattern).to_string())
}

/// Like [`format_in_zone`] with locale-aware month and weekday names.
pub(crate) fn format_localized_in_zone(
    instant: DateTime<Tz>,
    tz: Tz,
    pattern: &str,
    locale: Locale,
) -> Result<String> {
    validate_pattern(pattern)?;
    Ok(instant
        .with_timezone(&tz)
        .format_localized(pattern, locale)
        .to_string())
}

/// Returns the current instant expressed in `tz`.
pub(crate) fn now_in_zone(tz: Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(&tz)
}
