//! Value types flowing through the read and write paths.
//!
//! Host frameworks pass attribute values around untyped; this crate pins the
//! possibilities down into sum types. [`Incoming`] classifies mutator input
//! once at the top of the write path, [`AttributeValue`] is what the generic
//! accessor yields in its two read modes, and [`Handled`]/[`Stored`] tell the
//! caller whether the engine handled an access at all or deferred to the
//! host's own behavior.

use chrono::DateTime;
use chrono_tz::Tz;

/// A value arriving at the write path.
#[derive(Debug, Clone, PartialEq)]
pub enum Incoming {
    /// An already-parsed temporal value; stored without any string parsing
    Parsed(DateTime<Tz>),
    /// Raw text to be parsed with the input channel's format and timezone
    Text(String),
    /// Explicitly absent; stores as a null raw value
    Null,
}

impl From<DateTime<Tz>> for Incoming {
    fn from(value: DateTime<Tz>) -> Self {
        Incoming::Parsed(value)
    }
}

impl From<DateTime<chrono::Utc>> for Incoming {
    fn from(value: DateTime<chrono::Utc>) -> Self {
        Incoming::Parsed(value.with_timezone(&chrono_tz::UTC))
    }
}

impl From<String> for Incoming {
    fn from(value: String) -> Self {
        Incoming::Text(value)
    }
}

impl From<&str> for Incoming {
    fn from(value: &str) -> Self {
        Incoming::Text(value.to_string())
    }
}

impl<T> From<Option<T>> for Incoming
where
    T: Into<Incoming>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Incoming::Null,
        }
    }
}

/// What the generic accessor yields for a classified field.
///
/// The variant depends on the engine's read mode: formatted text normally,
/// the parsed value after [`crate::Carbonator::with_carbon`].
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Channel-formatted text
    Formatted(String),
    /// Parsed value in the display timezone
    Parsed(DateTime<Tz>),
}

impl AttributeValue {
    /// Returns the formatted text, or `None` for a parsed value.
    pub fn as_formatted(&self) -> Option<&str> {
        match self {
            AttributeValue::Formatted(text) => Some(text),
            AttributeValue::Parsed(_) => None,
        }
    }

    /// Returns the parsed value, or `None` for formatted text.
    pub fn as_parsed(&self) -> Option<&DateTime<Tz>> {
        match self {
            AttributeValue::Formatted(_) => None,
            AttributeValue::Parsed(value) => Some(value),
        }
    }
}

/// Outcome of a read access.
#[derive(Debug, Clone, PartialEq)]
pub enum Handled<T> {
    /// The engine converted the field
    Value(T),
    /// Custom accessor or unclassified field; the host's behavior applies
    Passthrough,
}

impl<T> Handled<T> {
    /// Returns `true` when the host's behavior applies instead.
    pub fn is_passthrough(&self) -> bool {
        matches!(self, Handled::Passthrough)
    }

    /// Converts into the converted value, discarding the passthrough case.
    pub fn into_value(self) -> Option<T> {
        match self {
            Handled::Value(value) => Some(value),
            Handled::Passthrough => None,
        }
    }

    /// Maps the converted value, leaving a passthrough untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Handled<U> {
        match self {
            Handled::Value(value) => Handled::Value(f(value)),
            Handled::Passthrough => Handled::Passthrough,
        }
    }
}

/// Outcome of a write access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stored {
    /// The engine normalized the value and wrote it to raw storage; carries
    /// the stored string (`None` for an absent value)
    Converted(Option<String>),
    /// The host's custom mutator ran instead
    Mutated,
    /// Unclassified field; the host's default storage applies
    Passthrough,
}

impl Stored {
    /// Returns `true` when the host's behavior applies instead.
    pub fn is_passthrough(&self) -> bool {
        matches!(self, Stored::Passthrough)
    }

    /// Returns the stored string for a converted write.
    pub fn converted(self) -> Option<Option<String>> {
        match self {
            Stored::Converted(raw) => Some(raw),
            _ => None,
        }
    }
}
