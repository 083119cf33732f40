//! Host model interface consumed by the conversion engine.
//!
//! The engine never owns model state. Everything it needs from the host
//! framework's persistent objects (raw attribute access, custom
//! accessor/mutator dispatch, default serialization) comes through
//! [`ModelHost`]. [`AttributeBag`] is a minimal in-memory implementation for
//! hosts without a framework of their own, and for examples and tests.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::value::Incoming;

/// Interface to a host model instance.
///
/// Raw attributes are the channel-agnostic strings the host persists; the
/// engine reads and writes them as text and treats an absent value and an
/// empty string alike.
pub trait ModelHost {
    /// Returns the raw stored value of an attribute.
    fn raw_attribute(&self, field: &str) -> Option<String>;

    /// Writes the raw stored value of an attribute.
    fn set_raw_attribute(&mut self, field: &str, value: Option<String>);

    /// Whether the host defines its own accessor for this attribute.
    ///
    /// Custom accessors win over conversion: the read path reports
    /// [`crate::Handled::Passthrough`] and the serialization hook leaves the
    /// attribute to the host.
    fn has_custom_accessor(&self, _field: &str) -> bool {
        false
    }

    /// Whether the host defines its own mutator for this attribute.
    fn has_custom_mutator(&self, _field: &str) -> bool {
        false
    }

    /// Runs the host's own mutator for this attribute.
    ///
    /// Only called when [`Self::has_custom_mutator`] returned `true`.
    fn invoke_custom_mutator(&mut self, _field: &str, _value: Incoming) {}

    /// The host's default attribute serialization, before conversion.
    fn serialize_attributes(&self) -> Map<String, Value>;

    /// The host's serialized relations, merged after attribute conversion.
    fn serialize_relations(&self) -> Map<String, Value> {
        Map::new()
    }
}

/// Plain in-memory attribute store implementing [`ModelHost`].
///
/// Attributes serialize in name order, as strings or nulls.
#[derive(Debug, Clone, Default)]
pub struct AttributeBag {
    attributes: BTreeMap<String, Option<String>>,
}

impl AttributeBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute to a string value, chainable for setup.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(field.into(), Some(value.into()));
        self
    }

    /// Sets an attribute to an absent value, chainable for setup.
    pub fn with_null(mut self, field: impl Into<String>) -> Self {
        self.attributes.insert(field.into(), None);
        self
    }

    /// Returns `true` when the attribute exists, even with an absent value.
    pub fn contains(&self, field: &str) -> bool {
        self.attributes.contains_key(field)
    }
}

impl ModelHost for AttributeBag {
    fn raw_attribute(&self, field: &str) -> Option<String> {
        self.attributes.get(field).cloned().flatten()
    }

    fn set_raw_attribute(&mut self, field: &str, value: Option<String>) {
        self.attributes.insert(field.to_string(), value);
    }

    fn serialize_attributes(&self) -> Map<String, Value> {
        self.attributes
            .iter()
            .map(|(field, value)| {
                let json = match value {
                    Some(text) => Value::String(text.clone()),
                    None => Value::Null,
                };
                (field.clone(), json)
            })
            .collect()
    }
}
