#![allow(dead_code)]

use std::cell::Cell;
use std::collections::BTreeMap;

use carbonated_core::{Carbonator, CarbonatorBuilder, Environment, Incoming, ModelHost};
use serde_json::{Map, Value};

/// Work-order style host model with raw storage-formatted attributes and
/// configurable custom accessor/mutator dispatch.
pub struct ExampleModel {
    attributes: BTreeMap<String, Option<String>>,
    relations: Map<String, Value>,
    accessor_fields: Vec<String>,
    mutator_fields: Vec<String>,
    /// Fields the custom mutator was invoked for, in order
    pub mutated: Vec<String>,
    reads: Cell<usize>,
}

impl ExampleModel {
    pub fn new() -> Self {
        Self {
            attributes: BTreeMap::new(),
            relations: Map::new(),
            accessor_fields: Vec::new(),
            mutator_fields: Vec::new(),
            mutated: Vec::new(),
            reads: Cell::new(0),
        }
    }

    pub fn with(mut self, field: &str, value: &str) -> Self {
        self.attributes
            .insert(field.to_string(), Some(value.to_string()));
        self
    }

    pub fn with_absent(mut self, field: &str) -> Self {
        self.attributes.insert(field.to_string(), None);
        self
    }

    pub fn with_custom_accessor(mut self, field: &str) -> Self {
        self.accessor_fields.push(field.to_string());
        self
    }

    pub fn with_custom_mutator(mut self, field: &str) -> Self {
        self.mutator_fields.push(field.to_string());
        self
    }

    pub fn with_relation(mut self, key: &str, value: Value) -> Self {
        self.relations.insert(key.to_string(), value);
        self
    }

    /// Raw attribute peek that does not count as a host fetch.
    pub fn raw(&self, field: &str) -> Option<String> {
        self.attributes.get(field).cloned().flatten()
    }

    /// Number of raw attribute fetches served so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl ModelHost for ExampleModel {
    fn raw_attribute(&self, field: &str) -> Option<String> {
        self.reads.set(self.reads.get() + 1);
        self.attributes.get(field).cloned().flatten()
    }

    fn set_raw_attribute(&mut self, field: &str, value: Option<String>) {
        self.attributes.insert(field.to_string(), value);
    }

    fn has_custom_accessor(&self, field: &str) -> bool {
        self.accessor_fields.iter().any(|f| f == field)
    }

    fn has_custom_mutator(&self, field: &str) -> bool {
        self.mutator_fields.iter().any(|f| f == field)
    }

    fn invoke_custom_mutator(&mut self, field: &str, _value: Incoming) {
        self.mutated.push(field.to_string());
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

    fn serialize_relations(&self) -> Map<String, Value> {
        self.relations.clone()
    }
}

/// Helper function to create an engine declared like the work-order model:
/// one field per kind, display timezone from the user preference.
pub fn create_test_carbonator() -> Carbonator {
    CarbonatorBuilder::new()
        .with_timestamps(["completed_at"])
        .with_dates(["required_by"])
        .with_times(["pickup_time"])
        .with_environment(Environment::new().with_user_timezone("America/Toronto"))
        .build()
}

/// Helper function to create a model seeded with storage-formatted values.
pub fn create_test_model() -> ExampleModel {
    ExampleModel::new()
        .with("completed_at", "2017-01-01 00:00:00")
        .with("required_by", "2017-06-15")
        .with("pickup_time", "19:00:00")
        .with("title", "Pothole repair")
}
