//! Full-object serialization hook.

use serde_json::{Map, Value};

use crate::channel::Channel;
use crate::error::Result;
use crate::host::ModelHost;
use crate::value::Handled;

impl super::Carbonator {
    /// Serializes the host with classified fields rewritten for the JSON
    /// channel.
    ///
    /// Starts from the host's default attribute serialization, replaces the
    /// value of every classified field present in it with the JSON-channel
    /// string (null for absent values), and merges the host's serialized
    /// relations last. Fields with a custom accessor are left exactly as the
    /// host serialized them, and classified fields the host did not serialize
    /// are not added.
    ///
    /// # Errors
    ///
    /// Propagates the read-path errors of
    /// [`super::Carbonator::channel_value`]; a single unconvertible field
    /// fails the whole serialization.
    pub fn json_object(&self, host: &dyn ModelHost) -> Result<Map<String, Value>> {
        let mut map = host.serialize_attributes();

        for (field, _) in self.classified_fields() {
            if !map.contains_key(&field) || host.has_custom_accessor(&field) {
                continue;
            }
            match self.channel_value(host, &field, Channel::Json)? {
                Handled::Value(Some(text)) => {
                    map.insert(field, Value::String(text));
                }
                Handled::Value(None) => {
                    map.insert(field, Value::Null);
                }
                Handled::Passthrough => {}
            }
        }

        for (key, value) in host.serialize_relations() {
            map.insert(key, value);
        }

        Ok(map)
    }
}
