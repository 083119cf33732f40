//! Field classification registry.
//!
//! Maps attribute names to a temporal kind. Classification is what opts an
//! attribute into conversion at all: unclassified attributes pass through to
//! the host untouched. The timestamp list always includes the model's
//! bookkeeping marker columns (created/updated/deleted), whether or not they
//! were declared.

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of temporal field kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Date and time of day (e.g. `2017-01-01 00:00:00`)
    Timestamp,

    /// Date only (e.g. `2017-01-01`)
    Date,

    /// Time of day only (e.g. `14:30:00`)
    Time,
}

/// Names of the model's bookkeeping timestamp columns.
///
/// These are merged into the timestamp list unconditionally, so the creation,
/// update, and soft-delete markers convert like any declared timestamp field
/// even on models that declare no lists at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimestampMarkers {
    /// Creation marker column name
    pub created: String,
    /// Last-update marker column name
    pub updated: String,
    /// Soft-delete marker column name
    pub deleted: String,
}

impl Default for TimestampMarkers {
    fn default() -> Self {
        Self {
            created: "created_at".to_string(),
            updated: "updated_at".to_string(),
            deleted: "deleted_at".to_string(),
        }
    }
}

impl TimestampMarkers {
    /// Returns the three marker names in created/updated/deleted order.
    pub fn names(&self) -> [&str; 3] {
        [&self.created, &self.updated, &self.deleted]
    }
}

/// Per-model classification lists with their marker columns.
///
/// A name appearing in more than one list resolves with precedence
/// timestamp over date over time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldLists {
    timestamps: Vec<String>,
    dates: Vec<String>,
    times: Vec<String>,
    markers: TimestampMarkers,
}

impl FieldLists {
    /// Creates empty lists around the given marker columns.
    pub fn new(markers: TimestampMarkers) -> Self {
        Self {
            timestamps: Vec::new(),
            dates: Vec::new(),
            times: Vec::new(),
            markers,
        }
    }

    /// Replaces the declared timestamp fields.
    ///
    /// The marker columns stay classified regardless of what is declared
    /// here; an empty declaration does not suppress them.
    pub fn set_timestamps<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.timestamps = fields.into_iter().map(Into::into).collect();
    }

    /// Replaces the declared date fields.
    pub fn set_dates<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dates = fields.into_iter().map(Into::into).collect();
    }

    /// Replaces the declared time fields.
    pub fn set_times<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.times = fields.into_iter().map(Into::into).collect();
    }

    /// Returns the marker columns.
    pub fn markers(&self) -> &TimestampMarkers {
        &self.markers
    }

    /// Returns the effective timestamp fields: the declared names followed by
    /// any marker columns not already among them, duplicates removed.
    pub fn timestamp_fields(&self) -> Vec<String> {
        let mut fields: Vec<String> = Vec::with_capacity(self.timestamps.len() + 3);
        for name in &self.timestamps {
            if !fields.iter().any(|f| f == name) {
                fields.push(name.clone());
            }
        }
        for name in self.markers.names() {
            if !fields.iter().any(|f| f == name) {
                fields.push(name.to_string());
            }
        }
        fields
    }

    /// Returns the declared date fields.
    pub fn date_fields(&self) -> &[String] {
        &self.dates
    }

    /// Returns the declared time fields.
    pub fn time_fields(&self) -> &[String] {
        &self.times
    }

    /// Classifies an attribute name, or returns `None` for attributes outside
    /// every list.
    pub fn classify(&self, field: &str) -> Option<FieldKind> {
        if self.timestamps.iter().any(|f| f == field) || self.markers.names().contains(&field) {
            Some(FieldKind::Timestamp)
        } else if self.dates.iter().any(|f| f == field) {
            Some(FieldKind::Date)
        } else if self.times.iter().any(|f| f == field) {
            Some(FieldKind::Time)
        } else {
            None
        }
    }

    /// Returns every classified field with its kind, deduplicated by
    /// precedence.
    pub fn classified_fields(&self) -> Vec<(String, FieldKind)> {
        let mut fields: Vec<(String, FieldKind)> = self
            .timestamp_fields()
            .into_iter()
            .map(|name| (name, FieldKind::Timestamp))
            .collect();
        for name in &self.dates {
            if !fields.iter().any(|(f, _)| f == name) {
                fields.push((name.clone(), FieldKind::Date));
            }
        }
        for name in &self.times {
            if !fields.iter().any(|(f, _)| f == name) {
                fields.push((name.clone(), FieldKind::Time));
            }
        }
        fields
    }
}
