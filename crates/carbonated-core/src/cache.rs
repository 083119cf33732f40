//! Instance-scoped cache of parsed temporal values.
//!
//! Populated lazily in one batch on the first classified read, with every
//! entry expressed in the model's display timezone. Absent raw values cache
//! as `None` so a miss never re-reads the host. The cache never refreshes
//! itself; the write path updates single entries and classification changes
//! clear it.

use std::collections::HashMap;

use chrono::DateTime;
use chrono_tz::Tz;
use log::trace;

/// Map from classified field name to its parsed value (`None` for an absent
/// raw value), as installed by a batch build or an injection.
pub type CacheEntries = HashMap<String, Option<DateTime<Tz>>>;

/// Lazily populated conversion cache for one model instance.
#[derive(Debug, Clone, Default)]
pub struct ConversionCache {
    entries: Option<CacheEntries>,
}

impl ConversionCache {
    /// Creates an unpopulated cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once a batch build or injection has run.
    pub fn is_populated(&self) -> bool {
        self.entries.is_some()
    }

    /// Installs a full set of entries, replacing any previous population.
    pub fn populate(&mut self, entries: CacheEntries) {
        self.entries = Some(entries);
    }

    /// Looks up a field.
    ///
    /// The outer `Option` is the cache state (`None` until populated, or for
    /// a field never installed); the inner is the cached value itself.
    pub fn get(&self, field: &str) -> Option<Option<DateTime<Tz>>> {
        self.entries.as_ref()?.get(field).copied()
    }

    /// Replaces a single entry after a write.
    ///
    /// No-op while unpopulated: the next read batch-builds from raw storage,
    /// which already holds the written value.
    pub fn refresh(&mut self, field: &str, value: Option<DateTime<Tz>>) {
        if let Some(entries) = self.entries.as_mut() {
            trace!("refreshing cached conversion for '{field}'");
            entries.insert(field.to_string(), value);
        }
    }

    /// Drops every entry, returning the cache to the unpopulated state.
    pub fn clear(&mut self) {
        self.entries = None;
    }

    /// Number of cached fields, zero while unpopulated.
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, HashMap::len)
    }

    /// Returns `true` while unpopulated or populated with no fields.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
