//! The attribute conversion engine.
//!
//! A [`Carbonator`] carries one model instance's classification lists,
//! overrides, injected environment, and conversion cache, and performs every
//! read, write, and serialization conversion for that instance. It holds no
//! attribute values of its own; the host's state comes and goes through
//! [`crate::ModelHost`].
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────┐    ┌───────────────────┐    ┌──────────────────┐
//! │ Raw storage  │───▶│ Conversion cache  │───▶│ Channel output   │
//! │ (ModelHost)  │    │ (parsed, display  │    │ display / json / │
//! │              │◀───│  timezone)        │    │ storage          │
//! └──────────────┘    └───────────────────┘    └──────────────────┘
//!    write path           batch build              read path
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for configuring [`Carbonator`] instances
//! - `resolve`: Format and timezone resolution chains
//! - `read`: Cache building and the channel accessors
//! - `write`: The mutator and the fresh-timestamp factory
//! - `serialize`: The full-object JSON serialization hook
//!
//! # Usage Examples
//!
//! ## Reading a stored timestamp through each channel
//!
//! ```rust
//! use carbonated_core::{AttributeBag, CarbonatorBuilder, Environment};
//!
//! let model = AttributeBag::new().with("created_at", "2017-01-01 00:00:00");
//! let carbonator = CarbonatorBuilder::new()
//!     .with_environment(Environment::new().with_user_timezone("America/Toronto"))
//!     .build();
//!
//! let display = carbonator
//!     .display_value(&model, "created_at")
//!     .unwrap()
//!     .into_value()
//!     .flatten();
//! assert_eq!(display.as_deref(), Some("Dec 31, 2016 7:00pm"));
//!
//! let json = carbonator
//!     .json_value(&model, "created_at")
//!     .unwrap()
//!     .into_value()
//!     .flatten();
//! assert_eq!(json.as_deref(), Some("2017-01-01 00:00:00"));
//! ```
//!
//! ## Writing display-formatted input back to storage
//!
//! ```rust
//! use carbonated_core::{AttributeBag, CarbonatorBuilder, Environment, ModelHost};
//!
//! let mut model = AttributeBag::new();
//! let carbonator = CarbonatorBuilder::new()
//!     .with_environment(Environment::new().with_user_timezone("America/Toronto"))
//!     .build();
//!
//! carbonator
//!     .store(&mut model, "completed_at", "Dec 31, 2016 7:00pm")
//!     .unwrap();
//! // Timestamp markers are classified implicitly, so completed_at needs a
//! // declaration before it converts; created_at does not.
//! assert_eq!(model.raw_attribute("completed_at"), None);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::cache::{CacheEntries, ConversionCache};
use crate::environment::{Environment, TimezoneProvider};
use crate::fields::{FieldKind, FieldLists, TimestampMarkers};
use crate::settings::Overrides;

pub mod builder;

mod read;
mod resolve;
mod serialize;
mod write;


pub use builder::CarbonatorBuilder;

/// Attribute conversion engine for one model instance.
///
/// Cloning shares the conversion cache (a raw-parsed-value view produced by
/// [`Carbonator::with_carbon`] must serve and reuse the same cache as its
/// parent) while classification and configuration are copied, since they are
/// immutable for the lifetime of an operation.
#[derive(Clone)]
pub struct Carbonator {
    lists: FieldLists,
    overrides: Overrides,
    env: Environment,
    provider: Option<Rc<dyn TimezoneProvider>>,
    cache: Rc<RefCell<ConversionCache>>,
    return_parsed: bool,
}

impl Carbonator {
    pub(crate) fn new(
        lists: FieldLists,
        overrides: Overrides,
        env: Environment,
        provider: Option<Rc<dyn TimezoneProvider>>,
    ) -> Self {
        Self {
            lists,
            overrides,
            env,
            provider,
            cache: Rc::new(RefCell::new(ConversionCache::new())),
            return_parsed: false,
        }
    }

    /// Classifies an attribute name against the instance's lists.
    pub fn classify(&self, field: &str) -> Option<FieldKind> {
        self.lists.classify(field)
    }

    /// Effective timestamp fields, marker columns included.
    pub fn timestamp_fields(&self) -> Vec<String> {
        self.lists.timestamp_fields()
    }

    /// Declared date fields.
    pub fn date_fields(&self) -> &[String] {
        self.lists.date_fields()
    }

    /// Declared time fields.
    pub fn time_fields(&self) -> &[String] {
        self.lists.time_fields()
    }

    /// Every classified field with its kind, deduplicated by precedence.
    pub fn classified_fields(&self) -> Vec<(String, FieldKind)> {
        self.lists.classified_fields()
    }

    /// The instance's marker columns.
    pub fn markers(&self) -> &TimestampMarkers {
        self.lists.markers()
    }

    /// Replaces the declared timestamp fields and clears the cache, since the
    /// cached key set no longer matches.
    pub fn set_timestamp_fields<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lists.set_timestamps(fields);
        self.cache.borrow_mut().clear();
    }

    /// Replaces the declared date fields and clears the cache.
    pub fn set_date_fields<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lists.set_dates(fields);
        self.cache.borrow_mut().clear();
    }

    /// Replaces the declared time fields and clears the cache.
    pub fn set_time_fields<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lists.set_times(fields);
        self.cache.borrow_mut().clear();
    }

    /// Replaces the format and timezone overrides.
    ///
    /// The cache survives: cached values are instants, and every read
    /// re-resolves the requested channel's format and timezone before
    /// formatting, so no stale output can be served.
    pub fn set_overrides(&mut self, overrides: Overrides) {
        self.overrides = overrides;
    }

    /// Replaces the injected environment. The cache survives for the same
    /// reason as [`Carbonator::set_overrides`].
    pub fn set_environment(&mut self, env: Environment) {
        self.env = env;
    }

    /// The injected environment.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Whether display output uses locale-aware names.
    pub fn localized_formatting_enabled(&self) -> bool {
        self.env.localization
    }

    /// Returns a view of this engine whose generic accessor yields parsed
    /// values instead of display-formatted text.
    ///
    /// The view shares this engine's cache, so reads through either serve
    /// and warm the same parsed values.
    pub fn with_carbon(&self) -> Self {
        let mut view = self.clone();
        view.return_parsed = true;
        view
    }

    /// Whether the generic accessor yields parsed values.
    pub fn returns_parsed(&self) -> bool {
        self.return_parsed
    }

    /// Replaces the cache with the given entries, marking it populated.
    ///
    /// The replacement lives in a fresh cell: views cloned off earlier keep
    /// the old cache.
    pub fn inject_cache(&mut self, entries: CacheEntries) {
        let mut cache = ConversionCache::new();
        cache.populate(entries);
        self.cache = Rc::new(RefCell::new(cache));
    }

    /// Clears the cache back to unpopulated, for this engine and every view
    /// sharing its cell. The next classified read batch-builds from raw
    /// storage again.
    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }

    /// Whether the cache currently holds a population.
    pub fn cache_populated(&self) -> bool {
        self.cache.borrow().is_populated()
    }
}
