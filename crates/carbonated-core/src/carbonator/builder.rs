//! Builder for creating and configuring Carbonator instances.

use std::rc::Rc;

use super::Carbonator;
use crate::environment::{Environment, TimezoneProvider};
use crate::fields::{FieldLists, TimestampMarkers};
use crate::settings::Overrides;

/// Builder for creating and configuring Carbonator instances.
///
/// Building never fails: format and timezone settings are plain data here
/// and are validated at the first conversion that uses them.
#[derive(Default)]
pub struct CarbonatorBuilder {
    markers: TimestampMarkers,
    timestamps: Vec<String>,
    dates: Vec<String>,
    times: Vec<String>,
    overrides: Overrides,
    env: Environment,
    provider: Option<Rc<dyn TimezoneProvider>>,
}

impl CarbonatorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the model's bookkeeping marker columns.
    ///
    /// If not specified, uses `created_at`, `updated_at`, and `deleted_at`.
    pub fn with_markers(mut self, markers: TimestampMarkers) -> Self {
        self.markers = markers;
        self
    }

    /// Declares the timestamp fields.
    pub fn with_timestamps<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.timestamps = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Declares the date fields.
    pub fn with_dates<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dates = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Declares the time fields.
    pub fn with_times<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.times = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the format and timezone overrides.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Sets the injected environment.
    pub fn with_environment(mut self, env: Environment) -> Self {
        self.env = env;
        self
    }

    /// Installs a per-model timezone capability.
    pub fn with_timezone_provider<P>(mut self, provider: P) -> Self
    where
        P: TimezoneProvider + 'static,
    {
        self.provider = Some(Rc::new(provider));
        self
    }

    /// Builds the configured engine with an unpopulated cache.
    pub fn build(self) -> Carbonator {
        let mut lists = FieldLists::new(self.markers);
        lists.set_timestamps(self.timestamps);
        lists.set_dates(self.dates);
        lists.set_times(self.times);
        Carbonator::new(lists, self.overrides, self.env, self.provider)
    }
}
