//! Core library for temporal attribute conversion on database-model objects.
//!
//! This crate keeps three representations of a model's timestamp, date, and
//! time attributes in sync: a human-facing display form, a machine-readable
//! JSON form, and a normalized storage form, each with its own format pattern
//! and timezone resolved per model instance.
//!
//! # Conversion Architecture
//!
//! A [`Carbonator`] attaches to a host model through the [`ModelHost`] trait
//! and converts on demand:
//!
//! - **Classification** ([`fields`]): which attributes convert at all, and as
//!   what kind
//! - **Resolution** ([`Overrides`], [`Environment`], [`TimezoneProvider`]):
//!   per-channel formats and timezones from overrides down to literal
//!   defaults
//! - **Caching** ([`cache`]): raw values parse once per instance, in one
//!   batch, and every channel formats from the same parsed values
//!
//! Reads, writes, and full-object serialization all go through the engine, so
//! a value stored as `2017-01-01 00:00:00` UTC can read as
//! `Dec 31, 2016 7:00pm` in a Toronto display context while JSON output and
//! storage stay stable.
//!
//! # Quick Start
//!
//! ```rust
//! use carbonated_core::{AttributeBag, CarbonatorBuilder, Environment, ModelHost};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // A host model with raw storage-formatted attributes
//! let mut model = AttributeBag::new()
//!     .with("created_at", "2017-01-01 00:00:00")
//!     .with("completed_at", "2017-06-15 17:30:00");
//!
//! // An engine for the model type: declared fields plus injected environment
//! let carbonator = CarbonatorBuilder::new()
//!     .with_timestamps(["completed_at"])
//!     .with_environment(Environment::new().with_user_timezone("America/Toronto"))
//!     .build();
//!
//! // Channel reads serve from one shared parse of the raw values
//! let display = carbonator.display_value(&model, "created_at")?.into_value().flatten();
//! assert_eq!(display.as_deref(), Some("Dec 31, 2016 7:00pm"));
//! let json = carbonator.json_value(&model, "completed_at")?.into_value().flatten();
//! assert_eq!(json.as_deref(), Some("2017-06-15 17:30:00"));
//!
//! // Writes accept display-formatted text and normalize it for storage
//! carbonator.store(&mut model, "completed_at", "Jul 01, 2017 9:15am")?;
//! assert_eq!(
//!     model.raw_attribute("completed_at").as_deref(),
//!     Some("2017-07-01 13:15:00")
//! );
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod carbonator;
pub mod channel;
pub mod environment;
pub mod error;
pub mod fields;
pub mod host;
pub mod settings;
pub mod value;

pub(crate) mod convert;

// Re-export commonly used types
pub use cache::{CacheEntries, ConversionCache};
pub use carbonator::{Carbonator, CarbonatorBuilder};
pub use channel::Channel;
pub use environment::{Environment, TimezoneProvider};
pub use error::{CarbonatedError, Result};
pub use fields::{FieldKind, FieldLists, TimestampMarkers};
pub use host::{AttributeBag, ModelHost};
pub use settings::Overrides;
pub use value::{AttributeValue, Handled, Incoming, Stored};
