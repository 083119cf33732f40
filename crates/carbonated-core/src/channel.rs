//! Output channel enumeration.

/// Type-safe enumeration of the three output channels.
///
/// Every classified attribute can be rendered through any of these channels;
/// each channel resolves its own format pattern and timezone. See
/// [`crate::Carbonator::channel_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Human-facing output (view layers, templates)
    Display,

    /// Machine-readable output (API payloads, full-object serialization)
    Json,

    /// Normalized persistence form written back to the model's raw storage
    Storage,
}
