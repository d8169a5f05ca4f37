//! Parser configuration.
//!
//! [`ParserConfig`] is a plain builder-style struct with no framework
//! dependencies. It derives `Serialize`/`Deserialize` so host applications
//! can load it from whatever config source they already use.
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::{EventPolicy, ParserConfig};
//! use chatstats::parser::ChatParser;
//!
//! let config = ParserConfig::new()
//!     .with_collect_events(true)
//!     .with_event_policy(EventPolicy::Discard);
//!
//! let parser = ChatParser::with_config(config)?;
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use serde::{Deserialize, Serialize};

/// Left-to-right mark that some exports put in front of event text.
pub const DEFAULT_EVENT_MARKER: char = '\u{200E}';

/// What an event line does to the message that is open when it arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventPolicy {
    /// Emit the open message; its body is complete.
    #[default]
    Finalize,

    /// Drop the open message without emitting it.
    Discard,
}

/// Configuration for chat export parsing.
///
/// # Example
///
/// ```rust
/// use chatstats::config::ParserConfig;
///
/// // Interpret "20" in "01.01.20" as the year 1920
/// let config = ParserConfig::new().with_century(1900);
/// assert_eq!(config.century, 1900);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Added to the two-digit year of every timestamp (default: 2000)
    pub century: i32,

    /// Optional marker accepted right after ` - ` on event lines
    /// (default: U+200E). `None` accepts no marker.
    pub event_marker: Option<char>,

    /// Keep [`Event`](crate::message::Event) records instead of only
    /// counting them (default: false)
    pub collect_events: bool,

    /// Handling of the open message when an event line arrives
    /// (default: [`EventPolicy::Finalize`])
    pub event_policy: EventPolicy,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            century: 2000,
            event_marker: Some(DEFAULT_EVENT_MARKER),
            collect_events: false,
            event_policy: EventPolicy::Finalize,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the century added to two-digit years.
    #[must_use]
    pub fn with_century(mut self, century: i32) -> Self {
        self.century = century;
        self
    }

    /// Sets the event marker character, or disables it with `None`.
    #[must_use]
    pub fn with_event_marker(mut self, marker: Option<char>) -> Self {
        self.event_marker = marker;
        self
    }

    /// Sets whether event records are kept.
    #[must_use]
    pub fn with_collect_events(mut self, collect: bool) -> Self {
        self.collect_events = collect;
        self
    }

    /// Sets the policy for messages interrupted by an event line.
    #[must_use]
    pub fn with_event_policy(mut self, policy: EventPolicy) -> Self {
        self.event_policy = policy;
        self
    }
}
