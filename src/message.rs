//! Record types produced by the chat parser.
//!
//! - [`Message`] — one authored chat message, possibly spanning several lines
//! - [`Event`] — a system line without an author (member added, group renamed, ...)
//!
//! # Examples
//!
//! ```
//! use chatstats::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2020, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//!
//! let msg = Message::new(ts, "Alice", "Hello\nthere");
//! assert_eq!(msg.author(), "Alice");
//! assert_eq!(msg.hour(), 9);
//! assert!(msg.is_multiline());
//! ```

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// A single logical chat message.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Local send time as written in the export (no timezone) |
/// | `author` | `String` | Display name, never contains `:` or a line break |
/// | `body` | `String` | Message text; continuation lines are joined with `\n` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent, in the exporting device's local time.
    pub timestamp: NaiveDateTime,

    /// Display name of the message author.
    pub author: String,

    /// Text content of the message.
    ///
    /// May contain newlines for multiline messages.
    pub body: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(
        timestamp: NaiveDateTime,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            author: author.into(),
            body: body.into(),
        }
    }

    /// Returns the send time.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the author name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Hour of day (0–23) the message was sent.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Number of lines in the body. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.body.split('\n').count()
    }

    /// Returns `true` if the body was assembled from continuation lines.
    pub fn is_multiline(&self) -> bool {
        self.body.contains('\n')
    }
}

/// A system event line, e.g. `01.01.20, 09:06 - ‎Alice removed Bob`.
///
/// Events are only kept when
/// [`ParserConfig::collect_events`](crate::config::ParserConfig::collect_events)
/// is enabled; otherwise the parser only counts them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// When the event happened.
    ///
    /// `None` if the line prefix did not form a valid date. Event lines are
    /// never rejected for that.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,

    /// Event text after the ` - ` separator, without the direction marker.
    pub text: String,
}

impl Event {
    /// Creates a new event record.
    pub fn new(timestamp: Option<NaiveDateTime>, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            text: text.into(),
        }
    }
}
