//! # Chatstats
//!
//! Parse plaintext chat exports and count who talks when.
//!
//! ## Overview
//!
//! The input is a line-oriented export where every entry starts with a
//! timestamp:
//!
//! ```text
//! 21.06.15, 10:27 - Bendicht Büchi: Guete Morge!
//! 21.06.15, 10:47 - Anna Saurer: juhuuu!!
//! juhuuu glace ässe!
//! 21.06.15, 10:48 - ‎Bendicht Büchi hat dich hinzugefügt.
//! ```
//!
//! Chatstats reassembles multiline messages, counts system events, and
//! derives message counts per author, per ISO week, and per author and
//! hour of day. Reading files and rendering reports are left to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let export = "\
//! 01.01.20, 09:00 - Alice: Hello
//! there
//! 01.01.20, 09:05 - Bob: Hi Alice";
//!
//!     let chat = ChatParser::new()?.parse_str(export)?;
//!     assert_eq!(chat.messages[0].body, "Hello\nthere");
//!
//!     let summary = chat.summary();
//!     assert_eq!(summary.by_author["Bob"], 1);
//!     for (week, count) in &summary.by_week {
//!         println!("{week}: {count}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — [`ChatParser`](parser::ChatParser), [`ParsedChat`](parser::ParsedChat)
//! - [`parsing`] — Line patterns and classification
//! - [`core`] — Aggregation
//!   - [`core::stats`] — [`count_by_author`](core::count_by_author),
//!     [`count_by_week`](core::count_by_week),
//!     [`count_by_author_hour`](core::count_by_author_hour)
//!   - [`core::summary`] — [`ChatSummary`](core::ChatSummary)
//! - [`config`] — [`ParserConfig`](config::ParserConfig)
//! - [`error`] — [`ChatstatsError`], [`Result`]
//! - [`prelude`] — Convenient re-exports

pub mod config;
pub mod core;
pub mod error;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatsError, Result};
pub use message::{Event, Message};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Event, Message};

    pub use crate::error::{ChatstatsError, Result};

    pub use crate::config::{EventPolicy, ParserConfig};

    pub use crate::parser::{ChatParser, ParsedChat, parse_str};

    pub use crate::core::{
        ChatSummary, HourHistogram, WeekLabel, count_by_author, count_by_author_hour,
        count_by_week,
    };
}
