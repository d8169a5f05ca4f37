//! Aggregation over parsed messages.
//!
//! This module contains:
//! - [`stats`] - Per-author, per-week and per-author-per-hour counts
//! - [`summary`] - [`ChatSummary`], all report values in one struct
//!
//! # Quick Start
//!
//! ```rust
//! use chatstats::core::{ChatSummary, count_by_author};
//! use chatstats::parser::parse_str;
//!
//! let chat = parse_str("01.01.20, 09:00 - Alice: Hello")?;
//! assert_eq!(count_by_author(&chat.messages)["Alice"], 1);
//! assert_eq!(ChatSummary::from_parsed(&chat).message_count, 1);
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

pub mod stats;
pub mod summary;

pub use stats::{
    HOURS_PER_DAY, HourHistogram, WeekLabel, count_by_author, count_by_author_hour, count_by_week,
};
pub use summary::ChatSummary;

// Re-export Message from the crate root
pub use crate::Message;
