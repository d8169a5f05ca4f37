//! Line-level parsing utilities.
//!
//! This module holds the export grammar: the line patterns and the raw
//! timestamp type. Message assembly on top of it lives in [`crate::parser`].

pub mod whatsapp;

pub use whatsapp::{LineKind, LinePatterns, RawStamp};
