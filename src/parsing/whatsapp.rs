//! Line patterns for WhatsApp plaintext exports.
//!
//! The export format is a UTF-8 text file with one entry per line:
//!
//! ```text
//! 21.06.15, 10:27 - Bendicht Büchi: Guete Morge!
//! 21.06.15, 10:47 - Anna Saurer: juhuuu!!
//! juhuuu glace ässe!
//! 21.06.15, 10:48 - ‎Bendicht Büchi hat dich hinzugefügt.
//! ```
//!
//! Every line is one of three kinds, checked in this order:
//!
//! 1. a new message: `DD.MM.YY, HH:MM - Author: body`
//! 2. a system event: the same prefix, optionally followed by a U+200E mark,
//!    but without the `Author: body` shape
//! 3. a continuation of the current message body
//!
//! The two patterns are kept as separate regexes so the message shape
//! always wins over the looser event shape.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use regex::{Captures, Regex};

/// `DD.MM.YY, HH:MM - ` with five capture groups.
///
/// `[0-9]` instead of `\d`: the latter matches any Unicode digit.
const STAMP_PREFIX: &str = r"^([0-9]{2})\.([0-9]{2})\.([0-9]{2}),\s+([0-9]{2}):([0-9]{2})\s+-\s+";

/// `Author: body`: author without colons or line breaks, non-empty body.
const MESSAGE_SUFFIX: &str = r"([^\n\r:]+): ([^\n\r]+)";

/// Date and time components exactly as written in a line prefix.
///
/// Not validated: `32.13.20, 25:61` is a perfectly good `RawStamp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawStamp {
    pub day: u32,
    pub month: u32,
    pub year: u32,
    pub hour: u32,
    pub minute: u32,
}

impl RawStamp {
    fn from_captures(caps: &Captures<'_>) -> Self {
        let field = |i: usize| caps.get(i).map_or(0, |m| two_digits(m.as_str()));
        Self {
            day: field(1),
            month: field(2),
            year: field(3),
            hour: field(4),
            minute: field(5),
        }
    }

    /// Builds a timestamp, adding `century` to the two-digit year.
    ///
    /// Returns `None` if the components do not form a real date and time.
    pub fn to_datetime(self, century: i32) -> Option<NaiveDateTime> {
        let year = century.checked_add(i32::try_from(self.year).ok()?)?;
        NaiveDate::from_ymd_opt(year, self.month, self.day)?.and_hms_opt(self.hour, self.minute, 0)
    }
}

impl fmt::Display for RawStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}.{:02}.{:02}, {:02}:{:02}",
            self.day, self.month, self.year, self.hour, self.minute
        )
    }
}

/// Parses an ASCII two-digit field already checked by the regex.
fn two_digits(s: &str) -> u32 {
    s.bytes()
        .filter(u8::is_ascii_digit)
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

/// Classification of a single export line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Start of a new message.
    Message {
        stamp: RawStamp,
        author: &'a str,
        body: &'a str,
    },
    /// System event; `text` is what follows the separator and marker.
    Event { stamp: RawStamp, text: &'a str },
    /// Anything else: part of the current message body.
    Continuation(&'a str),
}

/// The two compiled line patterns.
#[derive(Debug, Clone)]
pub struct LinePatterns {
    message: Regex,
    event: Regex,
}

impl LinePatterns {
    /// Compiles the patterns. `marker` is the optional character accepted
    /// right after the separator on event lines.
    pub fn new(marker: Option<char>) -> Result<Self, regex::Error> {
        let message = Regex::new(&format!("{STAMP_PREFIX}{MESSAGE_SUFFIX}"))?;
        let event = match marker {
            Some(c) => Regex::new(&format!("{STAMP_PREFIX}(?:{})?", regex::escape(&c.to_string())))?,
            None => Regex::new(STAMP_PREFIX)?,
        };
        Ok(Self { message, event })
    }

    /// Classifies `line`. The message pattern is tried first.
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        if let Some(caps) = self.message.captures(line) {
            return LineKind::Message {
                stamp: RawStamp::from_captures(&caps),
                author: caps.get(6).map_or("", |m| m.as_str()),
                body: caps.get(7).map_or("", |m| m.as_str()),
            };
        }

        if let Some(caps) = self.event.captures(line) {
            let end = caps.get(0).map_or(0, |m| m.end());
            return LineKind::Event {
                stamp: RawStamp::from_captures(&caps),
                text: &line[end..],
            };
        }

        LineKind::Continuation(line)
    }
}
