//! Grouping and counting over parsed messages.
//!
//! Three independent, pure views:
//!
//! | Function | Key | Value |
//! |----------|-----|-------|
//! | [`count_by_author`] | author name | message count |
//! | [`count_by_week`] | [`WeekLabel`] (ISO-8601 year/week) | message count |
//! | [`count_by_author_hour`] | author name | [`HourHistogram`] |
//!
//! All maps are `BTreeMap`s, so iteration order is sorted by key.
//!
//! # Example
//!
//! ```
//! use chatstats::core::stats::{count_by_author, count_by_week};
//! use chatstats::parser::parse_str;
//!
//! let chat = parse_str("\
//! 30.12.19, 08:00 - Alice: last week of 2019?
//! 01.01.20, 09:00 - Bob: no, ISO week 1 of 2020")?;
//!
//! assert_eq!(count_by_author(&chat.messages)["Alice"], 1);
//!
//! let weeks: Vec<String> = count_by_week(&chat.messages)
//!     .keys()
//!     .map(|w| w.to_string())
//!     .collect();
//! assert_eq!(weeks, ["2020/01"]);
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Message;

/// Number of hour-of-day buckets.
pub const HOURS_PER_DAY: usize = 24;

/// ISO-8601 week identifier, displayed as `YEAR/WW`.
///
/// Ordering is chronological. The ISO year can differ from the calendar
/// year around New Year: 30 Dec 2019 belongs to `2020/01`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekLabel {
    pub year: i32,
    pub week: u32,
}

impl WeekLabel {
    /// Creates a label from an ISO year and week number.
    pub fn new(year: i32, week: u32) -> Self {
        Self { year, week }
    }

    /// Returns the ISO week containing `timestamp`.
    pub fn of(timestamp: &NaiveDateTime) -> Self {
        let iso = timestamp.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }
}

impl fmt::Display for WeekLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}", self.year, self.week)
    }
}

impl FromStr for WeekLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, week) = s
            .split_once('/')
            .ok_or_else(|| format!("Invalid week label '{s}'. Expected YEAR/WW"))?;
        let year = year
            .parse()
            .map_err(|_| format!("Invalid year in week label '{s}'"))?;
        let week: u32 = week
            .parse()
            .map_err(|_| format!("Invalid week in week label '{s}'"))?;
        if !(1..=53).contains(&week) {
            return Err(format!("Week out of range in week label '{s}'"));
        }
        Ok(Self { year, week })
    }
}

impl Serialize for WeekLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WeekLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Message counts for each hour of the day, 0 through 23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HourHistogram([usize; HOURS_PER_DAY]);

impl HourHistogram {
    /// Creates a histogram with all buckets at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one message in `hour`. Hours outside 0–23 are ignored.
    pub fn record(&mut self, hour: u32) {
        if let Some(bucket) = usize::try_from(hour).ok().and_then(|h| self.0.get_mut(h)) {
            *bucket += 1;
        }
    }

    /// Count for `hour`, zero for hours outside 0–23.
    pub fn get(&self, hour: u32) -> usize {
        usize::try_from(hour)
            .ok()
            .and_then(|h| self.0.get(h))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all buckets.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// `(hour, count)` pairs in hour order, including empty buckets.
    pub fn iter(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        (0u32..).zip(self.0.iter().copied())
    }

    /// The busiest hour, earliest on ties. `None` if the histogram is empty.
    pub fn peak_hour(&self) -> Option<u32> {
        let max = self.0.iter().copied().max()?;
        if max == 0 {
            return None;
        }
        self.iter().find(|&(_, count)| count == max).map(|(hour, _)| hour)
    }

    /// The raw buckets.
    pub fn as_array(&self) -> &[usize; HOURS_PER_DAY] {
        &self.0
    }
}

/// Messages per author.
pub fn count_by_author(messages: &[Message]) -> BTreeMap<String, usize> {
    messages.iter().fold(BTreeMap::new(), |mut acc, msg| {
        *acc.entry(msg.author.clone()).or_insert(0) += 1;
        acc
    })
}

/// Messages per ISO week.
pub fn count_by_week(messages: &[Message]) -> BTreeMap<WeekLabel, usize> {
    messages.iter().fold(BTreeMap::new(), |mut acc, msg| {
        *acc.entry(WeekLabel::of(&msg.timestamp)).or_insert(0) += 1;
        acc
    })
}

/// Messages per author and hour of day.
///
/// Only authors with at least one message appear; each of them has all
/// 24 buckets.
pub fn count_by_author_hour(messages: &[Message]) -> BTreeMap<String, HourHistogram> {
    messages.iter().fold(BTreeMap::new(), |mut acc, msg| {
        acc.entry(msg.author.clone())
            .or_insert_with(HourHistogram::new)
            .record(msg.hour());
        acc
    })
}
