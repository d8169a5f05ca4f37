//! Report values for a parsed chat.
//!
//! [`ChatSummary`] gathers every number a report needs in one place. It does
//! not render anything: it is `Serialize`, and hosts format it however they
//! like.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::stats::{HourHistogram, WeekLabel, count_by_author, count_by_author_hour, count_by_week};
use crate::Message;
use crate::parser::ParsedChat;

/// Aggregate statistics over one chat export.
///
/// # Example
///
/// ```
/// use chatstats::parser::parse_str;
///
/// let chat = parse_str("\
/// 01.01.20, 09:00 - Alice: Hello
/// 01.01.20, 21:30 - Bob: Hi
/// 02.01.20, 09:15 - Alice: Morning")?;
///
/// let summary = chat.summary();
/// assert_eq!(summary.message_count, 3);
/// assert_eq!(summary.author_count, 2);
/// assert_eq!(summary.by_author_hour["Alice"].get(9), 2);
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSummary {
    /// Total number of messages.
    pub message_count: usize,

    /// Number of distinct authors.
    pub author_count: usize,

    /// Number of system event lines.
    pub event_count: usize,

    /// Messages dropped by event lines.
    pub discarded: usize,

    /// Messages per author, sorted by author.
    pub by_author: BTreeMap<String, usize>,

    /// Messages per ISO week, sorted by week.
    pub by_week: BTreeMap<WeekLabel, usize>,

    /// Hour-of-day histogram per author, sorted by author.
    pub by_author_hour: BTreeMap<String, HourHistogram>,

    /// Earliest message timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub first_message: Option<NaiveDateTime>,

    /// Latest message timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub last_message: Option<NaiveDateTime>,
}

impl ChatSummary {
    /// Summarizes a bare message list. Event figures are zero.
    pub fn from_messages(messages: &[Message]) -> Self {
        let by_author = count_by_author(messages);

        Self {
            message_count: messages.len(),
            author_count: by_author.len(),
            event_count: 0,
            discarded: 0,
            by_week: count_by_week(messages),
            by_author_hour: count_by_author_hour(messages),
            by_author,
            first_message: messages.iter().map(|m| m.timestamp).min(),
            last_message: messages.iter().map(|m| m.timestamp).max(),
        }
    }

    /// Summarizes a parse result, including its event figures.
    pub fn from_parsed(chat: &ParsedChat) -> Self {
        Self {
            event_count: chat.event_count,
            discarded: chat.discarded,
            ..Self::from_messages(&chat.messages)
        }
    }

    /// Authors ordered by message count, most active first.
    /// Ties are broken by name.
    pub fn authors_by_activity(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .by_author
            .iter()
            .map(|(author, &count)| (author.as_str(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    const CHAT: &str = "01.01.20, 09:00 - Alice: Hello
there
01.01.20, 09:05 - Bob: Hi Alice
06.01.20, 22:10 - Carol: late
06.01.20, 22:11 - Bob: very
01.01.20, 09:06 - \u{200E}Alice removed Bob";

    #[test]
    fn test_summary_values() {
        let summary = parse_str(CHAT).unwrap().summary();

        assert_eq!(summary.message_count, 4);
        assert_eq!(summary.author_count, 3);
        assert_eq!(summary.event_count, 1);
        assert_eq!(summary.by_author["Bob"], 2);

        let weeks: Vec<(String, usize)> = summary
            .by_week
            .iter()
            .map(|(w, c)| (w.to_string(), *c))
            .collect();
        assert_eq!(weeks, vec![("2020/01".into(), 2), ("2020/02".into(), 2)]);

        assert_eq!(summary.by_author_hour["Carol"].get(22), 1);
        assert_eq!(
            summary.first_message.map(|t| t.to_string()).as_deref(),
            Some("2020-01-01 09:00:00")
        );
        assert_eq!(
            summary.last_message.map(|t| t.to_string()).as_deref(),
            Some("2020-01-06 22:11:00")
        );
    }

    #[test]
    fn test_authors_by_activity() {
        let summary = parse_str(CHAT).unwrap().summary();
        assert_eq!(
            summary.authors_by_activity(),
            vec![("Bob", 2), ("Alice", 1), ("Carol", 1)]
        );
    }

    #[test]
    fn test_empty_summary() {
        let summary = ChatSummary::from_messages(&[]);
        assert_eq!(summary, ChatSummary::default());
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = parse_str(CHAT).unwrap().summary();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["by_week"]["2020/02"], 2);
        assert_eq!(json["by_author_hour"]["Alice"].as_array().unwrap().len(), 24);

        let back: ChatSummary = serde_json::from_value(json).unwrap();
        assert_eq!(back, summary);
    }
}
