//! Line classifier and message assembler.
//!
//! [`ChatParser`] makes a single pass over the export lines. Each line is
//! classified by [`LinePatterns`] and fed into a small state machine whose
//! only state is the message currently being assembled:
//!
//! | Line kind | Open message | Effect |
//! |-----------|--------------|--------|
//! | new message | any | emit the open one, open a new one |
//! | event | any | close the open one per [`EventPolicy`], count the event |
//! | continuation | `Some` | append `\n` + line to its body |
//! | continuation | `None` | [`ChatstatsError::OrphanContinuation`] |
//!
//! A message is only known to be complete once the following line has been
//! classified, so the last message is emitted at end of input.
//!
//! # Example
//!
//! ```rust
//! use chatstats::parser::ChatParser;
//!
//! let export = "\
//! 01.01.20, 09:00 - Alice: Hello
//! there
//! 01.01.20, 09:05 - Bob: Hi Alice
//! 01.01.20, 09:06 - \u{200E}Alice removed Bob";
//!
//! let chat = ChatParser::new()?.parse_str(export)?;
//!
//! assert_eq!(chat.len(), 2);
//! assert_eq!(chat.messages[0].body, "Hello\nthere");
//! assert_eq!(chat.event_count, 1);
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{EventPolicy, ParserConfig};
use crate::core::summary::ChatSummary;
use crate::error::{ChatstatsError, Result};
use crate::message::{Event, Message};
use crate::parsing::{LineKind, LinePatterns};

/// Result of parsing one chat export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedChat {
    /// Completed messages in input order.
    pub messages: Vec<Message>,

    /// Number of system event lines.
    pub event_count: usize,

    /// Messages dropped by an event line under [`EventPolicy::Discard`].
    pub discarded: usize,

    /// Event records, only filled when
    /// [`ParserConfig::collect_events`] is enabled.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub events: Vec<Event>,
}

impl ParsedChat {
    /// Number of emitted messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if no message was emitted.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Computes all aggregate views over the parsed messages.
    pub fn summary(&self) -> ChatSummary {
        ChatSummary::from_parsed(self)
    }
}

/// Parser for plaintext chat exports.
///
/// The parser holds only its config and compiled patterns; each parse call
/// gets its own assembly state, so one parser can be reused for many inputs.
#[derive(Debug, Clone)]
pub struct ChatParser {
    config: ParserConfig,
    patterns: LinePatterns,
}

impl ChatParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(ParserConfig::default())
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Result<Self> {
        let patterns = LinePatterns::new(config.event_marker)?;
        Ok(Self { config, patterns })
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns the compiled line patterns.
    pub fn patterns(&self) -> &LinePatterns {
        &self.patterns
    }

    /// Parses a whole export held in memory.
    ///
    /// Both `\n` and `\r\n` line endings are accepted.
    pub fn parse_str(&self, content: &str) -> Result<ParsedChat> {
        self.parse_lines(content.lines())
    }

    /// Parses an ordered sequence of lines.
    ///
    /// A trailing `\n` or `\r\n` on individual lines is stripped, so lines
    /// may come straight from `BufRead::read_line`.
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<ParsedChat>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut assembler = Assembler::new(&self.config);

        for (idx, line) in lines.into_iter().enumerate() {
            let line = trim_line_ending(line.as_ref());
            assembler.feed(idx + 1, self.patterns.classify(line))?;
        }

        Ok(assembler.finish())
    }
}

/// Parses `content` with the default configuration.
pub fn parse_str(content: &str) -> Result<ParsedChat> {
    ChatParser::new()?.parse_str(content)
}

fn trim_line_ending(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}

/// Message whose body may still grow.
#[derive(Debug)]
struct PendingMessage {
    timestamp: NaiveDateTime,
    author: String,
    body: String,
}

impl PendingMessage {
    fn into_message(self) -> Message {
        Message::new(self.timestamp, self.author, self.body)
    }
}

/// Per-call assembly state.
struct Assembler<'c> {
    config: &'c ParserConfig,
    open: Option<PendingMessage>,
    chat: ParsedChat,
}

impl<'c> Assembler<'c> {
    fn new(config: &'c ParserConfig) -> Self {
        Self {
            config,
            open: None,
            chat: ParsedChat::default(),
        }
    }

    fn feed(&mut self, line_no: usize, kind: LineKind<'_>) -> Result<()> {
        match kind {
            LineKind::Message {
                stamp,
                author,
                body,
            } => {
                let Some(timestamp) = stamp.to_datetime(self.config.century) else {
                    warn!(line = line_no, stamp = %stamp, "invalid message timestamp");
                    return Err(ChatstatsError::invalid_timestamp(line_no, stamp.to_string()));
                };

                self.emit_open();
                self.open = Some(PendingMessage {
                    timestamp,
                    author: author.to_string(),
                    body: body.to_string(),
                });
            }
            LineKind::Event { stamp, text } => {
                self.close_for_event(line_no);
                self.chat.event_count += 1;

                if self.config.collect_events {
                    self.chat
                        .events
                        .push(Event::new(stamp.to_datetime(self.config.century), text));
                }
            }
            LineKind::Continuation(text) => {
                let Some(pending) = self.open.as_mut() else {
                    warn!(line = line_no, "continuation line without an open message");
                    return Err(ChatstatsError::orphan_continuation(line_no, text));
                };

                pending.body.push('\n');
                pending.body.push_str(text);
            }
        }

        Ok(())
    }

    fn emit_open(&mut self) {
        if let Some(pending) = self.open.take() {
            self.chat.messages.push(pending.into_message());
        }
    }

    fn close_for_event(&mut self, line_no: usize) {
        match self.config.event_policy {
            EventPolicy::Finalize => self.emit_open(),
            EventPolicy::Discard => {
                if let Some(pending) = self.open.take() {
                    debug!(
                        line = line_no,
                        author = %pending.author,
                        "open message discarded by event line"
                    );
                    self.chat.discarded += 1;
                }
            }
        }
    }

    fn finish(mut self) -> ParsedChat {
        self.emit_open();
        debug!(
            messages = self.chat.messages.len(),
            events = self.chat.event_count,
            discarded = self.chat.discarded,
            "chat export parsed"
        );
        self.chat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "01.01.20, 09:00 - Alice: Hello
there
01.01.20, 09:05 - Bob: Hi Alice
01.01.20, 09:06 - \u{200E}Alice removed Bob";

    #[test]
    fn test_example_default_policy() {
        let chat = parse_str(EXAMPLE).unwrap();

        assert_eq!(chat.len(), 2);
        assert_eq!(chat.messages[0].author, "Alice");
        assert_eq!(chat.messages[0].body, "Hello\nthere");
        assert_eq!(chat.messages[0].timestamp.to_string(), "2020-01-01 09:00:00");
        assert_eq!(chat.messages[1].author, "Bob");
        assert_eq!(chat.messages[1].body, "Hi Alice");
        assert_eq!(chat.event_count, 1);
        assert_eq!(chat.discarded, 0);
        assert!(chat.events.is_empty());
    }

    #[test]
    fn test_example_discard_policy() {
        let parser =
            ChatParser::with_config(ParserConfig::new().with_event_policy(EventPolicy::Discard))
                .unwrap();
        let chat = parser.parse_str(EXAMPLE).unwrap();

        assert_eq!(chat.len(), 1);
        assert_eq!(chat.messages[0].author, "Alice");
        assert_eq!(chat.event_count, 1);
        assert_eq!(chat.discarded, 1);
    }

    #[test]
    fn test_event_with_nothing_open() {
        let chat = parse_str("01.01.20, 09:00 - \u{200E}Alice created group \"x\"").unwrap();
        assert!(chat.is_empty());
        assert_eq!(chat.event_count, 1);
        assert_eq!(chat.discarded, 0);
    }

    #[test]
    fn test_collect_events() {
        let parser =
            ChatParser::with_config(ParserConfig::new().with_collect_events(true)).unwrap();
        let chat = parser.parse_str(EXAMPLE).unwrap();

        assert_eq!(chat.events.len(), 1);
        assert_eq!(chat.events[0].text, "Alice removed Bob");
        assert_eq!(
            chat.events[0].timestamp.map(|t| t.to_string()).as_deref(),
            Some("2020-01-01 09:06:00")
        );
    }

    #[test]
    fn test_collected_event_with_invalid_date() {
        let parser =
            ChatParser::with_config(ParserConfig::new().with_collect_events(true)).unwrap();
        let chat = parser.parse_str("99.99.20, 09:00 - something happened").unwrap();
        assert_eq!(chat.event_count, 1);
        assert_eq!(chat.events[0].timestamp, None);
    }

    #[test]
    fn test_orphan_first_line() {
        let err = parse_str("hello\n01.01.20, 09:00 - Alice: Hi").unwrap_err();
        assert!(err.is_orphan_continuation());
        assert_eq!(err.line(), Some(1));
    }

    #[test]
    fn test_orphan_after_event() {
        let err = parse_str(&format!("{EXAMPLE}\nstray line")).unwrap_err();
        match err {
            ChatstatsError::OrphanContinuation { line, content } => {
                assert_eq!(line, 5);
                assert_eq!(content, "stray line");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_timestamp() {
        let err = parse_str("01.01.20, 09:00 - Alice: Hi\n31.02.20, 10:00 - Bob: Hey").unwrap_err();
        match err {
            ChatstatsError::InvalidTimestamp { line, input } => {
                assert_eq!(line, 2);
                assert_eq!(input, "31.02.20, 10:00");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_input() {
        let chat = parse_str("").unwrap();
        assert!(chat.is_empty());
        assert_eq!(chat.event_count, 0);
    }

    #[test]
    fn test_blank_continuation_kept() {
        let chat = parse_str("01.01.20, 09:00 - Alice: first\n\nthird").unwrap();
        assert_eq!(chat.messages[0].body, "first\n\nthird");
    }

    #[test]
    fn test_parse_lines_strips_terminators() {
        let parser = ChatParser::new().unwrap();
        let lines = ["01.01.20, 09:00 - Alice: a\r\n", "b\n", "c"];
        let chat = parser.parse_lines(lines).unwrap();
        assert_eq!(chat.messages[0].body, "a\nb\nc");
    }

    #[test]
    fn test_century_config() {
        let parser = ChatParser::with_config(ParserConfig::new().with_century(0)).unwrap();
        let chat = parser.parse_str("21.06.15, 10:27 - Bendicht: Guete Morge!").unwrap();
        assert_eq!(chat.messages[0].timestamp.to_string(), "0015-06-21 10:27:00");
    }

    #[test]
    fn test_parser_is_reusable() {
        let parser = ChatParser::new().unwrap();
        let first = parser.parse_str(EXAMPLE).unwrap();
        let second = parser.parse_str(EXAMPLE).unwrap();
        assert_eq!(first, second);
    }
}
