//! Player names and the record of finished matches.

use std::fmt;

use game_core::Score;

/// Single-line text field for a player name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameField {
    text: String,
    pub active: bool,
}

impl NameField {
    pub const MAX_LEN: usize = 15;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Append a typed character. Control characters and input past the
    /// length limit are dropped. Returns whether the text changed.
    pub fn push_char(&mut self, c: char) -> bool {
        if c.is_control() || self.text.chars().count() >= Self::MAX_LEN {
            return false;
        }
        self.text.push(c);
        true
    }

    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerNames {
    pub left: String,
    pub right: String,
}

impl PlayerNames {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

/// A finished (or abandoned) match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub names: PlayerNames,
    pub left_score: u8,
    pub right_score: u8,
}

impl MatchRecord {
    pub fn new(names: PlayerNames, score: Score) -> Self {
        Self {
            names,
            left_score: score.left,
            right_score: score.right,
        }
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {}: {}-{}",
            self.names.left, self.names.right, self.left_score, self.right_score
        )
    }
}

/// In-memory match history, oldest first
#[derive(Debug, Clone, Default)]
pub struct MatchLog {
    records: Vec<MatchRecord>,
}

impl MatchLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: MatchRecord) {
        log::info!("match recorded: {}", record);
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The last `n` records, oldest first
    pub fn recent(&self, n: usize) -> &[MatchRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.records.iter().map(|record| record.to_string())
    }
}
