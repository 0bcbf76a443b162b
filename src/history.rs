use std::collections::VecDeque;

use chrono::{DateTime, Local};

/// Most calculations the history keeps; older entries are dropped first.
pub const HISTORY_LIMIT: usize = 200;

/// Timestamp layout used when an entry is displayed.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One successful calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// When the calculation was recorded.
    pub time:       DateTime<Local>,
    /// The expression as it was entered.
    pub expression: String,
    /// The formatted result.
    pub result:     String,
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "{}  |  {} = {}",
               self.time.format(TIME_FORMAT),
               self.expression,
               self.result)
    }
}

/// A bounded log of calculations, oldest first.
///
/// # Example
/// ```
/// use calctk::history::History;
///
/// let mut history = History::new();
/// history.record("1+1", "2");
/// history.record("2*3", "6");
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.latest().unwrap().result, "6");
/// ```
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    limit:   usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Creates an empty history holding up to [`HISTORY_LIMIT`] entries.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }

    /// Creates an empty history holding up to `limit` entries.
    #[must_use]
    pub const fn with_limit(limit: usize) -> Self {
        Self { entries: VecDeque::new(),
               limit }
    }

    /// Appends a calculation stamped with the current local time.
    pub fn record(&mut self, expression: &str, result: &str) {
        self.push(HistoryEntry { time:       Local::now(),
                                 expression: expression.to_string(),
                                 result:     result.to_string(), });
    }

    /// Appends an entry, dropping the oldest ones beyond the limit.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
    }

    /// The entry at `index`, counting from the oldest.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// The most recent entry.
    #[must_use]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Iterates over the entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_entries_are_dropped_past_the_limit() {
        let mut history = History::new();
        for i in 0..=HISTORY_LIMIT {
            history.record(&format!("{i}+0"), &i.to_string());
        }

        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.get(0).unwrap().expression, "1+0");
        assert_eq!(history.latest().unwrap().result, HISTORY_LIMIT.to_string());
    }

    #[test]
    fn display_matches_listing_layout() {
        let mut history = History::with_limit(1);
        history.record("2**3", "8");
        let line = history.latest().unwrap().to_string();

        assert!(line.ends_with("  |  2**3 = 8"), "{line}");
        assert_eq!(line.len(), "2024-01-01 00:00:00  |  2**3 = 8".len());
    }

    #[test]
    fn clear_empties_the_log() {
        let mut history = History::new();
        history.record("1", "1");
        history.clear();

        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }
}
