//! Submitted-command history with arrow-key recall.
//!
//! Append-only and unbounded: duplicates are kept, nothing is rewritten.
//! The recall cursor walks entries newest-first; stepping past the newest
//! entry leaves browsing mode and empties the input.

/// Result of stepping the recall cursor toward newer entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recall<'a> {
    /// Replace the input with this entry.
    Entry(&'a str),
    /// Stepped past the newest entry: clear the input, stop browsing.
    Clear,
}

/// Command history and its recall cursor.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<String>,
    /// `None` = not browsing; `Some(i)` = input currently shows `entries[i]`.
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted submission. Recording resets the recall cursor;
    /// blank lines reset it without being stored.
    pub fn record(&mut self, line: &str) {
        self.cursor = None;
        if line.trim().is_empty() {
            return;
        }
        self.entries.push(line.to_string());
    }

    /// Step toward older entries. Returns the entry to show, or `None` when
    /// there is nothing older (input stays unchanged).
    pub fn recall_previous(&mut self) -> Option<&str> {
        let next = match self.cursor {
            None if self.entries.is_empty() => return None,
            None => self.entries.len() - 1,
            Some(0) => return None,
            Some(i) => i - 1,
        };
        self.cursor = Some(next);
        Some(&self.entries[next])
    }

    /// Step toward newer entries. `None` when not browsing.
    pub fn recall_next(&mut self) -> Option<Recall<'_>> {
        let i = self.cursor?;
        if i + 1 < self.entries.len() {
            self.cursor = Some(i + 1);
            Some(Recall::Entry(&self.entries[i + 1]))
        } else {
            self.cursor = None;
            Some(Recall::Clear)
        }
    }

    /// All recorded lines, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Whether the recall cursor is active.
    pub fn is_browsing(&self) -> bool {
        self.cursor.is_some()
    }

    /// Leave browsing mode without recording anything.
    pub fn stop_browsing(&mut self) {
        self.cursor = None;
    }
}
