//! Submitted-line history with an Up/Down recall cursor.
//!
//! The cursor ranges over `0..=len`; `len` means "past the newest entry",
//! which is where it sits after every push.

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.cursor = self.entries.len();
    }

    /// ArrowUp: step towards older entries, stopping at the oldest.
    /// `None` only when the history is empty.
    pub fn previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        self.cursor = self.cursor.saturating_sub(1);
        Some(&self.entries[self.cursor])
    }

    /// ArrowDown: step towards newer entries; past the newest yields `""`.
    pub fn next(&mut self) -> &str {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            &self.entries[self.cursor]
        } else {
            self.cursor = self.entries.len();
            ""
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
