//! In-process history stack.

use super::History;

/// History kept in memory.
///
/// Behaves like the browser's session history for a single tab: pushing
/// truncates forward entries, moving the cursor keeps them.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    /// A history opened at the root.
    pub fn new() -> Self {
        Self::starting_at("/")
    }

    /// A history opened directly on `location`, e.g. a shared deep link such
    /// as `/app/about`.
    pub fn starting_at(location: impl Into<String>) -> Self {
        Self {
            entries: vec![location.into()],
            cursor: 0,
        }
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl History for MemoryHistory {
    fn location(&self) -> &str {
        &self.entries[self.cursor]
    }

    fn push(&mut self, location: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(location.to_string());
        self.cursor = self.entries.len() - 1;
    }

    fn replace(&mut self, location: &str) {
        self.entries[self.cursor] = location.to_string();
    }

    fn go(&mut self, delta: isize) -> Option<&str> {
        let target = self.cursor.checked_add_signed(delta)?;
        if target >= self.entries.len() {
            return None;
        }
        self.cursor = target;
        Some(self.location())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn position(&self) -> usize {
        self.cursor
    }
}
