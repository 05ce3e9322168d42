//! History-mode navigation tracking.
//!
//! # Data Flow
//! ```text
//! Navigator.push(path)
//!     → Base.location(path)         (base + path, as the address bar shows it)
//!     → History.push(location)      (new entry, forward entries dropped)
//!
//! Back / forward / start:
//!     → History.go(delta)           (cursor moves, entries kept)
//!     → Base.strip(location)        (route path, or NotFound outside the base)
//!     → Navigator resolves the route path
//! ```
//!
//! # Design Decisions
//! - Entries are address-bar locations and carry the base prefix
//! - Address-bar paths, never hash fragments
//! - Out-of-range moves are rejected and leave the cursor in place

pub mod base;
pub mod memory;

pub use base::Base;
pub use memory::MemoryHistory;

use std::fmt;

/// A stack of visited locations with a cursor, as a browser keeps one.
pub trait History: Send + fmt::Debug {
    /// The entry under the cursor.
    fn location(&self) -> &str;

    /// Add an entry after the cursor, discarding any forward entries.
    fn push(&mut self, location: &str);

    /// Overwrite the entry under the cursor.
    fn replace(&mut self, location: &str);

    /// Move the cursor by `delta`. Returns the new location, or `None` if the
    /// move would leave the recorded entries.
    fn go(&mut self, delta: isize) -> Option<&str>;

    /// Number of recorded entries.
    fn len(&self) -> usize;

    /// Index of the entry under the cursor.
    fn position(&self) -> usize;
}
