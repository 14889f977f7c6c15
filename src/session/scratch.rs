//! Scratchpad history: the last few side-channel word checks

use crate::core::{RowHints, Word};
use std::collections::VecDeque;

/// Entries kept before the oldest is evicted
pub const SCRATCH_CAPACITY: usize = 7;

/// A word checked on the scratchpad and the hints it produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchEntry {
    pub word: Word,
    pub hints: RowHints,
}

/// FIFO ring of scratchpad results, never longer than [`SCRATCH_CAPACITY`]
#[derive(Debug, Clone, Default)]
pub struct ScratchHistory {
    entries: VecDeque<ScratchEntry>,
}

impl ScratchHistory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(SCRATCH_CAPACITY + 1),
        }
    }

    /// Append an entry, returning the one evicted to make room (if any)
    pub fn push(&mut self, entry: ScratchEntry) -> Option<ScratchEntry> {
        self.entries.push_back(entry);
        if self.entries.len() > SCRATCH_CAPACITY {
            self.entries.pop_front()
        } else {
            None
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ScratchEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&ScratchEntry> {
        self.entries.back()
    }
}
