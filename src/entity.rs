use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A named-entity span: a contiguous, half-open run of token indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Entity type (`PERSON`, `ORG`, `GPE`, ...)
    pub label: String,
    /// First token index
    pub start: usize,
    /// One past the last token index
    pub end: usize,
}

impl EntitySpan {
    pub fn new(label: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            label: label.into(),
            start,
            end,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }
}
