use std::cmp::{max, min};

/// Text selection between two char offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Start point of selection (anchor) - doesn't move
    pub anchor: usize,
    /// Active point (moves with cursor)
    pub active: usize,
}

impl Selection {
    /// Create a new selection
    pub fn new(anchor: usize, active: usize) -> Self {
        Self { anchor, active }
    }

    /// Start of selection (minimum position)
    pub fn start(&self) -> usize {
        min(self.anchor, self.active)
    }

    /// End of selection (maximum position)
    pub fn end(&self) -> usize {
        max(self.anchor, self.active)
    }

    /// Selection is empty (start == end)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Check if `pos` lies inside the selected range
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start() && pos < self.end()
    }
}
