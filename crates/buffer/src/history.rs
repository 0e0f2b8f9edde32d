use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default maximum number of undo entries
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Default window within which consecutive edits are merged
pub const DEFAULT_MERGE_TIMEOUT: Duration = Duration::from_millis(500);

/// Kind of edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Text insertion
    Insert,
    /// Text deletion
    Delete,
}

/// A reversible edit addressed by character offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOperation {
    pub kind: EditKind,
    /// Offset (in chars) where the edit starts
    pub position: usize,
    /// Inserted or deleted text
    pub text: String,
    /// When the edit was recorded (overwritten by `History::push`)
    pub timestamp: Instant,
}

impl EditOperation {
    /// Insertion of `text` at `position`
    pub fn insert(position: usize, text: impl Into<String>) -> Self {
        Self {
            kind: EditKind::Insert,
            position,
            text: text.into(),
            timestamp: Instant::now(),
        }
    }

    /// Deletion of `text` starting at `position`
    pub fn delete(position: usize, text: impl Into<String>) -> Self {
        Self {
            kind: EditKind::Delete,
            position,
            text: text.into(),
            timestamp: Instant::now(),
        }
    }

    /// Length of the edited text in chars
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Get inverse operation
    pub fn inverse(&self) -> EditOperation {
        let kind = match self.kind {
            EditKind::Insert => EditKind::Delete,
            EditKind::Delete => EditKind::Insert,
        };
        EditOperation {
            kind,
            position: self.position,
            text: self.text.clone(),
            timestamp: self.timestamp,
        }
    }
}

/// Edit history for undo/redo
#[derive(Debug, Clone)]
pub struct History {
    /// Operation stack for undo (oldest at the front)
    undo_stack: VecDeque<EditOperation>,
    /// Operation stack for redo
    redo_stack: Vec<EditOperation>,
    /// Maximum undo depth
    max_depth: usize,
    /// Consecutive edits closer than this are merged
    merge_timeout: Duration,
    /// Set by `break_merge`; the next push starts a new entry
    sealed: bool,
}

impl History {
    /// Create a history with default limits
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_MAX_DEPTH, DEFAULT_MERGE_TIMEOUT)
    }

    /// Create a history with the given depth and merge window
    pub fn with_limits(max_depth: usize, merge_timeout: Duration) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
            merge_timeout,
            sealed: false,
        }
    }

    /// Record an operation, stamped with the current time
    pub fn push(&mut self, op: EditOperation) {
        self.push_at(op, Instant::now());
    }

    /// Record an operation, stamped with `now`
    ///
    /// Returns `true` if the operation was merged into the previous entry.
    pub fn push_at(&mut self, mut op: EditOperation, now: Instant) -> bool {
        op.timestamp = now;

        // Any new edit forecloses redo
        self.redo_stack.clear();

        let sealed = std::mem::take(&mut self.sealed);
        if let Some(top) = self.undo_stack.back_mut() {
            if !sealed && Self::can_merge(top, &op, self.merge_timeout) {
                Self::merge(top, op);
                return true;
            }
        }

        self.undo_stack.push_back(op);

        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.pop_front();
        }
        false
    }

    /// Keep the next pushed operation out of the current undo entry.
    ///
    /// Only affects the next `push`; the merge rules are unchanged after it.
    pub fn break_merge(&mut self) {
        self.sealed = true;
    }

    /// Check if `op` can be merged into `top`
    fn can_merge(top: &EditOperation, op: &EditOperation, timeout: Duration) -> bool {
        if top.kind != op.kind {
            return false;
        }
        if op.timestamp.saturating_duration_since(top.timestamp) > timeout {
            return false;
        }

        match op.kind {
            // Typing continues right after the previous insertion
            EditKind::Insert => op.position == top.position + top.char_len(),
            // Backspace lands one before, Delete at the same position
            EditKind::Delete => op.position + 1 == top.position || op.position == top.position,
        }
    }

    /// Merge `op` into `top`
    fn merge(top: &mut EditOperation, op: EditOperation) {
        if op.kind == EditKind::Delete && op.position + 1 == top.position {
            top.text.insert_str(0, &op.text);
            top.position = op.position;
        } else {
            top.text.push_str(&op.text);
        }
        top.timestamp = op.timestamp;
    }

    /// Undo last operation
    ///
    /// Returns the operation as recorded; the caller applies its inverse.
    pub fn undo(&mut self) -> Option<EditOperation> {
        let op = self.undo_stack.pop_back()?;
        self.redo_stack.push(op.clone());
        Some(op)
    }

    /// Redo undone operation
    ///
    /// Returns the original operation; the caller re-applies it.
    pub fn redo(&mut self) -> Option<EditOperation> {
        let op = self.redo_stack.pop()?;
        // Not merged with whatever is on top
        self.undo_stack.push_back(op.clone());
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.pop_front();
        }
        Some(op)
    }

    /// Check if undo is possible
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is possible
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of entries on the undo stack
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of entries on the redo stack
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Merge window
    pub fn merge_timeout(&self) -> Duration {
        self.merge_timeout
    }

    /// Clear history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.sealed = false;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_simple_undo_redo() {
        let mut history = History::new();
        history.push(EditOperation::insert(0, "hello"));

        assert!(history.can_undo());
        assert!(!history.can_redo());

        let op = history.undo().unwrap();
        assert_eq!(op.kind, EditKind::Insert);
        assert_eq!(op.position, 0);
        assert_eq!(op.text, "hello");

        assert!(!history.can_undo());
        assert!(history.can_redo());

        let op = history.redo().unwrap();
        assert_eq!(op.kind, EditKind::Insert);
        assert_eq!(op.text, "hello");
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_empty_history() {
        let mut history = History::new();
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_merge_typing_within_window() {
        let mut history = History::with_limits(DEFAULT_MAX_DEPTH, ms(500));
        let t0 = Instant::now();

        assert!(!history.push_at(EditOperation::insert(0, "H"), t0));
        assert!(history.push_at(EditOperation::insert(1, "e"), t0 + ms(10)));

        assert_eq!(history.undo_depth(), 1);
        let op = history.undo().unwrap();
        assert_eq!(op.kind, EditKind::Insert);
        assert_eq!(op.position, 0);
        assert_eq!(op.text, "He");
    }

    #[test]
    fn test_merge_counts_chars_not_bytes() {
        let mut history = History::new();
        let t0 = Instant::now();
        history.push_at(EditOperation::insert(0, "ğü"), t0);
        history.push_at(EditOperation::insert(2, "x"), t0 + ms(5));
        assert_eq!(history.undo_depth(), 1);
        assert_eq!(history.undo().unwrap().text, "ğüx");
    }

    #[test]
    fn test_window_extends_while_typing() {
        let mut history = History::with_limits(DEFAULT_MAX_DEPTH, ms(500));
        let t0 = Instant::now();
        history.push_at(EditOperation::insert(0, "a"), t0);
        history.push_at(EditOperation::insert(1, "b"), t0 + ms(400));
        history.push_at(EditOperation::insert(2, "c"), t0 + ms(800));
        assert_eq!(history.undo_depth(), 1);
    }

    #[test]
    fn test_timeout_breaks_merge() {
        let mut history = History::with_limits(DEFAULT_MAX_DEPTH, ms(500));
        let t0 = Instant::now();
        history.push_at(EditOperation::insert(0, "a"), t0);
        history.push_at(EditOperation::insert(1, "b"), t0 + ms(501));
        assert_eq!(history.undo_depth(), 2);
    }

    #[test]
    fn test_non_sequential_insert_not_merged() {
        let mut history = History::new();
        let t0 = Instant::now();
        history.push_at(EditOperation::insert(0, "ab"), t0);
        history.push_at(EditOperation::insert(1, "x"), t0 + ms(1));
        assert_eq!(history.undo_depth(), 2);
    }

    #[test]
    fn test_merge_backspace_run() {
        let mut history = History::new();
        let t0 = Instant::now();

        history.push_at(EditOperation::delete(3, "l"), t0);
        history.push_at(EditOperation::delete(2, "l"), t0 + ms(1));
        history.push_at(EditOperation::delete(1, "e"), t0 + ms(2));

        assert_eq!(history.undo_depth(), 1);
        let op = history.undo().unwrap();
        assert_eq!(op.kind, EditKind::Delete);
        assert_eq!(op.position, 1);
        assert_eq!(op.text, "ell");
    }

    #[test]
    fn test_merge_forward_delete_run() {
        let mut history = History::new();
        let t0 = Instant::now();

        history.push_at(EditOperation::delete(2, "a"), t0);
        history.push_at(EditOperation::delete(2, "b"), t0 + ms(1));
        history.push_at(EditOperation::delete(2, "c"), t0 + ms(2));

        assert_eq!(history.undo_depth(), 1);
        let op = history.undo().unwrap();
        assert_eq!(op.position, 2);
        assert_eq!(op.text, "abc");
    }

    #[test]
    fn test_forward_delete_after_backspace_appends() {
        let mut history = History::new();
        let t0 = Instant::now();

        // Backspace at 5 then 4, then Delete at 4
        history.push_at(EditOperation::delete(5, "x"), t0);
        assert!(history.push_at(EditOperation::delete(4, "y"), t0 + ms(1)));
        assert!(history.push_at(EditOperation::delete(4, "z"), t0 + ms(2)));

        assert_eq!(history.undo_depth(), 1);
        let op = history.undo().unwrap();
        assert_eq!(op.position, 4);
        assert_eq!(op.text, "yxz");
    }

    #[test]
    fn test_delete_merge_checks_start_position_only() {
        let mut history = History::new();
        let t0 = Instant::now();

        // Starts one before the previous deletion
        history.push_at(EditOperation::delete(5, "x"), t0);
        assert!(history.push_at(EditOperation::delete(4, "ab"), t0 + ms(1)));
        let op = history.undo().unwrap();
        assert_eq!(op.position, 4);
        assert_eq!(op.text, "abx");

        // Two before: kept apart
        history.push_at(EditOperation::delete(5, "x"), t0 + ms(10));
        assert!(!history.push_at(EditOperation::delete(3, "ab"), t0 + ms(11)));
        assert_eq!(history.undo_depth(), 2);
    }

    #[test]
    fn test_break_merge_starts_new_entry() {
        let mut history = History::new();
        let t0 = Instant::now();

        history.push_at(EditOperation::insert(0, "a"), t0);
        history.break_merge();
        assert!(!history.push_at(EditOperation::insert(1, "b"), t0 + ms(1)));
        // Only the next push is affected
        assert!(history.push_at(EditOperation::insert(2, "c"), t0 + ms(2)));

        assert_eq!(history.undo_depth(), 2);
        assert_eq!(history.undo().unwrap().text, "bc");
        assert_eq!(history.undo().unwrap().text, "a");
    }

    #[test]
    fn test_insert_and_delete_not_merged() {
        let mut history = History::new();
        let t0 = Instant::now();
        history.push_at(EditOperation::insert(0, "a"), t0);
        history.push_at(EditOperation::delete(0, "a"), t0 + ms(1));
        assert_eq!(history.undo_depth(), 2);
    }

    #[test]
    fn test_push_clears_redo() {
        let mut history = History::new();
        let t0 = Instant::now();
        history.push_at(EditOperation::insert(0, "a"), t0);
        history.undo();
        assert!(history.can_redo());

        history.push_at(EditOperation::insert(0, "b"), t0 + ms(1000));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_redo_is_not_merged() {
        let mut history = History::new();
        let t0 = Instant::now();
        history.push_at(EditOperation::insert(0, "a"), t0);
        history.push_at(EditOperation::insert(5, "b"), t0 + ms(1));
        history.undo();
        history.redo();
        assert_eq!(history.undo_depth(), 2);
    }

    #[test]
    fn test_max_depth_drops_oldest() {
        let mut history = History::with_limits(3, ms(0));
        let t0 = Instant::now();
        for i in 0..5u64 {
            // Non-adjacent positions never merge
            history.push_at(EditOperation::insert(i as usize * 10, "x"), t0 + ms(i * 10));
        }
        assert_eq!(history.undo_depth(), 3);
        assert_eq!(history.undo().unwrap().position, 40);
        assert_eq!(history.undo().unwrap().position, 30);
        assert_eq!(history.undo().unwrap().position, 20);
        assert!(history.undo().is_none());
    }

    #[test]
    fn test_inverse() {
        let op = EditOperation::insert(3, "abc");
        let inv = op.inverse();
        assert_eq!(inv.kind, EditKind::Delete);
        assert_eq!(inv.position, 3);
        assert_eq!(inv.text, "abc");
        assert_eq!(inv.inverse().kind, EditKind::Insert);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.push(EditOperation::insert(0, "a"));
        history.push(EditOperation::insert(10, "b"));
        history.undo();
        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
