//! Gap buffer addressed in Unicode scalar values.
//!
//! The buffer keeps an unused region (the gap) at the cursor, so typing and
//! deleting at the cursor never shifts the rest of the document:
//!
//! ```text
//!  [ text before cursor | gap (unused) | text after cursor ]
//!    0..gap_start         gap_start..gap_end  gap_end..capacity
//! ```
//!
//! The cursor offset is always `gap_start`. All offsets and lengths are
//! counted in `char`s, never bytes, so column arithmetic stays correct for
//! multi-byte text.

use std::fmt;

/// Size of the gap for a fresh buffer, and the minimum growth step.
pub const DEFAULT_GAP_SIZE: usize = 64;

/// Filler for unused gap slots. Never visible through the public API.
const GAP_FILL: char = '\0';

/// Gap buffer holding the text of one document plus its cursor.
#[derive(Clone)]
pub struct GapBuffer {
    /// Backing store, gap included
    data: Vec<char>,
    /// First slot of the gap (cursor position)
    gap_start: usize,
    /// First slot after the gap
    gap_end: usize,
}

impl GapBuffer {
    /// Create an empty buffer with the default gap.
    pub fn new() -> Self {
        Self {
            data: vec![GAP_FILL; DEFAULT_GAP_SIZE],
            gap_start: 0,
            gap_end: DEFAULT_GAP_SIZE,
        }
    }

    /// Create a buffer seeded with `text`.
    ///
    /// The cursor is placed at the end of the text, so the whole default gap
    /// is available for appending.
    pub fn from_text(text: &str) -> Self {
        let mut data: Vec<char> = text.chars().collect();
        let len = data.len();
        data.resize(len + DEFAULT_GAP_SIZE, GAP_FILL);

        Self {
            data,
            gap_start: len,
            gap_end: len + DEFAULT_GAP_SIZE,
        }
    }

    // ------------------------------------------------------------------
    // Editing at the cursor
    // ------------------------------------------------------------------

    /// Insert a character at the cursor and advance past it.
    pub fn insert(&mut self, ch: char) {
        if self.gap_len() == 0 {
            self.grow(1);
        }
        self.data[self.gap_start] = ch;
        self.gap_start += 1;
    }

    /// Insert a string at the cursor and advance past it.
    ///
    /// The gap is grown at most once, up front.
    pub fn insert_text(&mut self, text: &str) {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() > self.gap_len() {
            self.grow(chars.len());
        }
        let end = self.gap_start + chars.len();
        self.data[self.gap_start..end].copy_from_slice(&chars);
        self.gap_start = end;
    }

    /// Delete the character before the cursor (backspace).
    ///
    /// Returns the removed character, or `None` at the start of the buffer.
    pub fn delete_backward(&mut self) -> Option<char> {
        if self.gap_start == 0 {
            return None;
        }
        self.gap_start -= 1;
        Some(self.data[self.gap_start])
    }

    /// Delete the character after the cursor (delete key).
    ///
    /// Returns the removed character, or `None` at the end of the buffer.
    pub fn delete_forward(&mut self) -> Option<char> {
        if self.gap_end == self.data.len() {
            return None;
        }
        let ch = self.data[self.gap_end];
        self.gap_end += 1;
        Some(ch)
    }

    // ------------------------------------------------------------------
    // Cursor movement
    // ------------------------------------------------------------------

    /// Move the cursor one character left. Returns `false` at the start.
    pub fn move_left(&mut self) -> bool {
        if self.gap_start == 0 {
            return false;
        }
        self.gap_start -= 1;
        self.gap_end -= 1;
        self.data[self.gap_end] = self.data[self.gap_start];
        true
    }

    /// Move the cursor one character right. Returns `false` at the end.
    pub fn move_right(&mut self) -> bool {
        if self.gap_end == self.data.len() {
            return false;
        }
        self.data[self.gap_start] = self.data[self.gap_end];
        self.gap_start += 1;
        self.gap_end += 1;
        true
    }

    /// Move the cursor to `pos`, clamped to `[0, len()]`.
    ///
    /// Cost is proportional to the distance travelled.
    pub fn move_to(&mut self, pos: usize) {
        let target = pos.min(self.len());
        if target < self.gap_start {
            // Shift data[target..gap_start] to the far side of the gap.
            let count = self.gap_start - target;
            self.data
                .copy_within(target..self.gap_start, self.gap_end - count);
            self.gap_start = target;
            self.gap_end -= count;
        } else if target > self.gap_start {
            let count = target - self.gap_start;
            self.data
                .copy_within(self.gap_end..self.gap_end + count, self.gap_start);
            self.gap_start += count;
            self.gap_end += count;
        }
    }

    /// Move the cursor to the beginning of the buffer.
    pub fn move_to_start(&mut self) {
        self.move_to(0);
    }

    /// Move the cursor to the end of the buffer.
    pub fn move_to_end(&mut self) {
        self.move_to(self.len());
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Number of characters in the buffer.
    pub fn len(&self) -> usize {
        self.data.len() - self.gap_len()
    }

    /// Check if the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cursor offset in characters.
    pub fn cursor(&self) -> usize {
        self.gap_start
    }

    /// Character at `pos`, or `None` when out of range.
    pub fn char_at(&self, pos: usize) -> Option<char> {
        if pos >= self.len() {
            return None;
        }
        if pos < self.gap_start {
            Some(self.data[pos])
        } else {
            Some(self.data[pos + self.gap_len()])
        }
    }

    /// Text between `start` and `end`, both clamped to the buffer.
    ///
    /// Returns an empty string when the clamped range is empty.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let len = self.len();
        let start = start.min(len);
        let end = end.min(len);
        if end <= start {
            return String::new();
        }
        self.chars().skip(start).take(end - start).collect()
    }

    /// Iterate over the visible characters.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.data[..self.gap_start]
            .iter()
            .chain(self.data[self.gap_end..].iter())
            .copied()
    }

    /// Number of lines (newline count + 1).
    pub fn line_count(&self) -> usize {
        self.chars().filter(|&c| c == '\n').count() + 1
    }

    /// Offset of the first character of line `line`, or `None` if the line
    /// does not exist.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        if line == 0 {
            return Some(0);
        }
        let mut seen = 0;
        for (pos, ch) in self.chars().enumerate() {
            if ch == '\n' {
                seen += 1;
                if seen == line {
                    return Some(pos + 1);
                }
            }
        }
        None
    }

    /// Offset one past the last character of line `line` (the position of its
    /// newline, or `len()` for the last line), or `None` if the line does not
    /// exist.
    pub fn line_end(&self, line: usize) -> Option<usize> {
        let start = self.line_start(line)?;
        let end = self
            .chars()
            .skip(start)
            .position(|c| c == '\n')
            .map_or(self.len(), |offset| start + offset);
        Some(end)
    }

    /// Text of line `line` without its newline; empty when out of range.
    pub fn line_text(&self, line: usize) -> String {
        match (self.line_start(line), self.line_end(line)) {
            (Some(start), Some(end)) => self.slice(start, end),
            _ => String::new(),
        }
    }

    /// Line index containing offset `pos` (clamped to the buffer).
    pub fn line_of(&self, pos: usize) -> usize {
        let pos = pos.min(self.len());
        self.chars().take(pos).filter(|&c| c == '\n').count()
    }

    /// Line index of the cursor.
    pub fn current_line(&self) -> usize {
        self.data[..self.gap_start]
            .iter()
            .filter(|&&c| c == '\n')
            .count()
    }

    /// Column of the cursor, in characters from the start of its line.
    pub fn current_column(&self) -> usize {
        let before = &self.data[..self.gap_start];
        match before.iter().rposition(|&c| c == '\n') {
            Some(newline) => self.gap_start - newline - 1,
            None => self.gap_start,
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Enlarge the backing store so the gap can hold at least `needed` more
    /// characters, keeping the gap at the cursor.
    fn grow(&mut self, needed: usize) {
        let extra = needed.max(DEFAULT_GAP_SIZE);
        let old_capacity = self.data.len();
        let new_capacity = old_capacity + extra;
        let tail_len = old_capacity - self.gap_end;

        let mut data = vec![GAP_FILL; new_capacity];
        data[..self.gap_start].copy_from_slice(&self.data[..self.gap_start]);
        data[new_capacity - tail_len..].copy_from_slice(&self.data[self.gap_end..]);

        self.data = data;
        self.gap_end = new_capacity - tail_len;
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.chars().collect();
        f.write_str(&text)
    }
}

impl fmt::Debug for GapBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GapBuffer")
            .field("text", &self.to_string())
            .field("gap_start", &self.gap_start)
            .field("gap_end", &self.gap_end)
            .field("capacity", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_gap_invariant(buf: &GapBuffer) {
        assert!(buf.gap_start <= buf.gap_end);
        assert!(buf.gap_end <= buf.data.len());
        assert_eq!(buf.len(), buf.data.len() - (buf.gap_end - buf.gap_start));
        assert_eq!(buf.cursor(), buf.gap_start);
    }

    #[test]
    fn test_new_buffer() {
        let buf = GapBuffer::new();
        assert_eq!(buf.len(), 0);
        assert!(buf.is_empty());
        assert_eq!(buf.gap_start, 0);
        assert_eq!(buf.gap_end, DEFAULT_GAP_SIZE);
        assert_eq!(buf.line_count(), 1);
        assert_gap_invariant(&buf);
    }

    #[test]
    fn test_from_text_places_cursor_at_end() {
        let buf = GapBuffer::from_text("Merhaba dünya");
        assert_eq!(buf.len(), 13);
        assert_eq!(buf.cursor(), 13);
        assert_eq!(buf.data.len(), 13 + DEFAULT_GAP_SIZE);
        assert_eq!(buf.to_string(), "Merhaba dünya");
        assert_gap_invariant(&buf);
    }

    #[test]
    fn test_emoji_counts_as_one_char() {
        let buf = GapBuffer::from_text("Hello 🌍");
        assert_eq!(buf.len(), 7);
        assert_eq!(buf.char_at(6), Some('🌍'));
    }

    #[test]
    fn test_insert_delete_scenario() {
        let mut buf = GapBuffer::new();
        buf.insert_text("Hello");
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.to_string(), "Hello");

        assert_eq!(buf.delete_backward(), Some('o'));
        assert_eq!(buf.to_string(), "Hell");

        assert_eq!(buf.delete_forward(), None);
        assert_eq!(buf.to_string(), "Hell");

        buf.move_to(0);
        assert_eq!(buf.cursor(), 0);

        assert_eq!(buf.delete_forward(), Some('H'));
        assert_eq!(buf.to_string(), "ell");
        assert_gap_invariant(&buf);
    }

    #[test]
    fn test_delete_backward_at_start() {
        let mut buf = GapBuffer::from_text("abc");
        buf.move_to_start();
        assert_eq!(buf.delete_backward(), None);
        assert_eq!(buf.to_string(), "abc");
    }

    #[test]
    fn test_insert_in_middle() {
        let mut buf = GapBuffer::from_text("Hllo");
        buf.move_to(1);
        buf.insert('e');
        assert_eq!(buf.to_string(), "Hello");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_gap_grows_on_single_inserts() {
        let mut buf = GapBuffer::new();
        for _ in 0..DEFAULT_GAP_SIZE {
            buf.insert('x');
        }
        assert_eq!(buf.gap_start, buf.gap_end);

        buf.insert('y');
        assert_eq!(buf.len(), DEFAULT_GAP_SIZE + 1);
        assert_eq!(buf.data.len(), 2 * DEFAULT_GAP_SIZE);
        assert_gap_invariant(&buf);
    }

    #[test]
    fn test_gap_grows_once_for_long_text() {
        let mut buf = GapBuffer::from_text("ab");
        buf.move_to(1);
        let long: String = std::iter::repeat('z').take(200).collect();
        buf.insert_text(&long);

        assert_eq!(buf.len(), 202);
        assert_eq!(buf.cursor(), 201);
        assert!(buf.to_string().starts_with("azz"));
        assert!(buf.to_string().ends_with("zb"));
        assert_gap_invariant(&buf);
    }

    #[test]
    fn test_move_left_right() {
        let mut buf = GapBuffer::from_text("ab");
        assert!(!buf.move_right());
        assert!(buf.move_left());
        assert!(buf.move_left());
        assert!(!buf.move_left());
        assert_eq!(buf.cursor(), 0);
        assert!(buf.move_right());
        assert_eq!(buf.cursor(), 1);
        assert_eq!(buf.to_string(), "ab");
        assert_gap_invariant(&buf);
    }

    #[test]
    fn test_move_to_clamps() {
        let mut buf = GapBuffer::from_text("hello");
        buf.move_to(2);
        assert_eq!(buf.cursor(), 2);
        buf.move_to(999);
        assert_eq!(buf.cursor(), 5);
        buf.move_to_start();
        assert_eq!(buf.cursor(), 0);
        buf.move_to_end();
        assert_eq!(buf.cursor(), 5);
        assert_eq!(buf.to_string(), "hello");
    }

    #[test]
    fn test_char_at_across_gap() {
        let mut buf = GapBuffer::from_text("abcd");
        buf.move_to(2);
        assert_eq!(buf.char_at(0), Some('a'));
        assert_eq!(buf.char_at(2), Some('c'));
        assert_eq!(buf.char_at(3), Some('d'));
        assert_eq!(buf.char_at(4), None);
    }

    #[test]
    fn test_slice_clamping() {
        let mut buf = GapBuffer::from_text("hello world");
        buf.move_to(3);
        assert_eq!(buf.slice(0, 5), "hello");
        assert_eq!(buf.slice(6, 100), "world");
        assert_eq!(buf.slice(5, 5), "");
        assert_eq!(buf.slice(8, 2), "");
        assert_eq!(buf.slice(50, 60), "");
    }

    #[test]
    fn test_lines() {
        let buf = GapBuffer::from_text("one\ntwo\n\nfour");
        assert_eq!(buf.line_count(), 4);
        assert_eq!(buf.line_start(0), Some(0));
        assert_eq!(buf.line_start(1), Some(4));
        assert_eq!(buf.line_start(3), Some(9));
        assert_eq!(buf.line_start(4), None);
        assert_eq!(buf.line_end(0), Some(3));
        assert_eq!(buf.line_end(2), Some(8));
        assert_eq!(buf.line_end(3), Some(13));
        assert_eq!(buf.line_end(4), None);
        assert_eq!(buf.line_text(1), "two");
        assert_eq!(buf.line_text(2), "");
        assert_eq!(buf.line_text(3), "four");
        assert_eq!(buf.line_text(10), "");
    }

    #[test]
    fn test_trailing_newline_adds_empty_line() {
        let buf = GapBuffer::from_text("a\n");
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line_start(1), Some(2));
        assert_eq!(buf.line_end(1), Some(2));
    }

    #[test]
    fn test_current_line_and_column() {
        let mut buf = GapBuffer::from_text("ab\nçde\nf");
        buf.move_to(5);
        assert_eq!(buf.current_line(), 1);
        assert_eq!(buf.current_column(), 2);
        buf.move_to(0);
        assert_eq!(buf.current_line(), 0);
        assert_eq!(buf.current_column(), 0);
        buf.move_to_end();
        assert_eq!(buf.current_line(), 2);
        assert_eq!(buf.current_column(), 1);
    }

    #[test]
    fn test_line_of() {
        let buf = GapBuffer::from_text("ab\ncd\nef");
        assert_eq!(buf.line_of(0), 0);
        assert_eq!(buf.line_of(2), 0);
        assert_eq!(buf.line_of(3), 1);
        assert_eq!(buf.line_of(100), 2);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Insert(char),
            InsertText(String),
            Backspace,
            Delete,
            Left,
            Right,
            MoveTo(usize),
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                any::<char>().prop_map(Op::Insert),
                ".{0,80}".prop_map(Op::InsertText),
                Just(Op::Backspace),
                Just(Op::Delete),
                Just(Op::Left),
                Just(Op::Right),
                (0usize..200).prop_map(Op::MoveTo),
            ]
        }

        /// Byte index of char offset `pos` in `s`.
        fn byte_index(s: &str, pos: usize) -> usize {
            s.char_indices().nth(pos).map_or(s.len(), |(i, _)| i)
        }

        proptest! {
            /// The buffer behaves like a String plus a cursor
            #[test]
            fn matches_string_model(
                initial in ".{0,40}",
                ops in prop::collection::vec(op_strategy(), 0..120)
            ) {
                let mut buf = GapBuffer::from_text(&initial);
                let mut model = initial.clone();
                let mut cursor = model.chars().count();

                for op in ops {
                    match op {
                        Op::Insert(ch) => {
                            buf.insert(ch);
                            model.insert(byte_index(&model, cursor), ch);
                            cursor += 1;
                        }
                        Op::InsertText(text) => {
                            buf.insert_text(&text);
                            model.insert_str(byte_index(&model, cursor), &text);
                            cursor += text.chars().count();
                        }
                        Op::Backspace => {
                            let expected = if cursor > 0 {
                                cursor -= 1;
                                Some(model.remove(byte_index(&model, cursor)))
                            } else {
                                None
                            };
                            prop_assert_eq!(buf.delete_backward(), expected);
                        }
                        Op::Delete => {
                            let expected = if cursor < model.chars().count() {
                                Some(model.remove(byte_index(&model, cursor)))
                            } else {
                                None
                            };
                            prop_assert_eq!(buf.delete_forward(), expected);
                        }
                        Op::Left => {
                            prop_assert_eq!(buf.move_left(), cursor > 0);
                            cursor = cursor.saturating_sub(1);
                        }
                        Op::Right => {
                            let len = model.chars().count();
                            prop_assert_eq!(buf.move_right(), cursor < len);
                            cursor = (cursor + 1).min(len);
                        }
                        Op::MoveTo(pos) => {
                            buf.move_to(pos);
                            cursor = pos.min(model.chars().count());
                        }
                    }

                    prop_assert!(buf.gap_start <= buf.gap_end);
                    prop_assert!(buf.gap_end <= buf.data.len());
                    prop_assert_eq!(buf.cursor(), cursor);
                    prop_assert_eq!(buf.len(), model.chars().count());
                }

                prop_assert_eq!(buf.to_string(), model);
            }
        }
    }
}
