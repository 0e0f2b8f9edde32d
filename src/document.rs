//! Editable document: buffer, undo history and highlighter kept in step.

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Instant;

use ratatui::style::Style;
use runedit_buffer::{EditKind, EditOperation, GapBuffer, History, Selection};
use runedit_config::{Config, EditorSettings};
use runedit_highlight::{Highlighter, Language, LanguageRegistry, Token};
use runedit_logger as logger;
use runedit_search::{self as search, Match, SearchDirection, SearchOptions};

/// Lines moved by page up/down until the viewport reports its height
pub const DEFAULT_PAGE_LINES: usize = 20;

/// Separators for word motion
fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

/// Character class used by word motions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Newline,
    Blank,
    Word,
    Punct,
}

impl CharClass {
    fn of(ch: char) -> Self {
        if ch == '\n' {
            CharClass::Newline
        } else if ch.is_whitespace() {
            CharClass::Blank
        } else if ch.is_alphanumeric() || ch == '_' {
            CharClass::Word
        } else {
            CharClass::Punct
        }
    }
}

/// Active search: query plus its matches in the current text
#[derive(Debug, Clone)]
struct SearchState {
    query: String,
    options: SearchOptions,
    matches: Vec<Match>,
    /// Text changed since `matches` was computed
    stale: bool,
}

/// A text document being edited.
///
/// Every edit goes through here so that the undo history and the highlight
/// cache always describe the current buffer contents.
#[derive(Debug, Clone)]
pub struct Document {
    buffer: GapBuffer,
    history: History,
    highlighter: Highlighter,
    settings: EditorSettings,
    modified: bool,
    read_only: bool,
    /// Render with the light palette
    light_theme: bool,
    /// Column kept across vertical moves
    preferred_column: Option<usize>,
    /// Selection anchor; the cursor is the active end
    selection_anchor: Option<usize>,
    /// Internal cut/copy register
    register: Option<String>,
    search: Option<SearchState>,
    page_lines: usize,
}

impl Document {
    /// Create an empty document.
    pub fn new(config: &Config) -> Self {
        let mut highlighter = Highlighter::new(None);
        highlighter.set_enabled(config.syntax.enabled);

        Self {
            buffer: GapBuffer::new(),
            history: History::with_limits(
                config.history.max_depth,
                config.history.merge_timeout(),
            ),
            highlighter,
            settings: config.editor.clone(),
            modified: false,
            read_only: false,
            light_theme: config.syntax.light_theme,
            preferred_column: None,
            selection_anchor: None,
            register: None,
            search: None,
            page_lines: DEFAULT_PAGE_LINES,
        }
    }

    /// Create a document holding `text`, cursor at the start.
    pub fn from_text(text: &str, config: &Config) -> Self {
        let mut doc = Self::new(config);
        doc.load(text);
        doc
    }

    /// Replace the whole contents.
    ///
    /// History, highlight cache, selection and search are cleared and the
    /// document counts as unmodified. The register survives.
    pub fn load(&mut self, text: &str) {
        self.buffer = GapBuffer::from_text(text);
        self.buffer.move_to_start();
        self.history.clear();
        self.highlighter.clear_cache();
        self.modified = false;
        self.preferred_column = None;
        self.selection_anchor = None;
        self.search = None;
        logger::debug(format!(
            "Loaded document: {} chars, {} lines",
            self.buffer.len(),
            self.buffer.line_count()
        ));
    }

    // ------------------------------------------------------------------
    // Language
    // ------------------------------------------------------------------

    pub fn set_language(&mut self, language: Option<Arc<Language>>) {
        match &language {
            Some(lang) => logger::debug(format!("Language set to {}", lang.name)),
            None => logger::debug("Language cleared"),
        }
        self.highlighter.set_language(language);
    }

    /// Pick the language for `filename` from `registry`.
    ///
    /// Returns `true` if a language was found.
    pub fn set_language_for(&mut self, filename: &str, registry: &LanguageRegistry) -> bool {
        let language = registry.detect_language(filename);
        let found = language.is_some();
        self.set_language(language);
        found
    }

    pub fn language(&self) -> Option<&Arc<Language>> {
        self.highlighter.language()
    }

    pub fn set_highlighting(&mut self, enabled: bool) {
        self.highlighter.set_enabled(enabled);
    }

    pub fn set_light_theme(&mut self, light: bool) {
        self.light_theme = light;
    }

    pub fn is_light_theme(&self) -> bool {
        self.light_theme
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    /// Insert `text` at the cursor.
    pub fn type_text(&mut self, text: &str) -> bool {
        if self.read_only || text.is_empty() {
            return false;
        }
        let op = EditOperation::insert(self.buffer.cursor(), text);
        self.apply(&op);
        self.record(op);
        true
    }

    pub fn type_char(&mut self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.type_text(ch.encode_utf8(&mut buf))
    }

    /// Split the line at the cursor.
    ///
    /// With auto-indent the new line starts with the current line's leading
    /// whitespace (up to the cursor).
    pub fn insert_newline(&mut self) -> bool {
        let mut text = String::from("\n");
        if self.settings.auto_indent {
            let column = self.buffer.current_column();
            let line = self.buffer.line_text(self.buffer.current_line());
            text.extend(
                line.chars()
                    .take(column)
                    .take_while(|&c| c == ' ' || c == '\t'),
            );
        }
        self.type_text(&text)
    }

    pub fn insert_tab(&mut self) -> bool {
        if self.settings.insert_spaces {
            let spaces = " ".repeat(self.settings.tab_size.max(1));
            self.type_text(&spaces)
        } else {
            self.type_text("\t")
        }
    }

    /// Delete the character before the cursor.
    pub fn delete_backward(&mut self) -> bool {
        let cursor = self.buffer.cursor();
        if cursor == 0 {
            return false;
        }
        self.delete_range(cursor - 1, cursor)
    }

    /// Delete the character under the cursor.
    pub fn delete_forward(&mut self) -> bool {
        let cursor = self.buffer.cursor();
        self.delete_range(cursor, cursor + 1)
    }

    /// Delete chars in `start..end` (clamped, either order) and leave the
    /// cursor at the start of the range.
    pub fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if self.read_only {
            return false;
        }
        let len = self.buffer.len();
        let (start, end) = (start.min(end).min(len), start.max(end).min(len));
        if start == end {
            return false;
        }
        if end - start > 1 {
            // The delete rules only line up single-char steps
            self.history.break_merge();
        }
        let op = EditOperation::delete(start, self.buffer.slice(start, end));
        self.apply(&op);
        self.record(op);
        true
    }

    /// Delete from the start of the previous word to the cursor.
    pub fn delete_word_left(&mut self) -> bool {
        let end = self.buffer.cursor();
        let start = self.word_start_before(end);
        self.delete_range(start, end)
    }

    /// Delete from the cursor to the start of the next word.
    pub fn delete_word_right(&mut self) -> bool {
        let start = self.buffer.cursor();
        let end = self.word_end_after(start);
        self.delete_range(start, end)
    }

    /// Range removed when `line` is deleted, line break included.
    fn line_span(&self, line: usize) -> Option<(usize, usize)> {
        let mut start = self.buffer.line_start(line)?;
        let mut end = self.buffer.line_end(line)?;

        if line + 1 < self.buffer.line_count() {
            end += 1;
        } else if line > 0 {
            // Last line: take the break before it instead
            start -= 1;
        }
        Some((start, end))
    }

    /// Delete the cursor's line including its line break.
    pub fn delete_line(&mut self) -> bool {
        let line = self.buffer.current_line();
        let Some((start, end)) = self.line_span(line) else {
            return false;
        };

        // Keep the line out of any neighbouring delete run
        self.history.break_merge();
        if !self.delete_range(start, end) {
            return false;
        }
        let target = line.min(self.buffer.line_count() - 1);
        if let Some(pos) = self.buffer.line_start(target) {
            self.buffer.move_to(pos);
        }
        true
    }

    /// Revert the most recent history entry.
    pub fn undo(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        let Some(op) = self.history.undo() else {
            return false;
        };
        logger::debug(format!("Undo {:?} at {}", op.kind, op.position));
        self.apply(&op.inverse());
        self.modified = true;
        self.preferred_column = None;
        true
    }

    /// Re-apply the most recently undone entry.
    pub fn redo(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        let Some(op) = self.history.redo() else {
            return false;
        };
        logger::debug(format!("Redo {:?} at {}", op.kind, op.position));
        self.apply(&op);
        self.modified = true;
        self.preferred_column = None;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Apply `op` to the buffer and invalidate the affected lines.
    ///
    /// The cursor ends after inserted text or at the deletion point.
    fn apply(&mut self, op: &EditOperation) {
        let line = self.buffer.line_of(op.position);
        self.buffer.move_to(op.position);
        match op.kind {
            EditKind::Insert => self.buffer.insert_text(&op.text),
            EditKind::Delete => {
                for _ in 0..op.char_len() {
                    self.buffer.delete_forward();
                }
            }
        }

        if op.text.contains('\n') {
            self.highlighter.invalidate_from_line(line);
        } else {
            self.highlighter.invalidate_line(line);
        }

        self.selection_anchor = None;
        if let Some(state) = self.search.as_mut() {
            state.stale = true;
        }
    }

    fn record(&mut self, op: EditOperation) {
        let depth = self.history.undo_depth();
        let merged = self.history.push_at(op, Instant::now());
        if !merged && self.history.undo_depth() == depth {
            logger::debug("Undo history full, dropped oldest entry");
        }
        self.modified = true;
        self.preferred_column = None;
    }

    fn word_start_before(&self, pos: usize) -> usize {
        let class_at = |p: usize| self.buffer.char_at(p).map(CharClass::of);
        let mut pos = pos;

        if pos > 0 && class_at(pos - 1) == Some(CharClass::Newline) {
            return pos - 1;
        }
        while pos > 0 && class_at(pos - 1) == Some(CharClass::Blank) {
            pos -= 1;
        }
        if let Some(class) = pos.checked_sub(1).and_then(class_at) {
            if class != CharClass::Newline {
                while pos > 0 && class_at(pos - 1) == Some(class) {
                    pos -= 1;
                }
            }
        }
        pos
    }

    fn word_end_after(&self, pos: usize) -> usize {
        let class_at = |p: usize| self.buffer.char_at(p).map(CharClass::of);
        let mut pos = pos;

        match class_at(pos) {
            None => return pos,
            Some(CharClass::Newline) => return pos + 1,
            Some(CharClass::Blank) => {}
            Some(class) => {
                while class_at(pos) == Some(class) {
                    pos += 1;
                }
            }
        }
        while class_at(pos) == Some(CharClass::Blank) {
            pos += 1;
        }
        pos
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn move_left(&mut self) {
        self.buffer.move_left();
        self.preferred_column = None;
    }

    pub fn move_right(&mut self) {
        self.buffer.move_right();
        self.preferred_column = None;
    }

    pub fn move_up(&mut self) {
        let line = self.buffer.current_line();
        if line > 0 {
            self.move_vertically(line - 1);
        }
    }

    pub fn move_down(&mut self) {
        let line = self.buffer.current_line();
        if line + 1 < self.buffer.line_count() {
            self.move_vertically(line + 1);
        }
    }

    /// Move to `target` line, keeping the preferred column where the line
    /// is long enough.
    fn move_vertically(&mut self, target: usize) {
        let column = self
            .preferred_column
            .unwrap_or_else(|| self.buffer.current_column());
        if let (Some(start), Some(end)) =
            (self.buffer.line_start(target), self.buffer.line_end(target))
        {
            self.buffer.move_to(start + column.min(end - start));
        }
        self.preferred_column = Some(column);
    }

    pub fn move_to_line_start(&mut self) {
        if let Some(pos) = self.buffer.line_start(self.buffer.current_line()) {
            self.buffer.move_to(pos);
        }
        self.preferred_column = None;
    }

    pub fn move_to_line_end(&mut self) {
        if let Some(pos) = self.buffer.line_end(self.buffer.current_line()) {
            self.buffer.move_to(pos);
        }
        self.preferred_column = None;
    }

    pub fn move_to_start(&mut self) {
        self.buffer.move_to_start();
        self.preferred_column = None;
    }

    pub fn move_to_end(&mut self) {
        self.buffer.move_to_end();
        self.preferred_column = None;
    }

    /// Move the cursor to `pos` (clamped).
    pub fn move_to(&mut self, pos: usize) {
        self.buffer.move_to(pos);
        self.preferred_column = None;
    }

    /// Move to the start of the previous word.
    pub fn move_word_left(&mut self) {
        let space_at = |p: usize| self.buffer.char_at(p).is_some_and(is_space);
        let mut pos = self.buffer.cursor();

        while pos > 0 && space_at(pos - 1) {
            pos -= 1;
        }
        while pos > 0 && !space_at(pos - 1) {
            pos -= 1;
        }
        self.move_to(pos);
    }

    /// Move to the start of the next word.
    pub fn move_word_right(&mut self) {
        let len = self.buffer.len();
        let space_at = |p: usize| self.buffer.char_at(p).is_some_and(is_space);
        let mut pos = self.buffer.cursor();

        while pos < len && !space_at(pos) {
            pos += 1;
        }
        while pos < len && space_at(pos) {
            pos += 1;
        }
        self.move_to(pos);
    }

    /// Lines moved by one page.
    pub fn page_lines(&self) -> usize {
        self.page_lines
    }

    /// Set the page size, normally the viewport height.
    pub fn set_page_lines(&mut self, lines: usize) {
        self.page_lines = lines.max(1);
    }

    /// Move one page up, to the start of the target line.
    pub fn page_up(&mut self) {
        let target = self.buffer.current_line().saturating_sub(self.page_lines);
        self.move_to_line_index(target);
    }

    /// Move one page down, to the start of the target line.
    pub fn page_down(&mut self) {
        let last = self.buffer.line_count().saturating_sub(1);
        let target = (self.buffer.current_line() + self.page_lines).min(last);
        self.move_to_line_index(target);
    }

    /// Jump to the start of 1-based line `number`, clamped to the last line.
    ///
    /// Returns the 1-based line reached, or `None` for line 0.
    pub fn go_to_line(&mut self, number: usize) -> Option<usize> {
        if number == 0 {
            return None;
        }
        let target = (number - 1).min(self.buffer.line_count().saturating_sub(1));
        self.move_to_line_index(target);
        logger::debug(format!("Go to line {}", target + 1));
        Some(target + 1)
    }

    fn move_to_line_index(&mut self, line: usize) {
        if let Some(pos) = self.buffer.line_start(line) {
            self.buffer.move_to(pos);
        }
        self.preferred_column = None;
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Current selection, from the anchor to the cursor.
    pub fn selection(&self) -> Option<Selection> {
        self.selection_anchor
            .map(|anchor| Selection::new(anchor, self.buffer.cursor()))
    }

    /// Start a selection at the cursor, or drop the active one.
    ///
    /// Returns `true` if a selection was started.
    pub fn toggle_selection(&mut self) -> bool {
        if self.selection_anchor.take().is_some() {
            return false;
        }
        self.selection_anchor = Some(self.buffer.cursor());
        true
    }

    /// Anchor a selection at the cursor unless one is active.
    pub fn start_selection(&mut self) {
        if self.selection_anchor.is_none() {
            self.selection_anchor = Some(self.buffer.cursor());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection_anchor = None;
    }

    /// Select the whole text, cursor at the end.
    pub fn select_all(&mut self) {
        self.selection_anchor = Some(0);
        self.move_to_end();
    }

    /// Selected text, or `None` without a non-empty selection.
    pub fn selected_text(&self) -> Option<String> {
        let selection = self.selection()?;
        if selection.is_empty() {
            return None;
        }
        Some(self.buffer.slice(selection.start(), selection.end()))
    }

    /// Copy the selection into the register and end the selection.
    pub fn copy_selection(&mut self) -> bool {
        let Some(text) = self.selected_text() else {
            return false;
        };
        self.register = Some(text);
        self.selection_anchor = None;
        true
    }

    /// Move the selected text into the register.
    pub fn cut_selection(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        let (Some(selection), Some(text)) = (self.selection(), self.selected_text()) else {
            return false;
        };
        self.history.break_merge();
        if !self.delete_range(selection.start(), selection.end()) {
            return false;
        }
        self.register = Some(text);
        true
    }

    // ------------------------------------------------------------------
    // Register
    // ------------------------------------------------------------------

    /// Text held by the cut/copy register.
    pub fn register(&self) -> Option<&str> {
        self.register.as_deref()
    }

    /// Cut the cursor's line into the register.
    ///
    /// The register gets the line break too, except for the last line.
    pub fn cut_line(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        let text = self.line_with_break(self.buffer.current_line());
        if !self.delete_line() {
            return false;
        }
        self.register = Some(text);
        true
    }

    /// Copy the cursor's line into the register.
    pub fn copy_line(&mut self) {
        self.register = Some(self.line_with_break(self.buffer.current_line()));
    }

    fn line_with_break(&self, line: usize) -> String {
        let mut text = self.buffer.line_text(line);
        if line + 1 < self.buffer.line_count() {
            text.push('\n');
        }
        text
    }

    /// Insert the register at the cursor as its own undo step.
    pub fn paste(&mut self) -> bool {
        if self.read_only {
            return false;
        }
        let Some(text) = self.register.clone().filter(|t| !t.is_empty()) else {
            return false;
        };
        self.history.break_merge();
        let pasted = self.type_text(&text);
        self.history.break_merge();
        pasted
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Search for `query` and jump to the first match at or after the
    /// cursor, wrapping around.
    ///
    /// Returns the number of matches. An empty query ends the search.
    pub fn find(&mut self, query: &str, options: SearchOptions) -> usize {
        if query.is_empty() {
            self.search = None;
            return 0;
        }
        self.search = Some(SearchState {
            query: query.to_string(),
            options,
            matches: Vec::new(),
            stale: true,
        });

        let cursor = self.buffer.cursor();
        let matches = self.search_matches();
        let count = matches.len();
        let target = search::find_closest(matches, cursor, SearchDirection::Forward)
            .map(|idx| matches[idx].start);
        if let Some(pos) = target {
            self.move_to(pos);
        }
        logger::debug(format!("Search {:?}: {} matches", query, count));
        count
    }

    /// Query of the active search.
    pub fn search_query(&self) -> Option<&str> {
        self.search.as_ref().map(|s| s.query.as_str())
    }

    /// Matches of the active search in the current text.
    pub fn search_matches(&mut self) -> &[Match] {
        self.refresh_search();
        self.search
            .as_ref()
            .map(|s| s.matches.as_slice())
            .unwrap_or_default()
    }

    pub fn clear_search(&mut self) {
        self.search = None;
    }

    /// Jump to the next match after the cursor, wrapping around.
    ///
    /// Returns the 1-based match number and the match count.
    pub fn find_next(&mut self) -> Option<(usize, usize)> {
        let cursor = self.buffer.cursor();
        let matches = self.search_matches();
        let idx = search::find_closest(matches, cursor + 1, SearchDirection::Forward)?;
        self.go_to_match(idx)
    }

    /// Jump to the previous match before the cursor, wrapping around.
    pub fn find_prev(&mut self) -> Option<(usize, usize)> {
        let cursor = self.buffer.cursor();
        let matches = self.search_matches();
        let idx = match cursor.checked_sub(1) {
            Some(pos) => search::find_closest(matches, pos, SearchDirection::Backward)?,
            None => matches.len().checked_sub(1)?,
        };
        self.go_to_match(idx)
    }

    fn go_to_match(&mut self, idx: usize) -> Option<(usize, usize)> {
        let matches = self.search_matches();
        let total = matches.len();
        let pos = matches.get(idx)?.start;
        self.move_to(pos);
        Some((idx + 1, total))
    }

    /// Replace the match at or after the cursor, then move to the next one.
    ///
    /// The deletion and the insertion are recorded as separate undo steps.
    pub fn replace_one(&mut self, replacement: &str) -> bool {
        if self.read_only {
            return false;
        }
        let cursor = self.buffer.cursor();
        let matches = self.search_matches();
        let Some(mat) = search::find_closest(matches, cursor, SearchDirection::Forward)
            .map(|idx| matches[idx])
        else {
            return false;
        };

        self.history.break_merge();
        let removed = EditOperation::delete(mat.start, self.buffer.slice(mat.start, mat.end()));
        self.apply(&removed);
        self.record(removed);
        if !replacement.is_empty() {
            self.history.break_merge();
            let inserted = EditOperation::insert(mat.start, replacement);
            self.apply(&inserted);
            self.record(inserted);
        }
        self.history.break_merge();

        let resume = mat.start + replacement.chars().count();
        let matches = self.search_matches();
        let next = search::find_closest(matches, resume, SearchDirection::Forward)
            .map(|idx| matches[idx].start);
        if let Some(pos) = next {
            self.move_to(pos);
        }
        true
    }

    /// Replace every match of the active search.
    ///
    /// The old text is deleted and the new text inserted as two undo
    /// steps. Returns the number of replacements.
    pub fn replace_all(&mut self, replacement: &str) -> usize {
        if self.read_only {
            return 0;
        }
        let Some(state) = &self.search else {
            return 0;
        };
        let content = self.buffer.to_string();
        let (replaced, count) =
            search::replace_all(&content, &state.query, replacement, &state.options);
        if replaced == content {
            return count;
        }

        let cursor = self.buffer.cursor();
        self.history.break_merge();
        let removed = EditOperation::delete(0, content);
        self.apply(&removed);
        self.record(removed);
        if !replaced.is_empty() {
            self.history.break_merge();
            let inserted = EditOperation::insert(0, replaced);
            self.apply(&inserted);
            self.record(inserted);
        }
        self.history.break_merge();
        self.move_to(cursor);

        logger::info(format!("Replaced {} occurrences", count));
        count
    }

    fn refresh_search(&mut self) {
        if let Some(state) = self.search.as_mut() {
            if state.stale {
                state.matches =
                    search::find_all(&self.buffer.to_string(), &state.query, &state.options);
                state.stale = false;
            }
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    pub fn line_text(&self, line: usize) -> String {
        self.buffer.line_text(line)
    }

    pub fn current_line(&self) -> usize {
        self.buffer.current_line()
    }

    pub fn current_column(&self) -> usize {
        self.buffer.current_column()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    // ------------------------------------------------------------------
    // Highlighting
    // ------------------------------------------------------------------

    /// Tokens for `line`, served from the cache when valid.
    pub fn line_tokens(&mut self, line: usize) -> Cow<'_, [Token]> {
        if line >= self.buffer.line_count() {
            return Cow::Owned(Vec::new());
        }
        let text = self.buffer.line_text(line);
        self.highlighter.highlight_line_cached(line, &text)
    }

    /// Styled segments for `line` in the document's palette.
    pub fn line_segments(&mut self, line: usize) -> Vec<(String, Style)> {
        let is_light = self.light_theme;
        self.line_tokens(line)
            .iter()
            .map(|token| (token.text.clone(), token.kind.style(is_light)))
            .collect()
    }
}
