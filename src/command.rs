//! Keyboard command handling.
//!
//! Key parsing is kept apart from execution so bindings can be tested
//! without a document.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::Document;

/// Editing action triggered by a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    // Navigation
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveWordLeft,
    MoveWordRight,
    MoveToLineStart,
    MoveToLineEnd,
    MoveToDocumentStart,
    MoveToDocumentEnd,
    PageUp,
    PageDown,
    /// Jump to a 1-based line, usually entered at a prompt
    GoToLine(usize),

    // Selection
    SelectLeft,
    SelectRight,
    SelectUp,
    SelectDown,
    ToggleSelection,
    SelectAll,

    // Text editing
    InsertChar(char),
    InsertNewline,
    InsertTab,
    Backspace,
    Delete,
    DeleteWordLeft,
    DeleteWordRight,
    DeleteLine,

    // Register
    /// Cut the selection, or the line without one
    Cut,
    /// Copy the selection, or the line without one
    Copy,
    Paste,

    // Search
    FindNext,
    FindPrev,

    // Undo/Redo
    Undo,
    Redo,
}

impl EditCommand {
    /// Parse a key event.
    ///
    /// Returns `None` for unbound keys, and for editing keys when
    /// `read_only` is set.
    pub fn from_key_event(key: KeyEvent, read_only: bool) -> Option<Self> {
        let command = match (key.code, key.modifiers) {
            (KeyCode::Left, KeyModifiers::NONE) => Self::MoveLeft,
            (KeyCode::Right, KeyModifiers::NONE) => Self::MoveRight,
            (KeyCode::Up, KeyModifiers::NONE) => Self::MoveUp,
            (KeyCode::Down, KeyModifiers::NONE) => Self::MoveDown,
            (KeyCode::Left, KeyModifiers::CONTROL) => Self::MoveWordLeft,
            (KeyCode::Right, KeyModifiers::CONTROL) => Self::MoveWordRight,
            (KeyCode::Home, KeyModifiers::NONE) => Self::MoveToLineStart,
            (KeyCode::End, KeyModifiers::NONE) => Self::MoveToLineEnd,
            (KeyCode::Home, KeyModifiers::CONTROL) => Self::MoveToDocumentStart,
            (KeyCode::End, KeyModifiers::CONTROL) => Self::MoveToDocumentEnd,
            (KeyCode::PageUp, KeyModifiers::NONE) => Self::PageUp,
            (KeyCode::PageDown, KeyModifiers::NONE) => Self::PageDown,

            (KeyCode::Left, KeyModifiers::SHIFT) => Self::SelectLeft,
            (KeyCode::Right, KeyModifiers::SHIFT) => Self::SelectRight,
            (KeyCode::Up, KeyModifiers::SHIFT) => Self::SelectUp,
            (KeyCode::Down, KeyModifiers::SHIFT) => Self::SelectDown,
            (KeyCode::Char('a'), KeyModifiers::ALT) | (KeyCode::Char('6'), KeyModifiers::CONTROL) => {
                Self::ToggleSelection
            }
            (KeyCode::Char('a'), KeyModifiers::CONTROL) => Self::SelectAll,

            (KeyCode::Char(ch), KeyModifiers::NONE | KeyModifiers::SHIFT) => Self::InsertChar(ch),
            (KeyCode::Enter, KeyModifiers::NONE) => Self::InsertNewline,
            (KeyCode::Tab, KeyModifiers::NONE) => Self::InsertTab,
            (KeyCode::Backspace, KeyModifiers::NONE) => Self::Backspace,
            (KeyCode::Delete, KeyModifiers::NONE) => Self::Delete,
            (KeyCode::Backspace, KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                Self::DeleteWordLeft
            }
            (KeyCode::Delete, KeyModifiers::CONTROL) => Self::DeleteWordRight,
            (KeyCode::Char('K'), mods) if mods == KeyModifiers::CONTROL | KeyModifiers::SHIFT => {
                Self::DeleteLine
            }

            (KeyCode::Char('k'), KeyModifiers::CONTROL) => Self::Cut,
            (KeyCode::Char('6'), KeyModifiers::ALT) => Self::Copy,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => Self::Paste,

            (KeyCode::F(3), KeyModifiers::NONE) => Self::FindNext,
            (KeyCode::F(3), KeyModifiers::SHIFT) => Self::FindPrev,

            (KeyCode::Char('z'), KeyModifiers::CONTROL) => Self::Undo,
            (KeyCode::Char('y'), KeyModifiers::CONTROL) => Self::Redo,

            _ => return None,
        };

        if read_only && command.is_edit() {
            None
        } else {
            Some(command)
        }
    }

    /// Whether the command changes the text.
    pub fn is_edit(self) -> bool {
        matches!(
            self,
            Self::InsertChar(_)
                | Self::InsertNewline
                | Self::InsertTab
                | Self::Backspace
                | Self::Delete
                | Self::DeleteWordLeft
                | Self::DeleteWordRight
                | Self::DeleteLine
                | Self::Cut
                | Self::Paste
                | Self::Undo
                | Self::Redo
        )
    }

    /// Run the command against `doc`.
    ///
    /// Returns a short status message for commands worth reporting.
    pub fn execute(self, doc: &mut Document) -> Option<String> {
        let message = match self {
            Self::MoveLeft => {
                doc.move_left();
                return None;
            }
            Self::MoveRight => {
                doc.move_right();
                return None;
            }
            Self::MoveUp => {
                doc.move_up();
                return None;
            }
            Self::MoveDown => {
                doc.move_down();
                return None;
            }
            Self::MoveWordLeft => {
                doc.move_word_left();
                return None;
            }
            Self::MoveWordRight => {
                doc.move_word_right();
                return None;
            }
            Self::MoveToLineStart => {
                doc.move_to_line_start();
                return None;
            }
            Self::MoveToLineEnd => {
                doc.move_to_line_end();
                return None;
            }
            Self::MoveToDocumentStart => {
                doc.move_to_start();
                return None;
            }
            Self::MoveToDocumentEnd => {
                doc.move_to_end();
                return None;
            }
            Self::PageUp => {
                doc.clear_selection();
                doc.page_up();
                return None;
            }
            Self::PageDown => {
                doc.clear_selection();
                doc.page_down();
                return None;
            }
            Self::GoToLine(number) => {
                return Some(match doc.go_to_line(number) {
                    Some(line) => format!("Line {}", line),
                    None => "Invalid line number".to_string(),
                });
            }

            Self::SelectLeft | Self::SelectRight | Self::SelectUp | Self::SelectDown => {
                doc.start_selection();
                match self {
                    Self::SelectLeft => doc.move_left(),
                    Self::SelectRight => doc.move_right(),
                    Self::SelectUp => doc.move_up(),
                    _ => doc.move_down(),
                }
                return None;
            }
            Self::ToggleSelection => {
                if doc.toggle_selection() {
                    "Selection started"
                } else {
                    "Selection ended"
                }
            }
            Self::SelectAll => {
                doc.select_all();
                "All text selected"
            }

            Self::InsertChar(ch) => {
                doc.type_char(ch);
                return None;
            }
            Self::InsertNewline => {
                doc.insert_newline();
                return None;
            }
            Self::InsertTab => {
                doc.insert_tab();
                return None;
            }
            Self::Backspace => {
                doc.delete_backward();
                return None;
            }
            Self::Delete => {
                doc.delete_forward();
                return None;
            }
            Self::DeleteWordLeft => {
                doc.delete_word_left();
                return None;
            }
            Self::DeleteWordRight => {
                doc.delete_word_right();
                return None;
            }
            Self::DeleteLine => {
                if !doc.delete_line() {
                    return None;
                }
                "Line deleted"
            }

            Self::Cut => {
                if doc.is_read_only() {
                    return None;
                }
                if doc.selection().is_some() {
                    if !doc.cut_selection() {
                        return None;
                    }
                    "Cut to clipboard"
                } else {
                    if !doc.cut_line() {
                        return None;
                    }
                    "Line cut to clipboard"
                }
            }
            Self::Copy => {
                if doc.selection().is_some() {
                    if !doc.copy_selection() {
                        return None;
                    }
                    "Copied to clipboard"
                } else {
                    doc.copy_line();
                    "Copied 1 line"
                }
            }
            Self::Paste => {
                if doc.is_read_only() {
                    return None;
                }
                if doc.paste() {
                    "Pasted"
                } else {
                    "Clipboard is empty"
                }
            }

            Self::FindNext | Self::FindPrev => {
                let found = if self == Self::FindNext {
                    doc.find_next()
                } else {
                    doc.find_prev()
                };
                let (index, total) = found?;
                return Some(format!("Match {} of {}", index, total));
            }

            Self::Undo => {
                if doc.is_read_only() {
                    return None;
                }
                if doc.undo() {
                    "Undo"
                } else {
                    "Nothing to undo"
                }
            }
            Self::Redo => {
                if doc.is_read_only() {
                    return None;
                }
                if doc.redo() {
                    "Redo"
                } else {
                    "Nothing to redo"
                }
            }
        };
        Some(message.to_string())
    }
}
