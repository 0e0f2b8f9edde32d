//! Token colors for dark and light terminals.

use ratatui::style::{Color, Modifier, Style};

use crate::TokenKind;

impl TokenKind {
    /// Display style for this kind.
    pub fn style(self, is_light: bool) -> Style {
        let (fg, modifier) = if is_light {
            self.colors_light()
        } else {
            self.colors_dark()
        };
        Style::default().fg(fg).add_modifier(modifier)
    }

    fn colors_dark(self) -> (Color, Modifier) {
        match self {
            TokenKind::Comment => (Color::Rgb(105, 112, 125), Modifier::ITALIC),
            TokenKind::Keyword => (Color::Rgb(199, 146, 234), Modifier::BOLD),
            TokenKind::Function => (Color::Rgb(130, 170, 255), Modifier::empty()),
            TokenKind::String => (Color::Rgb(152, 195, 121), Modifier::empty()),
            TokenKind::Number => (Color::Rgb(209, 154, 102), Modifier::empty()),
            TokenKind::Constant => (Color::Rgb(229, 192, 123), Modifier::empty()),
            TokenKind::Type => (Color::Rgb(86, 182, 194), Modifier::empty()),
            TokenKind::Variable => (Color::Rgb(224, 108, 117), Modifier::empty()),
            TokenKind::Builtin => (Color::Rgb(224, 108, 117), Modifier::ITALIC),
            TokenKind::Operator => (Color::Rgb(198, 120, 221), Modifier::empty()),
            TokenKind::Normal => (Color::Rgb(171, 178, 191), Modifier::empty()),
        }
    }

    fn colors_light(self) -> (Color, Modifier) {
        match self {
            TokenKind::Comment => (Color::Rgb(106, 115, 125), Modifier::ITALIC),
            TokenKind::Keyword => (Color::Rgb(215, 58, 73), Modifier::BOLD),
            TokenKind::Function => (Color::Rgb(111, 66, 193), Modifier::empty()),
            TokenKind::String => (Color::Rgb(3, 102, 214), Modifier::empty()),
            TokenKind::Number | TokenKind::Constant => (Color::Rgb(0, 92, 197), Modifier::empty()),
            TokenKind::Type => (Color::Rgb(215, 58, 73), Modifier::empty()),
            TokenKind::Variable => (Color::Rgb(0, 92, 197), Modifier::empty()),
            TokenKind::Builtin => (Color::Rgb(0, 92, 197), Modifier::ITALIC),
            TokenKind::Operator => (Color::Rgb(215, 58, 73), Modifier::empty()),
            TokenKind::Normal => (Color::Rgb(36, 41, 46), Modifier::empty()),
        }
    }
}
