//! End-to-end editing sessions through the public API.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use runedit::{
    init_logging, Config, Document, EditCommand, LanguageRegistry, SearchOptions, TokenKind,
};

fn press(doc: &mut Document, code: KeyCode, modifiers: KeyModifiers) -> Option<String> {
    EditCommand::from_key_event(KeyEvent::new(code, modifiers), doc.is_read_only())
        .and_then(|command| command.execute(doc))
}

fn type_str(doc: &mut Document, text: &str) {
    for ch in text.chars() {
        let code = if ch == '\n' {
            KeyCode::Enter
        } else {
            KeyCode::Char(ch)
        };
        press(doc, code, KeyModifiers::NONE);
    }
}

#[test]
fn undo_all_restores_original_and_redo_all_restores_final() {
    let original = "fn main() {\n    println!(\"hi\");\n}\n";
    let mut doc = Document::from_text(original, &Config::default());

    // A mix of edits at scattered positions so few of them merge
    doc.move_to(3);
    doc.type_text("real_");
    doc.move_to_end();
    doc.type_text("// trailer");
    doc.move_to(0);
    doc.delete_forward();
    doc.move_to(12);
    doc.delete_word_right();
    doc.move_to(20);
    doc.insert_newline();
    doc.move_to_start();
    doc.move_down();
    doc.delete_line();
    doc.move_to(5);
    doc.delete_backward();

    let edited = doc.text();
    assert_ne!(edited, original);

    while doc.undo() {}
    assert_eq!(doc.text(), original);
    assert!(!doc.can_undo());

    while doc.redo() {}
    assert_eq!(doc.text(), edited);
    assert!(!doc.can_redo());
}

#[test]
fn typing_a_word_is_one_undo_step() {
    let mut doc = Document::new(&Config::default());
    type_str(&mut doc, "hello");
    press(&mut doc, KeyCode::Left, KeyModifiers::NONE);
    press(&mut doc, KeyCode::Left, KeyModifiers::NONE);
    type_str(&mut doc, "XY");

    assert_eq!(doc.text(), "helXYlo");
    assert_eq!(doc.history().undo_depth(), 2);

    let undo = |doc: &mut Document| press(doc, KeyCode::Char('z'), KeyModifiers::CONTROL);
    assert_eq!(undo(&mut doc).as_deref(), Some("Undo"));
    assert_eq!(doc.text(), "hello");
    assert_eq!(undo(&mut doc).as_deref(), Some("Undo"));
    assert_eq!(doc.text(), "");
    assert_eq!(undo(&mut doc).as_deref(), Some("Nothing to undo"));
}

#[test]
fn new_edit_discards_redo() {
    let mut doc = Document::new(&Config::default());
    type_str(&mut doc, "abc");
    doc.undo();
    assert!(doc.can_redo());

    type_str(&mut doc, "x");
    assert!(!doc.can_redo());
    assert_eq!(
        press(&mut doc, KeyCode::Char('y'), KeyModifiers::CONTROL).as_deref(),
        Some("Nothing to redo")
    );
}

#[test]
fn enter_keeps_indentation_and_highlighting_tracks_lines() {
    let registry = LanguageRegistry::with_builtin();
    let mut doc = Document::new(&Config::default());
    assert!(doc.set_language_for("src/main.rs", &registry));

    type_str(&mut doc, "fn main() {\n");
    press(&mut doc, KeyCode::Tab, KeyModifiers::NONE);
    type_str(&mut doc, "let s = \"fn\";\nreturn;");

    assert_eq!(doc.line_count(), 3);
    assert_eq!(doc.line_text(1), "    let s = \"fn\";");
    assert_eq!(doc.line_text(2), "    return;");

    let line1 = doc.line_tokens(1).into_owned();
    assert!(line1
        .iter()
        .any(|t| t.kind == TokenKind::String && t.text == "\"fn\""));
    assert!(line1
        .iter()
        .any(|t| t.kind == TokenKind::Keyword && t.text == "let"));

    let joined: String = line1.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(joined, doc.line_text(1));
}

#[test]
fn read_only_document_ignores_editing_keys() {
    let mut doc = Document::from_text("fixed", &Config::default());
    doc.set_read_only(true);

    type_str(&mut doc, "zz");
    press(&mut doc, KeyCode::Backspace, KeyModifiers::NONE);
    press(&mut doc, KeyCode::Char('k'), KeyModifiers::CONTROL);
    press(&mut doc, KeyCode::End, KeyModifiers::NONE);

    assert_eq!(doc.text(), "fixed");
    assert_eq!(doc.cursor(), 5);
    assert!(!doc.is_modified());
}

#[test]
fn cut_and_paste_moves_a_line_through_the_register() {
    let mut doc = Document::from_text("first\nsecond\nthird\n", &Config::default());
    press(&mut doc, KeyCode::Down, KeyModifiers::NONE);
    assert_eq!(
        press(&mut doc, KeyCode::Char('k'), KeyModifiers::CONTROL).as_deref(),
        Some("Line cut to clipboard")
    );
    press(&mut doc, KeyCode::Home, KeyModifiers::CONTROL);
    assert_eq!(
        press(&mut doc, KeyCode::Char('u'), KeyModifiers::CONTROL).as_deref(),
        Some("Pasted")
    );
    assert_eq!(doc.text(), "second\nfirst\nthird\n");

    press(&mut doc, KeyCode::Char('z'), KeyModifiers::CONTROL);
    press(&mut doc, KeyCode::Char('z'), KeyModifiers::CONTROL);
    assert_eq!(doc.text(), "first\nsecond\nthird\n");
}

#[test]
fn shift_selection_then_copy_and_paste() {
    let mut doc = Document::from_text("let value = 1;", &Config::default());
    press(&mut doc, KeyCode::Right, KeyModifiers::CONTROL);
    for _ in 0..5 {
        press(&mut doc, KeyCode::Right, KeyModifiers::SHIFT);
    }
    assert_eq!(doc.selected_text().as_deref(), Some("value"));
    assert_eq!(
        press(&mut doc, KeyCode::Char('6'), KeyModifiers::ALT).as_deref(),
        Some("Copied to clipboard")
    );
    assert!(doc.selection().is_none());

    press(&mut doc, KeyCode::End, KeyModifiers::NONE);
    press(&mut doc, KeyCode::Char('u'), KeyModifiers::CONTROL);
    assert_eq!(doc.text(), "let value = 1;value");
}

#[test]
fn search_replace_and_undo() {
    let mut doc = Document::from_text("foo(foo, bar)\nfoo", &Config::default());
    assert_eq!(doc.find("foo", SearchOptions::literal()), 3);
    assert_eq!(
        press(&mut doc, KeyCode::F(3), KeyModifiers::NONE).as_deref(),
        Some("Match 2 of 3")
    );
    assert_eq!(
        press(&mut doc, KeyCode::F(3), KeyModifiers::SHIFT).as_deref(),
        Some("Match 1 of 3")
    );

    assert!(doc.replace_one("qux"));
    assert_eq!(doc.text(), "qux(foo, bar)\nfoo");
    assert_eq!(doc.replace_all("qux"), 2);
    assert_eq!(doc.text(), "qux(qux, bar)\nqux");

    while doc.undo() {}
    assert_eq!(doc.text(), "foo(foo, bar)\nfoo");
}

#[test]
fn page_keys_move_by_viewport_height() {
    let text: String = (1..=50).map(|i| format!("{}\n", i)).collect();
    let mut doc = Document::from_text(&text, &Config::default());
    doc.set_page_lines(10);

    press(&mut doc, KeyCode::PageDown, KeyModifiers::NONE);
    press(&mut doc, KeyCode::PageDown, KeyModifiers::NONE);
    assert_eq!(doc.current_line(), 20);
    press(&mut doc, KeyCode::PageUp, KeyModifiers::NONE);
    assert_eq!(doc.line_text(doc.current_line()), "11");

    assert_eq!(
        EditCommand::GoToLine(1000).execute(&mut doc).as_deref(),
        Some("Line 51")
    );
}

#[test]
fn highlighting_can_be_switched_off() {
    let registry = LanguageRegistry::with_builtin();
    let mut config = Config::default();
    config.syntax.enabled = false;

    let mut doc = Document::from_text("let x = 1;", &config);
    doc.set_language_for("a.rs", &registry);
    let tokens = doc.line_tokens(0).into_owned();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Normal);

    doc.set_highlighting(true);
    assert_eq!(doc.line_tokens(0)[0].kind, TokenKind::Keyword);
}

#[test]
fn config_file_drives_document_and_logging() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    let log_path = dir.path().join("logs").join("session.log");
    std::fs::write(
        &config_path,
        format!(
            "[editor]\ntab_size = 2\n\n[logging]\nfile_path = {:?}\nmin_level = \"debug\"\n",
            log_path.display().to_string()
        ),
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();
    assert_eq!(config.editor.tab_size, 2);

    init_logging(&config).unwrap();
    assert!(runedit_logger::entries()
        .iter()
        .any(|e| e.message == "runedit started"));

    let mut doc = Document::new(&config);
    doc.insert_tab();
    assert_eq!(doc.text(), "  ");

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("runedit started"));
}
