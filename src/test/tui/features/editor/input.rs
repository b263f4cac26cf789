use super::SessionManager;
use crate::tui::EditorField;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fs;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut SessionManager, text: &str) {
    for ch in text.chars() {
        app.handle_key(key(KeyCode::Char(ch)));
    }
}

fn focus(app: &mut SessionManager, field: EditorField) {
    while app.editor.as_ref().map(|form| form.selected) != Some(field) {
        app.handle_key(key(KeyCode::Tab));
    }
}

#[test]
fn create_form_saves_new_record() {
    let mut app = SessionManager::new_for_tests();
    app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));

    type_text(&mut app, "cache01");
    focus(&mut app, EditorField::Alias);
    type_text(&mut app, "redis");
    focus(&mut app, EditorField::Tags);
    type_text(&mut app, "cache prod");
    focus(&mut app, EditorField::Save);
    app.handle_key(key(KeyCode::Enter));

    assert!(app.editor.is_none());
    let record = app.store.get("cache01").expect("created");
    assert_eq!(record.alias(), Some("redis"));
    assert_eq!(record.tags().to_vec(), vec!["cache", "prod"]);
    assert_eq!(app.selected_record().map(|record| record.hostname()), Some("cache01"));
    let _ = fs::remove_file(&app.server_config_path);
}

#[test]
fn empty_hostname_keeps_form_open_with_error() {
    let mut app = SessionManager::new_for_tests();
    app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
    focus(&mut app, EditorField::Save);
    app.handle_key(key(KeyCode::Enter));

    let form = app.editor.as_ref().expect("form stays open");
    assert_eq!(form.error.as_deref(), Some("Hostname is required"));
    assert_eq!(form.selected, EditorField::Hostname);
    assert_eq!(app.store.len(), 2);

    type_text(&mut app, "x");
    assert_eq!(app.editor.as_ref().and_then(|form| form.error.clone()), None);
}

#[test]
fn edit_form_skips_locked_hostname() {
    let mut app = SessionManager::new_for_tests();
    app.handle_key(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL));

    for _ in 0..8 {
        app.handle_key(key(KeyCode::Tab));
        assert_ne!(app.editor.as_ref().map(|form| form.selected), Some(EditorField::Hostname));
    }
    for _ in 0..8 {
        app.handle_key(key(KeyCode::BackTab));
        assert_ne!(app.editor.as_ref().map(|form| form.selected), Some(EditorField::Hostname));
    }
}

#[test]
fn edit_form_replaces_alias_and_tags() {
    let mut app = SessionManager::new_for_tests();
    app.handle_key(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL));

    focus(&mut app, EditorField::Alias);
    for _ in 0.."primarydb".len() {
        app.handle_key(key(KeyCode::Backspace));
    }
    focus(&mut app, EditorField::Tags);
    type_text(&mut app, " mysql");
    focus(&mut app, EditorField::Save);
    app.handle_key(key(KeyCode::Enter));

    let record = app.store.get("db01.example.com").expect("record");
    assert_eq!(record.alias(), None);
    assert_eq!(record.display_name(), "db01.example.com");
    assert_eq!(record.tags().to_vec(), vec!["db", "mysql"]);
    assert_eq!(app.store.len(), 2);
    let _ = fs::remove_file(&app.server_config_path);
}

#[test]
fn cancel_and_escape_close_without_changes() {
    let mut app = SessionManager::new_for_tests();
    app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
    type_text(&mut app, "ghost");
    app.handle_key(key(KeyCode::Esc));
    assert!(app.editor.is_none());
    assert!(!app.should_exit);

    app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
    type_text(&mut app, "ghost");
    focus(&mut app, EditorField::Cancel);
    app.handle_key(key(KeyCode::Enter));
    assert!(app.editor.is_none());
    assert!(app.store.get("ghost").is_none());
}

#[test]
fn form_keys_do_not_reach_keyword() {
    let mut app = SessionManager::new_for_tests();
    app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
    type_text(&mut app, "abc");
    assert_eq!(app.session.keyword(), "");
}
