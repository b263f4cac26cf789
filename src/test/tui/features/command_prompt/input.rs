use super::SessionManager;
use crate::tui::PendingAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut SessionManager, text: &str) {
    for ch in text.chars() {
        app.handle_key(key(KeyCode::Char(ch)));
    }
}

fn open_prompt_for_all(app: &mut SessionManager) {
    app.handle_key(key(KeyCode::Char(' ')));
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Char(' ')));
    app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));
}

#[test]
fn submitting_queues_remote_command_for_checked_hosts() {
    let mut app = SessionManager::new_for_tests();
    open_prompt_for_all(&mut app);
    type_text(&mut app, "uptime -p");
    app.handle_key(key(KeyCode::Enter));

    assert!(app.command_prompt.is_none());
    assert_eq!(
        app.take_pending_action(),
        Some(PendingAction::RemoteCommand {
            identity: "admin".to_string(),
            hostnames: vec!["db01.example.com".to_string(), "web01.example.com".to_string()],
            command: "uptime -p".to_string(),
        })
    );
}

#[test]
fn empty_command_is_rejected_inline() {
    let mut app = SessionManager::new_for_tests();
    open_prompt_for_all(&mut app);
    type_text(&mut app, "  ");
    app.handle_key(key(KeyCode::Enter));

    let prompt = app.command_prompt.as_ref().expect("prompt stays open");
    assert_eq!(prompt.error.as_deref(), Some("Command is required"));
    assert_eq!(app.take_pending_action(), None);
}

#[test]
fn escape_closes_prompt_without_action() {
    let mut app = SessionManager::new_for_tests();
    open_prompt_for_all(&mut app);
    type_text(&mut app, "reboot");
    app.handle_key(key(KeyCode::Esc));

    assert!(app.command_prompt.is_none());
    assert!(!app.should_exit);
    assert_eq!(app.take_pending_action(), None);
}

#[test]
fn queued_command_runs_once_per_host() {
    let mut app = SessionManager::new_for_tests();
    open_prompt_for_all(&mut app);
    type_text(&mut app, "df");
    app.handle_key(key(KeyCode::Enter));

    let action = app.take_pending_action().expect("queued");
    app.execute_action(action);
    let history: Vec<String> = app.runner.history().iter().map(ToString::to_string).collect();
    assert_eq!(history, vec!["rsh -l admin db01.example.com df", "rsh -l admin web01.example.com df"]);
    assert_eq!(app.status_message.as_deref(), Some("Ran command on 2 server(s)"));
}
