use super::{AppState, PendingAction};
use crate::search::search;
use std::fs;

fn visible_names(app: &AppState) -> Vec<String> {
    app.visible_records().map(|record| record.display_name().to_string()).collect()
}

#[test]
fn starts_with_full_registry_sorted_by_display_name() {
    let app = AppState::new_for_tests();
    assert_eq!(visible_names(&app), vec!["primarydb", "web01.example.com"]);
    assert_eq!(app.selected_row, 0);
}

#[test]
fn refresh_keeps_selected_record_when_still_visible() {
    let mut app = AppState::new_for_tests();
    app.selected_row = 1;
    assert_eq!(app.selected_record().map(|record| record.hostname()), Some("web01.example.com"));

    app.session.append('w');
    app.refresh_results();
    assert_eq!(visible_names(&app), vec!["web01.example.com"]);
    assert_eq!(app.selected_row, 0);
    assert_eq!(app.selected_record().map(|record| record.hostname()), Some("web01.example.com"));
}

#[test]
fn refresh_with_no_match_clears_selection() {
    let mut app = AppState::new_for_tests();
    app.session.append('Z');
    app.refresh_results();
    assert!(app.visible.is_empty());
    assert_eq!(app.selected_record_id(), None);
}

#[test]
fn submit_edit_creates_persists_and_requeries() {
    let mut app = AppState::new_for_tests();
    let id = app.submit_edit("cache01", "redis", "cache prod").expect("valid edit");

    assert_eq!(app.store.len(), 3);
    assert_eq!(app.selected_record_id(), Some(id));
    assert_eq!(visible_names(&app), vec!["primarydb", "redis", "web01.example.com"]);
    assert_eq!(app.index.query("CACHE01"), vec![id]);
    assert_eq!(app.index.query("CACHE"), vec![id, id], "hostname and tag keys both match");
    assert_eq!(search(&app.index, &app.store, "CACHE"), vec![id]);

    let saved = fs::read_to_string(&app.server_config_path).expect("registry written");
    assert!(saved.contains("\"cache01\""));
    let _ = fs::remove_file(&app.server_config_path);
}

#[test]
fn submit_edit_rejects_empty_hostname_without_mutation() {
    let mut app = AppState::new_for_tests();
    assert!(app.submit_edit("   ", "alias", "tag").is_err());
    assert_eq!(app.store.len(), 2);
    assert!(!app.server_config_path.exists());
}

#[test]
fn submit_edit_write_failure_keeps_edit_and_reports_status() {
    let mut app = AppState::new_for_tests();
    app.server_config_path = std::env::temp_dir()
        .join(format!("gwkit-missing-dir-{}", std::process::id()))
        .join("servers.json");

    app.submit_edit("web01.example.com", "frontend", "web").expect("valid edit");

    assert_eq!(
        app.store.get("web01.example.com").and_then(|record| record.alias()),
        Some("frontend")
    );
    let status = app.status_message.clone().unwrap_or_default();
    assert!(status.starts_with("Save failed"), "unexpected status: {status}");
}

#[test]
fn executes_actions_through_dry_run_runner() {
    let mut app = AppState::new_for_tests();
    app.execute_action(PendingAction::Login {
        identity: "admin".to_string(),
        hostname: "web01.example.com".to_string(),
    });
    app.execute_action(PendingAction::InitCredentials);

    let history: Vec<String> = app.runner.history().iter().map(ToString::to_string).collect();
    assert_eq!(history, vec!["rlogin -l admin web01.example.com", "kinit"]);
    assert_eq!(app.status_message.as_deref(), Some("kinit (test mode, not executed)"));
}

#[test]
fn update_scroll_keeps_selection_in_view() {
    let mut app = AppState::new_for_tests();
    for n in 0..20 {
        app.store.upsert(&format!("node{:02}", n), None, Vec::new()).expect("node");
    }
    app.rebuild_index();
    app.refresh_results();

    app.selected_row = 15;
    app.update_scroll(5);
    assert_eq!(app.scroll_offset, 11);

    app.selected_row = 3;
    app.update_scroll(5);
    assert_eq!(app.scroll_offset, 3);
    assert_eq!(app.page_size, 5);
}
