use super::ServerStore;
use crate::config::ConfigError;
use crate::registry::ValidationError;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

const SCENARIO: &str = r#"[
    {"hostname": "web01.example.com", "tags": ["web", "prod"]},
    {"hostname": "db01.example.com", "alias": "primarydb", "tags": ["db"]}
]"#;

fn temp_path(prefix: &str) -> PathBuf {
    let unique = SystemTime::now().duration_since(UNIX_EPOCH).expect("clock should be after epoch").as_nanos();
    std::env::temp_dir().join(format!("gwkit-store-{prefix}-{unique}"))
}

fn snapshot(store: &ServerStore) -> BTreeMap<String, (Option<String>, Vec<String>)> {
    store
        .get_all()
        .into_iter()
        .map(|record| {
            (
                record.hostname().to_string(),
                (record.alias().map(str::to_string), record.tags().to_vec()),
            )
        })
        .collect()
}

#[test]
fn parses_scenario_registry() {
    let store = ServerStore::parse(Path::new("servers.json"), SCENARIO).expect("valid registry");
    assert_eq!(store.len(), 2);
    assert_eq!(store.get("db01.example.com").and_then(|record| record.alias()), Some("primarydb"));
    assert_eq!(store.get("web01.example.com").map(|record| record.tags().len()), Some(2));
}

#[test]
fn missing_file_is_not_found() {
    let path = temp_path("missing").join("servers.json");
    assert!(matches!(ServerStore::load(&path), Err(ConfigError::NotFound(_))));
}

#[test]
fn malformed_file_is_parse_error() {
    let err = ServerStore::parse(Path::new("servers.json"), r#"[{"alias": "x"}]"#).expect_err("missing hostname");
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn duplicate_hostname_keeps_later_entry() {
    let store = ServerStore::parse(
        Path::new("servers.json"),
        r#"[{"hostname": "a", "alias": "first"}, {"hostname": "a", "alias": "second"}]"#,
    )
    .expect("valid registry");
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("a").and_then(|record| record.alias()), Some("second"));
}

#[test]
fn upsert_replaces_instead_of_merging() {
    let mut store = ServerStore::parse(Path::new("servers.json"), SCENARIO).expect("valid registry");
    let before = store.id_of("web01.example.com");

    let id = store
        .upsert("web01.example.com", None, vec!["staging".to_string()])
        .expect("valid upsert");

    assert_eq!(Some(id), before, "existing record keeps its slot");
    assert_eq!(store.len(), 2);
    assert_eq!(store.get("web01.example.com").map(|record| record.tags().to_vec()), Some(vec!["staging".to_string()]));
}

#[test]
fn upsert_can_clear_alias() {
    let mut store = ServerStore::parse(Path::new("servers.json"), SCENARIO).expect("valid registry");
    store.upsert("db01.example.com", Some(""), vec!["db".to_string()]).expect("valid upsert");
    assert_eq!(store.get("db01.example.com").and_then(|record| record.alias()), None);
}

#[test]
fn empty_hostname_is_rejected_without_mutation() {
    let mut store = ServerStore::parse(Path::new("servers.json"), SCENARIO).expect("valid registry");
    let before = snapshot(&store);

    assert_eq!(store.upsert("   ", Some("ghost"), Vec::new()), Err(ValidationError::EmptyHostname));
    assert_eq!(snapshot(&store), before);
}

#[test]
fn save_then_load_round_trips() {
    let root = temp_path("round-trip");
    fs::create_dir_all(&root).expect("create temp dir");
    let path = root.join("servers.json");

    let mut store = ServerStore::parse(Path::new("servers.json"), SCENARIO).expect("valid registry");
    store
        .upsert("cache01.example.com", Some("cache"), vec!["redis".to_string(), "prod".to_string()])
        .expect("valid upsert");
    store.save(&path).expect("save registry");

    let reloaded = ServerStore::load(&path).expect("reload registry");
    assert_eq!(snapshot(&reloaded), snapshot(&store));
    assert!(!root.join("servers.json.tmp").exists(), "temp file should be renamed away");

    let _ = fs::remove_dir_all(root);
}

#[test]
fn repeated_saves_are_byte_identical_and_sorted() {
    let root = temp_path("stable");
    fs::create_dir_all(&root).expect("create temp dir");
    let path = root.join("servers.json");

    let store = ServerStore::parse(Path::new("servers.json"), SCENARIO).expect("valid registry");
    store.save(&path).expect("first save");
    let first = fs::read(&path).expect("read first save");

    ServerStore::load(&path).expect("reload").save(&path).expect("second save");
    let second = fs::read(&path).expect("read second save");

    assert_eq!(first, second);
    let text = String::from_utf8(first).expect("utf8 document");
    let db = text.find("db01.example.com").expect("db entry");
    let web = text.find("web01.example.com").expect("web entry");
    assert!(db < web, "entries are sorted by hostname");
    assert!(text.contains("\"tag_list\""));
    assert!(!text.contains("\"tags\""));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn write_failure_reports_error_and_keeps_memory() {
    let path = temp_path("unwritable").join("no-such-dir").join("servers.json");
    let mut store = ServerStore::parse(Path::new("servers.json"), SCENARIO).expect("valid registry");
    store.upsert("new01", None, Vec::new()).expect("valid upsert");

    let err = store.save(&path).expect_err("parent directory is missing");
    assert!(matches!(err, ConfigError::Write { .. }));
    assert!(store.get("new01").is_some());
}
