use super::SearchIndex;
use crate::registry::ServerStore;
use std::path::Path;

fn scenario_store() -> ServerStore {
    ServerStore::parse(
        Path::new("servers.json"),
        r#"[
            {"hostname": "web01.example.com", "tags": ["web", "prod"]},
            {"hostname": "db01.example.com", "alias": "primarydb", "tags": ["db"]}
        ]"#,
    )
    .expect("valid registry")
}

#[test]
fn indexes_hostname_alias_and_tags() {
    let store = scenario_store();
    let index = SearchIndex::build(&store);

    assert_eq!(index.record_count(), 2);
    // WEB01.EXAMPLE.COM, WEB, PROD, DB01.EXAMPLE.COM, PRIMARYDB, DB
    assert_eq!(index.key_count(), 6);
}

#[test]
fn every_prefix_of_every_key_reaches_its_record() {
    let store = scenario_store();
    let index = SearchIndex::build(&store);

    for (id, record) in store.iter() {
        let mut keys = vec![record.hostname().to_string()];
        keys.extend(record.alias().map(str::to_string));
        keys.extend(record.tags().iter().cloned());

        for key in keys {
            let upper = key.to_uppercase();
            for end in 1..=upper.chars().count() {
                let prefix: String = upper.chars().take(end).collect();
                assert!(index.query(&prefix).contains(&id), "prefix {prefix} should reach {}", record.hostname());
            }
        }
    }
}

#[test]
fn query_is_case_insensitive() {
    let store = scenario_store();
    let index = SearchIndex::build(&store);
    assert_eq!(index.query("prim"), index.query("PRIM"));
    assert!(!index.query("prim").is_empty());
}

#[test]
fn unmatched_prefix_returns_empty() {
    let index = SearchIndex::build(&scenario_store());
    assert!(index.query("Z").is_empty());
    assert!(index.query("WEB01.EXAMPLE.COMX").is_empty());
}

#[test]
fn empty_prefix_returns_each_record_once() {
    let store = scenario_store();
    let index = SearchIndex::build(&store);
    let mut ids = index.query("");
    ids.sort_unstable();
    assert_eq!(ids, vec![0, 1]);
}

#[test]
fn multi_key_record_appears_per_matching_key() {
    let store = scenario_store();
    let index = SearchIndex::build(&store);
    let db = store.id_of("db01.example.com").expect("db record");
    let hits = index.query("D");
    assert_eq!(hits.iter().filter(|id| **id == db).count(), 2);
}

#[test]
fn colliding_key_is_won_by_last_insertion() {
    let mut store = ServerStore::new();
    store.upsert("alpha", None, vec!["shared".to_string()]).expect("alpha");
    store.upsert("beta", None, vec!["shared".to_string()]).expect("beta");
    let index = SearchIndex::build(&store);

    // "beta" sorts after "alpha", so its tag insertion wins the SHARED key.
    assert_eq!(index.query("SHARED"), vec![store.id_of("beta").expect("beta id")]);
    // Shadowed records are still part of the full listing.
    assert_eq!(index.query("").len(), 2);
}

#[test]
fn rebuild_reflects_upserts() {
    let mut store = scenario_store();
    store
        .upsert("web01.example.com", None, vec!["staging".to_string()])
        .expect("valid upsert");
    let index = SearchIndex::build(&store);

    assert!(index.query("PROD").is_empty());
    assert_eq!(index.query("STAG"), vec![store.id_of("web01.example.com").expect("web id")]);
}
