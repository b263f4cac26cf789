use super::{parse_document, render_document};
use crate::registry::ServerRecord;

#[test]
fn accepts_tag_list_and_tags_fields() {
    let entries = parse_document(
        r#"[
            {"hostname": "web01.example.com", "tags": ["web", "prod"]},
            {"hostname": "db01.example.com", "alias": "primarydb", "tag_list": ["db"]}
        ]"#,
    )
    .expect("valid document");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].tags, vec!["web", "prod"]);
    assert_eq!(entries[1].alias.as_deref(), Some("primarydb"));
    assert_eq!(entries[1].tags, vec!["db"]);
}

#[test]
fn tag_list_takes_precedence_over_tags() {
    let entries = parse_document(r#"[{"hostname": "a", "tags": ["x"], "tag_list": ["y"]}]"#).expect("both tag fields are accepted");
    assert_eq!(entries[0].tags, vec!["y"]);

    let entries = parse_document(r#"[{"hostname": "a", "tag_list": "y z", "tags": ["x"]}]"#).expect("both tag fields are accepted");
    assert_eq!(entries[0].tags, vec!["y", "z"]);
}

#[test]
fn accepts_whitespace_separated_tag_string() {
    let entries = parse_document(r#"[{"hostname": "gw01", "tags": "gateway  edge"}]"#).expect("valid document");
    assert_eq!(entries[0].tags, vec!["gateway", "edge"]);
}

#[test]
fn missing_or_empty_hostname_is_rejected() {
    let err = parse_document(r#"[{"hostname": "ok"}, {"alias": "nohost"}]"#).expect_err("missing hostname");
    assert!(err.contains("#2"), "unexpected message: {err}");

    let err = parse_document(r#"[{"hostname": "  "}]"#).expect_err("blank hostname");
    assert!(err.contains("#1"), "unexpected message: {err}");
}

#[test]
fn non_array_document_is_rejected() {
    assert!(parse_document(r#"{"hostname": "web01"}"#).is_err());
    assert!(parse_document("not json").is_err());
}

#[test]
fn renders_canonical_form_with_empty_fields_omitted() {
    let records = vec![
        ServerRecord::new("db01.example.com".to_string(), Some("primarydb"), vec!["db".to_string()]),
        ServerRecord::new("web01.example.com".to_string(), None, Vec::new()),
    ];

    let rendered = render_document(records.iter()).expect("render");
    let expected = concat!(
        "[\n",
        "    {\n",
        "        \"hostname\": \"db01.example.com\",\n",
        "        \"alias\": \"primarydb\",\n",
        "        \"tag_list\": [\n",
        "            \"db\"\n",
        "        ]\n",
        "    },\n",
        "    {\n",
        "        \"hostname\": \"web01.example.com\"\n",
        "    }\n",
        "]\n",
    );
    assert_eq!(rendered, expected);
}

#[test]
fn empty_registry_renders_empty_array() {
    let rendered = render_document(std::iter::empty()).expect("render");
    assert_eq!(rendered, "[]\n");
}
