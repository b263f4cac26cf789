//! Registry document codec.
//!
//! Input is lenient: tags may arrive as `tag_list` or `tags`, either as a list
//! or as one whitespace-separated string. `tag_list` wins when both are set. Output is canonical: entries sorted
//! by hostname, keys in a fixed order, empty optional fields omitted and a
//! four-space indent so repeated saves of unchanged data are byte-identical.

use super::model::{ServerRecord, parse_tags};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TagsField {
    List(Vec<String>),
    Text(String),
}

impl TagsField {
    fn into_tags(self) -> Vec<String> {
        match self {
            TagsField::List(tags) => tags,
            TagsField::Text(text) => parse_tags(&text),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct DocumentEntry {
    #[serde(default)]
    hostname: Option<String>,
    #[serde(default)]
    alias: Option<String>,
    #[serde(default)]
    tag_list: Option<TagsField>,
    #[serde(default)]
    tags: Option<TagsField>,
}

/// A document entry that passed validation.
#[derive(Debug)]
pub(super) struct ParsedEntry {
    pub(super) hostname: String,
    pub(super) alias: Option<String>,
    pub(super) tags: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CanonicalEntry<'a> {
    hostname: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    alias: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tag_list: Vec<&'a str>,
}

/// Parse the document text. Errors are plain messages; the caller attaches
/// the document path.
pub(super) fn parse_document(content: &str) -> Result<Vec<ParsedEntry>, String> {
    let entries: Vec<DocumentEntry> = serde_json::from_str(content).map_err(|err| err.to_string())?;

    entries
        .into_iter()
        .enumerate()
        .map(|(position, entry)| {
            let hostname = entry.hostname.map(|hostname| hostname.trim().to_string()).unwrap_or_default();
            if hostname.is_empty() {
                return Err(format!("entry #{} is missing a hostname", position + 1));
            }
            Ok(ParsedEntry {
                hostname,
                alias: entry.alias,
                tags: entry.tag_list.or(entry.tags).map(TagsField::into_tags).unwrap_or_default(),
            })
        })
        .collect()
}

/// Render records in canonical form. `records` must already be sorted.
pub(super) fn render_document<'a>(records: impl Iterator<Item = &'a ServerRecord>) -> serde_json::Result<String> {
    let entries: Vec<CanonicalEntry<'_>> = records
        .map(|record| CanonicalEntry {
            hostname: record.hostname(),
            alias: record.alias(),
            tag_list: record.tags().iter().map(String::as_str).collect(),
        })
        .collect();

    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    entries.serialize(&mut serializer)?;
    buffer.push(b'\n');

    // serde_json only emits UTF-8.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
#[path = "../test/registry/document.rs"]
mod tests;
