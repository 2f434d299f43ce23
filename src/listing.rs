use crate::errors::{DirviewError, DirviewErrorType, Result};
use crate::tree::{NodeKind, TreeNode};
use serde::Deserialize;

pub(crate) const LISTING_ENDPOINT: &str = "/api/path";

/// One record of the backend's path listing. `lastModifiedTime` arrives
/// pre-formatted and is displayed verbatim.
#[derive(Debug, Deserialize)]
pub(crate) struct PathEntry {
    pub(crate) name: String,
    #[serde(rename = "type")]
    pub(crate) kind: NodeKind,
    #[serde(rename = "lastModifiedTime")]
    pub(crate) last_modified: String,
}

/// Fetches the path listing from the backend. A non-success status is
/// reported as its own error kind so the caller can distinguish it from
/// transport and parse failures.
pub(crate) async fn fetch_entries(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<Vec<PathEntry>> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), LISTING_ENDPOINT);
    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(DirviewError::new(
            DirviewErrorType::BadStatus,
            format!("Backend returned HTTP {} for {}", response.status(), url),
        ));
    }
    let body = response.text().await?;
    let records: Vec<serde_json::Value> = serde_json::from_str(&body)?;
    Ok(parse_entries(records))
}

/// Validates listing records one at a time. A record missing a required
/// field is quarantined (logged and skipped) instead of taking the whole
/// listing down with it.
fn parse_entries(records: Vec<serde_json::Value>) -> Vec<PathEntry> {
    let mut entries = Vec::with_capacity(records.len());
    for record in records {
        match serde_json::from_value::<PathEntry>(record) {
            Ok(entry) => entries.push(entry),
            Err(e) => tracing::warn!("Discarding malformed listing entry: {}", e),
        }
    }
    entries
}

/// Attaches every entry as a direct child of `root`, in listing order.
/// The listing is flat; any path nesting implied by entry names is not
/// interpreted here.
pub(crate) fn populate(root: &mut TreeNode, entries: Vec<PathEntry>) {
    for entry in entries {
        if entry.kind != NodeKind::Directory {
            tracing::debug!("Listing entry {} has kind {:?}", entry.name, entry.kind);
        }
        root.add_child(TreeNode::new(entry.name, entry.kind, entry.last_modified));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_well_formed_records() {
        let records = vec![
            json!({"name": "a.txt", "type": "file", "lastModifiedTime": "2024-01-01"}),
            json!({"name": "src", "type": "directory", "lastModifiedTime": "2024-01-02"}),
        ];
        let entries = parse_entries(records);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "a.txt");
        assert_eq!(entries[0].kind, NodeKind::File);
        assert_eq!(entries[1].kind, NodeKind::Directory);
        assert_eq!(entries[1].last_modified, "2024-01-02");
    }

    #[test]
    fn quarantines_records_missing_required_fields() {
        let records = vec![
            json!({"name": "a.txt", "type": "file", "lastModifiedTime": "2024-01-01"}),
            json!({"name": "half-a-record"}),
            json!("not even an object"),
        ];
        let entries = parse_entries(records);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "a.txt");
    }

    #[test]
    fn unrecognized_type_becomes_unknown() {
        let records = vec![
            json!({"name": "link", "type": "symlink", "lastModifiedTime": "2024-01-01"}),
        ];
        let entries = parse_entries(records);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, NodeKind::Unknown);
    }

    #[test]
    fn populate_attaches_entries_flat_and_in_order() {
        let records = vec![
            json!({"name": "deep/nested.txt", "type": "file", "lastModifiedTime": "t1"}),
            json!({"name": "src", "type": "directory", "lastModifiedTime": "t2"}),
        ];
        let mut root = TreeNode::root();
        populate(&mut root, parse_entries(records));
        assert_eq!(root.children().len(), 2);
        // A slash in a name does not create nesting.
        assert_eq!(root.children()[0].name, "deep/nested.txt");
        assert!(root.children()[0].children().is_empty());
        assert_eq!(root.children()[1].name, "src");
    }
}
