use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::archive::{ArchiveStore, DocumentEntry, index_filename};
use crate::config::{DEFAULT_LINE_WIDTH, DEFAULT_SOURCE_LABEL, Settings};

pub const RECORD_DELIMITER: char = '|';
const RANK_PLACEHOLDER: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOptions {
    pub source_label: String,
    pub line_width: usize,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            source_label: DEFAULT_SOURCE_LABEL.to_string(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl IndexOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            source_label: settings.source_label.clone(),
            line_width: settings.line_width,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexSummary {
    pub category: String,
    pub path: PathBuf,
    pub documents: usize,
}

/// Render a category index. Records are machine-read by the device, so they
/// are never wrapped.
pub fn render_category_index(
    category: &str,
    entries: &[DocumentEntry],
    options: &IndexOptions,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("**{} INDEX**\n\n", category.to_uppercase()));
    for entry in entries {
        out.push_str(&format!(
            "{title}{d}{file}{d}{RANK_PLACEHOLDER}{d}{label}\n",
            title = sanitize_field(&entry.title),
            file = entry.filename,
            label = sanitize_field(&options.source_label),
            d = RECORD_DELIMITER,
        ));
    }
    out.push('\n');
    out.push_str(&"=".repeat(options.line_width.max(1)));
    out.push('\n');
    out.push_str(&format!("Total: {} articles\n", entries.len()));
    out
}

/// Rebuild `category/index.txt` from what is on disk right now. An empty or
/// missing category produces no index and returns `None`.
pub fn rebuild_category_index(
    archive: &ArchiveStore,
    category: &str,
    options: &IndexOptions,
) -> Result<Option<IndexSummary>> {
    let entries = archive.list_documents(category)?;
    if entries.is_empty() {
        debug!(category, "no documents; index left alone");
        return Ok(None);
    }

    let path = archive.category_dir(category).join(index_filename());
    let content = render_category_index(category, &entries, options);
    archive
        .write_artifact(&path, &content)
        .with_context(|| format!("failed to rebuild index for {category}"))?;
    info!(category, documents = entries.len(), "index rebuilt");

    Ok(Some(IndexSummary {
        category: category.to_string(),
        path,
        documents: entries.len(),
    }))
}

pub fn rebuild_all_indexes(archive: &ArchiveStore, options: &IndexOptions) -> Result<Vec<IndexSummary>> {
    let mut summaries = Vec::new();
    for category in archive.categories()? {
        if let Some(summary) = rebuild_category_index(archive, &category, options)? {
            summaries.push(summary);
        }
    }
    Ok(summaries)
}

fn sanitize_field(value: &str) -> String {
    value
        .chars()
        .map(|ch| if ch == RECORD_DELIMITER || ch == '\n' { ' ' } else { ch })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::{IndexOptions, rebuild_all_indexes, rebuild_category_index, render_category_index};
    use crate::archive::{ArchiveStore, DocumentEntry};

    #[test]
    fn render_matches_device_format() {
        let entries = vec![
            DocumentEntry {
                title: "Atom".to_string(),
                filename: "atom.txt".to_string(),
                size: 10,
            },
            DocumentEntry {
                title: "Gravity".to_string(),
                filename: "physics/gravity.txt".to_string(),
                size: 20,
            },
        ];
        let rendered = render_category_index("science", &entries, &IndexOptions::default());
        let expected = format!(
            "**SCIENCE INDEX**\n\nAtom|atom.txt|0|Wikipedia article\nGravity|physics/gravity.txt|0|Wikipedia article\n\n{}\nTotal: 2 articles\n",
            "=".repeat(39)
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn empty_category_writes_nothing() {
        let temp = tempdir().expect("tempdir");
        let store = ArchiveStore::new(temp.path(), 39);
        fs::create_dir_all(temp.path().join("empty")).expect("dir");

        let summary = rebuild_category_index(&store, "empty", &IndexOptions::default()).expect("rebuild");
        assert!(summary.is_none());
        assert!(!temp.path().join("empty/index.txt").exists());
        assert!(
            rebuild_category_index(&store, "absent", &IndexOptions::default())
                .expect("rebuild")
                .is_none()
        );
    }

    #[test]
    fn rebuild_picks_up_manual_files_and_is_stable() {
        let temp = tempdir().expect("tempdir");
        let store = ArchiveStore::new(temp.path(), 39);
        let dir = temp.path().join("history");
        fs::create_dir_all(&dir).expect("dir");
        fs::write(dir.join("roman_empire.txt"), "Roman Empire").expect("write");

        let options = IndexOptions::default();
        rebuild_category_index(&store, "history", &options).expect("first");
        let first = fs::read_to_string(dir.join("index.txt")).expect("read");
        rebuild_category_index(&store, "history", &options).expect("second");
        let second = fs::read_to_string(dir.join("index.txt")).expect("read");
        assert_eq!(first, second);

        fs::write(dir.join("hand_placed_notes.txt"), "notes").expect("manual");
        let summary = rebuild_category_index(&store, "history", &options)
            .expect("third")
            .expect("summary");
        assert_eq!(summary.documents, 2);
        let third = fs::read_to_string(dir.join("index.txt")).expect("read");
        assert!(third.contains("Hand Placed Notes|hand_placed_notes.txt|0|Wikipedia article"));
        assert!(third.ends_with("Total: 2 articles\n"));
    }

    #[test]
    fn delimiter_in_label_is_neutralized() {
        let options = IndexOptions {
            source_label: "Wiki|pedia".to_string(),
            line_width: 10,
        };
        let entries = vec![DocumentEntry {
            title: "A".to_string(),
            filename: "a.txt".to_string(),
            size: 1,
        }];
        let rendered = render_category_index("x", &entries, &options);
        assert!(rendered.contains("A|a.txt|0|Wiki pedia\n"));
        assert!(rendered.contains(&format!("\n{}\n", "=".repeat(10))));
    }

    #[test]
    fn rebuild_all_covers_every_populated_category() {
        let temp = tempdir().expect("tempdir");
        let store = ArchiveStore::new(temp.path(), 39);
        fs::create_dir_all(temp.path().join("a")).expect("a");
        fs::create_dir_all(temp.path().join("b")).expect("b");
        fs::write(temp.path().join("a/one.txt"), "1").expect("one");

        let summaries = rebuild_all_indexes(&store, &IndexOptions::default()).expect("rebuild");
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].category, "a");
        assert!(temp.path().join("a/index.txt").exists());
    }
}
