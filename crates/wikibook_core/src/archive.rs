use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tempfile::{Builder, NamedTempFile};
use thiserror::Error;
use walkdir::WalkDir;

use crate::slug::{self, DOCUMENT_EXTENSION};
use crate::wrap::wrap_text;

pub const INDEX_STEM: &str = "index";
pub const TOC_STEM: &str = "TOC";

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("archive root {} is not accessible: {source}", .path.display())]
    RootInaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ArchiveError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::RootInaccessible { .. })
    }
}

/// Where a document lives: a category directory, optionally one level deeper.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Shelf {
    pub category: String,
    pub subcategory: Option<String>,
}

impl Shelf {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            subcategory: None,
        }
    }

    pub fn relative_dir(&self) -> PathBuf {
        let mut dir = PathBuf::from(&self.category);
        if let Some(subcategory) = &self.subcategory {
            dir.push(subcategory);
        }
        dir
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub body: String,
    pub shelf: Shelf,
    pub slug: String,
}

impl Document {
    pub fn new(title: impl Into<String>, body: impl Into<String>, shelf: Shelf) -> Self {
        let title = title.into();
        let slug = slug::normalize(&title);
        Self {
            title,
            body: body.into(),
            shelf,
            slug,
        }
    }

    pub fn render(&self, line_width: usize) -> String {
        wrap_text(&format!("{}\n\n{}", self.title, self.body), line_width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    AlreadyPresent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentEntry {
    pub title: String,
    /// Path relative to the category directory, `/`-separated.
    pub filename: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkEntry {
    pub category: String,
    pub subcategory: Option<String>,
    pub title: String,
    pub path: PathBuf,
    pub relative_path: String,
    pub size: u64,
}

#[derive(Debug, Clone)]
pub struct ArchiveStore {
    root: PathBuf,
    line_width: usize,
}

impl ArchiveStore {
    pub fn new(root: impl Into<PathBuf>, line_width: usize) -> Self {
        Self {
            root: root.into(),
            line_width: line_width.max(1),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn line_width(&self) -> usize {
        self.line_width
    }

    pub fn document_path(&self, shelf: &Shelf, slug: &str) -> PathBuf {
        self.root.join(shelf.relative_dir()).join(slug)
    }

    pub fn category_dir(&self, category: &str) -> PathBuf {
        self.root.join(category)
    }

    /// Create the archive root if needed. Failure here is fatal for a run.
    pub fn ensure_root(&self) -> Result<(), ArchiveError> {
        fs::create_dir_all(&self.root).map_err(|source| ArchiveError::RootInaccessible {
            path: self.root.clone(),
            source,
        })?;
        self.check_root()
    }

    pub fn exists(&self, shelf: &Shelf, slug: &str) -> bool {
        self.document_path(shelf, slug).is_file()
    }

    /// Publish a document under its slug. The first writer wins: an existing
    /// file is left untouched and `AlreadyPresent` is returned.
    pub fn write(&self, document: &Document) -> Result<WriteOutcome, ArchiveError> {
        self.check_root()?;

        let dir = self.root.join(document.shelf.relative_dir());
        fs::create_dir_all(&dir).map_err(|source| ArchiveError::Io {
            action: "create",
            path: dir.clone(),
            source,
        })?;

        let target = dir.join(&document.slug);
        if target.exists() {
            return Ok(WriteOutcome::AlreadyPresent);
        }

        let staged = stage_file(&dir, &document.render(self.line_width))?;
        match staged.persist_noclobber(&target) {
            Ok(_) => Ok(WriteOutcome::Written),
            Err(error) if error.error.kind() == io::ErrorKind::AlreadyExists => {
                Ok(WriteOutcome::AlreadyPresent)
            }
            Err(error) => Err(ArchiveError::Io {
                action: "publish",
                path: target,
                source: error.error,
            }),
        }
    }

    /// Replace a navigation artifact (index or TOC) atomically.
    pub fn write_artifact(&self, target: &Path, content: &str) -> Result<(), ArchiveError> {
        let dir = target.parent().unwrap_or(&self.root).to_path_buf();
        fs::create_dir_all(&dir).map_err(|source| ArchiveError::Io {
            action: "create",
            path: dir.clone(),
            source,
        })?;
        let staged = stage_file(&dir, content)?;
        staged.persist(target).map_err(|error| ArchiveError::Io {
            action: "publish",
            path: target.to_path_buf(),
            source: error.error,
        })?;
        Ok(())
    }

    /// Category directories currently present under the root, sorted.
    pub fn categories(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }
        let mut categories = Vec::new();
        let entries = fs::read_dir(&self.root)
            .with_context(|| format!("failed to read {}", self.root.display()))?;
        for entry in entries {
            let entry = entry.with_context(|| format!("failed to read {}", self.root.display()))?;
            if !entry.file_type().is_ok_and(|kind| kind.is_dir()) {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with('.') {
                continue;
            }
            categories.push(name);
        }
        categories.sort();
        Ok(categories)
    }

    /// Documents of one category (including its subcategories), sorted by
    /// filename. A missing category is simply empty.
    pub fn list_documents(&self, category: &str) -> Result<Vec<DocumentEntry>> {
        let base = self.category_dir(category);
        if !base.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(&base).min_depth(1).max_depth(2).follow_links(false) {
            let entry = entry.with_context(|| format!("failed to walk {}", base.display()))?;
            if !entry.file_type().is_file() || !is_document_file(entry.path()) {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(&base)
                .with_context(|| format!("{} escapes {}", entry.path().display(), base.display()))?;
            let filename = display_path(relative);
            let size = entry
                .metadata()
                .with_context(|| format!("failed to stat {}", entry.path().display()))?
                .len();
            entries.push(DocumentEntry {
                title: slug::display_title(&filename),
                filename,
                size,
            });
        }
        entries.sort_by(|left, right| left.filename.cmp(&right.filename));
        Ok(entries)
    }

    /// Lazily walk every document in the archive, down to the subcategory
    /// level that [`Self::list_documents`] also sees. Each call rescans the disk.
    pub fn walk(&self) -> ArchiveWalk {
        let inner = self.root.is_dir().then(|| {
            WalkDir::new(&self.root)
                .min_depth(2)
                .max_depth(3)
                .follow_links(false)
                .sort_by_file_name()
                .into_iter()
        });
        ArchiveWalk {
            root: self.root.clone(),
            inner,
        }
    }

    fn check_root(&self) -> Result<(), ArchiveError> {
        match fs::metadata(&self.root) {
            Ok(metadata) if metadata.is_dir() => Ok(()),
            Ok(_) => Err(ArchiveError::RootInaccessible {
                path: self.root.clone(),
                source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
            }),
            Err(source) => Err(ArchiveError::RootInaccessible {
                path: self.root.clone(),
                source,
            }),
        }
    }
}

pub struct ArchiveWalk {
    root: PathBuf,
    inner: Option<walkdir::IntoIter>,
}

impl Iterator for ArchiveWalk {
    type Item = Result<WalkEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let inner = self.inner.as_mut()?;
        loop {
            let entry = match inner.next()? {
                Ok(entry) => entry,
                Err(error) => {
                    return Some(
                        Err(error).with_context(|| format!("failed to walk {}", self.root.display())),
                    );
                }
            };
            if !entry.file_type().is_file() || !is_document_file(entry.path()) {
                continue;
            }
            return Some(walk_entry(&self.root, entry.path()));
        }
    }
}

fn walk_entry(root: &Path, path: &Path) -> Result<WalkEntry> {
    let relative = path
        .strip_prefix(root)
        .with_context(|| format!("{} escapes {}", path.display(), root.display()))?;
    let parts = relative
        .components()
        .map(|part| part.as_os_str().to_string_lossy().to_string())
        .collect::<Vec<_>>();
    let category = parts.first().cloned().unwrap_or_default();
    let subcategory = if parts.len() > 2 {
        parts.get(1).cloned()
    } else {
        None
    };
    let relative_path = display_path(relative);
    let size = fs::metadata(path)
        .with_context(|| format!("failed to stat {}", path.display()))?
        .len();
    Ok(WalkEntry {
        category,
        subcategory,
        title: slug::display_title(&relative_path),
        path: path.to_path_buf(),
        relative_path,
        size,
    })
}

/// Documents are `.txt` files that are not navigation artifacts, hidden
/// staging files, or `_`-prefixed side files.
pub fn is_document_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    if name.starts_with('.') || name.starts_with('_') {
        return false;
    }
    let Some(stem) = name.strip_suffix(&format!(".{DOCUMENT_EXTENSION}")) else {
        return false;
    };
    stem != INDEX_STEM && stem != TOC_STEM
}

pub fn index_filename() -> String {
    format!("{INDEX_STEM}.{DOCUMENT_EXTENSION}")
}

pub fn toc_filename() -> String {
    format!("{TOC_STEM}.{DOCUMENT_EXTENSION}")
}

fn stage_file(dir: &Path, content: &str) -> Result<NamedTempFile, ArchiveError> {
    let mut staged = Builder::new()
        .prefix(".staging-")
        .suffix(".partial")
        .tempfile_in(dir)
        .map_err(|source| ArchiveError::Io {
            action: "stage",
            path: dir.to_path_buf(),
            source,
        })?;
    let written = staged
        .write_all(content.as_bytes())
        .and_then(|()| staged.flush());
    if let Err(source) = written {
        return Err(ArchiveError::Io {
            action: "write",
            path: staged.path().to_path_buf(),
            source,
        });
    }
    Ok(staged)
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::{ArchiveError, ArchiveStore, Document, Shelf, WriteOutcome, is_document_file};

    fn article(title: &str, category: &str) -> Document {
        Document::new(
            title,
            format!("{title} is a subject with plenty of words to wrap across lines."),
            Shelf::new(category),
        )
    }

    #[test]
    fn write_creates_category_and_wraps_content() {
        let temp = tempdir().expect("tempdir");
        let store = ArchiveStore::new(temp.path().join("book"), 20);
        store.ensure_root().expect("root");

        let outcome = store.write(&article("Rust", "programming")).expect("write");
        assert_eq!(outcome, WriteOutcome::Written);
        assert!(store.exists(&Shelf::new("programming"), "rust.txt"));

        let content = fs::read_to_string(temp.path().join("book/programming/rust.txt")).expect("read");
        assert!(content.starts_with("Rust\n\nRust is a subject"));
        assert!(content.lines().all(|line| line.chars().count() <= 20));
    }

    #[test]
    fn colliding_slug_keeps_first_document() {
        let temp = tempdir().expect("tempdir");
        let store = ArchiveStore::new(temp.path(), 39);
        store.ensure_root().expect("root");

        let first = Document::new("Café", "first body", Shelf::new("food"));
        let second = Document::new("cafe", "second body", Shelf::new("food"));
        assert_eq!(store.write(&first).expect("first"), WriteOutcome::Written);
        assert_eq!(store.write(&second).expect("second"), WriteOutcome::AlreadyPresent);

        let listed = store.list_documents("food").expect("list");
        assert_eq!(listed.len(), 1);
        let content = fs::read_to_string(temp.path().join("food/cafe.txt")).expect("read");
        assert!(content.contains("first body"));
        assert!(!content.contains("second body"));
    }

    #[test]
    fn write_leaves_no_staging_files_behind() {
        let temp = tempdir().expect("tempdir");
        let store = ArchiveStore::new(temp.path(), 39);
        store.ensure_root().expect("root");
        store.write(&article("Alpha", "misc")).expect("write");
        store.write(&article("Alpha", "misc")).expect("rewrite");

        let names = fs::read_dir(temp.path().join("misc"))
            .expect("read dir")
            .map(|entry| entry.expect("entry").file_name().to_string_lossy().to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["alpha.txt".to_string()]);
    }

    #[test]
    fn write_reports_missing_root_as_fatal() {
        let temp = tempdir().expect("tempdir");
        let store = ArchiveStore::new(temp.path().join("never-created"), 39);
        let error = store.write(&article("Alpha", "misc")).expect_err("must fail");
        assert!(matches!(error, ArchiveError::RootInaccessible { .. }));
        assert!(error.is_fatal());
    }

    #[test]
    fn write_into_blocked_category_is_not_fatal() {
        let temp = tempdir().expect("tempdir");
        let store = ArchiveStore::new(temp.path(), 39);
        fs::write(temp.path().join("misc"), "a file where a directory should be").expect("block");

        let error = store.write(&article("Alpha", "misc")).expect_err("must fail");
        assert!(matches!(error, ArchiveError::Io { .. }));
        assert!(!error.is_fatal());
    }

    #[test]
    fn list_documents_skips_index_and_sorts() {
        let temp = tempdir().expect("tempdir");
        let store = ArchiveStore::new(temp.path(), 39);
        let dir = temp.path().join("science");
        fs::create_dir_all(dir.join("physics")).expect("dirs");
        fs::write(dir.join("zebra.txt"), "z").expect("zebra");
        fs::write(dir.join("atom.txt"), "atom").expect("atom");
        fs::write(dir.join("index.txt"), "index").expect("index");
        fs::write(dir.join("notes.md"), "notes").expect("notes");
        fs::write(dir.join("physics/quantum_mechanics.txt"), "q").expect("quantum");

        let listed = store.list_documents("science").expect("list");
        let filenames = listed.iter().map(|entry| entry.filename.as_str()).collect::<Vec<_>>();
        assert_eq!(filenames, vec!["atom.txt", "physics/quantum_mechanics.txt", "zebra.txt"]);
        assert_eq!(listed[0].title, "Atom");
        assert_eq!(listed[0].size, 4);
        assert_eq!(listed[1].title, "Quantum Mechanics");
    }

    #[test]
    fn list_documents_of_missing_category_is_empty() {
        let temp = tempdir().expect("tempdir");
        let store = ArchiveStore::new(temp.path(), 39);
        assert!(store.list_documents("absent").expect("list").is_empty());
    }

    #[test]
    fn walk_reports_categories_and_subcategories() {
        let temp = tempdir().expect("tempdir");
        let store = ArchiveStore::new(temp.path(), 39);
        fs::create_dir_all(temp.path().join("science/physics")).expect("dirs");
        fs::write(temp.path().join("TOC.txt"), "toc").expect("toc");
        fs::write(temp.path().join("science/index.txt"), "index").expect("index");
        fs::write(temp.path().join("science/atom.txt"), "atom").expect("atom");
        fs::write(temp.path().join("science/physics/gravity.txt"), "g").expect("gravity");

        let entries = store.walk().collect::<anyhow::Result<Vec<_>>>().expect("walk");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].category, "science");
        assert_eq!(entries[0].subcategory, None);
        assert_eq!(entries[0].title, "Atom");
        assert_eq!(entries[1].subcategory.as_deref(), Some("physics"));
        assert_eq!(entries[1].relative_path, "science/physics/gravity.txt");

        fs::write(temp.path().join("science/boson.txt"), "b").expect("boson");
        assert_eq!(store.walk().count(), 3);
    }

    #[test]
    fn walk_and_listing_stop_at_the_subcategory_level() {
        let temp = tempdir().expect("tempdir");
        let store = ArchiveStore::new(temp.path(), 39);
        fs::create_dir_all(temp.path().join("science/physics/notes")).expect("dirs");
        fs::write(temp.path().join("science/physics/gravity.txt"), "g").expect("gravity");
        fs::write(temp.path().join("science/physics/notes/draft.txt"), "d").expect("draft");

        let walked = store
            .walk()
            .map(|entry| entry.expect("walk entry").relative_path)
            .collect::<Vec<_>>();
        let listed = store
            .list_documents("science")
            .expect("list")
            .into_iter()
            .map(|entry| format!("science/{}", entry.filename))
            .collect::<Vec<_>>();
        assert_eq!(walked, vec!["science/physics/gravity.txt".to_string()]);
        assert_eq!(walked, listed);
    }

    #[test]
    fn walk_of_missing_root_is_empty() {
        let temp = tempdir().expect("tempdir");
        let store = ArchiveStore::new(temp.path().join("missing"), 39);
        assert_eq!(store.walk().count(), 0);
    }

    #[test]
    fn document_file_filter() {
        assert!(is_document_file(std::path::Path::new("a/rust.txt")));
        assert!(!is_document_file(std::path::Path::new("a/index.txt")));
        assert!(!is_document_file(std::path::Path::new("TOC.txt")));
        assert!(!is_document_file(std::path::Path::new("a/.staging-x.partial")));
        assert!(!is_document_file(std::path::Path::new("a/_draft.txt")));
        assert!(!is_document_file(std::path::Path::new("a/readme.md")));
    }
}
