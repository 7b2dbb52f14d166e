use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::archive::{ArchiveStore, toc_filename};
use crate::config::{DEFAULT_LINE_WIDTH, Settings};
use crate::slug::title_case;
use crate::wrap::{wrap_text, wrap_with_prefix};

pub const DEFAULT_TITLE_LIMIT: usize = 35;
const ELLIPSIS: &str = "...";
const FALLBACK_DESCRIPTION: &str = "Knowledge collection";

const CATEGORY_DESCRIPTIONS: &[(&str, &str)] = &[
    ("agriculture", "Farming, crops, animals, soil health"),
    ("animals", "Mammals, birds, insects, sea life"),
    ("diy_technical", "Tools, repairs, technical guides"),
    ("edible_plants", "Safe plants to eat in the wild"),
    ("engineering", "Machines, structures, power, materials"),
    ("geography", "Countries, landforms, oceans, climate"),
    ("health", "Anatomy, nutrition, disease, medicine"),
    ("history", "World history, wars, civilizations"),
    ("literature", "Classic books, poetry, philosophy"),
    ("mathematics", "Numbers, algebra, geometry, proofs"),
    ("medical", "Emergency care, diseases, first aid"),
    ("people", "Scientists, leaders, artists, thinkers"),
    ("philosophy", "Ethics, logic, schools of thought"),
    ("plants", "Trees, crops, herbs, botany"),
    ("poisonous_plants", "Dangerous plants to avoid"),
    ("programming", "Code tutorials, algorithms, frameworks"),
    ("programming_languages", "Language references"),
    ("reference", "I Ching, dream symbols, guides"),
    ("religious", "Bible, Quran, spiritual texts"),
    ("science", "Physics, chemistry, biology, astronomy"),
    ("survival", "Emergency skills, water, fire, shelter"),
    ("tech", "Technology and computing"),
    ("technology", "Computing, networks, devices, media"),
    ("wikipedia", "General knowledge encyclopedia"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocOptions {
    pub line_width: usize,
    /// Display titles longer than this are cut and end with `...`.
    pub title_limit: usize,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            title_limit: DEFAULT_TITLE_LIMIT,
        }
    }
}

impl TocOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            line_width: settings.line_width,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocArticle {
    pub title: String,
    pub relative_path: String,
    pub size: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    /// `None` holds documents directly under the category directory.
    pub groups: BTreeMap<Option<String>, Vec<TocArticle>>,
}

impl CategorySummary {
    pub fn article_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn size(&self) -> u64 {
        self.groups.values().flatten().map(|article| article.size).sum()
    }

    pub fn subcategory_counts(&self) -> Vec<(&str, usize)> {
        self.groups
            .iter()
            .filter_map(|(name, articles)| name.as_deref().map(|name| (name, articles.len())))
            .collect()
    }
}

/// Snapshot of everything the TOC describes, keyed by category name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArchiveSummary {
    pub categories: BTreeMap<String, CategorySummary>,
}

impl ArchiveSummary {
    pub fn total_articles(&self) -> usize {
        self.categories.values().map(CategorySummary::article_count).sum()
    }

    pub fn total_size(&self) -> u64 {
        self.categories.values().map(CategorySummary::size).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocReport {
    pub path: PathBuf,
    pub categories: usize,
    pub articles: usize,
    pub archive_bytes: u64,
    pub toc_bytes: usize,
}

/// Walk the archive and group documents by category and subcategory. A
/// missing root is an empty archive.
pub fn scan_archive(archive: &ArchiveStore) -> Result<ArchiveSummary> {
    let mut summary = ArchiveSummary::default();
    for entry in archive.walk() {
        let entry = entry?;
        let category = summary
            .categories
            .entry(entry.category.clone())
            .or_insert_with(|| CategorySummary {
                name: entry.category.clone(),
                groups: BTreeMap::new(),
            });
        category
            .groups
            .entry(entry.subcategory.clone())
            .or_default()
            .push(TocArticle {
                title: entry.title,
                relative_path: entry.relative_path,
                size: entry.size,
            });
    }
    for category in summary.categories.values_mut() {
        for articles in category.groups.values_mut() {
            articles.sort_by(|left, right| {
                left.title
                    .cmp(&right.title)
                    .then_with(|| left.relative_path.cmp(&right.relative_path))
            });
        }
    }
    Ok(summary)
}

pub fn render_toc(summary: &ArchiveSummary, options: &TocOptions) -> String {
    let width = options.line_width.max(1);
    let banner = "=".repeat(width);
    let rule = "-".repeat(width);
    let mut lines: Vec<String> = Vec::new();
    let push_wrapped = |lines: &mut Vec<String>, text: &str| {
        lines.extend(wrap_text(text, width).split('\n').map(ToString::to_string));
    };

    lines.push(banner.clone());
    push_wrapped(&mut lines, "THE BOOK - TABLE OF CONTENTS");
    lines.push(banner.clone());
    lines.push(String::new());
    push_wrapped(
        &mut lines,
        &format!("Total Articles: {}", format_thousands(summary.total_articles())),
    );
    push_wrapped(
        &mut lines,
        &format!("Total Size: {}", format_megabytes(summary.total_size())),
    );
    lines.push(String::new());
    push_wrapped(&mut lines, "KNOWLEDGE CATEGORIES");
    lines.push(rule.clone());
    lines.push(String::new());

    for category in summary.categories.values() {
        push_wrapped(&mut lines, &format!("[{}]", category.name.to_uppercase()));
        lines.extend(wrap_with_prefix(
            category_description(&category.name),
            width,
            "  ",
            "  ",
        ));
        lines.extend(wrap_with_prefix(
            &format!("Articles: {}", category.article_count()),
            width,
            "  ",
            "  ",
        ));
        let subcategories = category.subcategory_counts();
        if !subcategories.is_empty() {
            lines.push("  Topics:".to_string());
            for (name, count) in subcategories {
                lines.extend(wrap_with_prefix(
                    &format!("{}: {count}", shelf_heading(name)),
                    width,
                    "    - ",
                    "      ",
                ));
            }
        }
        lines.push(String::new());
    }

    lines.push(banner.clone());
    push_wrapped(&mut lines, "DETAILED ARTICLE LIST");
    lines.push(banner.clone());
    lines.push(String::new());

    for category in summary.categories.values() {
        lines.push(String::new());
        lines.push(banner.clone());
        push_wrapped(&mut lines, &category.name.to_uppercase().replace('_', " "));
        lines.push(banner.clone());
        lines.push(String::new());

        for (subcategory, articles) in &category.groups {
            if let Some(subcategory) = subcategory {
                lines.push(String::new());
                push_wrapped(&mut lines, &format!("{}:", shelf_heading(subcategory)));
                lines.push(rule.clone());
            }
            for article in articles {
                lines.extend(wrap_with_prefix(
                    &truncate_title(&article.title, options.title_limit),
                    width,
                    "  • ",
                    "    ",
                ));
            }
            if !articles.is_empty() {
                lines.push(String::new());
            }
        }
    }

    lines.push(String::new());
    lines.push(banner.clone());
    push_wrapped(&mut lines, "END OF TABLE OF CONTENTS");
    lines.push(banner.clone());
    lines.push(String::new());
    push_wrapped(&mut lines, "Navigate to any category in The Book");
    push_wrapped(&mut lines, "to browse and read articles.");
    lines.push(String::new());
    push_wrapped(&mut lines, "Knowledge is power.");
    lines.push(banner);

    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}

/// Scan, render and write `TOC.txt` at the archive root.
pub fn build_toc(archive: &ArchiveStore, options: &TocOptions) -> Result<TocReport> {
    let summary = scan_archive(archive)
        .with_context(|| format!("failed to scan {}", archive.root().display()))?;
    let rendered = render_toc(&summary, options);
    let path = archive.root().join(toc_filename());
    archive.write_artifact(&path, &rendered)?;

    let report = TocReport {
        path,
        categories: summary.categories.len(),
        articles: summary.total_articles(),
        archive_bytes: summary.total_size(),
        toc_bytes: rendered.len(),
    };
    info!(
        categories = report.categories,
        articles = report.articles,
        "table of contents written to {}",
        report.path.display()
    );
    Ok(report)
}

pub fn category_description(category: &str) -> &'static str {
    CATEGORY_DESCRIPTIONS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, description)| *description)
        .unwrap_or(FALLBACK_DESCRIPTION)
}

fn shelf_heading(name: &str) -> String {
    title_case(&name.replace('_', " "))
}

fn truncate_title(title: &str, limit: usize) -> String {
    if title.chars().count() <= limit {
        return title.to_string();
    }
    let kept = limit.saturating_sub(ELLIPSIS.len());
    let mut truncated = title.chars().take(kept).collect::<String>();
    truncated.truncate(truncated.trim_end().len());
    truncated.push_str(ELLIPSIS);
    truncated
}

fn format_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

fn format_megabytes(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
}
