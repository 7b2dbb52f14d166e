use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::archive::Shelf;
use crate::builtin_catalog::BUILTIN_TOPICS;
use crate::fetcher::estimated_title;
use crate::slug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub key: String,
    pub category: String,
    pub subcategory: Option<String>,
}

impl Topic {
    pub fn shelf(&self) -> Shelf {
        Shelf {
            category: self.category.clone(),
            subcategory: self.subcategory.clone(),
        }
    }

    pub fn estimated_title(&self) -> String {
        estimated_title(&self.key)
    }

    /// Slug guessed from the catalog key; decides whether a fetch happens.
    pub fn estimated_slug(&self) -> String {
        slug::normalize(&self.estimated_title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTopics {
    pub name: String,
    pub topics: Vec<Topic>,
}

impl CategoryTopics {
    pub fn subcategory_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for topic in &self.topics {
            if let Some(subcategory) = &topic.subcategory {
                *counts.entry(subcategory.clone()).or_insert(0) += 1;
            }
        }
        counts
    }
}

/// Immutable category -> [subcategory ->] topics table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicCatalog {
    categories: Vec<CategoryTopics>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: BTreeMap<String, CategoryFile>,
}

#[derive(Debug, Deserialize)]
struct CategoryFile {
    #[serde(default)]
    topics: Vec<String>,
    #[serde(default)]
    subcategories: BTreeMap<String, SubcategoryFile>,
}

#[derive(Debug, Deserialize)]
struct SubcategoryFile {
    #[serde(default)]
    topics: Vec<String>,
}

impl TopicCatalog {
    pub fn builtin() -> Self {
        let categories = BUILTIN_TOPICS
            .iter()
            .map(|(category, keys)| CategoryTopics {
                name: (*category).to_string(),
                topics: keys
                    .iter()
                    .map(|key| Topic {
                        key: (*key).to_string(),
                        category: (*category).to_string(),
                        subcategory: None,
                    })
                    .collect(),
            })
            .collect();
        Self { categories }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse catalog {}", path.display()))
    }

    /// Parse the nested TOML catalog:
    ///
    /// ```toml
    /// [categories.science]
    /// topics = ["Atom"]
    ///
    /// [categories.science.subcategories.physics]
    /// topics = ["Gravity"]
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let parsed: CatalogFile = toml::from_str(content)?;
        let mut categories = Vec::with_capacity(parsed.categories.len());
        for (name, file) in parsed.categories {
            validate_shelf_name(&name)?;
            let mut topics = keys_to_topics(&name, None, file.topics);
            for (subcategory, sub_file) in file.subcategories {
                validate_shelf_name(&subcategory)?;
                topics.extend(keys_to_topics(&name, Some(&subcategory), sub_file.topics));
            }
            categories.push(CategoryTopics { name, topics });
        }
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[CategoryTopics] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&CategoryTopics> {
        self.categories.iter().find(|category| category.name == name)
    }

    pub fn topic_count(&self) -> usize {
        self.categories.iter().map(|category| category.topics.len()).sum()
    }

    /// Keep a single category; unknown names are an error.
    pub fn only(&self, name: &str) -> Result<Self> {
        match self.category(name) {
            Some(category) => Ok(Self {
                categories: vec![category.clone()],
            }),
            None => {
                let known = self
                    .categories
                    .iter()
                    .map(|category| category.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                bail!("unknown category: {name} (known: {known})")
            }
        }
    }
}

fn keys_to_topics(category: &str, subcategory: Option<&str>, keys: Vec<String>) -> Vec<Topic> {
    keys.into_iter()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .map(|key| Topic {
            key,
            category: category.to_string(),
            subcategory: subcategory.map(ToString::to_string),
        })
        .collect()
}

fn validate_shelf_name(name: &str) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed != name
        || trimmed.starts_with('.')
        || trimmed.contains(['/', '\\'])
    {
        bail!("invalid catalog shelf name: {name:?}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::TopicCatalog;

    #[test]
    fn builtin_catalog_is_flat_and_populated() {
        let catalog = TopicCatalog::builtin();
        assert_eq!(catalog.categories().len(), 12);
        assert_eq!(catalog.categories()[0].name, "programming");
        assert!(catalog.topic_count() > 1000);
        assert!(
            catalog
                .categories()
                .iter()
                .flat_map(|category| &category.topics)
                .all(|topic| topic.subcategory.is_none())
        );
    }

    #[test]
    fn builtin_catalog_keeps_repeated_keys() {
        let catalog = TopicCatalog::builtin();
        let programming = catalog.category("programming").expect("programming");
        let sql = programming.topics.iter().filter(|topic| topic.key == "SQL").count();
        assert_eq!(sql, 2);
    }

    #[test]
    fn toml_catalog_supports_subcategories() {
        let catalog = TopicCatalog::from_toml_str(
            r#"
[categories.science]
topics = ["Atom", "  "]

[categories.science.subcategories.physics]
topics = ["Gravity", "Quantum_mechanics"]

[categories.history]
topics = ["Roman_Empire"]
"#,
        )
        .expect("parse");

        assert_eq!(catalog.topic_count(), 4);
        let science = catalog.category("science").expect("science");
        assert_eq!(science.topics[0].key, "Atom");
        assert_eq!(science.topics[1].subcategory.as_deref(), Some("physics"));
        assert_eq!(science.subcategory_counts().get("physics"), Some(&2));
        assert_eq!(
            science.topics[2].estimated_slug(),
            "quantum_mechanics.txt"
        );
    }

    #[test]
    fn toml_catalog_rejects_path_like_names() {
        let error = TopicCatalog::from_toml_str("[categories.\"../escape\"]\ntopics = [\"A\"]\n")
            .expect_err("must fail");
        assert!(error.to_string().contains("invalid catalog shelf name"));
    }

    #[test]
    fn only_filters_and_reports_unknown_categories() {
        let catalog = TopicCatalog::builtin();
        let single = catalog.only("philosophy").expect("philosophy");
        assert_eq!(single.categories().len(), 1);
        let error = catalog.only("astrology").expect_err("must fail");
        assert!(error.to_string().contains("unknown category: astrology"));
    }
}
