use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::fetcher::{DEFAULT_API_URL, DEFAULT_MIN_BODY_CHARS, DEFAULT_TIMEOUT_MS, DEFAULT_USER_AGENT};
use crate::rate_limit::DEFAULT_REQUEST_DELAY_MS;

pub const DEFAULT_CONFIG_FILENAME: &str = "wikibook.toml";
pub const DEFAULT_ARCHIVE_ROOT: &str = "the_book/wikipedia";
pub const DEFAULT_LINE_WIDTH: usize = 39;
pub const DEFAULT_BATCH_SIZE: usize = 50;
pub const DEFAULT_SOURCE_LABEL: &str = "Wikipedia article";

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct BookConfig {
    #[serde(default)]
    pub archive: ArchiveSection,
    #[serde(default)]
    pub fetch: FetchSection,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct ArchiveSection {
    pub root: Option<PathBuf>,
    pub line_width: Option<usize>,
    pub source_label: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct FetchSection {
    pub api_url: Option<String>,
    pub user_agent: Option<String>,
    pub request_delay_ms: Option<u64>,
    pub batch_size: Option<usize>,
    pub min_body_chars: Option<usize>,
    pub timeout_ms: Option<u64>,
}

/// Fully resolved options for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub archive_root: PathBuf,
    pub line_width: usize,
    pub source_label: String,
    pub api_url: String,
    pub user_agent: String,
    pub request_delay: Duration,
    pub batch_size: usize,
    pub min_body_chars: usize,
    pub timeout_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            archive_root: PathBuf::from(DEFAULT_ARCHIVE_ROOT),
            line_width: DEFAULT_LINE_WIDTH,
            source_label: DEFAULT_SOURCE_LABEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_delay: Duration::from_millis(DEFAULT_REQUEST_DELAY_MS),
            batch_size: DEFAULT_BATCH_SIZE,
            min_body_chars: DEFAULT_MIN_BODY_CHARS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl BookConfig {
    /// Resolve every option: env > config file > default.
    pub fn resolve(&self) -> Result<Settings> {
        self.resolve_with_lookup(|key| env::var(key).ok())
    }

    pub fn resolve_with_lookup<F>(&self, lookup_env: F) -> Result<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        let lookup = |key: &str| {
            lookup_env(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let settings = Settings {
            archive_root: lookup("WIKIBOOK_ARCHIVE_ROOT")
                .map(PathBuf::from)
                .or_else(|| self.archive.root.clone())
                .unwrap_or(defaults.archive_root),
            line_width: parse_env(&lookup, "WIKIBOOK_LINE_WIDTH")?
                .or(self.archive.line_width)
                .unwrap_or(defaults.line_width),
            source_label: self
                .archive
                .source_label
                .clone()
                .unwrap_or(defaults.source_label),
            api_url: lookup("WIKIBOOK_API_URL")
                .or_else(|| self.fetch.api_url.clone())
                .unwrap_or(defaults.api_url),
            user_agent: lookup("WIKIBOOK_USER_AGENT")
                .or_else(|| self.fetch.user_agent.clone())
                .unwrap_or(defaults.user_agent),
            request_delay: parse_env(&lookup, "WIKIBOOK_REQUEST_DELAY_MS")?
                .or(self.fetch.request_delay_ms)
                .map(Duration::from_millis)
                .unwrap_or(defaults.request_delay),
            batch_size: parse_env(&lookup, "WIKIBOOK_BATCH_SIZE")?
                .or(self.fetch.batch_size)
                .unwrap_or(defaults.batch_size),
            min_body_chars: parse_env(&lookup, "WIKIBOOK_MIN_BODY_CHARS")?
                .or(self.fetch.min_body_chars)
                .unwrap_or(defaults.min_body_chars),
            timeout_ms: parse_env(&lookup, "WIKIBOOK_HTTP_TIMEOUT_MS")?
                .or(self.fetch.timeout_ms)
                .unwrap_or(defaults.timeout_ms),
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.line_width == 0 {
            bail!("line_width must be greater than zero");
        }
        if self.batch_size == 0 {
            bail!("batch_size must be greater than zero");
        }
        if self.timeout_ms == 0 {
            bail!("timeout_ms must be greater than zero");
        }
        Ok(())
    }
}

/// Load and parse a BookConfig from a TOML file. Returns default if the file doesn't exist.
pub fn load_config(config_path: &Path) -> Result<BookConfig> {
    if !config_path.exists() {
        return Ok(BookConfig::default());
    }
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("failed to read {}", config_path.display()))?;
    let parsed: BookConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse {}", config_path.display()))?;
    Ok(parsed)
}

fn parse_env<T, L>(lookup: &L, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    L: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|error| anyhow::anyhow!("invalid {key}={value}: {error}")),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn defaults_match_reader_constraints() {
        let settings = BookConfig::default()
            .resolve_with_lookup(|_| None)
            .expect("resolve");
        assert_eq!(settings.archive_root, PathBuf::from("the_book/wikipedia"));
        assert_eq!(settings.line_width, 39);
        assert_eq!(settings.request_delay, Duration::from_millis(500));
        assert_eq!(settings.batch_size, 50);
        assert_eq!(settings.min_body_chars, 100);
        assert_eq!(settings.source_label, "Wikipedia article");
    }

    #[test]
    fn load_config_returns_default_for_missing_file() {
        let config = load_config(Path::new("/nonexistent/wikibook.toml")).expect("load config");
        assert_eq!(config, BookConfig::default());
    }

    #[test]
    fn load_config_parses_sections() {
        let temp = tempdir().expect("tempdir");
        let config_path = temp.path().join("wikibook.toml");
        fs::write(
            &config_path,
            r#"
[archive]
root = "/sd/the_book"
line_width = 53
source_label = "Encyclopedia entry"

[fetch]
request_delay_ms = 1000
batch_size = 10
min_body_chars = 250
user_agent = "test-agent/1.0"
"#,
        )
        .expect("write config");

        let settings = load_config(&config_path)
            .expect("load config")
            .resolve_with_lookup(|_| None)
            .expect("resolve");
        assert_eq!(settings.archive_root, PathBuf::from("/sd/the_book"));
        assert_eq!(settings.line_width, 53);
        assert_eq!(settings.source_label, "Encyclopedia entry");
        assert_eq!(settings.request_delay, Duration::from_secs(1));
        assert_eq!(settings.batch_size, 10);
        assert_eq!(settings.min_body_chars, 250);
        assert_eq!(settings.user_agent, "test-agent/1.0");
    }

    #[test]
    fn env_overrides_file_values() {
        let config = BookConfig {
            archive: ArchiveSection {
                root: Some(PathBuf::from("from-file")),
                line_width: Some(20),
                ..ArchiveSection::default()
            },
            ..BookConfig::default()
        };
        let env = HashMap::from([
            ("WIKIBOOK_ARCHIVE_ROOT".to_string(), "from-env".to_string()),
            ("WIKIBOOK_REQUEST_DELAY_MS".to_string(), " 0 ".to_string()),
        ]);
        let settings = config
            .resolve_with_lookup(|key| env.get(key).cloned())
            .expect("resolve");
        assert_eq!(settings.archive_root, PathBuf::from("from-env"));
        assert_eq!(settings.line_width, 20);
        assert_eq!(settings.request_delay, Duration::ZERO);
    }

    #[test]
    fn invalid_env_number_is_reported() {
        let error = BookConfig::default()
            .resolve_with_lookup(|key| (key == "WIKIBOOK_BATCH_SIZE").then(|| "lots".to_string()))
            .expect_err("must fail");
        assert!(error.to_string().contains("invalid WIKIBOOK_BATCH_SIZE=lots"));
    }

    #[test]
    fn zero_width_is_rejected() {
        let config = BookConfig {
            archive: ArchiveSection {
                line_width: Some(0),
                ..ArchiveSection::default()
            },
            ..BookConfig::default()
        };
        let error = config.resolve_with_lookup(|_| None).expect_err("must fail");
        assert!(error.to_string().contains("line_width must be greater than zero"));
    }

    #[test]
    fn load_config_returns_error_for_invalid_toml() {
        let temp = tempdir().expect("tempdir");
        let config_path = temp.path().join("wikibook.toml");
        fs::write(&config_path, "[archive\nroot = \"oops\"").expect("write config");
        let error = load_config(&config_path).expect_err("must fail");
        assert!(error.to_string().contains("failed to parse"));
    }
}
