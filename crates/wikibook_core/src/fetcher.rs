use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Url;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::Settings;

pub const DEFAULT_API_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary/";
pub const DEFAULT_USER_AGENT: &str = "wikibook/0.2 (offline knowledge archive)";
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;
pub const DEFAULT_MIN_BODY_CHARS: usize = 100;

/// Result of looking up one topic. Every failure mode is a value, never a panic
/// or an `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success { title: String, body: String },
    NotFound,
    Thin { length: usize },
    TransientError { reason: String },
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::NotFound => "not_found",
            Self::Thin { .. } => "thin",
            Self::TransientError { .. } => "transient_error",
        }
    }
}

pub trait ContentFetcher {
    fn fetch(&mut self, topic_key: &str) -> FetchOutcome;
}

impl<F: ContentFetcher + ?Sized> ContentFetcher for &mut F {
    fn fetch(&mut self, topic_key: &str) -> FetchOutcome {
        (**self).fetch(topic_key)
    }
}

#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub api_url: String,
    pub user_agent: String,
    pub timeout_ms: u64,
    pub min_body_chars: usize,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            min_body_chars: DEFAULT_MIN_BODY_CHARS,
        }
    }
}

impl FetcherConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            api_url: settings.api_url.clone(),
            user_agent: settings.user_agent.clone(),
            timeout_ms: settings.timeout_ms,
            min_body_chars: settings.min_body_chars,
        }
    }
}

/// Page-summary client for a REST endpoint shaped like
/// `GET {api_url}{key}` returning `{title, extract, type}`.
pub struct SummaryClient {
    client: Client,
    base_url: Url,
    config: FetcherConfig,
    request_count: usize,
}

impl SummaryClient {
    pub fn new(config: FetcherConfig) -> Result<Self> {
        let base_url = Url::parse(&config.api_url)
            .with_context(|| format!("invalid summary API URL: {}", config.api_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("summary API URL cannot take a path: {}", config.api_url);
        }
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .context("failed to build summary HTTP client")?;
        Ok(Self {
            client,
            base_url,
            config,
            request_count: 0,
        })
    }

    pub fn request_count(&self) -> usize {
        self.request_count
    }

    fn summary_url(&self, topic_key: &str) -> Option<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut().ok()?.pop_if_empty().push(topic_key);
        Some(url)
    }
}

impl ContentFetcher for SummaryClient {
    fn fetch(&mut self, topic_key: &str) -> FetchOutcome {
        let Some(url) = self.summary_url(topic_key) else {
            return FetchOutcome::TransientError {
                reason: format!("cannot build request URL for {topic_key}"),
            };
        };

        self.request_count += 1;
        let response = self
            .client
            .get(url)
            .header("User-Agent", self.config.user_agent.clone())
            .header("Accept", "application/json")
            .send();
        let response = match response {
            Ok(response) => response,
            Err(error) => {
                let reason = if error.is_timeout() {
                    format!("timed out after {} ms", self.config.timeout_ms)
                } else {
                    error.to_string()
                };
                return FetchOutcome::TransientError { reason };
            }
        };

        let status = response.status().as_u16();
        match response.text() {
            Ok(payload) => {
                classify_summary(status, &payload, topic_key, self.config.min_body_chars)
            }
            Err(error) => FetchOutcome::TransientError {
                reason: format!("failed to read response body: {error}"),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct SummaryPayload {
    title: Option<String>,
    extract: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Turn a raw summary response into a [`FetchOutcome`].
pub fn classify_summary(
    status: u16,
    payload: &str,
    topic_key: &str,
    min_body_chars: usize,
) -> FetchOutcome {
    if status == 404 {
        return FetchOutcome::NotFound;
    }
    if !(200..300).contains(&status) {
        return FetchOutcome::TransientError {
            reason: format!("HTTP {status}"),
        };
    }

    let parsed: SummaryPayload = match serde_json::from_str(payload) {
        Ok(parsed) => parsed,
        Err(error) => {
            return FetchOutcome::TransientError {
                reason: format!("malformed summary payload: {error}"),
            };
        }
    };

    let body = parsed.extract.unwrap_or_default();
    let length = body.trim().chars().count();
    if parsed.kind.as_deref() == Some("disambiguation") || length < min_body_chars {
        return FetchOutcome::Thin { length };
    }

    let title = parsed
        .title
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| estimated_title(topic_key));
    FetchOutcome::Success {
        title,
        body: body.trim().to_string(),
    }
}

/// Display title guessed from a catalog key before anything is fetched.
pub fn estimated_title(topic_key: &str) -> String {
    topic_key.replace('_', " ").trim().to_string()
}
