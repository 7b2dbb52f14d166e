use std::time::{Duration, Instant};

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::archive::{ArchiveStore, Document, WriteOutcome};
use crate::catalog::{CategoryTopics, Topic, TopicCatalog};
use crate::fetcher::{ContentFetcher, FetchOutcome};
use crate::indexer::{IndexOptions, IndexSummary, rebuild_category_index};
use crate::rate_limit::RateLimiter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunCounters {
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunCounters {
    pub fn processed(&self) -> usize {
        self.succeeded + self.skipped + self.failed
    }

    fn record(&mut self, state: TopicState) {
        match state {
            TopicState::Written => self.succeeded += 1,
            TopicState::Skipped => self.skipped += 1,
            TopicState::FetchFailed => self.failed += 1,
            TopicState::Pending | TopicState::Fetched => {}
        }
    }

    fn absorb(&mut self, other: &RunCounters) {
        self.succeeded += other.succeeded;
        self.skipped += other.skipped;
        self.failed += other.failed;
    }
}

/// Lifecycle of one topic: `Pending -> Skipped | Fetched -> Written | FetchFailed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum TopicState {
    #[default]
    Pending,
    Skipped,
    Fetched,
    Written,
    FetchFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryReport {
    pub category: String,
    pub topics: usize,
    pub counters: RunCounters,
    pub index: Option<IndexSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub categories: Vec<CategoryReport>,
    pub totals: RunCounters,
    pub elapsed: Duration,
}

impl RunReport {
    /// Wall time per newly written article, if any were written.
    pub fn seconds_per_article(&self) -> Option<f64> {
        (self.totals.succeeded > 0)
            .then(|| self.elapsed.as_secs_f64() / self.totals.succeeded as f64)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TopicProgress<'a> {
    pub category: &'a str,
    pub position: usize,
    pub total: usize,
    pub topic: &'a Topic,
    pub state: TopicState,
    pub counters: RunCounters,
}

/// Receives progress callbacks from a fetch run.
pub trait ProgressObserver {
    fn on_category_start(&mut self, _category: &str, _topics: usize) {}
    fn on_topic(&mut self, progress: &TopicProgress<'_>);
    fn on_category_finish(&mut self, _report: &CategoryReport) {}
}

pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_topic(&mut self, _progress: &TopicProgress<'_>) {}
}

/// Logs a progress line every `batch_size` topics.
#[derive(Debug, Clone, Copy)]
pub struct BatchProgress {
    batch_size: usize,
}

impl BatchProgress {
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
        }
    }

    pub fn should_report(&self, position: usize) -> bool {
        position > 0 && position % self.batch_size == 0
    }
}

impl ProgressObserver for BatchProgress {
    fn on_category_start(&mut self, category: &str, topics: usize) {
        info!(category, topics, "category started");
    }

    fn on_topic(&mut self, progress: &TopicProgress<'_>) {
        if self.should_report(progress.position) {
            info!(
                category = progress.category,
                "progress {}/{} ({} new, {} skipped, {} failed)",
                progress.position,
                progress.total,
                progress.counters.succeeded,
                progress.counters.skipped,
                progress.counters.failed
            );
        }
    }

    fn on_category_finish(&mut self, report: &CategoryReport) {
        info!(
            category = report.category.as_str(),
            "completed: {} new, {} already had, {} failed",
            report.counters.succeeded,
            report.counters.skipped,
            report.counters.failed
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPlan {
    pub category: String,
    pub topics: usize,
    pub present: usize,
}

/// Drives the catalog through fetch, dedup, write and index rebuild.
pub struct FetchOrchestrator<'a, F> {
    archive: &'a ArchiveStore,
    fetcher: F,
    limiter: &'a RateLimiter,
    index_options: IndexOptions,
}

impl<'a, F: ContentFetcher> FetchOrchestrator<'a, F> {
    pub fn new(
        archive: &'a ArchiveStore,
        fetcher: F,
        limiter: &'a RateLimiter,
        index_options: IndexOptions,
    ) -> Self {
        Self {
            archive,
            fetcher,
            limiter,
            index_options,
        }
    }

    pub fn into_fetcher(self) -> F {
        self.fetcher
    }

    /// Process every category in catalog order. Only an inaccessible archive
    /// root aborts the run.
    pub fn run(
        &mut self,
        catalog: &TopicCatalog,
        observer: &mut dyn ProgressObserver,
    ) -> Result<RunReport> {
        let started = Instant::now();
        self.archive.ensure_root()?;

        let mut categories = Vec::with_capacity(catalog.categories().len());
        let mut totals = RunCounters::default();
        for category in catalog.categories() {
            let report = self.run_category(category, observer)?;
            totals.absorb(&report.counters);
            categories.push(report);
        }

        Ok(RunReport {
            categories,
            totals,
            elapsed: started.elapsed(),
        })
    }

    pub fn run_category(
        &mut self,
        category: &CategoryTopics,
        observer: &mut dyn ProgressObserver,
    ) -> Result<CategoryReport> {
        let total = category.topics.len();
        observer.on_category_start(&category.name, total);

        let mut counters = RunCounters::default();
        for (offset, topic) in category.topics.iter().enumerate() {
            let state = self.process_topic(topic)?;
            counters.record(state);
            observer.on_topic(&TopicProgress {
                category: &category.name,
                position: offset + 1,
                total,
                topic,
                state,
                counters,
            });
        }

        // The index mirrors disk, so it is rebuilt even when nothing was added.
        let index = match rebuild_category_index(self.archive, &category.name, &self.index_options) {
            Ok(index) => index,
            Err(error) => {
                warn!(category = category.name.as_str(), "index not rebuilt: {error:#}");
                None
            }
        };
        let report = CategoryReport {
            category: category.name.clone(),
            topics: total,
            counters,
            index,
        };
        observer.on_category_finish(&report);
        Ok(report)
    }

    /// Run one topic to a terminal state. `Err` means the archive root is gone.
    pub fn process_topic(&mut self, topic: &Topic) -> Result<TopicState> {
        let shelf = topic.shelf();
        let estimated_slug = topic.estimated_slug();
        trace_state(topic, TopicState::Pending);

        if self.archive.exists(&shelf, &estimated_slug) {
            trace_state(topic, TopicState::Skipped);
            return Ok(TopicState::Skipped);
        }

        self.limiter.record_call();
        let (title, body) = match self.fetcher.fetch(&topic.key) {
            FetchOutcome::Success { title, body } => (title, body),
            failure => {
                debug!(
                    topic = topic.key.as_str(),
                    outcome = failure.label(),
                    "fetch failed: {failure:?}"
                );
                trace_state(topic, TopicState::FetchFailed);
                return Ok(TopicState::FetchFailed);
            }
        };
        trace_state(topic, TopicState::Fetched);

        let document = Document::new(title, body, shelf);
        let state = match self.archive.write(&document) {
            Ok(WriteOutcome::Written) => TopicState::Written,
            Ok(WriteOutcome::AlreadyPresent) => {
                debug!(
                    topic = topic.key.as_str(),
                    slug = document.slug.as_str(),
                    "slug already archived; keeping first document"
                );
                TopicState::Written
            }
            Err(error) if error.is_fatal() => return Err(error.into()),
            Err(error) => {
                warn!(topic = topic.key.as_str(), "{error}");
                TopicState::FetchFailed
            }
        };
        self.limiter.throttle();
        trace_state(topic, state);
        Ok(state)
    }
}

/// Dry-run view: how many catalog topics each category would still fetch.
pub fn plan(archive: &ArchiveStore, catalog: &TopicCatalog) -> Vec<CategoryPlan> {
    catalog
        .categories()
        .iter()
        .map(|category| CategoryPlan {
            category: category.name.clone(),
            topics: category.topics.len(),
            present: category
                .topics
                .iter()
                .filter(|topic| archive.exists(&topic.shelf(), &topic.estimated_slug()))
                .count(),
        })
        .collect()
}

fn trace_state(topic: &Topic, state: TopicState) {
    debug!(
        topic = topic.key.as_str(),
        category = topic.category.as_str(),
        state = ?state,
        "topic transition"
    );
}
