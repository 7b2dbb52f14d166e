use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wikibook_core::archive::ArchiveStore;
use wikibook_core::catalog::TopicCatalog;
use wikibook_core::config::{DEFAULT_CONFIG_FILENAME, Settings, load_config};
use wikibook_core::fetcher::{FetcherConfig, SummaryClient};
use wikibook_core::indexer::{IndexOptions, rebuild_all_indexes, rebuild_category_index};
use wikibook_core::orchestrator::{BatchProgress, FetchOrchestrator, RunReport, plan};
use wikibook_core::rate_limit::RateLimiter;
use wikibook_core::toc::{TocOptions, build_toc};

#[derive(Debug, Parser)]
#[command(
    name = "wikibook",
    version,
    about = "Build an offline, category-shelved article archive for small-screen readers"
)]
struct Cli {
    #[arg(long, global = true, value_name = "PATH", help = "Archive root directory")]
    root: Option<PathBuf>,
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[arg(long, global = true, value_name = "COLUMNS", help = "Display width for wrapped text")]
    width: Option<usize>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone)]
struct RuntimeOptions {
    root: Option<PathBuf>,
    config: Option<PathBuf>,
    width: Option<usize>,
}

impl RuntimeOptions {
    fn from_cli(cli: &Cli) -> Self {
        Self {
            root: cli.root.clone(),
            config: cli.config.clone(),
            width: cli.width,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Fetch catalog topics into the archive and rebuild category indexes")]
    Fetch(FetchArgs),
    #[command(about = "Rebuild category indexes from the files on disk")]
    Index(IndexArgs),
    #[command(about = "Write the archive-wide table of contents")]
    Toc(TocArgs),
    #[command(about = "Show topic counts of the active catalog")]
    Catalog(CatalogArgs),
}

#[derive(Debug, Args)]
struct FetchArgs {
    #[arg(short = 'c', long, value_name = "NAME", help = "Only fetch this category")]
    category: Option<String>,
    #[arg(long, value_name = "PATH", help = "TOML topic catalog instead of the built-in one")]
    catalog: Option<PathBuf>,
    #[arg(long, help = "Report what would be fetched without touching the network")]
    dry_run: bool,
}

#[derive(Debug, Args)]
struct IndexArgs {
    #[arg(short = 'c', long, value_name = "NAME", help = "Only rebuild this category")]
    category: Option<String>,
}

#[derive(Debug, Args)]
struct TocArgs {
    #[arg(long = "toc-root", value_name = "PATH", help = "Directory to scan (defaults to the archive root)")]
    toc_root: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct CatalogArgs {
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let runtime = RuntimeOptions::from_cli(&cli);

    match cli.command {
        Some(Commands::Fetch(args)) => run_fetch(&runtime, args),
        Some(Commands::Index(args)) => run_index(&runtime, args),
        Some(Commands::Toc(args)) => run_toc(&runtime, args),
        Some(Commands::Catalog(args)) => run_catalog(args),
        None => {
            let mut command = Cli::command();
            command.print_help()?;
            println!();
            Ok(())
        }
    }
}

fn run_fetch(runtime: &RuntimeOptions, args: FetchArgs) -> Result<()> {
    let settings = resolve_settings(runtime)?;
    let mut catalog = load_catalog(args.catalog.as_deref())?;
    if let Some(category) = args.category.as_deref() {
        catalog = catalog.only(category)?;
    }
    let archive = ArchiveStore::new(&settings.archive_root, settings.line_width);

    if args.dry_run {
        println!("fetch plan");
        println!("archive_root: {}", normalize_path(archive.root()));
        let mut pending_total = 0;
        for entry in plan(&archive, &catalog) {
            let pending = entry.topics - entry.present;
            pending_total += pending;
            println!(
                "category.{}: {} topics, {} present, {} to fetch",
                entry.category, entry.topics, entry.present, pending
            );
        }
        println!("to_fetch: {pending_total}");
        println!(
            "request_delay_ms: {}",
            settings.request_delay.as_millis()
        );
        return Ok(());
    }

    let fetcher = SummaryClient::new(FetcherConfig::from_settings(&settings))?;
    let limiter = RateLimiter::new(settings.request_delay);
    let mut progress = BatchProgress::new(settings.batch_size);
    let mut orchestrator = FetchOrchestrator::new(
        &archive,
        fetcher,
        &limiter,
        IndexOptions::from_settings(&settings),
    );
    let report = orchestrator.run(&catalog, &mut progress)?;
    let requests = orchestrator.into_fetcher().request_count();

    println!("fetch run");
    println!("archive_root: {}", normalize_path(archive.root()));
    print_run_report(&report);
    println!("requests: {requests}");
    Ok(())
}

fn run_index(runtime: &RuntimeOptions, args: IndexArgs) -> Result<()> {
    let settings = resolve_settings(runtime)?;
    let archive = ArchiveStore::new(&settings.archive_root, settings.line_width);
    let options = IndexOptions::from_settings(&settings);

    let summaries = match args.category.as_deref() {
        Some(category) => rebuild_category_index(&archive, category, &options)?
            .into_iter()
            .collect::<Vec<_>>(),
        None => rebuild_all_indexes(&archive, &options)?,
    };

    println!("index rebuild");
    println!("archive_root: {}", normalize_path(archive.root()));
    if summaries.is_empty() {
        println!("indexes: <none> (no documents found)");
    }
    for summary in &summaries {
        println!(
            "index.{}: {} documents -> {}",
            summary.category,
            summary.documents,
            normalize_path(&summary.path)
        );
    }
    Ok(())
}

fn run_toc(runtime: &RuntimeOptions, args: TocArgs) -> Result<()> {
    let settings = resolve_settings(runtime)?;
    let root = args.toc_root.unwrap_or_else(|| settings.archive_root.clone());
    let archive = ArchiveStore::new(root, settings.line_width);

    let report = build_toc(&archive, &TocOptions::from_settings(&settings))?;

    println!("table of contents");
    println!("path: {}", normalize_path(&report.path));
    println!("categories: {}", report.categories);
    println!("articles: {}", report.articles);
    println!(
        "archive_size: {:.1} MB",
        report.archive_bytes as f64 / (1024.0 * 1024.0)
    );
    println!("toc_size: {:.1} KB", report.toc_bytes as f64 / 1024.0);
    Ok(())
}

fn run_catalog(args: CatalogArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;

    println!("topic catalog");
    println!(
        "source: {}",
        args.catalog
            .as_deref()
            .map(normalize_path)
            .unwrap_or_else(|| "<built-in>".to_string())
    );
    for category in catalog.categories() {
        println!("category.{}: {}", category.name, category.topics.len());
        for (subcategory, count) in category.subcategory_counts() {
            println!("  {subcategory}: {count}");
        }
    }
    println!("topics: {}", catalog.topic_count());
    Ok(())
}

fn print_run_report(report: &RunReport) {
    for category in &report.categories {
        println!(
            "category.{}: {} new, {} skipped, {} failed",
            category.category,
            category.counters.succeeded,
            category.counters.skipped,
            category.counters.failed
        );
    }
    println!("processed: {}", report.totals.processed());
    println!("succeeded: {}", report.totals.succeeded);
    println!("skipped: {}", report.totals.skipped);
    println!("failed: {}", report.totals.failed);
    let seconds = report.elapsed.as_secs_f64();
    println!(
        "elapsed: {:.1} minutes ({:.2} hours)",
        seconds / 60.0,
        seconds / 3600.0
    );
    println!(
        "average: {:.2} seconds per article",
        report.seconds_per_article().unwrap_or(0.0)
    );
}

fn load_catalog(path: Option<&Path>) -> Result<TopicCatalog> {
    match path {
        Some(path) => TopicCatalog::load(path),
        None => Ok(TopicCatalog::builtin()),
    }
}

fn resolve_settings(runtime: &RuntimeOptions) -> Result<Settings> {
    dotenvy::dotenv().ok();

    let config_path = runtime
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILENAME));
    let mut settings = load_config(&config_path)?.resolve()?;
    if let Some(root) = &runtime.root {
        settings.archive_root = root.clone();
    }
    if let Some(width) = runtime.width {
        settings.line_width = width;
    }
    settings.validate()?;
    Ok(settings)
}

fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_apply_after_subcommand() {
        let cli = Cli::try_parse_from([
            "wikibook",
            "fetch",
            "--category",
            "science",
            "--dry-run",
            "--root",
            "/sd/book",
            "--width",
            "53",
        ])
        .expect("parse");
        assert_eq!(cli.root, Some(PathBuf::from("/sd/book")));
        assert_eq!(cli.width, Some(53));
        match cli.command {
            Some(Commands::Fetch(args)) => {
                assert_eq!(args.category.as_deref(), Some("science"));
                assert!(args.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn toc_accepts_its_own_scan_root() {
        let cli = Cli::try_parse_from(["wikibook", "toc", "--toc-root", "/sd/the_book"]).expect("parse");
        match cli.command {
            Some(Commands::Toc(args)) => {
                assert_eq!(args.toc_root, Some(PathBuf::from("/sd/the_book")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
