pub mod archive;
mod builtin_catalog;
pub mod catalog;
pub mod config;
pub mod fetcher;
pub mod indexer;
pub mod orchestrator;
pub mod rate_limit;
pub mod slug;
pub mod toc;
pub mod wrap;
