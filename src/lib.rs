//! Builds a single-page personal site: JSON content and an optional remote
//! reading list are composed into HTML fragments and bound into a template.
//!
//! The build is a three phase [`Pipeline`](crate::core::Pipeline) run by
//! [`SiteEngine`]: extract (read content, fetch shelves), transform (compose
//! fragments) and load (bind the template and write the page).

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::storage::LocalStorage;
pub use config::SiteConfig;
pub use crate::core::{engine::SiteEngine, pipeline::SitePipeline};
pub use utils::error::{Result, SiteError};
