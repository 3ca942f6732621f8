use crate::config::toml_config::SiteConfig;
use crate::domain::model::BookSource;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "homepage-builder")]
#[command(about = "Builds a personal homepage from JSON content and a reading-list feed")]
#[command(
    after_help = "Books come from the reading-list feed unless --local-books is given or \
                  the config sets books.source = \"local\". The feed needs a user id: set \
                  [feed].user_id in the config file or pass --feed-user-id. Without a config \
                  file the built-in defaults are used, so one of those flags is required."
)]
pub struct CliArgs {
    /// Path to the TOML site configuration; defaults are used when it is missing
    #[arg(short, long, default_value = "site.toml")]
    pub config: String,

    /// Override the output file from the config
    #[arg(short, long)]
    pub output: Option<String>,

    /// Read books from books.json instead of the feed
    #[arg(long)]
    pub local_books: bool,

    /// Reading-list user id; required for the feed when the config has none
    #[arg(long)]
    pub feed_user_id: Option<String>,

    /// Load and compose everything without writing the page
    #[arg(long)]
    pub dry_run: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Command-line flags win over the file.
    pub fn apply_overrides(&self, config: &mut SiteConfig) {
        if let Some(output) = &self.output {
            config.site.output = output.clone();
        }
        if self.local_books {
            config.books.source = BookSource::Local;
        }
        if let Some(user_id) = &self.feed_user_id {
            config.feed.user_id = user_id.clone();
        }
    }
}
