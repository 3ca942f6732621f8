use clap::Parser;
use homepage_builder::utils::logger::{self, LogFormat};
use homepage_builder::utils::validation::Validate;
use homepage_builder::{CliArgs, LocalStorage, SiteConfig, SiteEngine, SitePipeline};
use std::fmt;

/// What a successful invocation did.
#[derive(Debug, PartialEq)]
enum Outcome {
    Written(String),
    DryRun(usize),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Written(path) => write!(f, "Site built successfully: {}", path),
            Outcome::DryRun(bytes) => {
                write!(f, "Dry run complete: page would be {} bytes, nothing written", bytes)
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let format = if args.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, args.verbose);

    tracing::info!("Loading configuration from: {}", args.config);
    let mut config = match SiteConfig::from_file_or_default(&args.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config file '{}': {}", args.config, e);
            eprintln!("Failed to load config file '{}': {}", args.config, e);
            std::process::exit(1);
        }
    };
    args.apply_overrides(&mut config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("{}", e);
        std::process::exit(1);
    }
    tracing::debug!("Site config: {:?}", config);

    let engine = SiteEngine::new(SitePipeline::new(LocalStorage::new("."), config));

    let result = if args.dry_run {
        engine.dry_run().await.map(Outcome::DryRun)
    } else {
        engine.run().await.map(Outcome::Written)
    };

    // Feed failures never reach here; they leave their shelf empty instead.
    match result {
        Ok(outcome) => println!("{}", outcome),
        Err(e) => {
            tracing::error!("Build failed: {}", e);
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("Build failed: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
