use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One short line per event on stderr-style terminals.
    Compact,
    /// JSON lines, for CI logs that get shipped somewhere structured.
    Json,
}

/// `RUST_LOG` wins when set; otherwise the builder's own events are shown at
/// info, or debug with `verbose`.
pub fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "homepage_builder=debug,warn"
    } else {
        "homepage_builder=info,warn"
    }
}

/// Installs the global subscriber. Call once, before the build starts.
pub fn init_logger(format: LogFormat, verbose: bool) {
    let layer = tracing_subscriber::fmt::layer()
        .with_target(verbose)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(build_filter(verbose));
    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.json()).init(),
    }
}
