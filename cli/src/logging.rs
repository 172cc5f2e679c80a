//! Logging setup for the CLI.
//!
//! Logs go to stderr so they never interleave with REPL output on stdout.
//! Set `DEBUG_LOGGING=1` for debug output from waypoint crates; `RUST_LOG`
//! takes precedence when set.

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub fn init() {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let filter = match std::env::var("RUST_LOG") {
        Ok(directive) if !directive.is_empty() => EnvFilter::new(directive),
        _ => EnvFilter::new(filter_directive(debug_logging)),
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter)
        .init();

    tracing::debug!(debug_logging, "Waypoint logging initialized");
}

fn filter_directive(debug_logging: bool) -> &'static str {
    if debug_logging {
        "info,waypoint_core=debug,waypoint_cli=debug"
    } else {
        "warn"
    }
}
