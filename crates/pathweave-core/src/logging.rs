use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Per-call search counters for structured logging
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchMetrics {
    /// Vertices whose connections were enumerated
    expanded: u64,
    /// Entries pushed onto the frontier (heap or queue)
    frontier_pushes: u64,
    /// Frontier entries discarded as stale on removal
    stale_skips: u64,
}

impl SearchMetrics {
    /// Create a new SearchMetrics instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an expansion
    pub fn record_expansion(&mut self) {
        self.expanded += 1;
    }

    /// Record a frontier insertion
    pub fn record_push(&mut self) {
        self.frontier_pushes += 1;
    }

    /// Record a lazily deleted frontier entry
    pub fn record_stale(&mut self) {
        self.stale_skips += 1;
    }

    pub fn expanded(&self) -> u64 {
        self.expanded
    }

    pub fn frontier_pushes(&self) -> u64 {
        self.frontier_pushes
    }

    pub fn stale_skips(&self) -> u64 {
        self.stale_skips
    }

    /// Share of frontier entries that turned out stale (0.0-100.0)
    pub fn stale_rate(&self) -> f64 {
        if self.frontier_pushes == 0 {
            0.0
        } else {
            (self.stale_skips as f64 / self.frontier_pushes as f64) * 100.0
        }
    }
}

/// Log search metrics at debug level.
///
/// Usage:
/// ```rust,ignore
/// let mut metrics = SearchMetrics::new();
/// // ... record some metrics ...
/// log_search_metrics!(&metrics, "cheapest_path");
/// ```
#[macro_export]
macro_rules! log_search_metrics {
    ($metrics:expr, $name:expr) => {
        tracing::debug!(
            operation = $name,
            expanded = $metrics.expanded(),
            frontier_pushes = $metrics.frontier_pushes(),
            stale_skips = $metrics.stale_skips(),
            stale_rate = $metrics.stale_rate(),
            "search_metrics"
        );
    };
}

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", vertices = n);
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Filter directive for the search crates.
///
/// An explicit `level` wins over `verbose`; a bare level such as `"trace"` is
/// scoped to `pathweave_core`, while anything containing `=` is passed
/// through as a full directive.
pub fn filter_directive(verbose: bool, level: Option<&str>) -> String {
    match (verbose, level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("pathweave_core={level}"),
        (true, None) => "pathweave_core=debug".to_string(),
        (false, None) => "pathweave_core=warn".to_string(),
    }
}

/// Install a global subscriber for a host application.
///
/// `RUST_LOG`, then `PATHWEAVE_LOG`, override the computed directive. Span
/// open/close events are emitted in JSON mode so per-search timings appear
/// alongside the `search_metrics` records. Fails if a global subscriber is
/// already installed.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let directive = filter_directive(verbose, log_level);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("PATHWEAVE_LOG"))
        .or_else(|_| EnvFilter::try_new(&directive))?;

    let registry = tracing_subscriber::registry().with(filter);
    let stderr = fmt::layer().with_writer(std::io::stderr).with_ansi(false);

    if log_json {
        registry
            .with(stderr.json().with_span_events(FmtSpan::NEW | FmtSpan::CLOSE))
            .try_init()?;
    } else {
        registry.with(stderr.compact().with_target(false)).try_init()?;
    }

    tracing::debug!(%directive, json = log_json, "tracing initialized");
    Ok(())
}
