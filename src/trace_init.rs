//! Optional JSON trace output for the host server (`trace` feature).

use std::path::Path;

/// Environment variable holding filter directives, e.g. `emoji_core=trace`.
pub const FILTER_ENV: &str = "EMOJICHAT_LOG";

pub const DEFAULT_FILTER: &str = "emojichat_engine=debug,emoji_core=debug";

/// Daily-rolled file name prefix inside the log directory.
pub const TRACE_FILE: &str = "emojichat-trace.jsonl";

/// Directives to filter with: the value of [`FILTER_ENV`] unless it is unset
/// or blank.
pub fn filter_directives(from_env: Option<String>) -> String {
    from_env
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install a JSON trace writer under `log_dir`.
///
/// Returns `true` if this call installed it. Later calls, or a host that
/// already set a global subscriber, leave things as they are.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> bool {
    use std::sync::Once;

    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();

    let mut installed = false;
    INIT.call_once(|| {
        let directives = filter_directives(std::env::var(FILTER_ENV).ok());
        let filter = EnvFilter::try_new(&directives).unwrap_or_else(|e| {
            eprintln!("emojichat: bad {FILTER_ENV} '{directives}': {e}");
            EnvFilter::new(DEFAULT_FILTER)
        });

        let (writer, guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::daily(log_dir, TRACE_FILE));
        installed = tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(filter)
            .try_init()
            .is_ok();
        if installed {
            // Flushes for the life of the server process.
            std::mem::forget(guard);
        }
    });
    installed
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> bool {
    false
}
