use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

/// Log file written under the directory given to [`init_tracing`].
pub const TRACE_FILE_NAME: &str = "dianzi-trace.jsonl";

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_TRACE_FILTER: &str = "dianzi=debug,dianzi_core=debug,dianzi_moedict=debug";

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Install a JSONL subscriber writing to `log_dir/dianzi-trace.jsonl`.
/// Later calls are no-ops.
pub fn init_tracing(log_dir: &Path) {
    init_tracing_with(log_dir, TRACE_FILE_NAME, DEFAULT_TRACE_FILTER);
}

/// Like [`init_tracing`], with the file name and fallback filter given.
/// Only the first call in a process takes effect.
#[cfg(feature = "trace")]
pub fn init_tracing_with(log_dir: &Path, file_name: &str, default_filter: &str) {
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard); // flush worker lives as long as the process

        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
            )
            .init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing_with(_log_dir: &Path, _file_name: &str, _default_filter: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "trace")]
    #[test]
    fn init_creates_log_file_once() {
        let dir = tempfile::tempdir().unwrap();
        init_tracing(dir.path());
        tracing::debug!(target: "dianzi", "trace smoke");
        assert!(dir.path().join(TRACE_FILE_NAME).exists());

        // A second call does not install another subscriber or file.
        let other = tempfile::tempdir().unwrap();
        init_tracing_with(other.path(), "other.jsonl", "dianzi=trace");
        assert!(!other.path().join("other.jsonl").exists());
    }

    #[cfg(not(feature = "trace"))]
    #[test]
    fn init_without_feature_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        init_tracing(dir.path());
        assert!(!dir.path().join(TRACE_FILE_NAME).exists());
    }

    #[test]
    fn default_filter_covers_workspace_crates() {
        for target in ["dianzi=", "dianzi_core=", "dianzi_moedict="] {
            assert!(DEFAULT_TRACE_FILTER.contains(target), "{target}");
        }
    }
}
