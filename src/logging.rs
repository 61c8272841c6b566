use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Compact lines on stderr (CLI commands)
    Stderr,
    /// Nothing on stderr; the terminal UI owns the screen
    FileOnly,
}

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to log file, written as daily-rolled JSON lines
/// * `target` - Whether stderr receives log lines
pub fn init(verbose: bool, log_file: Option<PathBuf>, target: LogTarget) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = (target == LogTarget::Stderr).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    });

    let file_layer = log_file.map(|log_path| {
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        let file_appender = tracing_appender::rolling::daily(
            log_path
                .parent()
                .unwrap_or_else(|| std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new("atlas.log")),
        );

        fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .json()
    });

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
}

fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("atlas={}", level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(true), "atlas=debug");
        assert_eq!(default_directive(false), "atlas=info");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        let temp_dir = TempDir::new().unwrap();
        init(false, None, LogTarget::Stderr);
        init(true, Some(temp_dir.path().join("logs/atlas.log")), LogTarget::FileOnly);
        assert!(temp_dir.path().join("logs").exists());
    }
}
