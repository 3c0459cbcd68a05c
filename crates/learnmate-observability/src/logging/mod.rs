//! Structured logging
//!
//! Logs go to stderr so command output on stdout stays clean. `RUST_LOG`
//! takes precedence over the configured level when it is set.

use std::path::{Path, PathBuf};

use learnmate_config::{expand_tilde, LogLevel, LoggingConfig};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    layer::{Layered, SubscriberExt},
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

use crate::error::{ObservabilityError, Result};

type FilteredRegistry = Layered<EnvFilter, Registry>;
type BoxedLayer = Box<dyn Layer<FilteredRegistry> + Send + Sync>;

/// Installs the global subscriber and owns the file writer guard
pub struct LogManager {
    config: LoggingConfig,
    // Dropping the guard flushes and stops the file writer
    _file_guard: Option<WorkerGuard>,
    initialized: bool,
}

impl std::fmt::Debug for LogManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogManager")
            .field("config", &self.config)
            .field("initialized", &self.initialized)
            .finish()
    }
}

impl LogManager {
    /// Install the global subscriber for `config`
    pub fn new(config: &LoggingConfig) -> Result<Self> {
        let mut manager = Self {
            config: config.clone(),
            _file_guard: None,
            initialized: false,
        };

        manager.init()?;

        Ok(manager)
    }

    fn init(&mut self) -> Result<()> {
        if self.initialized {
            return Ok(());
        }

        let filter = Self::build_filter(self.config.level)?;

        let mut layers: Vec<BoxedLayer> = Vec::new();

        if self.config.json_format {
            layers.push(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .boxed(),
            );
        } else {
            layers.push(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .boxed(),
            );
        }

        if let Some(path) = self.log_file_path() {
            let (directory, file_name) = split_log_path(&path)?;
            std::fs::create_dir_all(&directory)?;

            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            self._file_guard = Some(guard);

            let layer = if self.config.json_format {
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false)
                    .boxed()
            } else {
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_line_number(true)
                    .boxed()
            };
            layers.push(layer);
        }

        tracing_subscriber::registry()
            .with(filter)
            .with(layers)
            .try_init()
            .map_err(|e| ObservabilityError::logging(format!("Failed to install subscriber: {}", e)))?;

        self.initialized = true;

        tracing::debug!(
            target: "learnmate_observability",
            "Log manager initialized with level: {}",
            self.config.level
        );

        Ok(())
    }

    /// `RUST_LOG` if set and valid, otherwise the configured level
    fn build_filter(level: LogLevel) -> Result<EnvFilter> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(level.to_string())
            .map_err(|e| ObservabilityError::logging(format!("Invalid log level: {}", e)))
    }

    fn log_file_path(&self) -> Option<PathBuf> {
        self.config.file.as_deref().and_then(expand_tilde)
    }

    pub fn config(&self) -> &LoggingConfig {
        &self.config
    }
}

fn split_log_path(path: &Path) -> Result<(PathBuf, PathBuf)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| ObservabilityError::io(format!("Log path has no file name: {:?}", path)))?;
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    Ok((directory, PathBuf::from(file_name)))
}

/// Span for work on one stored session
pub fn create_session_span(session_id: i64) -> tracing::Span {
    tracing::info_span!("session", session_id = session_id)
}

/// Span for one practice question
pub fn create_practice_span(session_id: i64, question_index: usize) -> tracing::Span {
    tracing::info_span!("practice", session_id = session_id, question = question_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_manager_init_creates_log_dir() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("logs").join("learnmate.log");
        let config = LoggingConfig {
            level: LogLevel::Debug,
            file: Some(log_path.to_string_lossy().into_owned()),
            json_format: false,
        };

        let manager = LogManager::new(&config).unwrap();
        assert!(log_path.parent().unwrap().exists());
        assert_eq!(manager.config().level, LogLevel::Debug);

        // Only one global subscriber per process
        assert!(LogManager::new(&config).is_err());
    }

    #[test]
    fn test_split_log_path() {
        let (dir, file) = split_log_path(Path::new("/var/log/learnmate.log")).unwrap();
        assert_eq!(dir, PathBuf::from("/var/log"));
        assert_eq!(file, PathBuf::from("learnmate.log"));

        let (dir, _) = split_log_path(Path::new("learnmate.log")).unwrap();
        assert_eq!(dir, PathBuf::from("."));

        assert!(split_log_path(Path::new("/")).is_err());
    }

    #[test]
    fn test_create_spans() {
        tracing::subscriber::with_default(tracing_subscriber::registry(), || {
            let session_span = create_session_span(1718000000000);
            let metadata = session_span.metadata().unwrap();
            assert_eq!(metadata.name(), "session");
            assert!(metadata.fields().field("session_id").is_some());

            let practice_span = create_practice_span(1718000000000, 2);
            let metadata = practice_span.metadata().unwrap();
            assert_eq!(metadata.name(), "practice");
            assert!(metadata.fields().field("question").is_some());
        });
    }
}
