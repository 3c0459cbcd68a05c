use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            storage: StorageConfig::default(),
            upload: UploadConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Read a value by dotted key, e.g. `storage.path`
    pub fn get_value(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["version"] => Some(self.version.clone()),
            ["storage", "path"] => Some(self.storage.path.clone()),
            ["storage", "key"] => Some(self.storage.key.clone()),
            ["upload", "accepted_video_type"] => Some(self.upload.accepted_video_type.clone()),
            ["logging", "level"] => Some(self.logging.level.to_string()),
            ["logging", "file"] => self.logging.file.clone(),
            ["logging", "json_format"] => Some(self.logging.json_format.to_string()),
            _ => None,
        }
    }

    /// Set a value by dotted key
    pub fn set_value(&mut self, key: &str, value: &str) -> ConfigResult<()> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["storage", "path"] => {
                self.storage.path = value.to_string();
            }
            ["storage", "key"] => {
                self.storage.key = value.to_string();
            }
            ["upload", "accepted_video_type"] => {
                self.upload.accepted_video_type = value.to_string();
            }
            ["logging", "level"] => {
                self.logging.level = value.parse()?;
            }
            ["logging", "file"] => {
                self.logging.file = match value {
                    "" | "none" => None,
                    path => Some(path.to_string()),
                };
            }
            ["logging", "json_format"] => {
                self.logging.json_format = value.parse().map_err(|_| {
                    ConfigError::Validation(format!("Invalid boolean: {}", value))
                })?;
            }
            _ => return Err(ConfigError::KeyNotFound(key.to_string())),
        }
        Ok(())
    }
}

/// Session storage settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory of the file backend
    pub path: String,
    /// Key holding the session list
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "~/.learnmate/data".to_string(),
            key: "learnmate_sessions".to_string(),
        }
    }
}

/// Upload settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UploadConfig {
    pub accepted_video_type: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            accepted_video_type: "video/mp4".to_string(),
        }
    }
}

/// Log level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::Validation(format!("Invalid log level: {}", s))),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log file; `None` logs to stderr only
    pub file: Option<String>,
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            file: Some("~/.learnmate/logs/learnmate.log".to_string()),
            json_format: false,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
