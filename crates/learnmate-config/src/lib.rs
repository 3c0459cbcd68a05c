pub mod config;
pub mod manager;

pub use config::{
    Config, ConfigError, ConfigResult, LogLevel, LoggingConfig, StorageConfig, UploadConfig,
};
pub use manager::ConfigManager;

use std::path::PathBuf;

/// `~/.learnmate`
pub fn learnmate_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".learnmate"))
}

pub fn default_config_path() -> Option<PathBuf> {
    learnmate_dir().map(|dir| dir.join("config.json"))
}

pub fn default_data_dir() -> Option<PathBuf> {
    learnmate_dir().map(|dir| dir.join("data"))
}

pub fn default_log_path() -> Option<PathBuf> {
    learnmate_dir().map(|dir| dir.join("logs").join("learnmate.log"))
}

/// Create the `~/.learnmate` directory tree
pub async fn init_learnmate_dirs() -> ConfigResult<()> {
    if let Some(root) = learnmate_dir() {
        tokio::fs::create_dir_all(&root).await?;
        tokio::fs::create_dir_all(root.join("data")).await?;
        tokio::fs::create_dir_all(root.join("logs")).await?;
    }
    Ok(())
}

/// Expand a leading `~/` to the home directory
pub fn expand_tilde(path: &str) -> Option<PathBuf> {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir().map(|home| home.join(rest))
    } else {
        Some(PathBuf::from(path))
    }
}
