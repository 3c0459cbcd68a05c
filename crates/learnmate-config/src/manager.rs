use crate::config::{Config, ConfigError, ConfigResult};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Loads, edits and saves the configuration file
#[derive(Clone)]
pub struct ConfigManager {
    path: PathBuf,
    config: Arc<RwLock<Config>>,
}

impl ConfigManager {
    /// Load the configuration file, writing defaults if it does not exist
    pub async fn load(path: &Path) -> ConfigResult<Self> {
        let config = if path.exists() {
            info!("Loading config from {:?}", path);
            let content = tokio::fs::read_to_string(path).await?;
            let content = Self::expand_env_vars(&content)?;
            let config: Config = serde_json::from_str(&content)?;
            Self::validate(&config)?;
            config
        } else {
            info!("Config file not found, creating default config at {:?}", path);
            let default_config = Config::default();
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            let content = serde_json::to_string_pretty(&default_config)?;
            tokio::fs::write(path, &content).await?;
            default_config
        };

        Ok(Self {
            path: path.to_path_buf(),
            config: Arc::new(RwLock::new(config)),
        })
    }

    /// Load from `~/.learnmate/config.json`
    pub async fn load_default() -> ConfigResult<Self> {
        let config_path = Self::default_config_path()?;
        Self::load(&config_path).await
    }

    pub fn default_config_path() -> ConfigResult<PathBuf> {
        crate::default_config_path()
            .ok_or_else(|| ConfigError::InvalidPath("Could not find home directory".to_string()))
    }

    /// Wrap an in-memory configuration without touching disk
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(config)),
        }
    }

    pub fn get(&self) -> Arc<RwLock<Config>> {
        Arc::clone(&self.config)
    }

    /// Copy of the current configuration
    pub async fn snapshot(&self) -> Config {
        self.config.read().await.clone()
    }

    pub async fn save(&self) -> ConfigResult<()> {
        self.save_to(&self.path).await?;
        info!("Config saved to {:?}", self.path);
        Ok(())
    }

    pub async fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let config = self.config.read().await;
        let content = serde_json::to_string_pretty(&*config)?;
        drop(config);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(path, content).await?;
        Ok(())
    }

    /// Re-read the file, keeping the current config if the new one is invalid
    pub async fn reload(&self) -> ConfigResult<()> {
        if !self.path.exists() {
            return Err(ConfigError::InvalidPath(format!(
                "Config file not found: {:?}",
                self.path
            )));
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        let content = Self::expand_env_vars(&content)?;
        let new_config: Config = serde_json::from_str(&content)?;
        Self::validate(&new_config)?;

        let mut config = self.config.write().await;
        *config = new_config;
        drop(config);

        info!("Config reloaded from {:?}", self.path);
        Ok(())
    }

    /// Apply `f`, validate, then persist. The change is rolled back if
    /// `f` fails or the result is invalid.
    pub async fn update<F>(&self, f: F) -> ConfigResult<()>
    where
        F: FnOnce(&mut Config) -> ConfigResult<()>,
    {
        let mut config = self.config.write().await;
        let mut candidate = config.clone();
        f(&mut candidate)?;
        Self::validate(&candidate)?;
        *config = candidate;
        drop(config);
        self.save().await
    }

    pub fn validate(config: &Config) -> ConfigResult<()> {
        if config.storage.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "storage.path cannot be empty".to_string(),
            ));
        }

        let key = &config.storage.key;
        if key.is_empty()
            || key.starts_with('.')
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
        {
            return Err(ConfigError::Validation(format!(
                "storage.key '{}' must be non-empty and use only letters, digits, '_', '-' or '.'",
                key
            )));
        }

        let media_type = &config.upload.accepted_video_type;
        if !media_type.starts_with("video/") {
            return Err(ConfigError::Validation(format!(
                "upload.accepted_video_type '{}' is not a video media type",
                media_type
            )));
        }

        Ok(())
    }

    /// Expand `${VAR}` and `${VAR:-default}`
    fn expand_env_vars(content: &str) -> ConfigResult<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;
        let mut result = content.to_string();

        for cap in re.captures_iter(content) {
            let (Some(full_match), Some(var_expr)) = (cap.get(0), cap.get(1)) else {
                continue;
            };
            let var_expr = var_expr.as_str();

            let (var_name, default_value) = match var_expr.split_once(":-") {
                Some((name, default)) => (name, Some(default)),
                None => (var_expr, None),
            };

            let replacement = match std::env::var(var_name) {
                Ok(val) => val,
                Err(_) => match default_value {
                    Some(default) => default.to_string(),
                    None => return Err(ConfigError::EnvVarNotFound(var_name.to_string())),
                },
            };

            result = result.replace(full_match.as_str(), &replacement);
        }

        Ok(result)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
