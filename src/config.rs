//! Runtime configuration.
//!
//! Everything is read from the environment, optionally seeded from a `.env`
//! file in the working directory. Only the API key is required.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Variable holding the API key
pub const ENV_API_KEY: &str = "OPENAI_KEY";
/// Chat model override
pub const ENV_MODEL: &str = "BRAINDUMP_MODEL";
/// API base URL override
pub const ENV_API_URL: &str = "BRAINDUMP_API_URL";
/// Directory the picker opens in
pub const ENV_START_DIR: &str = "BRAINDUMP_START_DIR";
/// List dotfiles in the picker
pub const ENV_SHOW_HIDDEN: &str = "BRAINDUMP_SHOW_HIDDEN";
/// Show the permission column in the picker
pub const ENV_SHOW_PERMISSIONS: &str = "BRAINDUMP_SHOW_PERMISSIONS";

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OPENAI_KEY is not set; add it to the environment or a .env file")]
    MissingApiKey,

    #[error("{var} must be a boolean, got {value:?}")]
    InvalidBool { var: &'static str, value: String },

    #[error("failed to load .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_key: String,
    pub model: String,
    /// Base URL without the `/chat/completions` suffix
    pub api_url: String,
    pub start_dir: PathBuf,
    pub show_hidden: bool,
    pub show_permissions: bool,
}

impl AppConfig {
    /// Create a config with defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            start_dir: default_start_dir(),
            show_hidden: false,
            show_permissions: false,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_start_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_dir = dir.into();
        self
    }

    pub fn with_show_hidden(mut self, show: bool) -> Self {
        self.show_hidden = show;
        self
    }

    pub fn with_show_permissions(mut self, show: bool) -> Self {
        self.show_permissions = show;
        self
    }

    /// Build the config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = non_empty(ENV_API_KEY).ok_or(ConfigError::MissingApiKey)?;
        let mut config = Self::new(api_key.trim());

        if let Some(model) = non_empty(ENV_MODEL) {
            config = config.with_model(model.trim());
        }
        if let Some(url) = non_empty(ENV_API_URL) {
            config = config.with_api_url(url.trim().trim_end_matches('/'));
        }
        if let Some(dir) = non_empty(ENV_START_DIR) {
            config = config.with_start_dir(dir);
        }
        if let Some(value) = lookup(ENV_SHOW_HIDDEN) {
            config = config.with_show_hidden(parse_bool(ENV_SHOW_HIDDEN, &value)?);
        }
        if let Some(value) = lookup(ENV_SHOW_PERMISSIONS) {
            config = config.with_show_permissions(parse_bool(ENV_SHOW_PERMISSIONS, &value)?);
        }

        Ok(config)
    }

    /// Chat completion endpoint derived from the base URL.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_url)
    }
}

/// Load `.env` from the working directory into the process environment.
///
/// A missing file is not an error. Variables already set win over the file.
pub fn load_dotenv() -> Result<Option<PathBuf>, ConfigError> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Home directory, or the working directory when there is none.
fn default_start_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}
