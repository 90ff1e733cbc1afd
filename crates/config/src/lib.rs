//! Configuration loading, validation, and management for StudyPlan.
//!
//! Loads configuration from `~/.studyplan/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use studyplan_core::request::FormLimits;

/// Environment variables checked for the provider credential, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GROQ_API_KEY", "STUDYPLAN_API_KEY"];

/// The root configuration structure.
///
/// Maps directly to `~/.studyplan/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Provider credential. Usually supplied through `GROQ_API_KEY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Completion provider name (selects the default base URL)
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Override for the provider base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Max tokens per plan
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Timeout for the completion call, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Web form server configuration
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Subject catalog, form defaults and limits
    #[serde(default)]
    pub form: FormConfig,
}

fn default_provider() -> String {
    "groq".into()
}
fn default_model() -> String {
    "llama-3.1-8b-instant".into()
}
fn default_temperature() -> f32 {
    0.6
}
fn default_max_tokens() -> u32 {
    400
}
fn default_request_timeout_secs() -> u64 {
    30
}

/// Redact a secret string for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &redact(&self.api_key))
            .field("provider", &self.provider)
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("gateway", &self.gateway)
            .field("form", &self.form)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

fn default_port() -> u16 {
    8501
}
fn default_host() -> String {
    "127.0.0.1".into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

/// What the interactive form offers and accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Subjects the user can pick from
    #[serde(default = "default_catalog")]
    pub catalog: Vec<String>,

    #[serde(default = "default_class_level")]
    pub default_class_level: String,

    #[serde(default = "default_subjects")]
    pub default_subjects: Vec<String>,

    #[serde(default = "default_weak_subjects")]
    pub default_weak_subjects: Vec<String>,

    #[serde(default = "default_daily_hours")]
    pub default_daily_hours: f64,

    #[serde(default = "default_exam_days")]
    pub default_exam_days: u32,

    #[serde(default)]
    pub limits: FormLimits,
}

fn default_catalog() -> Vec<String> {
    [
        "Maths",
        "Science",
        "English",
        "History",
        "Geography",
        "Physics",
        "Chemistry",
        "Biology",
        "Computer Science",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
fn default_class_level() -> String {
    "Class 10".into()
}
fn default_subjects() -> Vec<String> {
    vec!["Maths".into(), "Science".into(), "English".into()]
}
fn default_weak_subjects() -> Vec<String> {
    vec!["Maths".into()]
}
fn default_daily_hours() -> f64 {
    3.0
}
fn default_exam_days() -> u32 {
    20
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            default_class_level: default_class_level(),
            default_subjects: default_subjects(),
            default_weak_subjects: default_weak_subjects(),
            default_daily_hours: default_daily_hours(),
            default_exam_days: default_exam_days(),
            limits: FormLimits::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.studyplan/config.toml).
    ///
    /// Environment variables take the highest priority:
    /// - `GROQ_API_KEY`, then `STUDYPLAN_API_KEY`
    /// - `STUDYPLAN_PROVIDER`, `STUDYPLAN_MODEL`
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_at(&Self::config_dir().join("config.toml"))
    }

    /// Load a specific config file, then apply environment overrides.
    pub fn load_at(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load_from(path)?;
        config.apply_env(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path (no environment overrides).
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from an environment lookup. Blank values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = API_KEY_ENV_VARS.iter().find_map(|name| non_blank(name)) {
            self.api_key = Some(key);
        }

        if let Some(provider) = non_blank("STUDYPLAN_PROVIDER") {
            self.provider = provider;
        }

        if let Some(model) = non_blank("STUDYPLAN_MODEL") {
            self.model = model;
        }
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".studyplan")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::ValidationError(
                "temperature must be between 0.0 and 2.0".into(),
            ));
        }

        if self.max_tokens == 0 {
            return Err(ConfigError::ValidationError(
                "max_tokens must be > 0".into(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "request_timeout_secs must be > 0".into(),
            ));
        }

        let limits = &self.form.limits;
        if limits.min_exam_days > limits.max_exam_days
            || limits.min_daily_hours > limits.max_daily_hours
        {
            return Err(ConfigError::ValidationError(
                "form limits must satisfy min <= max".into(),
            ));
        }

        if self.form.catalog.is_empty() {
            return Err(ConfigError::ValidationError(
                "form.catalog must list at least one subject".into(),
            ));
        }

        Ok(())
    }

    /// The credential, or the startup error when none is configured.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)
    }

    /// Generate a default config TOML string (for the `init` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            provider: default_provider(),
            api_url: None,
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            request_timeout_secs: default_request_timeout_secs(),
            gateway: GatewayConfig::default(),
            form: FormConfig::default(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    #[error("No API key configured: set GROQ_API_KEY (or STUDYPLAN_API_KEY) or add api_key to config.toml")]
    MissingApiKey,
}
