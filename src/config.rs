use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::{CompareError, Result};
use crate::utils::{SimilarityAlgorithm, StopWords};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub comparison: ComparisonConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub max_json_payload_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Stop words; `None` falls back to the built-in English list.
    pub stopwords: Option<Vec<String>>,
    pub data_dir: String,
    pub algorithm: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            workers: num_cpus::get(),
            max_json_payload_size: 2_000_000, // 2MB
        }
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            stopwords: None,
            data_dir: "data".to_string(),
            algorithm: SimilarityAlgorithm::default().as_str().to_string(),
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl ComparisonConfig {
    pub fn stop_words(&self) -> StopWords {
        match &self.stopwords {
            Some(words) => StopWords::new(words),
            None => StopWords::english(),
        }
    }

    pub fn similarity_algorithm(&self) -> Result<SimilarityAlgorithm> {
        self.algorithm.parse()
    }
}

impl Config {
    pub const DEFAULT_PATH: &'static str = "config/config.json";

    /// Defaults overlaid with environment variables (and `.env`).
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let mut config = Config::default();
        config.apply_env(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Defaults, then the given file, then environment variables.
    ///
    /// The file's format is picked from its extension (json, toml, yaml).
    pub fn load(path: &Path) -> Result<Self> {
        dotenv::dotenv().ok();

        let mut config = Self::from_file(path)?;
        config.apply_env(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Loads [`Config::DEFAULT_PATH`] when it exists, otherwise only the
    /// environment.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None if Path::new(Self::DEFAULT_PATH).exists() => {
                Self::load(Path::new(Self::DEFAULT_PATH))
            }
            None => Self::from_env(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::Config::try_from(&Config::default())?)
            .add_source(::config::File::from(path).required(true))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the server cannot start with.
    pub fn validate(&self) -> Result<()> {
        if self.server.workers == 0 {
            return Err(CompareError::Config("server.workers must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Applies environment overrides read through `var`.
    pub fn apply_env<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server configuration
        if let Some(host) = var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("PORT") {
            self.server.port = parse_var("PORT", &port)?;
        }
        if let Some(workers) = var("WORKERS") {
            self.server.workers = parse_var("WORKERS", &workers)?;
        }
        if let Some(max_json_payload_size) = var("MAX_JSON_PAYLOAD_SIZE") {
            self.server.max_json_payload_size =
                parse_var("MAX_JSON_PAYLOAD_SIZE", &max_json_payload_size)?;
        }

        // Comparison configuration
        if let Some(stopwords) = var("STOPWORDS") {
            self.comparison.stopwords = Some(split_list(&stopwords));
        }
        if let Some(data_dir) = var("DATA_DIR") {
            self.comparison.data_dir = data_dir;
        }
        if let Some(algorithm) = var("COMP_FUNCTION") {
            self.comparison.algorithm = algorithm;
        }

        // Security configuration
        if let Some(allowed_origins) = var("ALLOWED_ORIGINS") {
            self.security.allowed_origins = split_list(&allowed_origins);
        }

        self.validate()
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| CompareError::Config(format!("invalid {}={:?}: {}", key, value, e)))
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
