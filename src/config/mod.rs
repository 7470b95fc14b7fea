use std::env;
use anyhow::{Result, Context};
use tracing::{info, warn};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Room left on top of the file limit for multipart boundaries and part headers.
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub max_file_size_mb: usize,
    pub retain_uploads: bool,
    pub gemini: GeminiConfig,
}

/// Settings for the remote generative-language service.
///
/// The API key is optional here: a missing key is only reported when the
/// first analysis request reaches the remote client.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| {
                info!("SERVER_HOST not set, using default: 0.0.0.0");
                "0.0.0.0".to_string()
            }),
            server_port: Self::parse_env_var("SERVER_PORT", 8000)
                .context("Failed to parse SERVER_PORT")?,
            max_file_size_mb: Self::parse_env_var("MAX_FILE_SIZE_MB", 10)
                .context("Failed to parse MAX_FILE_SIZE_MB")?,
            retain_uploads: Self::parse_env_var("RETAIN_UPLOADS", true)
                .context("Failed to parse RETAIN_UPLOADS")?,
            gemini: GeminiConfig {
                api_key: env::var("GOOGLE_API_KEY").ok().filter(|k| !k.trim().is_empty()),
                model: env::var("GEMINI_MODEL")
                    .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
                base_url: env::var("GEMINI_API_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            },
        };

        config.validate()?;

        if config.gemini.api_key.is_none() {
            warn!("GOOGLE_API_KEY not set; analysis requests will fail until it is configured");
        }

        info!("Configuration loaded successfully: {:?}", config);
        Ok(config)
    }

    fn parse_env_var<T>(var_name: &str, default: T) -> Result<T>
    where
        T: std::str::FromStr + Copy + std::fmt::Debug,
        T::Err: std::fmt::Display,
    {
        match env::var(var_name) {
            Ok(val) => match val.trim().parse() {
                Ok(parsed) => Ok(parsed),
                Err(e) => {
                    warn!("Failed to parse {}: {} (using default: {:?})", var_name, e, default);
                    Ok(default)
                }
            },
            Err(_) => {
                info!("{} not set, using default: {:?}", var_name, default);
                Ok(default)
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.server_port == 0 {
            return Err(anyhow::anyhow!("SERVER_PORT must be greater than 0"));
        }
        if self.max_file_size_mb == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB must be greater than 0"));
        }
        if self.gemini.model.trim().is_empty() {
            return Err(anyhow::anyhow!("GEMINI_MODEL must not be empty"));
        }
        if self.gemini.base_url.trim().is_empty() {
            return Err(anyhow::anyhow!("GEMINI_API_BASE_URL must not be empty"));
        }
        Ok(())
    }

    /// Largest accepted upload, counting file bytes only.
    pub fn max_file_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }

    /// Limit for the whole request body, so a file of exactly
    /// `max_file_bytes` still fits with its multipart framing.
    pub fn max_body_bytes(&self) -> usize {
        self.max_file_bytes() + MULTIPART_OVERHEAD_BYTES
    }
}
