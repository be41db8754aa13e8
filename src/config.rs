use serde::{Deserialize, Serialize};

/// Environment variable prefix, e.g. `RENO_QUOTE__SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "RENO_QUOTE";
pub const DEFAULT_CONFIG_PATH: &str = "config";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub ai: AiConfig,
    pub uploads: UploadsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

/// OpenAI-compatible chat completion endpoint used for style and floorplan advice.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AiConfig {
    pub enabled: bool,
    pub api_key: Option<String>,
    pub base_url: String,
    pub style_model: String,
    pub vision_model: String,
    pub timeout_seconds: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            style_model: "gpt-3.5-turbo".to_string(),
            vision_model: "gpt-4-vision-preview".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl AiConfig {
    /// The advisor is only consulted when enabled and holding a non-empty key.
    pub fn is_configured(&self) -> bool {
        self.enabled && self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UploadsConfig {
    pub dir: String,
    /// Maximum upload size in bytes
    pub max_file_size: usize,
    /// Base URL for links to uploaded files; derived from the request host when unset
    pub public_base_url: Option<String>,
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            dir: "uploads".to_string(),
            max_file_size: 5 * 1024 * 1024,
            public_base_url: None,
        }
    }
}

/// Load configuration from an optional TOML file plus `RENO_QUOTE__*` variables.
pub fn load_config(path: Option<&str>) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::with_name(path.unwrap_or(DEFAULT_CONFIG_PATH)).required(path.is_some()))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.port == 0 {
        anyhow::bail!("Server port must be non-zero");
    }

    if !matches!(cfg.server.log_format.as_str(), "text" | "json") {
        anyhow::bail!(
            "Invalid log format '{}', expected 'text' or 'json'",
            cfg.server.log_format
        );
    }

    if cfg.uploads.max_file_size == 0 {
        anyhow::bail!("uploads.max_file_size must be greater than zero");
    }

    if cfg.uploads.dir.trim().is_empty() {
        anyhow::bail!("uploads.dir cannot be empty");
    }

    if cfg.ai.timeout_seconds == 0 {
        anyhow::bail!("ai.timeout_seconds must be greater than zero");
    }

    if cfg.ai.enabled && cfg.ai.base_url.trim().is_empty() {
        anyhow::bail!("AI advisor is enabled but ai.base_url is empty");
    }

    Ok(())
}
