use serde::Deserialize;
use std::time::Duration;

const CONFIG_FILE: &str = "config/channel-stocks";
const ENV_PREFIX: &str = "CHANNEL_STOCKS";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub backend: BackendSettings,
    #[serde(default)]
    pub polling: PollingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    /// Full URL of the statistics endpoint
    #[serde(default = "default_data_url")]
    pub data_url: String,
    /// Base URL of the channels/chat/analysis service
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PollingSettings {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    #[serde(default = "default_color_step")]
    pub color_step: u8,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_data_url() -> String {
    "http://localhost:5000/data".to_string()
}

fn default_api_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_interval_ms() -> u64 {
    1000
}

fn default_capacity() -> usize {
    crate::domain::series::DEFAULT_CAPACITY
}

fn default_color_step() -> u8 {
    15
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            data_url: default_data_url(),
            api_url: default_api_url(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl Default for PollingSettings {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            capacity: default_capacity(),
            color_step: default_color_step(),
        }
    }
}

impl BackendSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl PollingSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl AppConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.polling.capacity == 0 {
            anyhow::bail!("polling.capacity must be at least 1");
        }
        if self.polling.interval_ms == 0 {
            anyhow::bail!("polling.interval_ms must be at least 1");
        }
        Ok(())
    }
}

/// Optional `config/channel-stocks.toml`, overridden by `CHANNEL_STOCKS__SECTION__KEY`
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(CONFIG_FILE).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let app_config: AppConfig = settings.try_deserialize()?;
    app_config.validate()?;
    Ok(app_config)
}
