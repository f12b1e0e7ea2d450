use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use toolgate_core::auth::TokenStore;
use toolgate_core::calendar::CalendarClient;
use toolgate_core::gmail::GmailClient;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(skip)]
    pub token_path: PathBuf,

    #[serde(default)]
    pub google: GoogleConfig,

    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleConfig {
    #[serde(default = "default_gmail_base_url")]
    pub gmail_base_url: String,

    #[serde(default = "default_calendar_base_url")]
    pub calendar_base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Timeout for outbound Google API requests, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_gmail_base_url() -> String {
    toolgate_core::gmail::DEFAULT_BASE_URL.to_string()
}

fn default_calendar_base_url() -> String {
    toolgate_core::calendar::DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            gmail_base_url: default_gmail_base_url(),
            calendar_base_url: default_calendar_base_url(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServerConfig {
    pub fn load(config_path: &Path, token_path: PathBuf) -> Result<Self> {
        // Load config file if it exists, otherwise use defaults
        let mut config: Self = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .context("Failed to read configuration file")?;
            toml::from_str(&content).context("Failed to parse configuration file")?
        } else {
            tracing::info!("Configuration file not found, using defaults");
            Self {
                token_path: token_path.clone(),
                google: Default::default(),
                http: Default::default(),
            }
        };

        config.token_path = token_path;

        Ok(config)
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub gmail: Arc<GmailClient>,
    pub calendar: Arc<CalendarClient>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let tokens = Arc::new(
            TokenStore::load(&config.token_path).context("Failed to load Google token file")?,
        );

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        let gmail_base = Url::parse(&config.google.gmail_base_url)
            .context("Invalid Gmail base URL in configuration")?;
        let calendar_base = Url::parse(&config.google.calendar_base_url)
            .context("Invalid Calendar base URL in configuration")?;

        Ok(Self {
            gmail: Arc::new(GmailClient::new(gmail_base, http.clone(), tokens.clone())),
            calendar: Arc::new(CalendarClient::new(calendar_base, http, tokens)),
        })
    }
}
