use anyhow::{Context, Result};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Translation provider (RapidAPI)
    pub translate_url: String,
    pub rapidapi_key: String,
    pub rapidapi_host: String,

    // Dictionary provider
    pub dictionary_api_url: String,

    // Upstream calls
    pub request_timeout_secs: u64,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Provider URLs and credentials are not validated here. A deployment
    /// missing them still starts and fails per request instead.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),

            translate_url: std::env::var("OPEN_TRANSLATE_URL").unwrap_or_default(),
            rapidapi_key: std::env::var("RAPIDAPI_KEY").unwrap_or_default(),
            rapidapi_host: std::env::var("RAPIDAPI_HOST").unwrap_or_default(),

            dictionary_api_url: std::env::var("DICTIONARY_API_URL").unwrap_or_default(),

            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(10),
        })
    }

    /// Timeout applied to every upstream request
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Build the HTTP client shared by both upstream clients
    pub fn http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.request_timeout())
            .connect_timeout(self.request_timeout().min(Duration::from_secs(5)))
            .build()
            .context("Failed to build HTTP client")
    }
}
