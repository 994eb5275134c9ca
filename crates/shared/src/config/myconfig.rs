use anyhow::{Context, Result};

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub dev_mode: bool,
    pub api_local_url: String,
    pub api_production_url: String,
    pub socket_local_url: String,
    pub socket_production_url: String,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn init() -> Result<Self> {
        let dev_mode = std::env::var("DEV_MODE")
            .map(|val| val == "true" || val == "1")
            .unwrap_or(false);

        let api_local_url = std::env::var("API_LOCAL_URL")
            .context("Missing environment variable: API_LOCAL_URL")?;

        let api_production_url = std::env::var("API_PRODUCTION_URL")
            .context("Missing environment variable: API_PRODUCTION_URL")?;

        let socket_local_url = std::env::var("SOCKET_LOCAL_URL")
            .context("Missing environment variable: SOCKET_LOCAL_URL")?;

        let socket_production_url = std::env::var("SOCKET_PRODUCTION_URL")
            .context("Missing environment variable: SOCKET_PRODUCTION_URL")?;

        let http_timeout_secs = match std::env::var("HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("HTTP_TIMEOUT_SECS must be a valid u64 integer")?,
            Err(_) => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            dev_mode,
            api_local_url,
            api_production_url,
            socket_local_url,
            socket_production_url,
            http_timeout_secs,
        })
    }

    pub fn base_url(&self) -> &str {
        if self.dev_mode {
            &self.api_local_url
        } else {
            &self.api_production_url
        }
    }

    pub fn socket_url(&self) -> &str {
        if self.dev_mode {
            &self.socket_local_url
        } else {
            &self.socket_production_url
        }
    }
}
