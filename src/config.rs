use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_EXTRACTION_URL: &str = "http://127.0.0.1:8000/upload/";
const DEFAULT_CALENDAR_SYNC_URL: &str = "http://127.0.0.1:8000/create_events";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub extraction_url: String,
    pub calendar_sync_url: String,
    pub sync_timeout: Option<Duration>,
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup("SYLLASYNC_ADDR")
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("SYLLASYNC_ADDR is invalid: {}", e)))?;

        let extraction_url = lookup("EXTRACTION_URL")
            .unwrap_or_else(|| DEFAULT_EXTRACTION_URL.to_string());
        let calendar_sync_url = lookup("CALENDAR_SYNC_URL")
            .unwrap_or_else(|| DEFAULT_CALENDAR_SYNC_URL.to_string());

        let sync_timeout = match lookup("SYNC_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|e| AppError::Config(format!("SYNC_TIMEOUT_SECS is invalid: {}", e)))?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            addr,
            extraction_url,
            calendar_sync_url,
            sync_timeout,
        })
    }
}
