pub mod dto;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};

use crate::error::AppError;
use crate::models::SyncPayload;

/// Port to the calendar-provider integration.
#[async_trait]
pub trait CalendarClient: Send + Sync {
    /// Creates every event in the payload and returns the service's message.
    async fn create_events(&self, payload: &SyncPayload) -> Result<String, AppError>;
}

pub struct CalendarHttpClient {
    client: Client,
    url: String,
}

impl CalendarHttpClient {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, AppError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, url: url.into() })
    }
}

#[async_trait]
impl CalendarClient for CalendarHttpClient {
    async fn create_events(&self, payload: &SyncPayload) -> Result<String, AppError> {
        info!("Sending {} events to {}", payload.events.len(), self.url);

        let response = self.client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                warn!("calendar request failed: {}", e);
                AppError::Sync(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Sync(format!("Calendar API error {}: {}", status, body)));
        }

        let parsed: dto::CreateEventsResponse = response
            .json()
            .await
            .map_err(|e| AppError::Sync(format!("Failed to parse calendar response: {}", e)))?;

        Ok(parsed.message)
    }
}
