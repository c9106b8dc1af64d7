pub mod dto;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use tracing::{debug, warn};

use crate::error::AppError;

pub use dto::ExtractionResult;

/// An uploaded syllabus waiting to be sent for extraction.
#[derive(Debug, Clone)]
pub struct Document {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }
}

/// Port to the document-extraction service.
#[async_trait]
pub trait Extractor: Send + Sync {
    async fn extract(&self, document: &Document) -> Result<ExtractionResult, AppError>;
}

pub struct HttpExtractor {
    client: Client,
    url: String,
}

impl HttpExtractor {
    pub fn new(url: impl Into<String>) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, url: url.into() })
    }
}

#[async_trait]
impl Extractor for HttpExtractor {
    async fn extract(&self, document: &Document) -> Result<ExtractionResult, AppError> {
        debug!("uploading {} ({} bytes)", document.file_name, document.bytes.len());

        let mut part = Part::bytes(document.bytes.clone()).file_name(document.file_name.clone());
        if let Some(content_type) = &document.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|e| AppError::BadRequest(format!("Invalid content type: {}", e)))?;
        }
        let form = Form::new().part("file", part);

        let response = self.client
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!("extraction request for {} failed: {}", document.file_name, e);
                AppError::Extraction(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Extraction(format!("Extraction API error {}: {}", status, body)));
        }

        response
            .json::<ExtractionResult>()
            .await
            .map_err(|e| AppError::Extraction(format!("Failed to parse extraction response: {}", e)))
    }
}
