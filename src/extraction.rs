// src/extraction.rs
//! Client for the external text extraction service. The service receives the
//! uploaded PDF and returns its plain text; everything past that boundary is
//! opaque to this crate.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

#[derive(Deserialize)]
struct ExtractionResponse {
    text: String,
    success: Option<bool>,
    error: Option<String>,
}

pub struct TextExtractor {
    client: reqwest::Client,
    service_url: String,
}

impl TextExtractor {
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            service_url: format!("{}/api/v1/extract-text", base_url.trim_end_matches('/')),
        })
    }

    /// Post the stored PDF to the extraction service and return its text.
    pub async fn extract(&self, file_path: &Path, file_name: &str) -> Result<String> {
        let file_content = tokio::fs::read(file_path)
            .await
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        let form = reqwest::multipart::Form::new().part(
            "file",
            reqwest::multipart::Part::bytes(file_content)
                .file_name(file_name.to_string())
                .mime_str("application/pdf")
                .context("Failed to create multipart")?,
        );

        info!("Calling text extraction service: {}", self.service_url);

        let response = self
            .client
            .post(&self.service_url)
            .multipart(form)
            .send()
            .await
            .context("HTTP request failed")?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .context("Failed to read response text")?;

        if status.is_success() {
            let response_body: ExtractionResponse = serde_json::from_str(&response_text)
                .with_context(|| {
                    format!(
                        "Failed to parse JSON response. Response was: {}",
                        response_text
                    )
                })?;

            if response_body.success.unwrap_or(true) {
                Ok(response_body.text)
            } else {
                let error_msg = response_body
                    .error
                    .unwrap_or_else(|| "Extraction service reported failure".to_string());
                anyhow::bail!("{}", error_msg)
            }
        } else {
            anyhow::bail!(
                "Service returned error status {}: {}",
                status,
                response_text
            )
        }
    }
}
