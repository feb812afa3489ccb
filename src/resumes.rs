// src/resumes.rs
//! Résumé ingestion: validate the upload, stash it under the upload
//! directory, run text extraction and register the record.

use crate::config::AppConfig;
use crate::extraction::TextExtractor;
use crate::store::{Registry, Resume};
use crate::utils;
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::Path;
use tracing::{info, warn};
use uuid::Uuid;

pub const STATUS_UPLOADED: &str = "UPLOADED";

/// Ingest one uploaded file. Extraction failure is degraded to empty text
/// rather than failing the upload; the scoring core tolerates empty input.
pub async fn ingest_resume(
    config: &AppConfig,
    extractor: &TextExtractor,
    registry: &Registry,
    temp_path: &Path,
    original_name: &str,
    file_size: u64,
) -> Result<Resume> {
    info!("Starting resume upload for file: {}", original_name);

    if file_size == 0 {
        anyhow::bail!("File cannot be empty");
    }

    if file_size > config.max_file_size {
        anyhow::bail!("File size exceeds maximum allowed size");
    }

    utils::validate_file_extension(original_name, &["pdf"])?;

    let stored_name = utils::stored_file_name(original_name);
    let destination = config.upload_dir.join(&stored_name);

    tokio::fs::copy(temp_path, &destination)
        .await
        .with_context(|| format!("Failed to store upload at {}", destination.display()))?;
    info!("File saved successfully to: {}", destination.display());

    let extracted_text = match extractor.extract(&destination, original_name).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Text extraction failed for {}: {}", original_name, e);
            String::new()
        }
    };

    let now = Utc::now();
    let resume = Resume {
        id: Uuid::new_v4(),
        file_name: original_name.to_string(),
        file_path: destination.display().to_string(),
        file_size,
        extracted_text,
        status: STATUS_UPLOADED.to_string(),
        uploaded_at: now,
        updated_at: now,
    };

    registry.insert_resume(resume.clone()).await;
    info!("Resume saved with ID: {}", resume.id);

    Ok(resume)
}

/// Delete a résumé: the stored file first, then the record and everything
/// derived from it. Returns the removed record when it existed.
pub async fn delete_resume(registry: &Registry, id: Uuid) -> Option<Resume> {
    let resume = registry.remove_resume(id).await?;

    let path = Path::new(&resume.file_path);
    if path.exists() {
        if let Err(e) = tokio::fs::remove_file(path).await {
            warn!("Failed to remove stored file {}: {}", resume.file_path, e);
        }
    }

    info!("Resume deleted with ID: {}", id);
    Some(resume)
}
