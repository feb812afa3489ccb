// src/web/handlers/resumes.rs
//! Résumé upload and lifecycle handlers.

use crate::config::AppConfig;
use crate::extraction::TextExtractor;
use crate::resumes;
use crate::store::{Registry, Resume};
use crate::web::types::{
    ActionResponse, ResumeUploadForm, ResumeUploadResponse, StandardErrorResponse, TextResponse,
    UpdateStatusRequest,
};
use rocket::form::Form;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

use super::parse_id;

pub async fn upload_resume_handler(
    mut upload: Form<ResumeUploadForm<'_>>,
    config: &State<AppConfig>,
    extractor: &State<TextExtractor>,
    registry: &State<Registry>,
) -> Result<Json<ResumeUploadResponse>, Json<StandardErrorResponse>> {
    let file_size = upload.file.len();
    let original_name = upload
        .file
        .raw_name()
        .and_then(|n| n.as_str())
        .unwrap_or("uploaded_resume.pdf")
        .to_string();

    let temp_path = std::env::temp_dir().join(format!("resume_upload_{}", uuid::Uuid::new_v4()));

    if let Err(e) = upload.file.persist_to(&temp_path).await {
        error!("Failed to save uploaded file: {}", e);
        return Err(Json(StandardErrorResponse::new(
            "Failed to process uploaded file".to_string(),
            "FILE_SAVE_ERROR".to_string(),
            vec!["Try uploading the file again".to_string()],
        )));
    }

    let result = resumes::ingest_resume(
        config,
        extractor,
        registry,
        &temp_path,
        &original_name,
        file_size,
    )
    .await;

    let _ = tokio::fs::remove_file(&temp_path).await;

    match result {
        Ok(resume) => {
            info!("Resume uploaded: {} ({})", resume.file_name, resume.id);
            Ok(Json(ResumeUploadResponse {
                success: true,
                message: "Resume uploaded successfully".to_string(),
                resume_id: resume.id,
                file_name: resume.file_name,
                file_size: resume.file_size,
            }))
        }
        Err(e) => {
            error!("Resume upload failed: {}", e);
            Err(Json(StandardErrorResponse::new(
                format!("Resume upload failed: {}", e),
                "UPLOAD_ERROR".to_string(),
                vec![
                    "Upload a PDF file (.pdf)".to_string(),
                    "Check the file is not empty or oversized".to_string(),
                ],
            )))
        }
    }
}

pub async fn get_resume_handler(
    id: &str,
    registry: &State<Registry>,
) -> Result<Json<Resume>, Json<StandardErrorResponse>> {
    let id = parse_id(id)?;
    match registry.resume(id).await {
        Some(resume) => Ok(Json(resume)),
        None => Err(Json(StandardErrorResponse::resume_not_found(id))),
    }
}

pub async fn list_resumes_handler(registry: &State<Registry>) -> Json<Vec<Resume>> {
    Json(registry.resumes().await)
}

pub async fn get_resume_status_handler(
    id: &str,
    registry: &State<Registry>,
) -> Result<Json<TextResponse>, Json<StandardErrorResponse>> {
    let id = parse_id(id)?;
    match registry.resume(id).await {
        Some(resume) => Ok(Json(TextResponse::success(resume.status))),
        None => Err(Json(StandardErrorResponse::resume_not_found(id))),
    }
}

pub async fn update_resume_status_handler(
    id: &str,
    request: Json<UpdateStatusRequest>,
    registry: &State<Registry>,
) -> Result<Json<Resume>, Json<StandardErrorResponse>> {
    let id = parse_id(id)?;
    match registry.update_resume_status(id, &request.status).await {
        Some(resume) => Ok(Json(resume)),
        None => Err(Json(StandardErrorResponse::resume_not_found(id))),
    }
}

pub async fn delete_resume_handler(
    id: &str,
    registry: &State<Registry>,
) -> Result<Json<ActionResponse>, Json<StandardErrorResponse>> {
    let id = parse_id(id)?;
    match resumes::delete_resume(registry, id).await {
        Some(resume) => Ok(Json(ActionResponse::success(
            format!("Resume '{}' deleted", resume.file_name),
            "deleted".to_string(),
        ))),
        None => Err(Json(StandardErrorResponse::resume_not_found(id))),
    }
}
