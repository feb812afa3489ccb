// src/web/types.rs
use rocket::form::FromForm;
use rocket::fs::TempFile;
use rocket::serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(FromForm)]
pub struct ResumeUploadForm<'f> {
    pub file: TempFile<'f>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct ResumeUploadResponse {
    pub success: bool,
    pub message: String,
    pub resume_id: Uuid,
    pub file_name: String,
    pub file_size: u64,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct ApplyRequest {
    pub job_suggestion_id: Uuid,
    pub resume_id: Uuid,
    pub application_notes: Option<String>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct ApplicationResponseRequest {
    pub response_status: String,
    pub response_message: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
    pub action: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TextResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

impl ActionResponse {
    pub fn success(message: String, action: String) -> Self {
        Self {
            success: true,
            message,
            action,
        }
    }
}

impl TextResponse {
    pub fn success(message: String) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

impl StandardErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            success: false,
            error,
            error_code,
            suggestions,
        }
    }

    pub fn resume_not_found(id: Uuid) -> Self {
        Self::new(
            format!("Resume not found with ID: {}", id),
            "RESUME_NOT_FOUND".to_string(),
            vec![
                "Upload a resume first".to_string(),
                "Check the resume ID".to_string(),
            ],
        )
    }

    pub fn invalid_id(raw: &str) -> Self {
        Self::new(
            format!("Invalid identifier: {}", raw),
            "INVALID_ID".to_string(),
            vec!["Identifiers are UUIDs returned by the upload endpoint".to_string()],
        )
    }
}
