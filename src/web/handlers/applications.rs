// src/web/handlers/applications.rs
//! Application tracking handlers.

use crate::applications::{self, ApplyError};
use crate::store::{JobApplication, Registry};
use crate::web::types::{
    ActionResponse, ApplicationResponseRequest, ApplyRequest, StandardErrorResponse,
};
use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

use super::parse_id;

fn application_not_found(id: uuid::Uuid) -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        format!("Job application not found with ID: {}", id),
        "APPLICATION_NOT_FOUND".to_string(),
        vec!["Check the application ID".to_string()],
    ))
}

pub async fn apply_handler(
    request: Json<ApplyRequest>,
    registry: &State<Registry>,
) -> Result<Json<JobApplication>, Json<StandardErrorResponse>> {
    let result = applications::apply_for_job(
        registry,
        request.job_suggestion_id,
        request.resume_id,
        request.application_notes.clone(),
    )
    .await;

    match result {
        Ok(application) => Ok(Json(application)),
        Err(e @ ApplyError::AlreadyApplied) => Err(Json(StandardErrorResponse::new(
            e.to_string(),
            "ALREADY_APPLIED".to_string(),
            vec!["Check your existing applications for this resume".to_string()],
        ))),
        Err(e @ ApplyError::SuggestionNotFound(_)) => Err(Json(StandardErrorResponse::new(
            e.to_string(),
            "SUGGESTION_NOT_FOUND".to_string(),
            vec!["Generate suggestions for the resume first".to_string()],
        ))),
        Err(e @ ApplyError::ResumeNotFound(_)) => Err(Json(StandardErrorResponse::new(
            e.to_string(),
            "RESUME_NOT_FOUND".to_string(),
            vec!["Upload a resume first".to_string()],
        ))),
    }
}

pub async fn get_applications_handler(
    resume_id: &str,
    registry: &State<Registry>,
) -> Result<Json<Vec<JobApplication>>, Json<StandardErrorResponse>> {
    let resume_id = parse_id(resume_id)?;

    if registry.resume(resume_id).await.is_none() {
        return Err(Json(StandardErrorResponse::resume_not_found(resume_id)));
    }

    Ok(Json(registry.applications_for_resume(resume_id).await))
}

pub async fn get_application_handler(
    id: &str,
    registry: &State<Registry>,
) -> Result<Json<JobApplication>, Json<StandardErrorResponse>> {
    let id = parse_id(id)?;

    match registry.application(id).await {
        Some(application) => Ok(Json(application)),
        None => Err(application_not_found(id)),
    }
}

pub async fn update_status_handler(
    id: &str,
    request: Json<crate::web::types::UpdateStatusRequest>,
    registry: &State<Registry>,
) -> Result<Json<JobApplication>, Json<StandardErrorResponse>> {
    let id = parse_id(id)?;

    match applications::update_status(registry, id, request.status.clone()).await {
        Some(application) => Ok(Json(application)),
        None => Err(application_not_found(id)),
    }
}

pub async fn update_response_handler(
    id: &str,
    request: Json<ApplicationResponseRequest>,
    registry: &State<Registry>,
) -> Result<Json<JobApplication>, Json<StandardErrorResponse>> {
    let id = parse_id(id)?;

    match applications::update_response(
        registry,
        id,
        request.response_status.clone(),
        request.response_message.clone(),
    )
    .await
    {
        Some(application) => Ok(Json(application)),
        None => Err(application_not_found(id)),
    }
}

pub async fn delete_application_handler(
    id: &str,
    registry: &State<Registry>,
) -> Result<Json<ActionResponse>, Json<StandardErrorResponse>> {
    let id = parse_id(id)?;

    if registry.remove_application(id).await {
        info!("Job application deleted with ID: {}", id);
        Ok(Json(ActionResponse::success(
            "Application deleted".to_string(),
            "deleted".to_string(),
        )))
    } else {
        Err(application_not_found(id))
    }
}
