// src/web/handlers/suggestions.rs
//! Job suggestion generation and retrieval handlers.

use crate::matching;
use crate::store::{Registry, StoredSuggestion};
use crate::web::types::StandardErrorResponse;
use chrono::Utc;
use rocket::serde::json::Json;
use rocket::State;
use tracing::info;
use uuid::Uuid;

use super::parse_id;

pub async fn generate_suggestions_handler(
    resume_id: &str,
    registry: &State<Registry>,
) -> Result<Json<Vec<StoredSuggestion>>, Json<StandardErrorResponse>> {
    let resume_id = parse_id(resume_id)?;

    let resume = match registry.resume(resume_id).await {
        Some(resume) => resume,
        None => return Err(Json(StandardErrorResponse::resume_not_found(resume_id))),
    };

    info!("Generating job suggestions for resume ID: {}", resume_id);

    let suggested_at = Utc::now();
    let suggestions: Vec<StoredSuggestion> = matching::match_jobs(&resume.extracted_text)
        .into_iter()
        .map(|job| StoredSuggestion {
            id: Uuid::new_v4(),
            resume_id,
            suggested_at,
            job,
        })
        .collect();

    registry.insert_suggestions(suggestions.clone()).await;
    info!(
        "Generated {} job suggestions for resume ID: {}",
        suggestions.len(),
        resume_id
    );

    Ok(Json(suggestions))
}

pub async fn get_suggestions_handler(
    resume_id: &str,
    registry: &State<Registry>,
) -> Result<Json<Vec<StoredSuggestion>>, Json<StandardErrorResponse>> {
    let resume_id = parse_id(resume_id)?;

    if registry.resume(resume_id).await.is_none() {
        return Err(Json(StandardErrorResponse::resume_not_found(resume_id)));
    }

    Ok(Json(registry.suggestions_for_resume(resume_id).await))
}

pub async fn get_suggestion_handler(
    id: &str,
    registry: &State<Registry>,
) -> Result<Json<StoredSuggestion>, Json<StandardErrorResponse>> {
    let id = parse_id(id)?;

    match registry.suggestion(id).await {
        Some(suggestion) => Ok(Json(suggestion)),
        None => Err(Json(StandardErrorResponse::new(
            format!("Job suggestion not found with ID: {}", id),
            "SUGGESTION_NOT_FOUND".to_string(),
            vec!["Generate suggestions for a resume first".to_string()],
        ))),
    }
}
