// src/web/handlers/reviews.rs
//! Review score generation and retrieval handlers.

use crate::review::ReviewEngine;
use crate::store::{Registry, StoredReview};
use crate::web::types::StandardErrorResponse;
use rocket::serde::json::Json;
use rocket::State;
use tracing::info;
use uuid::Uuid;

use super::parse_id;

pub async fn generate_review_handler(
    resume_id: &str,
    engine: &State<ReviewEngine>,
    registry: &State<Registry>,
) -> Result<Json<StoredReview>, Json<StandardErrorResponse>> {
    let resume_id = parse_id(resume_id)?;

    let resume = match registry.resume(resume_id).await {
        Some(resume) => resume,
        None => return Err(Json(StandardErrorResponse::resume_not_found(resume_id))),
    };

    info!("Generating review score for resume ID: {}", resume_id);

    let score = engine.review(&resume.file_name, &resume.extracted_text);
    let review = StoredReview {
        id: Uuid::new_v4(),
        resume_id,
        score,
    };

    registry.insert_review(review.clone()).await;
    info!("Review score generated with ID: {}", review.id);

    Ok(Json(review))
}

pub async fn get_review_handler(
    resume_id: &str,
    registry: &State<Registry>,
) -> Result<Json<StoredReview>, Json<StandardErrorResponse>> {
    let resume_id = parse_id(resume_id)?;

    if registry.resume(resume_id).await.is_none() {
        return Err(Json(StandardErrorResponse::resume_not_found(resume_id)));
    }

    match registry.review_for_resume(resume_id).await {
        Some(review) => Ok(Json(review)),
        None => Err(Json(StandardErrorResponse::new(
            format!("Review score not found for resume ID: {}", resume_id),
            "REVIEW_NOT_FOUND".to_string(),
            vec!["Generate a review score first".to_string()],
        ))),
    }
}
