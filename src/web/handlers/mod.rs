// src/web/handlers/mod.rs
pub mod applications;
pub mod resumes;
pub mod reviews;
pub mod suggestions;

use crate::web::types::StandardErrorResponse;
use rocket::serde::json::Json;
use uuid::Uuid;

/// Path segments arrive as strings; reject anything that is not a UUID
/// before touching the registry.
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, Json<StandardErrorResponse>> {
    Uuid::parse_str(raw).map_err(|_| Json(StandardErrorResponse::invalid_id(raw)))
}
