// src/web/mod.rs
pub mod handlers;
pub mod types;

pub use types::*;

use crate::config::AppConfig;
use crate::extraction::TextExtractor;
use crate::review::ReviewEngine;
use crate::store::{JobApplication, Registry, Resume, StoredReview, StoredSuggestion};
use anyhow::{Context, Result};
use rocket::data::{Limits, ToByteUnit};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::form::Form;
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, delete, get, options, post, put, routes, Build, Request, Response, Rocket};
use rocket::State;
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, PUT, DELETE, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

// Resume routes

#[post("/resumes/upload", data = "<upload>")]
pub async fn upload_resume(
    upload: Form<ResumeUploadForm<'_>>,
    config: &State<AppConfig>,
    extractor: &State<TextExtractor>,
    registry: &State<Registry>,
) -> Result<Json<ResumeUploadResponse>, Json<StandardErrorResponse>> {
    handlers::resumes::upload_resume_handler(upload, config, extractor, registry).await
}

#[get("/resumes")]
pub async fn list_resumes(registry: &State<Registry>) -> Json<Vec<Resume>> {
    handlers::resumes::list_resumes_handler(registry).await
}

#[get("/resumes/<id>")]
pub async fn get_resume(
    id: &str,
    registry: &State<Registry>,
) -> Result<Json<Resume>, Json<StandardErrorResponse>> {
    handlers::resumes::get_resume_handler(id, registry).await
}

#[get("/resumes/<id>/status")]
pub async fn get_resume_status(
    id: &str,
    registry: &State<Registry>,
) -> Result<Json<TextResponse>, Json<StandardErrorResponse>> {
    handlers::resumes::get_resume_status_handler(id, registry).await
}

#[put("/resumes/<id>/status", data = "<request>")]
pub async fn update_resume_status(
    id: &str,
    request: Json<UpdateStatusRequest>,
    registry: &State<Registry>,
) -> Result<Json<Resume>, Json<StandardErrorResponse>> {
    handlers::resumes::update_resume_status_handler(id, request, registry).await
}

#[delete("/resumes/<id>")]
pub async fn delete_resume(
    id: &str,
    registry: &State<Registry>,
) -> Result<Json<ActionResponse>, Json<StandardErrorResponse>> {
    handlers::resumes::delete_resume_handler(id, registry).await
}

// Review score routes

#[post("/review-scores/generate/<resume_id>")]
pub async fn generate_review_score(
    resume_id: &str,
    engine: &State<ReviewEngine>,
    registry: &State<Registry>,
) -> Result<Json<StoredReview>, Json<StandardErrorResponse>> {
    handlers::reviews::generate_review_handler(resume_id, engine, registry).await
}

#[get("/review-scores/resume/<resume_id>")]
pub async fn get_review_score(
    resume_id: &str,
    registry: &State<Registry>,
) -> Result<Json<StoredReview>, Json<StandardErrorResponse>> {
    handlers::reviews::get_review_handler(resume_id, registry).await
}

// Job suggestion routes

#[post("/job-suggestions/generate/<resume_id>")]
pub async fn generate_job_suggestions(
    resume_id: &str,
    registry: &State<Registry>,
) -> Result<Json<Vec<StoredSuggestion>>, Json<StandardErrorResponse>> {
    handlers::suggestions::generate_suggestions_handler(resume_id, registry).await
}

#[get("/job-suggestions/resume/<resume_id>")]
pub async fn get_job_suggestions(
    resume_id: &str,
    registry: &State<Registry>,
) -> Result<Json<Vec<StoredSuggestion>>, Json<StandardErrorResponse>> {
    handlers::suggestions::get_suggestions_handler(resume_id, registry).await
}

#[get("/job-suggestions/<id>")]
pub async fn get_job_suggestion(
    id: &str,
    registry: &State<Registry>,
) -> Result<Json<StoredSuggestion>, Json<StandardErrorResponse>> {
    handlers::suggestions::get_suggestion_handler(id, registry).await
}

// Job application routes

#[post("/job-applications/apply", data = "<request>")]
pub async fn apply_for_job(
    request: Json<ApplyRequest>,
    registry: &State<Registry>,
) -> Result<Json<JobApplication>, Json<StandardErrorResponse>> {
    handlers::applications::apply_handler(request, registry).await
}

#[get("/job-applications/resume/<resume_id>")]
pub async fn get_applications_for_resume(
    resume_id: &str,
    registry: &State<Registry>,
) -> Result<Json<Vec<JobApplication>>, Json<StandardErrorResponse>> {
    handlers::applications::get_applications_handler(resume_id, registry).await
}

#[get("/job-applications/<id>")]
pub async fn get_application(
    id: &str,
    registry: &State<Registry>,
) -> Result<Json<JobApplication>, Json<StandardErrorResponse>> {
    handlers::applications::get_application_handler(id, registry).await
}

#[put("/job-applications/<id>/status", data = "<request>")]
pub async fn update_application_status(
    id: &str,
    request: Json<UpdateStatusRequest>,
    registry: &State<Registry>,
) -> Result<Json<JobApplication>, Json<StandardErrorResponse>> {
    handlers::applications::update_status_handler(id, request, registry).await
}

#[put("/job-applications/<id>/response", data = "<request>")]
pub async fn update_application_response(
    id: &str,
    request: Json<ApplicationResponseRequest>,
    registry: &State<Registry>,
) -> Result<Json<JobApplication>, Json<StandardErrorResponse>> {
    handlers::applications::update_response_handler(id, request, registry).await
}

#[delete("/job-applications/<id>")]
pub async fn delete_application(
    id: &str,
    registry: &State<Registry>,
) -> Result<Json<ActionResponse>, Json<StandardErrorResponse>> {
    handlers::applications::delete_application_handler(id, registry).await
}

#[get("/health")]
pub async fn health() -> Json<TextResponse> {
    Json(TextResponse::success("ok".to_string()))
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
    ))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Resource not found".to_string(),
        "NOT_FOUND".to_string(),
        vec!["Check the request path".to_string()],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
    ))
}

/// Assemble the Rocket instance with all managed state. Separated from
/// `start_web_server` so tests can drive it with a local client.
pub fn build_rocket(config: AppConfig) -> Result<Rocket<Build>> {
    let engine = ReviewEngine::new()?;
    let extractor = TextExtractor::new(&config.extraction_url, config.extraction_timeout_seconds)?;
    let registry = Registry::new();

    let limit = config.max_file_size.max(1).bytes();
    let figment = rocket::Config::figment()
        .merge(("port", config.port))
        .merge(("limits", Limits::default().limit("file", limit)));

    Ok(rocket::custom(figment)
        .attach(Cors)
        .manage(config)
        .manage(engine)
        .manage(extractor)
        .manage(registry)
        .register("/api", catchers![bad_request, not_found, internal_error])
        .mount(
            "/api",
            routes![
                upload_resume,
                list_resumes,
                get_resume,
                get_resume_status,
                update_resume_status,
                delete_resume,
                generate_review_score,
                get_review_score,
                generate_job_suggestions,
                get_job_suggestions,
                get_job_suggestion,
                apply_for_job,
                get_applications_for_resume,
                get_application,
                update_application_status,
                update_application_response,
                delete_application,
                health,
                options,
            ],
        ))
}

// Main server start function
pub async fn start_web_server(config: AppConfig) -> Result<()> {
    info!("Starting resume review API server on port {}", config.port);
    info!("Upload directory: {}", config.upload_dir.display());
    info!("Extraction service: {}", config.extraction_url);

    let _rocket = build_rocket(config)?
        .launch()
        .await
        .context("Rocket failed to launch")?;

    Ok(())
}
