// src/applications.rs
//! Application tracking against job suggestions: apply once per
//! (suggestion, résumé) pair, then move the application through status and
//! employer-response updates.

use crate::store::{JobApplication, Registry};
use chrono::Utc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

pub const STATUS_APPLIED: &str = "APPLIED";

#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("Job suggestion not found with ID: {0}")]
    SuggestionNotFound(Uuid),
    #[error("Resume not found with ID: {0}")]
    ResumeNotFound(Uuid),
    #[error("Already applied for this job")]
    AlreadyApplied,
}

/// Create an application for a suggestion. Rejects unknown ids and duplicate
/// applications for the same pair.
pub async fn apply_for_job(
    registry: &Registry,
    job_suggestion_id: Uuid,
    resume_id: Uuid,
    application_notes: Option<String>,
) -> Result<JobApplication, ApplyError> {
    info!(
        "Applying for job suggestion ID: {} with resume ID: {}",
        job_suggestion_id, resume_id
    );

    let suggestion = registry
        .suggestion(job_suggestion_id)
        .await
        .ok_or(ApplyError::SuggestionNotFound(job_suggestion_id))?;

    if registry.resume(resume_id).await.is_none() {
        return Err(ApplyError::ResumeNotFound(resume_id));
    }

    let application = JobApplication {
        id: Uuid::new_v4(),
        job_suggestion_id,
        resume_id,
        job_title: suggestion.job.job_title.clone(),
        company: suggestion.job.company.clone(),
        status: STATUS_APPLIED.to_string(),
        application_notes,
        response_status: None,
        response_message: None,
        response_date: None,
        applied_at: Utc::now(),
    };

    if !registry.insert_application_unique(application.clone()).await {
        return Err(ApplyError::AlreadyApplied);
    }
    info!("Job application created with ID: {}", application.id);

    Ok(application)
}

/// Update the application status (e.g. APPLIED -> INTERVIEWING).
pub async fn update_status(
    registry: &Registry,
    id: Uuid,
    status: String,
) -> Option<JobApplication> {
    registry
        .update_application(id, |application| {
            application.status = status;
        })
        .await
}

/// Record an employer response with a response timestamp.
pub async fn update_response(
    registry: &Registry,
    id: Uuid,
    response_status: String,
    response_message: Option<String>,
) -> Option<JobApplication> {
    registry
        .update_application(id, |application| {
            application.response_status = Some(response_status);
            application.response_message = response_message;
            application.response_date = Some(Utc::now());
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching;
    use crate::store::{Resume, StoredSuggestion};

    async fn seed(registry: &Registry) -> (Uuid, Uuid) {
        let now = Utc::now();
        let resume = Resume {
            id: Uuid::new_v4(),
            file_name: "resume.pdf".to_string(),
            file_path: "/tmp/resume.pdf".to_string(),
            file_size: 100,
            extracted_text: "docker kubernetes aws".to_string(),
            status: "UPLOADED".to_string(),
            uploaded_at: now,
            updated_at: now,
        };
        let resume_id = resume.id;
        registry.insert_resume(resume).await;

        let suggestion = StoredSuggestion {
            id: Uuid::new_v4(),
            resume_id,
            suggested_at: now,
            job: matching::match_jobs("docker kubernetes aws").remove(3),
        };
        let suggestion_id = suggestion.id;
        registry.insert_suggestions(vec![suggestion]).await;

        (suggestion_id, resume_id)
    }

    #[tokio::test]
    async fn test_apply_and_reject_duplicate() {
        let registry = Registry::new();
        let (suggestion_id, resume_id) = seed(&registry).await;

        let application = apply_for_job(
            &registry,
            suggestion_id,
            resume_id,
            Some("Looks like a fit".to_string()),
        )
        .await
        .unwrap();
        assert_eq!(application.status, STATUS_APPLIED);
        assert_eq!(application.job_title, "DevOps Engineer");

        let duplicate = apply_for_job(&registry, suggestion_id, resume_id, None).await;
        assert!(matches!(duplicate, Err(ApplyError::AlreadyApplied)));
    }

    #[tokio::test]
    async fn test_concurrent_applies_create_one_application() {
        let registry = std::sync::Arc::new(Registry::new());
        let (suggestion_id, resume_id) = seed(&registry).await;

        let first = tokio::spawn({
            let registry = registry.clone();
            async move { apply_for_job(&registry, suggestion_id, resume_id, None).await }
        });
        let second = tokio::spawn({
            let registry = registry.clone();
            async move { apply_for_job(&registry, suggestion_id, resume_id, None).await }
        });

        let (first, second) = (first.await.unwrap(), second.await.unwrap());
        assert_eq!(first.is_ok() as u8 + second.is_ok() as u8, 1);
        assert_eq!(
            registry.applications_for_resume(resume_id).await.len(),
            1
        );
    }

    #[tokio::test]
    async fn test_apply_unknown_ids() {
        let registry = Registry::new();
        let (suggestion_id, resume_id) = seed(&registry).await;

        let missing_suggestion =
            apply_for_job(&registry, Uuid::new_v4(), resume_id, None).await;
        assert!(matches!(
            missing_suggestion,
            Err(ApplyError::SuggestionNotFound(_))
        ));

        let missing_resume =
            apply_for_job(&registry, suggestion_id, Uuid::new_v4(), None).await;
        assert!(matches!(missing_resume, Err(ApplyError::ResumeNotFound(_))));
    }

    #[tokio::test]
    async fn test_status_and_response_updates() {
        let registry = Registry::new();
        let (suggestion_id, resume_id) = seed(&registry).await;
        let application = apply_for_job(&registry, suggestion_id, resume_id, None)
            .await
            .unwrap();

        let updated = update_status(&registry, application.id, "INTERVIEWING".to_string())
            .await
            .unwrap();
        assert_eq!(updated.status, "INTERVIEWING");

        let responded = update_response(
            &registry,
            application.id,
            "REJECTED".to_string(),
            Some("Position filled".to_string()),
        )
        .await
        .unwrap();
        assert_eq!(responded.response_status.as_deref(), Some("REJECTED"));
        assert!(responded.response_date.is_some());
    }
}
