// src/store.rs
//! In-process registry for resumes, reviews, suggestions and applications.
//! Persistence is out of scope for this service; everything lives behind one
//! RwLock and records are handed out as clones.

use crate::matching::JobSuggestion;
use crate::review::ReviewScore;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// An ingested résumé and its extracted text.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: Uuid,
    pub file_name: String,
    pub file_path: String,
    pub file_size: u64,
    pub extracted_text: String,
    pub status: String,
    pub uploaded_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A review score attached to a résumé. Repeated generation appends new
/// records; history accumulates by design.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredReview {
    pub id: Uuid,
    pub resume_id: Uuid,
    #[serde(flatten)]
    pub score: ReviewScore,
}

/// A job suggestion attached to a résumé.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSuggestion {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub suggested_at: DateTime<Utc>,
    #[serde(flatten)]
    pub job: JobSuggestion,
}

/// A tracked application against one suggestion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: Uuid,
    pub job_suggestion_id: Uuid,
    pub resume_id: Uuid,
    pub job_title: String,
    pub company: String,
    pub status: String,
    pub application_notes: Option<String>,
    pub response_status: Option<String>,
    pub response_message: Option<String>,
    pub response_date: Option<DateTime<Utc>>,
    pub applied_at: DateTime<Utc>,
}

#[derive(Default)]
struct Inner {
    resumes: HashMap<Uuid, Resume>,
    reviews: Vec<StoredReview>,
    suggestions: Vec<StoredSuggestion>,
    applications: Vec<JobApplication>,
}

/// Shared registry managed by Rocket. All accessors clone out of the lock.
#[derive(Default)]
pub struct Registry {
    inner: RwLock<Inner>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_resume(&self, resume: Resume) {
        self.inner.write().await.resumes.insert(resume.id, resume);
    }

    pub async fn resume(&self, id: Uuid) -> Option<Resume> {
        self.inner.read().await.resumes.get(&id).cloned()
    }

    /// All resumes, newest upload first.
    pub async fn resumes(&self) -> Vec<Resume> {
        let mut resumes: Vec<Resume> = self.inner.read().await.resumes.values().cloned().collect();
        resumes.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        resumes
    }

    /// Remove a résumé and everything derived from it.
    pub async fn remove_resume(&self, id: Uuid) -> Option<Resume> {
        let mut inner = self.inner.write().await;
        let removed = inner.resumes.remove(&id);
        if removed.is_some() {
            inner.reviews.retain(|r| r.resume_id != id);
            inner.suggestions.retain(|s| s.resume_id != id);
            inner.applications.retain(|a| a.resume_id != id);
        }
        removed
    }

    pub async fn update_resume_status(&self, id: Uuid, status: &str) -> Option<Resume> {
        let mut inner = self.inner.write().await;
        let resume = inner.resumes.get_mut(&id)?;
        resume.status = status.to_string();
        resume.updated_at = Utc::now();
        Some(resume.clone())
    }

    pub async fn insert_review(&self, review: StoredReview) {
        self.inner.write().await.reviews.push(review);
    }

    /// Most recent review for a résumé.
    pub async fn review_for_resume(&self, resume_id: Uuid) -> Option<StoredReview> {
        self.inner
            .read()
            .await
            .reviews
            .iter()
            .filter(|r| r.resume_id == resume_id)
            .max_by_key(|r| r.score.created_at)
            .cloned()
    }

    pub async fn insert_suggestions(&self, suggestions: Vec<StoredSuggestion>) {
        self.inner.write().await.suggestions.extend(suggestions);
    }

    /// Suggestions for a résumé ordered by match score descending.
    pub async fn suggestions_for_resume(&self, resume_id: Uuid) -> Vec<StoredSuggestion> {
        let mut suggestions: Vec<StoredSuggestion> = self
            .inner
            .read()
            .await
            .suggestions
            .iter()
            .filter(|s| s.resume_id == resume_id)
            .cloned()
            .collect();
        suggestions.sort_by(|a, b| {
            b.job
                .match_score
                .partial_cmp(&a.job.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        suggestions
    }

    pub async fn suggestion(&self, id: Uuid) -> Option<StoredSuggestion> {
        self.inner
            .read()
            .await
            .suggestions
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    /// Insert an application unless one already exists for the same
    /// (suggestion, résumé) pair. Check and insert happen under one write
    /// lock so concurrent applies cannot both slip past the check.
    pub async fn insert_application_unique(&self, application: JobApplication) -> bool {
        let mut inner = self.inner.write().await;
        let duplicate = inner.applications.iter().any(|a| {
            a.job_suggestion_id == application.job_suggestion_id
                && a.resume_id == application.resume_id
        });
        if duplicate {
            return false;
        }
        inner.applications.push(application);
        true
    }

    pub async fn application(&self, id: Uuid) -> Option<JobApplication> {
        self.inner
            .read()
            .await
            .applications
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    /// Applications for a résumé, newest first.
    pub async fn applications_for_resume(&self, resume_id: Uuid) -> Vec<JobApplication> {
        let mut applications: Vec<JobApplication> = self
            .inner
            .read()
            .await
            .applications
            .iter()
            .filter(|a| a.resume_id == resume_id)
            .cloned()
            .collect();
        applications.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));
        applications
    }

    pub async fn update_application<F>(&self, id: Uuid, update: F) -> Option<JobApplication>
    where
        F: FnOnce(&mut JobApplication),
    {
        let mut inner = self.inner.write().await;
        let application = inner.applications.iter_mut().find(|a| a.id == id)?;
        update(application);
        Some(application.clone())
    }

    pub async fn remove_application(&self, id: Uuid) -> bool {
        let mut inner = self.inner.write().await;
        let before = inner.applications.len();
        inner.applications.retain(|a| a.id != id);
        inner.applications.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching;

    fn sample_resume() -> Resume {
        let now = Utc::now();
        Resume {
            id: Uuid::new_v4(),
            file_name: "resume.pdf".to_string(),
            file_path: "/tmp/resume.pdf".to_string(),
            file_size: 1024,
            extracted_text: "experience with java".to_string(),
            status: "UPLOADED".to_string(),
            uploaded_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_resume_roundtrip_and_status() {
        let registry = Registry::new();
        let resume = sample_resume();
        let id = resume.id;

        registry.insert_resume(resume).await;
        assert_eq!(registry.resume(id).await.unwrap().status, "UPLOADED");

        let updated = registry.update_resume_status(id, "REVIEWED").await.unwrap();
        assert_eq!(updated.status, "REVIEWED");

        assert!(registry.remove_resume(id).await.is_some());
        assert!(registry.resume(id).await.is_none());
    }

    #[tokio::test]
    async fn test_suggestions_sorted_by_match_score() {
        let registry = Registry::new();
        let resume_id = Uuid::new_v4();

        let stored: Vec<StoredSuggestion> = matching::match_jobs("docker kubernetes aws and sql")
            .into_iter()
            .map(|job| StoredSuggestion {
                id: Uuid::new_v4(),
                resume_id,
                suggested_at: Utc::now(),
                job,
            })
            .collect();
        registry.insert_suggestions(stored).await;

        let suggestions = registry.suggestions_for_resume(resume_id).await;
        assert_eq!(suggestions.len(), 5);
        assert_eq!(suggestions[0].job.job_title, "DevOps Engineer");
        for pair in suggestions.windows(2) {
            assert!(pair[0].job.match_score >= pair[1].job.match_score);
        }
    }

    #[tokio::test]
    async fn test_insert_application_unique_rejects_same_pair() {
        let registry = Registry::new();
        let suggestion_id = Uuid::new_v4();
        let resume_id = Uuid::new_v4();

        let application = |id: Uuid| JobApplication {
            id,
            job_suggestion_id: suggestion_id,
            resume_id,
            job_title: "DevOps Engineer".to_string(),
            company: "Innovation Labs".to_string(),
            status: "APPLIED".to_string(),
            application_notes: None,
            response_status: None,
            response_message: None,
            response_date: None,
            applied_at: Utc::now(),
        };

        assert!(registry.insert_application_unique(application(Uuid::new_v4())).await);
        assert!(!registry.insert_application_unique(application(Uuid::new_v4())).await);
        assert_eq!(registry.applications_for_resume(resume_id).await.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_resume_drops_derived_records() {
        let registry = Registry::new();
        let resume = sample_resume();
        let resume_id = resume.id;
        registry.insert_resume(resume).await;

        registry
            .insert_suggestions(vec![StoredSuggestion {
                id: Uuid::new_v4(),
                resume_id,
                suggested_at: Utc::now(),
                job: matching::match_jobs("").remove(0),
            }])
            .await;

        registry.remove_resume(resume_id).await;
        assert!(registry.suggestions_for_resume(resume_id).await.is_empty());
    }
}
