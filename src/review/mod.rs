// src/review/mod.rs
//! Résumé quality review: sub-score calculators, feedback and suggestion
//! text, and the engine that combines them into one result.

pub mod feedback;
pub mod scoring;
pub mod suggestions;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;

pub use scoring::{content_score, format_score, keyword_score};
pub use suggestions::EXTRACTION_FAILED_MESSAGE;

/// Standard email pattern, lower-cased to match the lower-cased résumé text.
pub const EMAIL_PATTERN: &str = r"[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}";

/// Heuristic quality review of one résumé. All four scores sit in [0, 100];
/// the overall score is the clamped average of the three sub-scores.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewScore {
    pub overall_score: f64,
    pub format_score: f64,
    pub content_score: f64,
    pub keyword_score: f64,
    pub feedback: String,
    pub suggestions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Review engine holding the compiled patterns. Stateless across calls, safe
/// to share behind Rocket managed state.
pub struct ReviewEngine {
    phone_re: Regex,
    email_re: Regex,
}

impl ReviewEngine {
    pub fn new() -> Result<Self> {
        let phone_re =
            Regex::new(scoring::PHONE_PATTERN).context("Failed to compile phone pattern")?;
        let email_re = Regex::new(EMAIL_PATTERN).context("Failed to compile email pattern")?;

        Ok(Self { phone_re, email_re })
    }

    /// Compute the full review for one résumé. Deterministic in scores for
    /// the same inputs; every call stamps fresh timestamps.
    pub fn review(&self, file_name: &str, extracted_text: &str) -> ReviewScore {
        let format_score = scoring::format_score(file_name);
        let content_score = scoring::content_score(extracted_text, &self.phone_re);
        let keyword_score = scoring::keyword_score(extracted_text);
        let overall_score = (format_score + content_score + keyword_score) / 3.0;

        let now = Utc::now();

        ReviewScore {
            overall_score: overall_score.min(100.0),
            format_score: format_score.min(100.0),
            content_score: content_score.min(100.0),
            keyword_score: keyword_score.min(100.0),
            feedback: feedback::feedback(format_score, content_score, keyword_score),
            suggestions: suggestions::improvement_suggestions(extracted_text, &self.email_re),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ReviewEngine {
        ReviewEngine::new().unwrap()
    }

    #[test]
    fn test_overall_is_average_of_subscores() {
        let score = engine().review("resume.pdf", "");
        assert_eq!(score.format_score, 80.0);
        assert_eq!(score.content_score, 20.0);
        assert_eq!(score.keyword_score, 20.0);
        assert_eq!(score.overall_score, 40.0);
    }

    #[test]
    fn test_all_scores_bounded() {
        let texts = [
            "",
            "short",
            "experience education skill project certification email@x.com \
             phone 555-123-4567 java python javascript sql rest api cloud aws \
             docker kubernetes git spring react angular leadership communication \
             teamwork problem solving project management agile analytical",
        ];
        for text in texts {
            let score = engine().review("resume.pdf", text);
            for value in [
                score.overall_score,
                score.format_score,
                score.content_score,
                score.keyword_score,
            ] {
                assert!((0.0..=100.0).contains(&value), "out of range: {}", value);
            }
        }
    }

    #[test]
    fn test_empty_text_yields_extraction_message() {
        let score = engine().review("resume.pdf", "");
        assert_eq!(score.suggestions, EXTRACTION_FAILED_MESSAGE);
        assert_eq!(score.feedback.lines().count(), 3);
    }

    #[test]
    fn test_scores_deterministic_across_calls() {
        let e = engine();
        let text = "Experienced Java developer with leadership skills";
        let first = e.review("resume.pdf", text);
        let second = e.review("resume.pdf", text);
        assert_eq!(first.overall_score, second.overall_score);
        assert_eq!(first.feedback, second.feedback);
        assert_eq!(first.suggestions, second.suggestions);
    }
}
