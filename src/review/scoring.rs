// src/review/scoring.rs
//! Heuristic sub-score calculators for résumé quality review.

use regex::Regex;

/// Technical keywords worth 2 points each. Substring containment, so "java"
/// also matches inside "javascript" and both count independently.
pub const TECH_KEYWORDS: [&str; 13] = [
    "java",
    "python",
    "javascript",
    "sql",
    "rest api",
    "cloud",
    "aws",
    "docker",
    "kubernetes",
    "git",
    "spring",
    "react",
    "angular",
];

/// Soft-skill keywords worth 1.5 points each.
pub const SOFT_KEYWORDS: [&str; 7] = [
    "leadership",
    "communication",
    "teamwork",
    "problem solving",
    "project management",
    "agile",
    "analytical",
];

/// Loose phone-number pattern: three digits, optional separator, three
/// digits, optional separator, four digits, anywhere in the text.
pub const PHONE_PATTERN: &str = r"\d{3}[-.]?\d{3}[-.]?\d{4}";

/// Score the file name: base 60, +20 for a .pdf extension, -10 when the name
/// is shorter than 5 or longer than 50 characters. Lengths of exactly 5 or 50
/// are not penalized.
pub fn format_score(file_name: &str) -> f64 {
    let mut score: f64 = 60.0;

    if file_name.to_lowercase().ends_with(".pdf") {
        score += 20.0;
    }

    let len = file_name.chars().count();
    if len < 5 || len > 50 {
        score -= 10.0;
    }

    score.min(100.0)
}

/// Score the extracted text for section and contact-detail coverage.
/// Empty text scores a flat 20.
pub fn content_score(text: &str, phone_re: &Regex) -> f64 {
    if text.is_empty() {
        return 20.0;
    }

    let mut score: f64 = 50.0;
    let text = text.to_lowercase();

    if text.contains("experience") || text.contains("employment") {
        score += 15.0;
    }
    if text.contains("education") || text.contains("degree") {
        score += 10.0;
    }
    if text.contains("skill") {
        score += 10.0;
    }
    if text.contains("project") || text.contains("achievement") {
        score += 10.0;
    }
    if text.contains("certification") || text.contains("license") {
        score += 5.0;
    }

    if text.contains("email") || text.contains('@') {
        score += 5.0;
    }
    if text.contains("phone") || phone_re.is_match(&text) {
        score += 5.0;
    }

    score.min(100.0)
}

/// Score the extracted text for industry keyword coverage. Empty text scores
/// a flat 20.
pub fn keyword_score(text: &str) -> f64 {
    if text.is_empty() {
        return 20.0;
    }

    let mut score: f64 = 40.0;
    let text = text.to_lowercase();

    for keyword in TECH_KEYWORDS {
        if text.contains(keyword) {
            score += 2.0;
        }
    }

    for keyword in SOFT_KEYWORDS {
        if text.contains(keyword) {
            score += 1.5;
        }
    }

    score.min(100.0)
}
