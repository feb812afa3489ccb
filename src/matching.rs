// src/matching.rs
//! Fixed job catalog and lexical match scoring against résumé text.

use serde::Serialize;

const JOB_BASE_URL: &str = "https://example.com/jobs/";

/// One fixed job archetype used as a match target.
pub struct CatalogEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub keywords: [&'static str; 3],
}

/// The five catalog entries, matched and emitted in this order.
pub const JOB_CATALOG: [CatalogEntry; 5] = [
    CatalogEntry {
        title: "Senior Software Engineer",
        company: "Tech Corp",
        keywords: ["java", "spring", "microservices"],
    },
    CatalogEntry {
        title: "Full Stack Developer",
        company: "Digital Solutions Inc",
        keywords: ["javascript", "react", "api"],
    },
    CatalogEntry {
        title: "Backend Developer",
        company: "Cloud Systems Ltd",
        keywords: ["sql", "database", "cloud"],
    },
    CatalogEntry {
        title: "DevOps Engineer",
        company: "Innovation Labs",
        keywords: ["docker", "kubernetes", "aws"],
    },
    CatalogEntry {
        title: "Data Engineer",
        company: "Analytics Pro",
        keywords: ["sql", "data", "python"],
    },
];

/// Title-substring dispatch for required skills, evaluated in order with
/// first match winning. Order matters: "Senior" is tested before the role
/// fragments so a senior title never falls through to a role entry.
const SKILL_DISPATCH: [(&str, &str); 4] = [
    (
        "Senior",
        "5+ years experience, Leadership, System Design, Problem Solving",
    ),
    (
        "Backend",
        "REST API, SQL, Java/Python, Microservices, Cloud",
    ),
    ("Full Stack", "JavaScript, React, Node.js, SQL, Git"),
    ("DevOps", "Docker, Kubernetes, AWS, CI/CD, Linux"),
];

const FALLBACK_SKILLS: &str = "Technical Skills, Problem Solving, Teamwork";

/// A suggested job for one résumé, derived from one catalog entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSuggestion {
    pub job_title: String,
    pub company: String,
    pub description: String,
    pub match_score: f64,
    pub location: String,
    pub employment_type: String,
    pub required_skills: String,
    pub job_url: String,
    pub status: String,
}

/// Score one catalog entry against the lower-cased résumé text:
/// min(50 + 15 * keyword hits, 100).
fn match_score(resume_text: &str, keywords: &[&str]) -> f64 {
    let matches = keywords
        .iter()
        .filter(|keyword| resume_text.contains(*keyword))
        .count();

    (50.0 + matches as f64 * 15.0).min(100.0)
}

fn job_description(title: &str) -> String {
    format!(
        "We are looking for a talented {} to join our team. You will work on \
         challenging projects using modern technologies and collaborate with \
         a team of experienced professionals.",
        title
    )
}

fn required_skills(title: &str) -> &'static str {
    for (fragment, skills) in SKILL_DISPATCH {
        if title.contains(fragment) {
            return skills;
        }
    }
    FALLBACK_SKILLS
}

fn job_url(title: &str) -> String {
    format!("{}{}", JOB_BASE_URL, title.to_lowercase().replace(' ', "-"))
}

/// Produce one suggestion per catalog entry, in catalog order, always five.
pub fn match_jobs(resume_text: &str) -> Vec<JobSuggestion> {
    let resume_text = resume_text.to_lowercase();

    JOB_CATALOG
        .iter()
        .map(|entry| JobSuggestion {
            job_title: entry.title.to_string(),
            company: entry.company.to_string(),
            description: job_description(entry.title),
            match_score: match_score(&resume_text, &entry.keywords),
            location: "Remote / Hybrid".to_string(),
            employment_type: "Full-time".to_string(),
            required_skills: required_skills(entry.title).to_string(),
            job_url: job_url(entry.title),
            status: "ACTIVE".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_five_entries_in_catalog_order() {
        for text in ["", "java everywhere", "unrelated prose"] {
            let suggestions = match_jobs(text);
            assert_eq!(suggestions.len(), 5);
            let titles: Vec<&str> = suggestions.iter().map(|s| s.job_title.as_str()).collect();
            assert_eq!(
                titles,
                [
                    "Senior Software Engineer",
                    "Full Stack Developer",
                    "Backend Developer",
                    "DevOps Engineer",
                    "Data Engineer",
                ]
            );
        }
    }

    #[test]
    fn test_devops_match_score() {
        let suggestions = match_jobs("Shipped with docker, kubernetes, aws");
        let devops = suggestions
            .iter()
            .find(|s| s.job_title == "DevOps Engineer")
            .unwrap();
        assert_eq!(devops.match_score, 95.0);
    }

    #[test]
    fn test_no_keywords_gives_base_score() {
        for suggestion in match_jobs("nothing relevant here") {
            assert_eq!(suggestion.match_score, 50.0);
        }
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let upper = match_jobs("JAVA AND SPRING");
        let lower = match_jobs("java and spring");
        assert_eq!(upper[0].match_score, lower[0].match_score);
        assert_eq!(upper[0].match_score, 80.0);
    }

    #[test]
    fn test_scores_deterministic() {
        let text = "sql and python for data pipelines";
        let first: Vec<f64> = match_jobs(text).iter().map(|s| s.match_score).collect();
        let second: Vec<f64> = match_jobs(text).iter().map(|s| s.match_score).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_required_skills_dispatch_order() {
        assert!(required_skills("Senior Software Engineer").starts_with("5+ years"));
        // "Senior" wins over a later fragment appearing in the same title.
        assert!(required_skills("Senior Backend Developer").starts_with("5+ years"));
        assert!(required_skills("Backend Developer").starts_with("REST API"));
        assert!(required_skills("Full Stack Developer").starts_with("JavaScript"));
        assert!(required_skills("DevOps Engineer").starts_with("Docker"));
        assert_eq!(required_skills("Data Engineer"), FALLBACK_SKILLS);
    }

    #[test]
    fn test_job_url_slug() {
        let suggestions = match_jobs("");
        assert_eq!(
            suggestions[0].job_url,
            "https://example.com/jobs/senior-software-engineer"
        );
        assert_eq!(
            suggestions[3].job_url,
            "https://example.com/jobs/devops-engineer"
        );
    }

    #[test]
    fn test_fixed_derived_fields() {
        let suggestion = &match_jobs("")[0];
        assert_eq!(suggestion.location, "Remote / Hybrid");
        assert_eq!(suggestion.employment_type, "Full-time");
        assert_eq!(suggestion.status, "ACTIVE");
        assert!(suggestion
            .description
            .contains("talented Senior Software Engineer"));
    }
}
