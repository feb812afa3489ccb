// src/review/suggestions.rs
//! Improvement suggestion text derived from the résumé text.

use regex::Regex;

/// Returned verbatim when no text could be extracted; nothing is appended.
pub const EXTRACTION_FAILED_MESSAGE: &str =
    "Resume content could not be extracted. Ensure the PDF is valid.";

/// Emit one line per missing section marker in fixed order, then the email
/// visibility and length checks, then three generic suggestions that always
/// apply. The email regex runs against the lower-cased text.
pub fn improvement_suggestions(text: &str, email_re: &Regex) -> String {
    if text.is_empty() {
        return EXTRACTION_FAILED_MESSAGE.to_string();
    }

    let mut suggestions = String::new();
    let text = text.to_lowercase();

    if !text.contains("experience") {
        suggestions.push_str("✓ Add a detailed 'Experience' section with your work history.\n");
    }

    if !text.contains("education") {
        suggestions.push_str("✓ Include an 'Education' section with degrees and certifications.\n");
    }

    if !text.contains("skill") {
        suggestions.push_str("✓ Create a 'Skills' section highlighting technical and soft skills.\n");
    }

    if !text.contains("project") {
        suggestions.push_str("✓ Consider adding a 'Projects' section showcasing your work.\n");
    }

    if !email_re.is_match(&text) {
        suggestions.push_str("✓ Make sure your email address is clearly visible.\n");
    }

    if text.chars().count() < 500 {
        suggestions.push_str("✓ Expand your resume content for more detailed information.\n");
    }

    suggestions.push_str("✓ Ensure proper spelling and grammar throughout.\n");
    suggestions.push_str("✓ Use action verbs to describe your achievements.\n");
    suggestions.push_str("✓ Quantify your accomplishments with metrics and numbers.\n");

    suggestions
}
