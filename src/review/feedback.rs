// src/review/feedback.rs
//! Tiered feedback text for the three review sub-scores.

/// One bullet line per category in fixed order: format, content, keyword.
/// Tiers per category: >= 80 positive, >= 60 improvement, below deficiency.
pub fn feedback(format_score: f64, content_score: f64, keyword_score: f64) -> String {
    let mut feedback = String::new();

    if format_score >= 80.0 {
        feedback.push_str("• Excellent resume format and structure.\n");
    } else if format_score >= 60.0 {
        feedback.push_str("• Good resume format with room for improvement.\n");
    } else {
        feedback.push_str("• Resume format needs improvement. Consider using a cleaner layout.\n");
    }

    if content_score >= 80.0 {
        feedback.push_str("• Strong content with comprehensive information.\n");
    } else if content_score >= 60.0 {
        feedback.push_str("• Decent content coverage. Add more details to key sections.\n");
    } else {
        feedback.push_str("• Content needs expansion. Include all important sections.\n");
    }

    if keyword_score >= 80.0 {
        feedback.push_str("• Excellent use of industry keywords and technical terms.\n");
    } else if keyword_score >= 60.0 {
        feedback.push_str("• Good keyword usage. Consider adding more industry-specific terms.\n");
    } else {
        feedback.push_str("• Add more relevant keywords to improve ATS compatibility.\n");
    }

    feedback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_order_and_count() {
        let text = feedback(90.0, 70.0, 40.0);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Excellent resume format"));
        assert!(lines[1].contains("Decent content coverage"));
        assert!(lines[2].contains("ATS compatibility"));
    }

    #[test]
    fn test_feedback_tier_boundaries() {
        // 80 falls in the positive tier, 60 in the improvement tier.
        let text = feedback(80.0, 60.0, 59.9);
        assert!(text.contains("Excellent resume format"));
        assert!(text.contains("Decent content coverage"));
        assert!(text.contains("Add more relevant keywords"));
    }

    #[test]
    fn test_feedback_all_low() {
        let text = feedback(20.0, 20.0, 20.0);
        assert!(text.contains("needs improvement"));
        assert!(text.contains("needs expansion"));
        assert!(text.contains("ATS compatibility"));
    }
}
