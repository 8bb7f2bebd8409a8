use crate::models::Sentiment;

pub const LOW_MARKS_THRESHOLD: f64 = 40.0;
pub const LOW_ATTENDANCE_THRESHOLD: f64 = 60.0;

/// Human-readable explanations for a prediction. Rules fire independently
/// and in a fixed order; the result is never empty.
pub fn reasons(marks: f64, attendance: f64, sentiment: Sentiment) -> Vec<String> {
    let mut reasons = Vec::new();

    if marks < LOW_MARKS_THRESHOLD {
        reasons.push("Low academic marks".to_string());
    }
    if attendance < LOW_ATTENDANCE_THRESHOLD {
        reasons.push("Low attendance".to_string());
    }
    if sentiment == Sentiment::Negative {
        reasons.push("Negative teacher feedback".to_string());
    }
    if reasons.is_empty() {
        reasons.push("Overall good academic performance".to_string());
    }

    reasons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rules_fire_in_order() {
        assert_eq!(
            reasons(30.0, 50.0, Sentiment::Negative),
            vec![
                "Low academic marks",
                "Low attendance",
                "Negative teacher feedback"
            ]
        );
    }

    #[test]
    fn falls_back_when_nothing_fires() {
        let expected = vec!["Overall good academic performance"];
        assert_eq!(reasons(90.0, 95.0, Sentiment::Neutral), expected);
        assert_eq!(reasons(90.0, 95.0, Sentiment::Positive), expected);
    }

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(
            reasons(40.0, 60.0, Sentiment::Positive),
            vec!["Overall good academic performance"]
        );
        assert_eq!(reasons(39.9, 60.0, Sentiment::Neutral), vec!["Low academic marks"]);
        assert_eq!(
            reasons(80.0, 59.0, Sentiment::Negative),
            vec!["Low attendance", "Negative teacher feedback"]
        );
    }
}
