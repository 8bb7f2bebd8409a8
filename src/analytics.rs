use crate::models::{AnalyticsSnapshot, PredictionRecord, AT_RISK_LABEL};

/// Summary over the full history. Only the exact label `"At-Risk"` counts
/// towards `at_risk_percent`.
pub fn summarize(records: &[PredictionRecord]) -> AnalyticsSnapshot {
    let total = records.len();
    if total == 0 {
        return AnalyticsSnapshot {
            total_students: 0,
            at_risk_percent: 0.0,
            average_marks: 0.0,
        };
    }

    let at_risk = records.iter().filter(|r| r.risk == AT_RISK_LABEL).count();
    let total_marks: f64 = records.iter().map(|r| r.marks).sum();

    AnalyticsSnapshot {
        total_students: total,
        at_risk_percent: round2(at_risk as f64 / total as f64 * 100.0),
        average_marks: round2(total_marks / total as f64),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;

    fn sample_record(risk: &str, marks: f64) -> PredictionRecord {
        PredictionRecord {
            marks,
            attendance: 70.0,
            feedback: "steady".to_string(),
            risk: risk.to_string(),
            sentiment: Sentiment::Neutral,
        }
    }

    #[test]
    fn empty_history_is_all_zero() {
        let snapshot = summarize(&[]);
        assert_eq!(snapshot.total_students, 0);
        assert_eq!(snapshot.at_risk_percent, 0.0);
        assert_eq!(snapshot.average_marks, 0.0);
    }

    #[test]
    fn rounds_to_two_decimals() {
        let records = vec![
            sample_record("At-Risk", 50.0),
            sample_record("Low-Risk", 80.0),
            sample_record("At-Risk", 30.0),
        ];

        let snapshot = summarize(&records);
        assert_eq!(snapshot.total_students, 3);
        assert_eq!(snapshot.at_risk_percent, 66.67);
        assert_eq!(snapshot.average_marks, 53.33);
    }

    #[test]
    fn at_risk_match_is_exact() {
        let records = vec![
            sample_record("at-risk", 40.0),
            sample_record("At Risk", 40.0),
            sample_record("At-Risk", 40.0),
            sample_record("Good", 40.0),
        ];

        let snapshot = summarize(&records);
        assert_eq!(snapshot.at_risk_percent, 25.0);
        assert_eq!(snapshot.average_marks, 40.0);
    }
}
