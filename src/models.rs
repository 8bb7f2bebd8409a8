use std::fmt;

use serde::{Deserialize, Serialize};

/// Label compared against when counting at-risk students in analytics.
pub const AT_RISK_LABEL: &str = "At-Risk";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Sentiment::Positive
        } else if polarity < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One evaluated student snapshot, as stored in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub marks: f64,
    pub attendance: f64,
    pub feedback: String,
    pub risk: String,
    pub sentiment: Sentiment,
}

/// A stored record plus the reasons that explain it. Reasons are only
/// returned to the caller, never persisted.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub record: PredictionRecord,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub total_students: usize,
    pub at_risk_percent: f64,
    pub average_marks: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub uploaded_students: usize,
    pub results: Vec<PredictionRecord>,
}
