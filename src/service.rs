use std::sync::Arc;

use crate::analytics;
use crate::error::{Result, ServiceError};
use crate::history::HistoryStore;
use crate::models::{AnalyticsSnapshot, Evaluation, PredictionRecord};
use crate::reasons::reasons;
use crate::risk::RiskModel;
use crate::sentiment::{classify, PolarityScorer};

/// Orchestrates one prediction and owns the shared history.
#[derive(Clone)]
pub struct PredictionService {
    model: Arc<dyn RiskModel>,
    scorer: Arc<dyn PolarityScorer>,
    history: Arc<HistoryStore>,
}

impl PredictionService {
    pub fn new(model: Arc<dyn RiskModel>, scorer: Arc<dyn PolarityScorer>) -> Self {
        Self {
            model,
            scorer,
            history: Arc::new(HistoryStore::new()),
        }
    }

    /// Score one student and append the record to history. Nothing is
    /// stored when validation or the model fails.
    pub fn evaluate(&self, marks: f64, attendance: f64, feedback: &str) -> Result<Evaluation> {
        check_range("marks", marks)?;
        check_range("attendance", attendance)?;

        let risk = self.model.predict(marks, attendance)?;
        let sentiment = classify(self.scorer.as_ref(), feedback);
        let reasons = reasons(marks, attendance, sentiment);

        let record = PredictionRecord {
            marks,
            attendance,
            feedback: feedback.to_string(),
            risk,
            sentiment,
        };

        tracing::debug!(
            marks,
            attendance,
            risk = %record.risk,
            sentiment = %record.sentiment,
            "evaluated student"
        );

        self.history.append(record.clone());
        Ok(Evaluation { record, reasons })
    }

    pub fn history(&self) -> Vec<PredictionRecord> {
        self.history.snapshot()
    }

    pub fn analytics(&self) -> AnalyticsSnapshot {
        analytics::summarize(&self.history.snapshot())
    }
}

fn check_range(field: &str, value: f64) -> Result<()> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ServiceError::InvalidInput(format!(
            "{field} must be between 0 and 100, got {value}"
        )))
    }
}
