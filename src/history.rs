use parking_lot::RwLock;

use crate::models::PredictionRecord;

/// Process-lifetime, append-only log of predictions in evaluation order.
#[derive(Debug, Default)]
pub struct HistoryStore {
    records: RwLock<Vec<PredictionRecord>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, record: PredictionRecord) {
        self.records.write().push(record);
    }

    /// Copy of every record appended so far.
    pub fn snapshot(&self) -> Vec<PredictionRecord> {
        self.records.read().clone()
    }
}
