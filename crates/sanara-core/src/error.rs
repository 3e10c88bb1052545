use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// A single out-of-range field found while validating a patient record.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct FieldViolation {
    pub field: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub message: String,
}
