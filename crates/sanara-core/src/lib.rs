//! sanara-core
//!
//! Pure domain types for the Sanara screening system: the patient record,
//! the symptom and condition vocabularies, and the analysis result contract.
//! No rule logic lives here; this is the shared vocabulary consumed by the
//! engine and every downstream layer.

pub mod error;
pub mod models;
