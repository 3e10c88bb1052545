//! sanara-report
//!
//! Presentation layer over the screening engine: reference-range bands,
//! symptom triage, narrative synopsis, condition profiles, and the
//! assembled patient report.

pub mod bands;
pub mod pathways;
pub mod profiles;
pub mod report;
pub mod summary;
pub mod symptoms;
