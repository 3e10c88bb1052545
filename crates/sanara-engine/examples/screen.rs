//! Runs the full screening pipeline over a hard-coded patient record and
//! prints the ranked findings, ordered tests, and care pathways.
//!
//! Usage:
//!   cargo run -p sanara-engine --example screen

use sanara_core::models::plan::TestPriority;
use sanara_core::models::record::{Gender, PatientRecord, Symptom};
use sanara_engine::Engine;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let record = PatientRecord {
        age: 50,
        gender: Gender::Male,
        bmi: 31.0,
        systolic: 145,
        diastolic: 92,
        glucose: 130,
        total_cholesterol: 250,
        ldl: 170,
        hdl: 35,
        triglycerides: 220,
        symptoms: vec![Symptom::Fatigue, Symptom::FrequentUrination],
    };

    println!("╔══════════════════════════════════════════════════╗");
    println!("║         Sanara Screening — Demo Record           ║");
    println!("╠══════════════════════════════════════════════════╣");
    println!("║  Age / gender:  {:<33}║", format!("{} / {}", record.age, record.gender.as_str()));
    println!("║  BMI:           {:<33}║", record.bmi);
    println!("║  BP:            {:<33}║", format!("{}/{} mmHg", record.systolic, record.diastolic));
    println!("║  Glucose:       {:<33}║", format!("{} mg/dL", record.glucose));
    println!("╚══════════════════════════════════════════════════╝");
    println!();

    let result = Engine::new().analyze(&record);

    println!("Overall risk: {} — {}", result.overall_risk.level.as_str(), result.overall_risk.message);
    println!();

    println!("Ranked findings:");
    for (rank, assessment) in result.conditions.iter().enumerate() {
        println!(
            "  {}. {} (score {}, {} confidence)",
            rank + 1,
            assessment.condition.label(),
            assessment.score,
            assessment.confidence.as_str()
        );
        for factor in &assessment.factors {
            println!("       • {factor}");
        }
    }
    println!();

    println!("Ordered tests:");
    for test in &result.diagnostic_tests {
        let icon = match test.priority {
            TestPriority::Urgent => "🔴",
            TestPriority::Routine => "🟡",
            TestPriority::Followup => "⚪",
        };
        println!("  {icon} {} — {}", test.name, test.purpose);
    }
    println!();

    println!("Care pathways:");
    for pathway in &result.care_pathways {
        println!("  {}", pathway.label);
        for (i, step) in pathway.steps.iter().enumerate() {
            println!("    {}. {step}", i + 1);
        }
    }
}
