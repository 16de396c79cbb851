//! Preference learning and candidate scoring.
//!
//! Raw candidate records are normalized into [`ranking::CandidateFeatures`], judged by an
//! operator, and scored against the weighted preferences those judgments accumulate.

pub mod config;
pub mod error;
pub mod ranking;
pub mod telemetry;

pub use ranking::{
    CandidateFeatures, FeedbackKind, Persona, PreferenceEngine, RawCandidate, ScoreOutcome,
    SharedPreferenceEngine, TrainingExport,
};
