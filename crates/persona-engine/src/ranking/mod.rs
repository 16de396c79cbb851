//! Candidate ranking: normalization, embedding, preference learning and score fusion.

pub mod candidate;
pub mod embedding;
mod engine;
pub mod export;
pub mod judgments;
pub mod persona;
pub mod preferences;
pub mod scoring;

pub use candidate::{CandidateFeatures, CandidateImporter, ImportError, Industry, RawCandidate};
pub use engine::{PreferenceEngine, SharedPreferenceEngine};
pub use export::{ExportStats, TrainingExport};
pub use judgments::{FeedbackKind, RewardUpdate};
pub use persona::{Persona, PersonaSeed};
pub use preferences::{PreferenceCategory, PreferenceError};
pub use scoring::ScoreOutcome;

#[cfg(test)]
mod tests;
