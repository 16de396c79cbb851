//! Recorded operator sessions that can be replayed into a fresh engine.

use persona_engine::error::AppError;
use persona_engine::{FeedbackKind, PreferenceEngine, RawCandidate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionFile {
    pub judgments: Vec<SessionJudgment>,
    pub pairs: Vec<SessionPair>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionJudgment {
    pub candidate: Value,
    pub feedback: FeedbackKind,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionPair {
    pub chosen: Value,
    pub rejected: Value,
    #[serde(default)]
    pub reason: String,
}

/// Counts of what a replay fed into the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub judgments: usize,
    pub pairs: usize,
}

impl SessionFile {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AppError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Feeds judgments then pairs into `engine`, in file order.
    pub fn replay(&self, engine: &mut PreferenceEngine) -> ReplaySummary {
        for judgment in &self.judgments {
            let candidate = RawCandidate::from_value(judgment.candidate.clone());
            engine.record_feedback(&candidate, judgment.feedback, &judgment.reason);
        }

        for pair in &self.pairs {
            let chosen = RawCandidate::from_value(pair.chosen.clone());
            let rejected = RawCandidate::from_value(pair.rejected.clone());
            engine.record_preference_pair(&chosen, &rejected, &pair.reason);
        }

        let summary = ReplaySummary {
            judgments: self.judgments.len(),
            pairs: self.pairs.len(),
        };
        info!(
            judgments = summary.judgments,
            pairs = summary.pairs,
            "session replayed"
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_parses_with_missing_sections() {
        let session = SessionFile::from_reader(
            r#"{"judgments":[{"candidate":{"id":"a","name":"Avery"},"feedback":"save"}]}"#
                .as_bytes(),
        )
        .expect("session parses");

        assert_eq!(session.judgments.len(), 1);
        assert_eq!(session.judgments[0].feedback, FeedbackKind::Save);
        assert!(session.judgments[0].reason.is_empty());
        assert!(session.pairs.is_empty());
    }

    #[test]
    fn unknown_feedback_is_rejected() {
        let result = SessionFile::from_reader(
            r#"{"judgments":[{"candidate":{},"feedback":"superlike"}]}"#.as_bytes(),
        );
        assert!(matches!(result, Err(AppError::Json(_))));
    }
}
