use crate::ranking::candidate::CandidateFeatures;
use crate::ranking::embedding::Embedding;
use crate::ranking::preferences::Polarity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operator feedback on a single candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Like,
    Dislike,
    Save,
    Skip,
}

impl FeedbackKind {
    pub const fn reward(self) -> f64 {
        match self {
            Self::Like => 1.0,
            Self::Dislike => -1.0,
            Self::Save => 2.0,
            Self::Skip => -0.2,
        }
    }

    /// Skips are bookkeeping only and never become judgments.
    pub const fn polarity(self) -> Option<Polarity> {
        match self {
            Self::Like | Self::Save => Some(Polarity::Positive),
            Self::Dislike => Some(Polarity::Negative),
            Self::Skip => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
            Self::Save => "save",
            Self::Skip => "skip",
        }
    }
}

/// Immutable record of one like/dislike, with the embedding cached at judgment time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgmentRecord {
    pub candidate_id: String,
    pub name: Option<String>,
    pub features: CandidateFeatures,
    pub reason: String,
    pub recorded_at: DateTime<Utc>,
    pub embedding: Embedding,
    pub polarity: Polarity,
}

impl JudgmentRecord {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.candidate_id)
    }
}

/// One side of a preference pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairCandidate {
    pub id: String,
    pub name: Option<String>,
    pub features: CandidateFeatures,
}

impl From<CandidateFeatures> for PairCandidate {
    fn from(features: CandidateFeatures) -> Self {
        Self {
            id: features.id.clone(),
            name: features.name.clone(),
            features,
        }
    }
}

/// Chosen-versus-rejected pair kept for offline preference training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferencePair {
    pub id: String,
    pub recorded_at: DateTime<Utc>,
    pub chosen: PairCandidate,
    pub rejected: PairCandidate,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardEntry {
    pub candidate_id: String,
    pub feedback: FeedbackKind,
    pub reward: f64,
    pub reason: String,
    pub recorded_at: DateTime<Utc>,
}

/// Returned from every feedback call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardUpdate {
    pub reward: f64,
    pub total_reward: f64,
}
