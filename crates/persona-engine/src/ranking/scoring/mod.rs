mod config;
mod rules;
mod similarity;

pub use config::ScoringConfig;

use crate::ranking::candidate::CandidateFeatures;
use crate::ranking::embedding::TextEmbedder;
use crate::ranking::judgments::JudgmentRecord;
use crate::ranking::preferences::{PreferenceCategory, PreferenceEntry};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything a score is computed from. Borrowed, so scoring never mutates state.
pub struct ScoringContext<'a> {
    pub preferences: &'a [PreferenceEntry],
    pub liked: &'a [JudgmentRecord],
    pub disliked: &'a [JudgmentRecord],
    pub embedder: &'a dyn TextEmbedder,
}

/// Stateless scorer that applies the fusion weights to a candidate.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, features: &CandidateFeatures, context: &ScoringContext<'_>) -> ScoreOutcome {
        let mut components = rules::score_preferences(context.preferences, features, &self.config);

        // Similarity only applies once a liked history exists.
        if features.has_embedding_text() && !context.liked.is_empty() {
            let embedding = context.embedder.project(&features.embedding_text);
            components.extend(similarity::score_history(
                context.embedder,
                &embedding,
                context.liked,
                context.disliked,
                &self.config,
            ));
        }

        let raw = self.config.base_score + components.iter().map(|c| c.delta).sum::<f64>();
        let score = raw.round().clamp(0.0, 100.0) as u8;

        let (positives, negatives): (Vec<&ScoreComponent>, Vec<&ScoreComponent>) =
            components.iter().partition(|component| component.delta > 0.0);

        debug!(
            candidate_id = %features.id,
            score,
            raw_score = raw,
            components = components.len(),
            "candidate scored"
        );

        ScoreOutcome {
            candidate_id: features.id.clone(),
            score,
            reasons: positives.iter().map(|c| c.notes.clone()).collect(),
            warnings: negatives.iter().map(|c| c.notes.clone()).collect(),
            components,
        }
    }
}

/// Which signal produced a score contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "source", content = "category")]
pub enum ComponentKind {
    Preference(PreferenceCategory),
    LikedSimilarity,
    DislikedSimilarity,
}

/// Discrete contribution to a score, kept for audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub kind: ComponentKind,
    pub delta: f64,
    pub notes: String,
}

/// Bounded score with the human-readable trail that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreOutcome {
    pub candidate_id: String,
    pub score: u8,
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
    pub components: Vec<ScoreComponent>,
}
