use crate::config::EngineConfig;
use serde::{Deserialize, Serialize};

/// Weights and gates used to fuse preference and similarity signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub base_score: f64,
    pub noise_threshold: f64,
    pub category_multiplier: f64,
    pub similarity_gate: f64,
    pub similarity_multiplier: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::from(&EngineConfig::default())
    }
}

impl From<&EngineConfig> for ScoringConfig {
    fn from(config: &EngineConfig) -> Self {
        Self {
            base_score: config.base_score,
            noise_threshold: config.noise_threshold,
            category_multiplier: config.category_multiplier,
            similarity_gate: config.similarity_gate,
            similarity_multiplier: config.similarity_multiplier,
        }
    }
}
