use crate::ranking::judgments::{PreferencePair, RewardEntry};
use crate::ranking::preferences::PreferenceEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of session state for offline (chosen/rejected) preference training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExport {
    pub stats: ExportStats,
    pub pairs: Vec<PreferencePair>,
    pub reward_history: Vec<RewardEntry>,
    pub learned_preferences: Vec<PreferenceEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportStats {
    pub exported_at: DateTime<Utc>,
    pub persona: Option<String>,
    pub total_likes: usize,
    pub total_dislikes: usize,
    pub total_pairs: usize,
    pub total_preferences: usize,
    pub total_reward: f64,
}

impl TrainingExport {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
