use super::domain::{
    FeedbackKind, JudgmentRecord, PairCandidate, PreferencePair, RewardEntry, RewardUpdate,
};
use crate::ranking::preferences::Polarity;
use chrono::Utc;

/// Session history: polarity-partitioned judgments, export-only pairs and reward bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct JudgmentLog {
    liked: Vec<JudgmentRecord>,
    disliked: Vec<JudgmentRecord>,
    pairs: Vec<PreferencePair>,
    reward_history: Vec<RewardEntry>,
    total_reward: f64,
    pair_sequence: u64,
}

impl JudgmentLog {
    pub fn liked(&self) -> &[JudgmentRecord] {
        &self.liked
    }

    pub fn disliked(&self) -> &[JudgmentRecord] {
        &self.disliked
    }

    pub fn pairs(&self) -> &[PreferencePair] {
        &self.pairs
    }

    pub fn reward_history(&self) -> &[RewardEntry] {
        &self.reward_history
    }

    pub fn total_reward(&self) -> f64 {
        self.total_reward
    }

    pub(crate) fn push_judgment(&mut self, record: JudgmentRecord) {
        match record.polarity {
            Polarity::Positive => self.liked.push(record),
            Polarity::Negative => self.disliked.push(record),
        }
    }

    pub(crate) fn push_reward(
        &mut self,
        candidate_id: &str,
        feedback: FeedbackKind,
        reason: &str,
    ) -> RewardUpdate {
        let reward = feedback.reward();
        self.total_reward += reward;
        self.reward_history.push(RewardEntry {
            candidate_id: candidate_id.to_string(),
            feedback,
            reward,
            reason: reason.to_string(),
            recorded_at: Utc::now(),
        });

        RewardUpdate {
            reward,
            total_reward: self.total_reward,
        }
    }

    pub(crate) fn push_pair(
        &mut self,
        chosen: PairCandidate,
        rejected: PairCandidate,
        reason: &str,
    ) -> &PreferencePair {
        self.pair_sequence += 1;
        self.pairs.push(PreferencePair {
            id: format!("pair-{:06}", self.pair_sequence),
            recorded_at: Utc::now(),
            chosen,
            rejected,
            reason: reason.to_string(),
        });
        &self.pairs[self.pairs.len() - 1]
    }

    /// Drops liked/disliked history; pairs and rewards are training data and survive.
    pub(crate) fn clear_judgments(&mut self) {
        self.liked.clear();
        self.disliked.clear();
    }
}
