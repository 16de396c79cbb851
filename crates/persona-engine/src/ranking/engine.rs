use crate::config::EngineConfig;
use crate::ranking::candidate::{CandidateFeatures, FeatureNormalizer, RawCandidate};
use crate::ranking::embedding::{Embedding, HashingEmbedder, TextEmbedder};
use crate::ranking::export::{ExportStats, TrainingExport};
use crate::ranking::judgments::{
    FeedbackKind, JudgmentLog, JudgmentRecord, PairCandidate, PreferencePair, RewardUpdate,
};
use crate::ranking::persona::Persona;
use crate::ranking::preferences::{self, PreferenceError, PreferenceStore};
use crate::ranking::scoring::{ScoreOutcome, ScoringConfig, ScoringContext, ScoringEngine};
use chrono::Utc;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

/// Explicit engine state: vocabulary, preference store and judgment history for one persona.
///
/// Every operation runs to completion synchronously. Independent instances share nothing.
pub struct PreferenceEngine {
    config: EngineConfig,
    normalizer: FeatureNormalizer,
    embedder: Box<dyn TextEmbedder>,
    store: PreferenceStore,
    scorer: ScoringEngine,
    log: JudgmentLog,
    persona: Option<String>,
}

impl Default for PreferenceEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl PreferenceEngine {
    pub fn new(config: EngineConfig) -> Self {
        let embedder = Box::new(HashingEmbedder::new(config.embedding_dimension));
        Self::with_embedder(config, embedder)
    }

    /// Swaps in a different embedding model behind the same contract.
    pub fn with_embedder(config: EngineConfig, embedder: Box<dyn TextEmbedder>) -> Self {
        Self {
            normalizer: FeatureNormalizer::new(config.max_past_organizations),
            store: PreferenceStore::new(config.weight_step),
            scorer: ScoringEngine::new(ScoringConfig::from(&config)),
            log: JudgmentLog::default(),
            persona: None,
            embedder,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.store
    }

    pub fn history(&self) -> &JudgmentLog {
        &self.log
    }

    pub fn persona(&self) -> Option<&str> {
        self.persona.as_deref()
    }

    pub fn normalize(&self, raw: &RawCandidate, fallback_id: &str) -> CandidateFeatures {
        self.normalizer.normalize(raw, fallback_id)
    }

    pub fn embed(&mut self, text: &str) -> Embedding {
        self.embedder.embed(text)
    }

    pub fn similarity(&self, a: &Embedding, b: &Embedding) -> f32 {
        self.embedder.similarity(a, b)
    }

    fn fallback_id(&self) -> String {
        format!("candidate-{:06}", self.log.reward_history().len() + 1)
    }

    pub fn record_like(&mut self, candidate: &RawCandidate, reason: &str) -> RewardUpdate {
        self.record_feedback(candidate, FeedbackKind::Like, reason)
    }

    pub fn record_dislike(&mut self, candidate: &RawCandidate, reason: &str) -> RewardUpdate {
        self.record_feedback(candidate, FeedbackKind::Dislike, reason)
    }

    pub fn record_feedback(
        &mut self,
        candidate: &RawCandidate,
        feedback: FeedbackKind,
        reason: &str,
    ) -> RewardUpdate {
        let features = self.normalize(candidate, &self.fallback_id());
        self.record_features(features, feedback, reason)
    }

    /// Records feedback on an already-normalized candidate.
    ///
    /// Likes, saves and dislikes become judgments that update preferences and the embedding
    /// cache; skips only land in the reward history.
    pub fn record_features(
        &mut self,
        features: CandidateFeatures,
        feedback: FeedbackKind,
        reason: &str,
    ) -> RewardUpdate {
        let candidate_id = features.id.clone();

        if let Some(polarity) = feedback.polarity() {
            let embedding = self.embedder.embed(&features.embedding_text);
            let touched = preferences::apply_judgment(
                &mut self.store,
                &features,
                polarity,
                reason,
                self.config.max_past_organizations,
            );

            info!(
                candidate_id = %candidate_id,
                feedback = feedback.label(),
                preferences_touched = touched,
                "judgment recorded"
            );

            self.log.push_judgment(JudgmentRecord {
                candidate_id: candidate_id.clone(),
                name: features.name.clone(),
                reason: reason.to_string(),
                recorded_at: Utc::now(),
                embedding,
                polarity,
                features,
            });
        }

        self.log.push_reward(&candidate_id, feedback, reason)
    }

    /// Stores a chosen/rejected pair for export. Scoring is unaffected.
    pub fn record_preference_pair(
        &mut self,
        chosen: &RawCandidate,
        rejected: &RawCandidate,
        reason: &str,
    ) -> &PreferencePair {
        let chosen = self.normalize(chosen, "chosen");
        let rejected = self.normalize(rejected, "rejected");
        info!(chosen = %chosen.id, rejected = %rejected.id, "preference pair recorded");
        self.log
            .push_pair(PairCandidate::from(chosen), PairCandidate::from(rejected), reason)
    }

    pub fn score(&self, features: &CandidateFeatures) -> ScoreOutcome {
        let context = ScoringContext {
            preferences: self.store.entries(),
            liked: self.log.liked(),
            disliked: self.log.disliked(),
            embedder: self.embedder.as_ref(),
        };
        self.scorer.score(features, &context)
    }

    pub fn score_raw(&self, candidate: &RawCandidate, fallback_id: &str) -> ScoreOutcome {
        self.score(&self.normalize(candidate, fallback_id))
    }

    /// Scores a batch, best first; ties keep a stable id order.
    pub fn rank(&self, candidates: &[CandidateFeatures]) -> Vec<ScoreOutcome> {
        let mut outcomes: Vec<ScoreOutcome> =
            candidates.iter().map(|features| self.score(features)).collect();
        outcomes.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.candidate_id.cmp(&b.candidate_id))
        });
        outcomes
    }

    /// Clears learned preferences and judgment history. Irreversible.
    pub fn reset_preferences(&mut self) {
        info!(
            preferences = self.store.len(),
            liked = self.log.liked().len(),
            disliked = self.log.disliked().len(),
            "resetting preferences"
        );
        self.store.reset();
        self.log.clear_judgments();
        self.persona = None;
    }

    /// Merges persona seeds into the current preferences.
    pub fn apply_persona(&mut self, persona: &Persona) -> Result<usize, PreferenceError> {
        let applied = persona.apply(&mut self.store)?;
        info!(persona = %persona.name, applied, "persona seeded");
        self.persona = Some(persona.name.clone());
        Ok(applied)
    }

    /// Resets and seeds from `persona`, so ranking follows it without new judgments.
    pub fn switch_persona(&mut self, persona: &Persona) -> Result<usize, PreferenceError> {
        // Validate against a scratch store first so a bad persona never wipes state.
        persona.apply(&mut PreferenceStore::new(self.config.weight_step))?;
        self.reset_preferences();
        self.apply_persona(persona)
    }

    pub fn export_training_data(&self) -> TrainingExport {
        let export = TrainingExport {
            stats: ExportStats {
                exported_at: Utc::now(),
                persona: self.persona.clone(),
                total_likes: self.log.liked().len(),
                total_dislikes: self.log.disliked().len(),
                total_pairs: self.log.pairs().len(),
                total_preferences: self.store.len(),
                total_reward: self.log.total_reward(),
            },
            pairs: self.log.pairs().to_vec(),
            reward_history: self.log.reward_history().to_vec(),
            learned_preferences: self.store.entries().to_vec(),
        };
        info!(
            pairs = export.stats.total_pairs,
            preferences = export.stats.total_preferences,
            "training data exported"
        );
        export
    }
}

/// Engine handle for concurrent hosts: one writer at a time, scoring under a shared read lock.
#[derive(Clone)]
pub struct SharedPreferenceEngine {
    inner: Arc<RwLock<PreferenceEngine>>,
}

impl SharedPreferenceEngine {
    pub fn new(engine: PreferenceEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    /// Runs `f` under the read lock.
    pub fn read<T>(&self, f: impl FnOnce(&PreferenceEngine) -> T) -> T {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Runs `f` under the write lock.
    pub fn write<T>(&self, f: impl FnOnce(&mut PreferenceEngine) -> T) -> T {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn score(&self, features: &CandidateFeatures) -> ScoreOutcome {
        self.read(|engine| engine.score(features))
    }

    pub fn record_feedback(
        &self,
        candidate: &RawCandidate,
        feedback: FeedbackKind,
        reason: &str,
    ) -> RewardUpdate {
        self.write(|engine| engine.record_feedback(candidate, feedback, reason))
    }
}
