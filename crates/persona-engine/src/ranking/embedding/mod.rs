mod hashing;
mod similarity;
mod tokenizer;

pub use hashing::{HashingEmbedder, Vocabulary};
pub use similarity::{dot_similarity, similarity};
pub use tokenizer::tokenize;

use serde::{Deserialize, Serialize};

/// Fixed-length text vector produced by a [`TextEmbedder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Embedding(Vec<f32>);

impl Embedding {
    pub fn from_vector(vector: Vec<f32>) -> Self {
        Self(vector)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn dimension(&self) -> usize {
        self.0.len()
    }
}

/// Text embedding contract the scorer depends on.
///
/// Any model producing fixed-dimension vectors can stand in for [`HashingEmbedder`].
pub trait TextEmbedder: Send + Sync {
    fn name(&self) -> &'static str;

    fn dimension(&self) -> usize;

    /// Embeds `text`, updating any internal state (e.g. registering new tokens).
    fn embed(&mut self, text: &str) -> Embedding;

    /// Read-only embedding; must equal what `embed` would return for the same state.
    fn project(&self, text: &str) -> Embedding;

    fn similarity(&self, a: &Embedding, b: &Embedding) -> f32 {
        dot_similarity(a.as_slice(), b.as_slice())
    }
}
