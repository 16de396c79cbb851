use super::{tokenizer, Embedding, TextEmbedder};
use std::collections::HashMap;

/// Token table that hands out stable indices in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    indices: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.indices.get(token).copied()
    }

    /// Returns the token's index, assigning the next free one on first sight.
    pub fn register(&mut self, token: &str) -> usize {
        let next = self.indices.len();
        *self.indices.entry(token.to_string()).or_insert(next)
    }
}

/// Bag-of-words count vector folded into `dimension` buckets by vocabulary index.
///
/// Bucket collisions are accepted; this is a hashing trick, not a trained model.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimension: usize,
    vocabulary: Vocabulary,
}

impl HashingEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
            vocabulary: Vocabulary::default(),
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    fn counts_to_embedding(&self, indices: impl IntoIterator<Item = usize>) -> Embedding {
        let mut vector = vec![0.0f32; self.dimension];
        for index in indices {
            vector[index % self.dimension] += 1.0;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        let divisor = if norm > 0.0 { norm } else { 1.0 };
        for value in &mut vector {
            *value /= divisor;
        }

        Embedding::from_vector(vector)
    }
}

impl TextEmbedder for HashingEmbedder {
    fn name(&self) -> &'static str {
        "hashing-bow"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn embed(&mut self, text: &str) -> Embedding {
        let indices: Vec<usize> = tokenizer::tokenize(text)
            .iter()
            .map(|token| self.vocabulary.register(token))
            .collect();
        self.counts_to_embedding(indices)
    }

    fn project(&self, text: &str) -> Embedding {
        // Unseen tokens get the indices `embed` would hand them, without registering.
        let mut provisional: HashMap<String, usize> = HashMap::new();
        let indices: Vec<usize> = tokenizer::tokenize(text)
            .into_iter()
            .map(|token| match self.vocabulary.index_of(&token) {
                Some(index) => index,
                None => {
                    let next = self.vocabulary.len() + provisional.len();
                    *provisional.entry(token).or_insert(next)
                }
            })
            .collect();
        self.counts_to_embedding(indices)
    }
}
