use super::Embedding;

/// Dot product of two equal-length vectors; 0.0 when the lengths differ.
///
/// For L2-normalized inputs this is the cosine similarity.
pub fn dot_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        tracing::warn!(
            a_len = a.len(),
            b_len = b.len(),
            "embedding dimension mismatch; returning zero similarity"
        );
        return 0.0;
    }

    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Similarity between two optional embeddings; absent on either side yields 0.0.
pub fn similarity(a: Option<&Embedding>, b: Option<&Embedding>) -> f32 {
    match (a, b) {
        (Some(a), Some(b)) => dot_similarity(a.as_slice(), b.as_slice()),
        _ => 0.0,
    }
}
