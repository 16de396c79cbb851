use super::config::ScoringConfig;
use super::{ComponentKind, ScoreComponent};
use crate::ranking::embedding::{Embedding, TextEmbedder};
use crate::ranking::judgments::JudgmentRecord;

/// Best match against a judgment history: (similarity, judged candidate name).
fn best_match<'a>(
    embedder: &dyn TextEmbedder,
    candidate: &Embedding,
    history: &'a [JudgmentRecord],
) -> Option<(f32, &'a str)> {
    history
        .iter()
        .map(|record| {
            (
                embedder.similarity(candidate, &record.embedding),
                record.display_name(),
            )
        })
        .fold(None, |best, (similarity, name)| match best {
            Some((current, _)) if current >= similarity => best,
            _ => Some((similarity, name)),
        })
}

/// History term: only the single strongest match on each side moves the score.
pub(crate) fn score_history(
    embedder: &dyn TextEmbedder,
    candidate: &Embedding,
    liked: &[JudgmentRecord],
    disliked: &[JudgmentRecord],
    config: &ScoringConfig,
) -> Vec<ScoreComponent> {
    let mut components = Vec::new();

    if let Some((similarity, name)) = best_match(embedder, candidate, liked) {
        let similarity = f64::from(similarity);
        if similarity > config.similarity_gate {
            components.push(ScoreComponent {
                kind: ComponentKind::LikedSimilarity,
                delta: similarity * config.similarity_multiplier,
                notes: format!(
                    "Similar to liked {} ({:.0}% match)",
                    name,
                    (similarity * 100.0).round()
                ),
            });
        }
    }

    if let Some((similarity, name)) = best_match(embedder, candidate, disliked) {
        let similarity = f64::from(similarity);
        if similarity > config.similarity_gate {
            components.push(ScoreComponent {
                kind: ComponentKind::DislikedSimilarity,
                delta: -similarity * config.similarity_multiplier,
                notes: format!(
                    "Similar to disliked {} ({:.0}% match)",
                    name,
                    (similarity * 100.0).round()
                ),
            });
        }
    }

    components
}
