use super::config::ScoringConfig;
use super::{ComponentKind, ScoreComponent};
use crate::ranking::candidate::CandidateFeatures;
use crate::ranking::preferences::{PreferenceCategory, PreferenceEntry};

fn equals(field: Option<&str>, needle: &str) -> bool {
    field
        .map(|value| value.to_lowercase() == needle)
        .unwrap_or(false)
}

fn contains(field: Option<&str>, needle: &str) -> bool {
    field
        .map(|value| value.to_lowercase().contains(needle))
        .unwrap_or(false)
}

fn any_contains(values: &[String], needle: &str) -> bool {
    values
        .iter()
        .any(|value| value.to_lowercase().contains(needle))
}

pub(crate) fn entry_matches(entry: &PreferenceEntry, features: &CandidateFeatures) -> bool {
    let needle = entry.value.to_lowercase();
    match entry.category {
        PreferenceCategory::Industry => equals(
            features.industry.map(|industry| industry.label()),
            &needle,
        ),
        PreferenceCategory::SignalType => equals(features.signal_type.as_deref(), &needle),
        PreferenceCategory::Role => contains(features.role.as_deref(), &needle),
        PreferenceCategory::Region => contains(features.region.as_deref(), &needle),
        PreferenceCategory::Organization => contains(features.organization.as_deref(), &needle),
        PreferenceCategory::Tag => any_contains(&features.tags, &needle),
        PreferenceCategory::PastOrganization => {
            any_contains(&features.past_organizations, &needle)
        }
    }
}

/// Categorical contributions from every matching preference whose net weight clears the noise band.
pub(crate) fn score_preferences(
    entries: &[PreferenceEntry],
    features: &CandidateFeatures,
    config: &ScoringConfig,
) -> Vec<ScoreComponent> {
    let mut components = Vec::new();

    for entry in entries {
        if !entry_matches(entry, features) {
            continue;
        }

        let net = entry.net_weight();
        if net > config.noise_threshold {
            let delta = net * config.category_multiplier;
            components.push(ScoreComponent {
                kind: ComponentKind::Preference(entry.category),
                delta,
                notes: format!(
                    "Preferred {}: {} (+{:.1})",
                    entry.category.label(),
                    entry.value,
                    delta
                ),
            });
        } else if net < -config.noise_threshold {
            let delta = net * config.category_multiplier;
            components.push(ScoreComponent {
                kind: ComponentKind::Preference(entry.category),
                delta,
                notes: format!(
                    "Avoided {}: {} ({:.1})",
                    entry.category.label(),
                    entry.value,
                    delta
                ),
            });
        }
    }

    components
}
