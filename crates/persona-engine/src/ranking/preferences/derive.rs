use super::domain::{Polarity, PreferenceCategory};
use super::store::PreferenceStore;
use crate::ranking::candidate::CandidateFeatures;

/// Applies one judgment to every preference dimension the candidate has a value for.
///
/// Returns the number of entries touched.
pub(crate) fn apply_judgment(
    store: &mut PreferenceStore,
    features: &CandidateFeatures,
    polarity: Polarity,
    reason: &str,
    max_past_organizations: usize,
) -> usize {
    let singles = [
        (
            PreferenceCategory::Industry,
            features.industry.map(|industry| industry.label()),
        ),
        (PreferenceCategory::Role, features.role.as_deref()),
        (PreferenceCategory::Region, features.region.as_deref()),
        (
            PreferenceCategory::Organization,
            features.organization.as_deref(),
        ),
        (PreferenceCategory::SignalType, features.signal_type.as_deref()),
    ];

    let mut touched = 0;
    for (category, value) in singles {
        if let Some(value) = value {
            if store.update(category, value, polarity, reason).is_some() {
                touched += 1;
            }
        }
    }

    for tag in &features.tags {
        if store
            .update(PreferenceCategory::Tag, tag, polarity, reason)
            .is_some()
        {
            touched += 1;
        }
    }

    for organization in features.past_organizations.iter().take(max_past_organizations) {
        if store
            .update(PreferenceCategory::PastOrganization, organization, polarity, reason)
            .is_some()
        {
            touched += 1;
        }
    }

    touched
}
