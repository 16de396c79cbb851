use super::domain::{Polarity, PreferenceCategory, PreferenceEntry, PreferenceError};
use tracing::debug;

/// Update-only collection of weighted preferences, unique per (category, lowercase value).
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    entries: Vec<PreferenceEntry>,
    step: f64,
}

impl PreferenceStore {
    pub fn new(step: f64) -> Self {
        Self {
            entries: Vec::new(),
            step,
        }
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn entries(&self) -> &[PreferenceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, category: PreferenceCategory, value: &str) -> Option<&PreferenceEntry> {
        let lowered = value.trim().to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.key_matches(category, &lowered))
    }

    /// Adds one step of weight for `polarity`, creating the entry on first sight.
    ///
    /// Blank values are ignored. A reason is recorded once per polarity.
    pub fn update(
        &mut self,
        category: PreferenceCategory,
        value: &str,
        polarity: Polarity,
        reason: &str,
    ) -> Option<&PreferenceEntry> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        let lowered = value.to_lowercase();
        let position = match self
            .entries
            .iter()
            .position(|entry| entry.key_matches(category, &lowered))
        {
            Some(position) => position,
            None => {
                self.entries
                    .push(PreferenceEntry::new(category, value.to_string()));
                self.entries.len() - 1
            }
        };

        let step = self.step;
        let entry = &mut self.entries[position];
        let (weight, reasons) = match polarity {
            Polarity::Positive => (&mut entry.positive_weight, &mut entry.positive_reasons),
            Polarity::Negative => (&mut entry.negative_weight, &mut entry.negative_reasons),
        };
        *weight += step;

        let reason = reason.trim();
        if !reason.is_empty() && !reasons.iter().any(|existing| existing == reason) {
            reasons.push(reason.to_string());
        }

        debug!(
            category = %category,
            value = %entry.value,
            ?polarity,
            net_weight = entry.net_weight(),
            "preference updated"
        );

        Some(&self.entries[position])
    }

    /// Same as [`update`](Self::update) for a category that arrives as text.
    pub fn update_named(
        &mut self,
        category: &str,
        value: &str,
        polarity: Polarity,
        reason: &str,
    ) -> Result<Option<&PreferenceEntry>, PreferenceError> {
        let category: PreferenceCategory = category.parse()?;
        Ok(self.update(category, value, polarity, reason))
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }
}
