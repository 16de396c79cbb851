use crate::ranking::candidate::ImportError;
use crate::ranking::preferences::{Polarity, PreferenceCategory, PreferenceError, PreferenceStore};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Named bundle of seed weightings that shapes ranking before any judgment exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Persona {
    pub name: String,
    pub positive_highlights: Vec<String>,
    pub negative_highlights: Vec<String>,
    pub red_flags: Vec<String>,
    pub seeds: Vec<PersonaSeed>,
}

/// Seed for an arbitrary category; the category is validated when the persona is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaSeed {
    pub category: String,
    pub value: String,
    #[serde(default = "default_positive")]
    pub positive: bool,
}

fn default_positive() -> bool {
    true
}

impl Persona {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ImportError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn seed_reason(&self) -> String {
        format!("seed:{}", self.name)
    }

    /// Merges the persona into `store` with judgment semantics.
    ///
    /// Every seed category is checked before anything is written, so an invalid persona
    /// leaves the store untouched. Returns the number of updates applied.
    pub(crate) fn apply(&self, store: &mut PreferenceStore) -> Result<usize, PreferenceError> {
        let seeds = self
            .seeds
            .iter()
            .map(|seed| {
                seed.category
                    .parse::<PreferenceCategory>()
                    .map(|category| (category, seed))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let reason = self.seed_reason();
        let red_flag_reason = format!("seed red flag:{}", self.name);
        let mut applied = 0;

        let highlights = self
            .positive_highlights
            .iter()
            .map(|value| (value, Polarity::Positive, reason.as_str()))
            .chain(
                self.negative_highlights
                    .iter()
                    .map(|value| (value, Polarity::Negative, reason.as_str())),
            )
            .chain(
                self.red_flags
                    .iter()
                    .map(|value| (value, Polarity::Negative, red_flag_reason.as_str())),
            );

        for (value, polarity, why) in highlights {
            if store
                .update(PreferenceCategory::Tag, value, polarity, why)
                .is_some()
            {
                applied += 1;
            }
        }

        for (category, seed) in seeds {
            let polarity = Polarity::from_positive(seed.positive);
            if store.update(category, &seed.value, polarity, &reason).is_some() {
                applied += 1;
            }
        }

        Ok(applied)
    }
}
