use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Feature dimension a preference entry is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreferenceCategory {
    Industry,
    Role,
    Region,
    Organization,
    SignalType,
    Tag,
    PastOrganization,
}

impl PreferenceCategory {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Industry,
            Self::Role,
            Self::Region,
            Self::Organization,
            Self::SignalType,
            Self::Tag,
            Self::PastOrganization,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Industry => "industry",
            Self::Role => "role",
            Self::Region => "region",
            Self::Organization => "organization",
            Self::SignalType => "signal-type",
            Self::Tag => "tag",
            Self::PastOrganization => "past-organization",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Industry => "industry",
            Self::Role => "role",
            Self::Region => "region",
            Self::Organization => "company",
            Self::SignalType => "signal",
            Self::Tag => "highlight",
            Self::PastOrganization => "past company",
        }
    }
}

impl fmt::Display for PreferenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferenceCategory {
    type Err = PreferenceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "industry" => Ok(Self::Industry),
            "role" | "seniority" | "title" => Ok(Self::Role),
            "region" | "location" => Ok(Self::Region),
            "organization" | "company" => Ok(Self::Organization),
            "signal-type" | "signaltype" | "signal" => Ok(Self::SignalType),
            "tag" | "highlight" => Ok(Self::Tag),
            "past-organization" | "pastorganization" | "past-company" => {
                Ok(Self::PastOrganization)
            }
            _ => Err(PreferenceError::UnknownCategory(value.to_string())),
        }
    }
}

/// Direction of a judgment or seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub const fn from_positive(is_positive: bool) -> Self {
        if is_positive {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// Accumulated evidence for one (category, value) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceEntry {
    pub category: PreferenceCategory,
    pub value: String,
    pub positive_weight: f64,
    pub negative_weight: f64,
    pub positive_reasons: Vec<String>,
    pub negative_reasons: Vec<String>,
}

impl PreferenceEntry {
    pub(crate) fn new(category: PreferenceCategory, value: String) -> Self {
        Self {
            category,
            value,
            positive_weight: 0.0,
            negative_weight: 0.0,
            positive_reasons: Vec::new(),
            negative_reasons: Vec::new(),
        }
    }

    pub fn net_weight(&self) -> f64 {
        self.positive_weight - self.negative_weight
    }

    pub(crate) fn key_matches(&self, category: PreferenceCategory, lowered_value: &str) -> bool {
        self.category == category && self.value.to_lowercase() == lowered_value
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("unknown preference category '{0}'")]
    UnknownCategory(String),
}
