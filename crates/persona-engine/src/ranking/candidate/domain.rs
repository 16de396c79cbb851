use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Closed set of industries a candidate can be bucketed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    #[serde(rename = "AI/ML")]
    AiMl,
    Fintech,
    Healthcare,
    #[serde(rename = "SaaS")]
    Saas,
    Crypto,
    Tech,
}

impl Industry {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::AiMl,
            Self::Fintech,
            Self::Healthcare,
            Self::Saas,
            Self::Crypto,
            Self::Tech,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AiMl => "AI/ML",
            Self::Fintech => "Fintech",
            Self::Healthcare => "Healthcare",
            Self::Saas => "SaaS",
            Self::Crypto => "Crypto",
            Self::Tech => "Tech",
        }
    }

    /// Resolves an explicit label, accepting the canonical names and a few common aliases.
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "ai/ml" | "ai" | "ml" | "ai & ml" | "artificial intelligence" | "machine learning" => {
                Some(Self::AiMl)
            }
            "fintech" | "financial technology" => Some(Self::Fintech),
            "healthcare" | "health" | "healthtech" => Some(Self::Healthcare),
            "saas" | "software as a service" => Some(Self::Saas),
            "crypto" | "web3" | "blockchain" => Some(Self::Crypto),
            "tech" | "technology" => Some(Self::Tech),
            _ => None,
        }
    }
}

/// Canonical, source-independent view of a candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateFeatures {
    pub id: String,
    pub name: Option<String>,
    pub role: Option<String>,
    pub industry: Option<Industry>,
    pub region: Option<String>,
    pub organization: Option<String>,
    pub tags: Vec<String>,
    pub past_organizations: Vec<String>,
    pub signal_type: Option<String>,
    pub funding_stage: Option<String>,
    pub embedding_text: String,
}

impl CandidateFeatures {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    pub fn has_embedding_text(&self) -> bool {
        !self.embedding_text.trim().is_empty()
    }
}

/// Position held by a person, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    #[serde(alias = "role", deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(
        alias = "company_name",
        alias = "organization",
        deserialize_with = "lenient_text"
    )]
    pub company: Option<String>,
    #[serde(alias = "current", deserialize_with = "lenient_flag")]
    pub is_current: bool,
}

/// Profile-style record for an individual.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonRecord {
    #[serde(deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(alias = "full_name", deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub headline: Option<String>,
    #[serde(alias = "summary", alias = "bio", deserialize_with = "lenient_text")]
    pub about: Option<String>,
    #[serde(alias = "job_title", deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub industry: Option<String>,
    #[serde(alias = "region", deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(alias = "company", deserialize_with = "lenient_text")]
    pub current_company: Option<String>,
    #[serde(alias = "experience", deserialize_with = "lenient_entries")]
    pub experiences: Vec<ExperienceEntry>,
    #[serde(alias = "tags", deserialize_with = "lenient_list")]
    pub highlights: Vec<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub signal_type: Option<String>,
    #[serde(alias = "stage", deserialize_with = "lenient_text")]
    pub funding_stage: Option<String>,
}

/// Organization-level record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyRecord {
    #[serde(deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(alias = "company_name", deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(alias = "headline", deserialize_with = "lenient_text")]
    pub tagline: Option<String>,
    #[serde(alias = "about", deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub industry: Option<String>,
    #[serde(alias = "hq", alias = "region", deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(alias = "highlights", deserialize_with = "lenient_list")]
    pub tags: Vec<String>,
    #[serde(alias = "stage", deserialize_with = "lenient_text")]
    pub funding_stage: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub signal_type: Option<String>,
}

/// Event-style record ("left to start something", "raised a round", ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalRecord {
    #[serde(deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(alias = "role", deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(alias = "organization", deserialize_with = "lenient_text")]
    pub company: Option<String>,
    #[serde(alias = "summary", deserialize_with = "lenient_text")]
    pub headline: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub industry: Option<String>,
    #[serde(alias = "region", deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(alias = "type", deserialize_with = "lenient_text")]
    pub signal_type: Option<String>,
    #[serde(alias = "highlights", deserialize_with = "lenient_list")]
    pub tags: Vec<String>,
    #[serde(alias = "stage", deserialize_with = "lenient_text")]
    pub funding_stage: Option<String>,
}

/// Strings pass through and numbers are stringified; anything else is absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

/// Keeps the string items of a list; a bare string counts as a one-item list.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text),
                _ => None,
            })
            .collect(),
        Value::String(text) => vec![text],
        _ => Vec::new(),
    })
}

/// Keeps the entries that decode; a malformed entry is dropped on its own.
fn lenient_entries<'de, D>(deserializer: D) -> Result<Vec<ExperienceEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(flag) => flag,
        Value::String(text) => {
            matches!(text.trim().to_lowercase().as_str(), "true" | "yes" | "1")
        }
        Value::Number(number) => number.as_i64() == Some(1),
        _ => false,
    })
}
