mod domain;
mod industry;
mod normalizer;
mod parser;

pub use domain::{
    CandidateFeatures, CompanyRecord, ExperienceEntry, Industry, PersonRecord, SignalRecord,
};
pub use parser::{CandidateImporter, ImportError};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Past organizations kept per candidate unless configured otherwise.
pub const DEFAULT_MAX_PAST_ORGANIZATIONS: usize = 3;

/// Raw candidate as supplied by a candidate source, one variant per known shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RawCandidate {
    Person(PersonRecord),
    Company(CompanyRecord),
    Signal(SignalRecord),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordShape {
    Person,
    Company,
    Signal,
}

impl RawCandidate {
    /// Decodes a loosely-typed record. Never fails: a null or mistyped field decodes as
    /// absent on its own, and a record that cannot be read as an object at all degrades to a
    /// person carrying whatever id and name could be recovered.
    pub fn from_value(value: Value) -> Self {
        let shape = detect_shape(&value);
        let decoded = match shape {
            RecordShape::Person => serde_json::from_value(value.clone()).map(Self::Person),
            RecordShape::Company => serde_json::from_value(value.clone()).map(Self::Company),
            RecordShape::Signal => serde_json::from_value(value.clone()).map(Self::Signal),
        };

        match decoded {
            Ok(candidate) => candidate,
            Err(err) => {
                warn!(?shape, error = %err, "candidate record failed typed decoding; salvaging");
                Self::Person(salvage_person(&value))
            }
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Person(record) => record.id.as_deref(),
            Self::Company(record) => record.id.as_deref(),
            Self::Signal(record) => record.id.as_deref(),
        }
    }
}

fn detect_shape(value: &Value) -> RecordShape {
    if let Some(kind) = value.get("kind").and_then(Value::as_str) {
        match kind.trim().to_ascii_lowercase().as_str() {
            "company" | "organization" => return RecordShape::Company,
            "signal" => return RecordShape::Signal,
            "person" => return RecordShape::Person,
            _ => {}
        }
    }

    let has = |key: &str| value.get(key).map(|v| !v.is_null()).unwrap_or(false);
    let has_experience = has("experiences") || has("experience");

    if (has("signal_type") || has("type")) && !has_experience {
        RecordShape::Signal
    } else if (has("funding_stage") || has("description") || has("company_name"))
        && !has("headline")
        && !has_experience
    {
        RecordShape::Company
    } else {
        RecordShape::Person
    }
}

fn salvage_person(value: &Value) -> PersonRecord {
    let text = |keys: &[&str]| {
        keys.iter().find_map(|key| match value.get(*key) {
            Some(Value::String(text)) => Some(text.clone()),
            Some(Value::Number(number)) if *key == "id" => Some(number.to_string()),
            _ => None,
        })
    };

    PersonRecord {
        id: text(&["id"]),
        name: text(&["name", "full_name", "company_name"]),
        ..Default::default()
    }
}

/// Maps raw records into [`CandidateFeatures`].
#[derive(Debug, Clone, Copy)]
pub struct FeatureNormalizer {
    max_past_organizations: usize,
}

impl Default for FeatureNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PAST_ORGANIZATIONS)
    }
}

impl FeatureNormalizer {
    pub fn new(max_past_organizations: usize) -> Self {
        Self {
            max_past_organizations,
        }
    }

    /// `fallback_id` is used when the record carries no identifier of its own.
    pub fn normalize(&self, raw: &RawCandidate, fallback_id: &str) -> CandidateFeatures {
        match raw {
            RawCandidate::Person(record) => {
                normalizer::normalize_person(record, fallback_id, self.max_past_organizations)
            }
            RawCandidate::Company(record) => normalizer::normalize_company(record, fallback_id),
            RawCandidate::Signal(record) => normalizer::normalize_signal(record, fallback_id),
        }
    }
}

pub fn normalize_features(raw: &RawCandidate, fallback_id: &str) -> CandidateFeatures {
    FeatureNormalizer::default().normalize(raw, fallback_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn founder() -> RawCandidate {
        RawCandidate::from_value(json!({
            "id": "p-100",
            "full_name": "Dana Reyes",
            "headline": "CTO at Ledgerly | ex-Stripe",
            "about": "Building payments infrastructure for small banks.",
            "location": "New York",
            "experiences": [
                {"title": "CTO", "company": "Ledgerly", "is_current": true},
                {"title": "Staff Engineer", "company": "Stripe"},
                {"title": "Engineer", "company": "Square"},
                {"title": "Intern", "company": "Goldman Sachs"},
                {"title": "Intern", "company": "IBM"}
            ],
            "highlights": ["serial founder", "technical"]
        }))
    }

    #[test]
    fn person_record_maps_to_canonical_features() {
        let features = normalize_features(&founder(), "fallback");

        assert_eq!(features.id, "p-100");
        assert_eq!(features.name.as_deref(), Some("Dana Reyes"));
        assert_eq!(features.role.as_deref(), Some("CTO"));
        assert_eq!(features.organization.as_deref(), Some("Ledgerly"));
        assert_eq!(features.region.as_deref(), Some("New York"));
        assert_eq!(features.industry, Some(Industry::Fintech));
        assert_eq!(
            features.past_organizations,
            vec!["Stripe", "Square", "Goldman Sachs"]
        );
        assert_eq!(
            features.embedding_text,
            "Dana Reyes CTO at Ledgerly | ex-Stripe Building payments infrastructure for small banks. \
serial founder technical CTO at Ledgerly Staff Engineer at Stripe Engineer at Square \
Intern at Goldman Sachs Intern at IBM"
        );
    }

    #[test]
    fn role_falls_back_to_headline_prefix() {
        let raw = RawCandidate::Person(PersonRecord {
            headline: Some("Founder @ Stealth".into()),
            ..Default::default()
        });
        let features = normalize_features(&raw, "row-1");
        assert_eq!(features.id, "row-1");
        assert_eq!(features.role.as_deref(), Some("Founder"));
        assert_eq!(features.organization, None);
    }

    #[test]
    fn empty_record_degrades_to_absent_features() {
        let features = normalize_features(&RawCandidate::from_value(json!({})), "c-9");
        assert_eq!(features.id, "c-9");
        assert_eq!(features.industry, None);
        assert!(features.tags.is_empty());
        assert!(!features.has_embedding_text());
    }

    #[test]
    fn company_and_signal_shapes_are_detected() {
        let company = RawCandidate::from_value(json!({
            "company_name": "Mediscan",
            "description": "Clinical imaging with deep learning",
            "funding_stage": "Seed"
        }));
        let features = normalize_features(&company, "co-1");
        assert!(matches!(company, RawCandidate::Company(_)));
        assert_eq!(features.organization.as_deref(), Some("Mediscan"));
        assert_eq!(features.industry, Some(Industry::AiMl));
        assert_eq!(features.funding_stage.as_deref(), Some("Seed"));
        assert_eq!(features.role, None);

        let signal = RawCandidate::from_value(json!({
            "name": "Lee Park",
            "type": "stealth_founder",
            "title": "Co-founder",
            "company": "Stealth",
            "tags": ["repeat founder"]
        }));
        let features = normalize_features(&signal, "s-1");
        assert!(matches!(signal, RawCandidate::Signal(_)));
        assert_eq!(features.signal_type.as_deref(), Some("stealth_founder"));
        assert_eq!(features.role.as_deref(), Some("Co-founder"));
        assert_eq!(
            features.embedding_text,
            "Lee Park repeat founder Co-founder at Stealth"
        );
    }

    #[test]
    fn mistyped_fields_degrade_individually() {
        let raw = RawCandidate::from_value(json!({
            "id": 12,
            "name": "Ari",
            "experiences": "not-a-list"
        }));
        let features = normalize_features(&raw, "fallback");
        assert_eq!(features.id, "12");
        assert_eq!(features.name.as_deref(), Some("Ari"));
        assert!(features.past_organizations.is_empty());
    }

    #[test]
    fn null_list_keeps_the_rest_of_the_record() {
        let raw = RawCandidate::from_value(json!({
            "id": "p-1",
            "name": "Dana",
            "headline": "CTO at Ledgerly",
            "location": "New York",
            "about": "payments infra",
            "highlights": null
        }));
        let features = normalize_features(&raw, "fallback");

        assert_eq!(features.id, "p-1");
        assert_eq!(features.role.as_deref(), Some("CTO"));
        assert_eq!(features.region.as_deref(), Some("New York"));
        assert_eq!(features.industry, Some(Industry::Fintech));
        assert!(features.tags.is_empty());
        assert_eq!(features.embedding_text, "Dana CTO at Ledgerly payments infra");
    }

    #[test]
    fn malformed_entries_are_dropped_one_at_a_time() {
        let raw = RawCandidate::from_value(json!({
            "id": "p-2",
            "headline": 42,
            "location": {"city": "Austin"},
            "highlights": ["operator", 7, null, "technical"],
            "experiences": [
                {"title": "COO", "company": "Clinicly", "is_current": "yes"},
                "not-an-entry",
                {"title": "Director", "company": "Kaiser", "is_current": null}
            ]
        }));
        let features = normalize_features(&raw, "fallback");

        assert_eq!(features.role.as_deref(), Some("COO"));
        assert_eq!(features.organization.as_deref(), Some("Clinicly"));
        assert_eq!(features.region, None);
        assert_eq!(features.tags, vec!["operator", "technical"]);
        assert_eq!(features.past_organizations, vec!["Kaiser"]);
    }

    #[test]
    fn non_object_records_fall_back_to_an_empty_person() {
        let raw = RawCandidate::from_value(json!("Dana Reyes, CTO"));
        let features = normalize_features(&raw, "c-7");
        assert!(matches!(raw, RawCandidate::Person(_)));
        assert_eq!(features.id, "c-7");
        assert!(!features.has_embedding_text());
    }

    #[test]
    fn explicit_kind_tag_wins_over_shape() {
        let raw = RawCandidate::from_value(json!({
            "kind": "person",
            "name": "Kim",
            "signal_type": "new_role"
        }));
        assert!(matches!(raw, RawCandidate::Person(_)));
    }
}
