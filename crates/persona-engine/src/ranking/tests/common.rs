use crate::config::EngineConfig;
use crate::ranking::candidate::{CandidateFeatures, Industry, PersonRecord, RawCandidate};
use crate::ranking::persona::{Persona, PersonaSeed};
use crate::ranking::PreferenceEngine;

pub(super) fn engine() -> PreferenceEngine {
    PreferenceEngine::new(EngineConfig::default())
}

pub(super) fn fintech_founder(id: &str, name: &str) -> CandidateFeatures {
    CandidateFeatures {
        id: id.to_string(),
        name: Some(name.to_string()),
        role: Some("Founder".to_string()),
        industry: Some(Industry::Fintech),
        region: Some("London".to_string()),
        organization: Some(format!("{name} Labs")),
        embedding_text: format!("{name} founder building lending rails for credit unions"),
        ..Default::default()
    }
}

pub(super) fn healthcare_operator(id: &str) -> CandidateFeatures {
    CandidateFeatures {
        id: id.to_string(),
        name: Some("Morgan Hale".to_string()),
        role: Some("VP Operations".to_string()),
        industry: Some(Industry::Healthcare),
        region: Some("Boston".to_string()),
        organization: Some("Clinicly".to_string()),
        tags: vec!["operator".to_string()],
        embedding_text: "Morgan Hale scaling outpatient clinic networks across hospitals"
            .to_string(),
        ..Default::default()
    }
}

/// Features that only carry text, so a judgment on them leaves the preference store empty.
pub(super) fn text_only(id: &str, text: &str) -> CandidateFeatures {
    CandidateFeatures {
        id: id.to_string(),
        embedding_text: text.to_string(),
        ..Default::default()
    }
}

pub(super) fn raw_person(id: &str, name: &str, headline: &str, industry: &str) -> RawCandidate {
    RawCandidate::Person(PersonRecord {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        headline: Some(headline.to_string()),
        industry: Some(industry.to_string()),
        location: Some("Berlin".to_string()),
        ..Default::default()
    })
}

pub(super) fn payments_persona() -> Persona {
    Persona {
        name: "payments".to_string(),
        positive_highlights: vec!["payments".to_string()],
        negative_highlights: Vec::new(),
        red_flags: vec!["crypto".to_string()],
        seeds: vec![PersonaSeed {
            category: "industry".to_string(),
            value: "Fintech".to_string(),
            positive: true,
        }],
    }
}
