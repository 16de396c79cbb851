use persona_engine::ranking::candidate::{normalize_features, CandidateImporter, Industry};
use persona_engine::RawCandidate;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn csv_contacts_import_as_people() {
    let candidates =
        CandidateImporter::from_path(fixture("contacts.csv")).expect("contacts import");
    assert_eq!(candidates.len(), 4);
    assert!(candidates
        .iter()
        .all(|candidate| matches!(candidate, RawCandidate::Person(_))));

    let priya = normalize_features(&candidates[0], "unused");
    assert_eq!(priya.id, "c-101");
    assert_eq!(priya.role.as_deref(), Some("CEO"));
    assert_eq!(priya.organization.as_deref(), Some("Ledgerly"));
    assert_eq!(priya.industry, Some(Industry::Fintech));
    assert_eq!(priya.tags, vec!["payments", "repeat founder"]);
    assert_eq!(priya.past_organizations, vec!["Stripe", "Monzo"]);

    let tomas = normalize_features(&candidates[1], "unused");
    assert_eq!(tomas.industry, Some(Industry::AiMl));

    let jordan = normalize_features(&candidates[2], "unused");
    assert_eq!(jordan.id, "row-3");
    assert_eq!(jordan.role.as_deref(), Some("Angel investor"));
    assert_eq!(jordan.industry, Some(Industry::Crypto));
}

#[test]
fn json_export_mixes_record_shapes() {
    let candidates =
        CandidateImporter::from_path(fixture("candidates.json")).expect("json import");
    assert_eq!(candidates.len(), 4);
    assert!(matches!(candidates[0], RawCandidate::Person(_)));
    assert!(matches!(candidates[1], RawCandidate::Company(_)));
    assert!(matches!(candidates[2], RawCandidate::Signal(_)));

    let company = normalize_features(&candidates[1], "unused");
    assert_eq!(company.id, "2");
    assert_eq!(company.funding_stage.as_deref(), Some("Series A"));

    let signal = normalize_features(&candidates[2], "signal-fallback");
    assert_eq!(signal.id, "signal-fallback");
    assert_eq!(signal.signal_type.as_deref(), Some("stealth_founder"));

    let salvaged = normalize_features(&candidates[3], "unused");
    assert_eq!(salvaged.id, "broken-1");
    assert_eq!(salvaged.name.as_deref(), Some("Sam Quinn"));
    assert!(salvaged.past_organizations.is_empty());
}

#[test]
fn malformed_json_surfaces_an_import_error() {
    let result = CandidateImporter::from_json_reader("{ not json".as_bytes());
    assert!(result.is_err());
}
