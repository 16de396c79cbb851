use persona_engine::config::EngineConfig;
use persona_engine::ranking::candidate::CandidateImporter;
use persona_engine::ranking::PersonaSeed;
use persona_engine::{FeedbackKind, Persona, PreferenceEngine};

fn contacts() -> Vec<persona_engine::CandidateFeatures> {
    let data = include_bytes!("fixtures/contacts.csv");
    let engine = PreferenceEngine::default();
    CandidateImporter::from_csv_reader(&data[..])
        .expect("contacts import")
        .iter()
        .enumerate()
        .map(|(index, raw)| engine.normalize(raw, &format!("row-{}", index + 1)))
        .collect()
}

#[test]
fn operator_session_reorders_the_pipeline() {
    let candidates = contacts();
    let mut engine = PreferenceEngine::new(EngineConfig::default());

    let untrained = engine.rank(&candidates);
    assert!(untrained.iter().all(|outcome| outcome.score == 50));

    engine.record_features(candidates[0].clone(), FeedbackKind::Like, "payments traction");
    engine.record_features(candidates[2].clone(), FeedbackKind::Dislike, "crypto exposure");
    engine.record_features(candidates[3].clone(), FeedbackKind::Skip, "");

    let ranked = engine.rank(&candidates);
    assert_eq!(ranked[0].candidate_id, "c-101");
    assert_eq!(ranked.last().map(|o| o.candidate_id.as_str()), Some("row-3"));
    assert!(ranked[0]
        .reasons
        .iter()
        .any(|reason| reason == "Preferred industry: Fintech (+3.0)"));
    assert!(ranked
        .last()
        .map(|outcome| !outcome.warnings.is_empty())
        .unwrap_or(false));

    let export = engine.export_training_data();
    assert_eq!(export.stats.total_likes, 1);
    assert_eq!(export.stats.total_dislikes, 1);
    assert_eq!(export.reward_history.len(), 3);
    assert!((export.stats.total_reward + 0.2).abs() < 1e-9);
}

#[test]
fn persona_switch_changes_ranking_without_new_judgments() {
    let candidates = contacts();
    let mut engine = PreferenceEngine::default();

    let health = Persona {
        name: "health".into(),
        seeds: vec![PersonaSeed {
            category: "industry".into(),
            value: "AI/ML".into(),
            positive: true,
        }],
        ..Default::default()
    };
    let payments = Persona {
        name: "payments".into(),
        positive_highlights: vec!["payments".into()],
        ..Default::default()
    };

    engine.switch_persona(&health).expect("persona applies");
    assert_eq!(engine.rank(&candidates)[0].candidate_id, "c-102");

    engine.switch_persona(&payments).expect("persona applies");
    assert_eq!(engine.rank(&candidates)[0].candidate_id, "c-101");
    assert_eq!(engine.preferences().len(), 1);
}
