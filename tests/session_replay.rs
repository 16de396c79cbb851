use persona_engine::ranking::candidate::{CandidateFeatures, Industry};
use persona_engine::PreferenceEngine;
use persona_ranker::session::{ReplaySummary, SessionFile};

fn replayed_engine() -> (PreferenceEngine, ReplaySummary) {
    let data = include_bytes!("fixtures/session.json");
    let session = SessionFile::from_reader(&data[..]).expect("session parses");
    let mut engine = PreferenceEngine::default();
    let summary = session.replay(&mut engine);
    (engine, summary)
}

#[test]
fn replay_feeds_judgments_and_pairs() {
    let (engine, summary) = replayed_engine();

    assert_eq!(
        summary,
        ReplaySummary {
            judgments: 3,
            pairs: 1
        }
    );
    assert_eq!(engine.history().liked().len(), 1);
    assert_eq!(engine.history().disliked().len(), 1);
    assert_eq!(engine.history().reward_history().len(), 3);
    assert_eq!(engine.history().pairs()[0].chosen.id, "c-101");
}

#[test]
fn replayed_preferences_drive_ranking() {
    let (engine, _) = replayed_engine();

    let fintech = CandidateFeatures {
        id: "n-1".into(),
        industry: Some(Industry::Fintech),
        region: Some("London".into()),
        ..Default::default()
    };
    let crypto = CandidateFeatures {
        id: "n-2".into(),
        industry: Some(Industry::Crypto),
        region: Some("Austin".into()),
        ..Default::default()
    };
    let neutral = CandidateFeatures {
        id: "n-3".into(),
        industry: Some(Industry::Saas),
        ..Default::default()
    };

    let ranked = engine.rank(&[crypto, neutral, fintech]);
    let ids: Vec<&str> = ranked.iter().map(|o| o.candidate_id.as_str()).collect();
    assert_eq!(ids, vec!["n-1", "n-3", "n-2"]);
    assert_eq!(ranked[0].score, 56);
    assert_eq!(ranked[1].score, 50);
    assert_eq!(ranked[2].score, 44);
}

#[test]
fn export_after_replay_is_valid_json() {
    let (engine, _) = replayed_engine();
    let json = engine
        .export_training_data()
        .to_json_pretty()
        .expect("export serializes");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["stats"]["total_likes"], 1);
    assert_eq!(value["stats"]["total_dislikes"], 1);
    assert_eq!(value["stats"]["total_pairs"], 1);
    assert_eq!(value["pairs"][0]["reason"], "better metrics");
}
