use super::common::*;
use crate::ranking::candidate::{CandidateFeatures, Industry};
use crate::ranking::persona::{Persona, PersonaSeed};
use crate::ranking::preferences::PreferenceError;
use crate::ranking::FeedbackKind;

fn tagged(id: &str, industry: Industry, tag: &str) -> CandidateFeatures {
    CandidateFeatures {
        id: id.into(),
        industry: Some(industry),
        tags: vec![tag.into()],
        ..Default::default()
    }
}

#[test]
fn persona_seeds_rank_before_any_judgment() {
    let mut engine = engine();
    let applied = engine
        .apply_persona(&payments_persona())
        .expect("persona applies");

    assert_eq!(applied, 3);
    assert_eq!(engine.persona(), Some("payments"));
    assert_eq!(engine.score(&tagged("p-1", Industry::Fintech, "payments")).score, 56);
    assert_eq!(engine.score(&tagged("c-1", Industry::Crypto, "crypto")).score, 47);
}

#[test]
fn switching_persona_discards_previous_learning() {
    let mut engine = engine();
    let founder = fintech_founder("f-1", "Avery");
    engine.record_features(healthcare_operator("h-1"), FeedbackKind::Like, "");
    engine.record_features(founder.clone(), FeedbackKind::Dislike, "");

    engine
        .switch_persona(&payments_persona())
        .expect("persona applies");

    assert!(engine.history().liked().is_empty());
    assert!(engine.history().disliked().is_empty());
    assert_eq!(engine.history().reward_history().len(), 2);
    assert_eq!(engine.score(&healthcare_operator("h-2")).score, 50);
    assert_eq!(engine.score(&founder).score, 53);
}

#[test]
fn invalid_persona_does_not_reset_state() {
    let mut engine = engine();
    engine.apply_persona(&payments_persona()).expect("persona applies");
    engine.record_features(fintech_founder("f-1", "Avery"), FeedbackKind::Like, "");
    let preferences_before = engine.preferences().len();

    let broken = Persona {
        name: "broken".into(),
        seeds: vec![PersonaSeed {
            category: "zodiac".into(),
            value: "leo".into(),
            positive: true,
        }],
        ..Default::default()
    };

    let error = engine.switch_persona(&broken).expect_err("unknown category");
    assert!(matches!(error, PreferenceError::UnknownCategory(_)));
    assert_eq!(engine.preferences().len(), preferences_before);
    assert_eq!(engine.history().liked().len(), 1);
    assert_eq!(engine.persona(), Some("payments"));
}
