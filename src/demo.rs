use crate::session::SessionFile;
use clap::Args;
use persona_engine::config::AppConfig;
use persona_engine::error::AppError;
use persona_engine::ranking::candidate::{CandidateImporter, PersonRecord};
use persona_engine::ranking::PersonaSeed;
use persona_engine::{
    CandidateFeatures, FeedbackKind, Persona, PreferenceEngine, RawCandidate, ScoreOutcome,
};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Candidate export to rank (.csv contact export or JSON array)
    #[arg(long)]
    pub(crate) candidates: PathBuf,
    /// Session file whose judgments and pairs are replayed before scoring
    #[arg(long)]
    pub(crate) session: Option<PathBuf>,
    /// Persona file used to seed preferences after the replay
    #[arg(long)]
    pub(crate) persona: Option<PathBuf>,
    /// Only print the top N candidates
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Emit score outcomes as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// Session file to replay
    #[arg(long)]
    pub(crate) session: PathBuf,
    /// Write the export here instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print every score component, not just reasons and warnings
    #[arg(long)]
    pub(crate) show_components: bool,
}

pub(crate) fn run_score(config: &AppConfig, args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        candidates,
        session,
        persona,
        limit,
        json,
    } = args;

    let mut engine = PreferenceEngine::new(config.engine.clone());
    if let Some(path) = session {
        SessionFile::from_path(path)?.replay(&mut engine);
    }
    if let Some(path) = persona {
        let persona = Persona::from_path(path)?;
        engine.apply_persona(&persona)?;
    }

    let features = normalize_rows(&engine, &CandidateImporter::from_path(&candidates)?);

    let mut ranked = engine.rank(&features);
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        println!(
            "Ranked {} candidates from {}",
            features.len(),
            candidates.display()
        );
        render_ranking(&features, &ranked, false);
    }

    Ok(())
}

pub(crate) fn run_export(config: &AppConfig, args: ExportArgs) -> Result<(), AppError> {
    let mut engine = PreferenceEngine::new(config.engine.clone());
    let summary = SessionFile::from_path(&args.session)?.replay(&mut engine);
    let export = engine.export_training_data().to_json_pretty()?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, export)?;
            println!(
                "Exported {} judgments and {} pairs to {}",
                summary.judgments,
                summary.pairs,
                path.display()
            );
        }
        None => println!("{export}"),
    }

    Ok(())
}

pub(crate) fn run_demo(config: &AppConfig, args: DemoArgs) -> Result<(), AppError> {
    let mut engine = PreferenceEngine::new(config.engine.clone());
    let pipeline = demo_pipeline();
    let features: Vec<CandidateFeatures> = pipeline
        .iter()
        .map(|raw| engine.normalize(raw, "demo"))
        .collect();

    println!("Persona ranker demo");
    println!("\nCold start (no judgments yet)");
    render_ranking(&features, &engine.rank(&features), args.show_components);

    engine.record_like(&pipeline[0], "payments infrastructure with real traction");
    engine.record_dislike(&pipeline[2], "token-first business model");
    engine.record_feedback(&pipeline[4], FeedbackKind::Skip, "revisit next quarter");
    engine.record_preference_pair(&pipeline[0], &pipeline[1], "stronger revenue metrics");

    println!("\nAfter one like, one dislike and one skip");
    render_ranking(&features, &engine.rank(&features), args.show_components);

    let persona = Persona {
        name: "health-operator".to_string(),
        positive_highlights: vec!["operator".to_string()],
        negative_highlights: Vec::new(),
        red_flags: vec!["crypto".to_string()],
        seeds: vec![PersonaSeed {
            category: "industry".to_string(),
            value: "Healthcare".to_string(),
            positive: true,
        }],
    };
    engine.switch_persona(&persona)?;

    println!("\nAfter switching to persona '{}'", persona.name);
    render_ranking(&features, &engine.rank(&features), args.show_components);

    let export = engine.export_training_data();
    println!(
        "\nTraining export: {} pairs | {} reward events | total reward {:+.1} | {} learned preferences",
        export.stats.total_pairs,
        export.reward_history.len(),
        export.stats.total_reward,
        export.stats.total_preferences
    );

    Ok(())
}

/// Id-less rows become `row-N` so they never collide with the engine's `candidate-NNNNNN` ids.
pub(crate) fn normalize_rows(
    engine: &PreferenceEngine,
    rows: &[RawCandidate],
) -> Vec<CandidateFeatures> {
    rows.iter()
        .enumerate()
        .map(|(index, raw)| engine.normalize(raw, &format!("row-{}", index + 1)))
        .collect()
}

fn render_ranking(features: &[CandidateFeatures], ranked: &[ScoreOutcome], components: bool) {
    let names: HashMap<&str, &str> = features
        .iter()
        .map(|candidate| (candidate.id.as_str(), candidate.display_name()))
        .collect();

    for (position, outcome) in ranked.iter().enumerate() {
        let name = names
            .get(outcome.candidate_id.as_str())
            .copied()
            .unwrap_or(outcome.candidate_id.as_str());
        println!("{:>3}. [{:>3}] {}", position + 1, outcome.score, name);
        for reason in &outcome.reasons {
            println!("       + {reason}");
        }
        for warning in &outcome.warnings {
            println!("       - {warning}");
        }
        if components {
            for component in &outcome.components {
                println!("       · {:?} {:+.2}", component.kind, component.delta);
            }
        }
    }
}

fn demo_person(id: &str, name: &str, headline: &str, about: &str, tags: &[&str]) -> RawCandidate {
    RawCandidate::Person(PersonRecord {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        headline: Some(headline.to_string()),
        about: Some(about.to_string()),
        highlights: tags.iter().map(|tag| tag.to_string()).collect(),
        ..Default::default()
    })
}

fn demo_pipeline() -> Vec<RawCandidate> {
    vec![
        demo_person(
            "demo-1",
            "Priya Natarajan",
            "CEO at Ledgerly",
            "Payments infrastructure for credit unions",
            &["repeat founder"],
        ),
        demo_person(
            "demo-2",
            "Dmitri Volkov",
            "Founder @ Lendwise",
            "Lending analytics for community banks",
            &["first-time founder"],
        ),
        demo_person(
            "demo-3",
            "Jordan Ellis",
            "Founder | Tokenvault",
            "Crypto custody and blockchain settlement",
            &["crypto"],
        ),
        demo_person(
            "demo-4",
            "Morgan Hale",
            "COO at Clinicly",
            "Scaling outpatient clinic networks for patient access",
            &["operator"],
        ),
        demo_person(
            "demo-5",
            "Alexis Moreau",
            "Head of Product - Cloudform",
            "Enterprise software for subscription billing",
            &[],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unnamed(headline: &str) -> RawCandidate {
        RawCandidate::Person(PersonRecord {
            headline: Some(headline.to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn id_less_rows_do_not_collide_with_feedback_ids() {
        let mut engine = PreferenceEngine::default();
        let rows = vec![
            unnamed("CTO at Ledgerly"),
            demo_person("demo-9", "Sam Ortiz", "Founder @ Tidewater", "", &[]),
            unnamed("COO at Clinicly"),
        ];

        engine.record_like(&unnamed("Founder at Harborline"), "strong operator");
        let liked = &engine.history().liked()[0].candidate_id;
        assert_eq!(liked, "candidate-000001");

        let ids: Vec<String> = normalize_rows(&engine, &rows)
            .into_iter()
            .map(|features| features.id)
            .collect();
        assert_eq!(ids, vec!["row-1", "demo-9", "row-3"]);
        assert!(!ids.contains(liked));
    }
}
