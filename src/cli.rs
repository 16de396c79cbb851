use crate::demo::{run_demo, run_export, run_score, DemoArgs, ExportArgs, ScoreArgs};
use clap::{Parser, Subcommand};
use persona_engine::config::AppConfig;
use persona_engine::error::AppError;
use persona_engine::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Persona Ranker",
    about = "Score and rank candidates against learned operator preferences",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank a candidate export, optionally after replaying a session and seeding a persona
    Score(ScoreArgs),
    /// Replay a session and write its training export as JSON
    Export(ExportArgs),
    /// Run the built-in walkthrough (default command)
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "persona ranker starting");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Score(args) => run_score(&config, args),
        Command::Export(args) => run_export(&config, args),
        Command::Demo(args) => run_demo(&config, args),
    }
}
