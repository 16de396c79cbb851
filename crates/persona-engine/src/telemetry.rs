use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    EnvFilter { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { value, .. } => {
                write!(f, "invalid log level/filter '{}'", value)
            }
            TelemetryError::Subscriber(err) => write!(f, "subscriber already installed: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// Crates whose events follow the configured level; everything else is held at `warn`.
const LOG_TARGETS: [&str; 2] = ["persona_engine", "persona_ranker"];

/// Filter directives for a configured level, e.g. `warn,persona_engine=debug,persona_ranker=debug`.
fn directives(level: &str) -> String {
    let level = level.trim();
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }

    std::iter::once("warn".to_string())
        .chain(LOG_TARGETS.iter().map(|target| format!("{target}={level}")))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let value = directives(&config.log_level);
            EnvFilter::try_new(&value)
                .map_err(|source| TelemetryError::EnvFilter { value, source })?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)?;

    tracing::debug!(targets = ?LOG_TARGETS, level = %config.log_level, "ranking telemetry ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_scopes_to_ranking_crates() {
        assert_eq!(
            directives(" debug "),
            "warn,persona_engine=debug,persona_ranker=debug"
        );
        assert!(EnvFilter::try_new(directives("info")).is_ok());
    }

    #[test]
    fn explicit_directives_pass_through() {
        assert_eq!(
            directives("persona_engine::ranking=trace"),
            "persona_engine::ranking=trace"
        );
    }

    #[test]
    fn invalid_level_surfaces_the_offending_value() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let error = init(&TelemetryConfig {
            log_level: "persona_engine=loud".to_string(),
        });
        match error {
            Err(TelemetryError::EnvFilter { value, .. }) => {
                assert_eq!(value, "persona_engine=loud")
            }
            other => panic!("expected filter error, got {other:?}"),
        }
    }
}
