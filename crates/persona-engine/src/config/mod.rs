use std::env;
use std::fmt;
use std::str::FromStr;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the ranker.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub engine: EngineConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            engine: EngineConfig::from_env()?,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Tunables for preference accumulation and score fusion.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Weight added to an entry per judgment.
    pub weight_step: f64,
    /// Net weights within `[-noise_threshold, noise_threshold]` are ignored.
    pub noise_threshold: f64,
    pub category_multiplier: f64,
    /// Minimum max-similarity before history moves the score.
    pub similarity_gate: f64,
    pub similarity_multiplier: f64,
    pub base_score: f64,
    pub embedding_dimension: usize,
    pub max_past_organizations: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weight_step: 0.15,
            noise_threshold: 0.1,
            category_multiplier: 20.0,
            similarity_gate: 0.5,
            similarity_multiplier: 15.0,
            base_score: 50.0,
            embedding_dimension: 100,
            max_past_organizations: 3,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            weight_step: env_number("PERSONA_WEIGHT_STEP", defaults.weight_step)?,
            noise_threshold: env_number("PERSONA_NOISE_THRESHOLD", defaults.noise_threshold)?,
            category_multiplier: env_number(
                "PERSONA_CATEGORY_MULTIPLIER",
                defaults.category_multiplier,
            )?,
            similarity_gate: env_number("PERSONA_SIMILARITY_GATE", defaults.similarity_gate)?,
            similarity_multiplier: env_number(
                "PERSONA_SIMILARITY_MULTIPLIER",
                defaults.similarity_multiplier,
            )?,
            base_score: defaults.base_score,
            embedding_dimension: env_number(
                "PERSONA_EMBEDDING_DIMENSION",
                defaults.embedding_dimension,
            )?,
            max_past_organizations: env_number(
                "PERSONA_MAX_PAST_ORGANIZATIONS",
                defaults.max_past_organizations,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Rejects tunables that would break weight accumulation or score fusion.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tunables = [
            ("PERSONA_WEIGHT_STEP", self.weight_step),
            ("PERSONA_NOISE_THRESHOLD", self.noise_threshold),
            ("PERSONA_CATEGORY_MULTIPLIER", self.category_multiplier),
            ("PERSONA_SIMILARITY_GATE", self.similarity_gate),
            ("PERSONA_SIMILARITY_MULTIPLIER", self.similarity_multiplier),
        ];
        if let Some(&(key, _)) = tunables.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NonFinite { key });
        }

        if self.weight_step <= 0.0 {
            return Err(ConfigError::InvalidWeightStep);
        }

        if self.embedding_dimension == 0 {
            return Err(ConfigError::InvalidDimension);
        }

        Ok(())
    }
}

fn env_number<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key }),
        _ => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str },
    NonFinite { key: &'static str },
    InvalidWeightStep,
    InvalidDimension,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key } => write!(f, "{} must be a valid number", key),
            ConfigError::NonFinite { key } => write!(f, "{} must be a finite number", key),
            ConfigError::InvalidWeightStep => {
                write!(f, "PERSONA_WEIGHT_STEP must be greater than zero")
            }
            ConfigError::InvalidDimension => {
                write!(f, "PERSONA_EMBEDDING_DIMENSION must be greater than zero")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
