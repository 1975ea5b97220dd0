//! CLI configuration management.
//!
//! Consolidates all environment variable reads and command-line overrides
//! into a validated configuration.

use shuttle_bracket::{
    pairing::PairingStrategy,
    tournament::{TournamentConfig, TournamentType},
};
use std::{fmt::Display, str::FromStr};

/// Values given on the command line; each wins over its environment variable
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub name: Option<String>,
    pub tournament_type: Option<TournamentType>,
    pub sets: Option<u8>,
    pub points_per_set: Option<u32>,
    pub strategy: Option<PairingStrategy>,
    pub seed: Option<u64>,
}

/// Complete CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Tournament rules
    pub tournament: TournamentConfig,
    /// Pairing strategy for the roster
    pub strategy: PairingStrategy,
    /// Seed for random pairing; `None` draws from the OS
    pub seed: Option<u64>,
}

impl CliConfig {
    /// Load configuration from environment variables, then apply overrides
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed
    pub fn from_env(overrides: Overrides) -> Result<Self, ConfigError> {
        let defaults = TournamentConfig::default();

        let tournament = TournamentConfig {
            name: overrides
                .name
                .or_else(|| std::env::var("SB_TOURNAMENT_NAME").ok())
                .unwrap_or(defaults.name),
            tournament_type: resolve(
                overrides.tournament_type,
                "SB_TOURNAMENT_TYPE",
                defaults.tournament_type,
            )?,
            sets: resolve(overrides.sets, "SB_SETS", defaults.sets)?,
            points_per_set: resolve(
                overrides.points_per_set,
                "SB_POINTS_PER_SET",
                defaults.points_per_set,
            )?,
        };

        let strategy = resolve(overrides.strategy, "SB_PAIRING", PairingStrategy::Fair)?;

        let seed = match overrides.seed {
            Some(seed) => Some(seed),
            None => match std::env::var("SB_SEED") {
                Ok(raw) => Some(parse_var("SB_SEED", &raw)?),
                Err(_) => None,
            },
        };

        Ok(CliConfig {
            tournament,
            strategy,
            seed,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tournament
            .validate()
            .map_err(|reason| ConfigError::Invalid {
                var: "tournament".to_string(),
                reason,
            })
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Override, else environment variable, else default
fn resolve<T>(override_value: Option<T>, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    if let Some(value) = override_value {
        return Ok(value);
    }

    match std::env::var(key) {
        Ok(raw) => parse_var(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var: key.to_string(),
        reason: e.to_string(),
    })
}
