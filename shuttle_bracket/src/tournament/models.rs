//! Tournament configuration and lifecycle models.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Fewest sets a match may be played over
pub const MIN_SETS: u8 = 1;

/// Most sets a match may be played over
pub const MAX_SETS: u8 = 5;

/// Accepted points-per-set targets
pub const POINTS_PER_SET_OPTIONS: [u32; 4] = [11, 15, 21, 30];

/// Tournament category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentType {
    MensSingles,
    WomensSingles,
    MensDoubles,
    WomensDoubles,
    #[default]
    MixedDoubles,
}

impl fmt::Display for TournamentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TournamentType::MensSingles => write!(f, "Men's Singles"),
            TournamentType::WomensSingles => write!(f, "Women's Singles"),
            TournamentType::MensDoubles => write!(f, "Men's Doubles"),
            TournamentType::WomensDoubles => write!(f, "Women's Doubles"),
            TournamentType::MixedDoubles => write!(f, "Mixed Doubles"),
        }
    }
}

impl FromStr for TournamentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "mens_singles" => Ok(TournamentType::MensSingles),
            "womens_singles" => Ok(TournamentType::WomensSingles),
            "mens_doubles" => Ok(TournamentType::MensDoubles),
            "womens_doubles" => Ok(TournamentType::WomensDoubles),
            "mixed_doubles" => Ok(TournamentType::MixedDoubles),
            other => Err(format!("unknown tournament type: {other}")),
        }
    }
}

/// Tournament configuration, fixed once the tournament is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Tournament name
    pub name: String,
    /// Category shown next to the name
    pub tournament_type: TournamentType,
    /// Sets per match (odd, best-of)
    pub sets: u8,
    /// Points needed to take a set. Shown to players, not enforced on scores.
    pub points_per_set: u32,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            name: "Tournament".to_string(),
            tournament_type: TournamentType::MixedDoubles,
            sets: 3,
            points_per_set: 21,
        }
    }
}

impl TournamentConfig {
    /// Create a best-of-three, 21-point configuration
    pub fn new(name: impl Into<String>, tournament_type: TournamentType) -> Self {
        Self {
            name: name.into(),
            tournament_type,
            ..Default::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Tournament name must not be empty".to_string());
        }

        if !(MIN_SETS..=MAX_SETS).contains(&self.sets) || self.sets % 2 == 0 {
            return Err(format!(
                "Sets per match must be odd and between {MIN_SETS} and {MAX_SETS}, got {}",
                self.sets
            ));
        }

        if !POINTS_PER_SET_OPTIONS.contains(&self.points_per_set) {
            return Err(format!(
                "Points per set must be one of {:?}, got {}",
                POINTS_PER_SET_OPTIONS, self.points_per_set
            ));
        }

        Ok(())
    }

    /// Sets a side must take to win a match
    pub fn sets_to_win(&self) -> usize {
        crate::bracket::sets_to_win(self.sets)
    }
}

/// Wizard stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentState {
    /// Accepting and removing players
    Registration,
    /// Building teams from the roster
    Pairing,
    /// Bracket generated, results being recorded
    Ongoing,
    /// Final decided
    Completed,
}

impl fmt::Display for TournamentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TournamentState::Registration => write!(f, "registration"),
            TournamentState::Pairing => write!(f, "pairing"),
            TournamentState::Ongoing => write!(f, "ongoing"),
            TournamentState::Completed => write!(f, "completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TournamentConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sets_to_win(), 2);
    }

    #[test]
    fn test_even_sets_rejected() {
        let config = TournamentConfig {
            sets: 4,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sets_out_of_range_rejected() {
        for sets in [0, 7] {
            let config = TournamentConfig {
                sets,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "sets = {sets}");
        }
    }

    #[test]
    fn test_points_per_set_options() {
        for points in POINTS_PER_SET_OPTIONS {
            let config = TournamentConfig {
                points_per_set: points,
                ..Default::default()
            };
            assert!(config.validate().is_ok());
        }

        let config = TournamentConfig {
            points_per_set: 25,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_name_rejected() {
        let config = TournamentConfig::new("   ", TournamentType::MensDoubles);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tournament_type_parsing() {
        assert_eq!("mixed_doubles".parse(), Ok(TournamentType::MixedDoubles));
        assert_eq!("Womens Singles".parse(), Ok(TournamentType::WomensSingles));
        assert_eq!("mens-doubles".parse(), Ok(TournamentType::MensDoubles));
        assert!("triples".parse::<TournamentType>().is_err());
    }

    #[test]
    fn test_tournament_type_serde_name() {
        let json = serde_json::to_string(&TournamentType::WomensDoubles).unwrap();
        assert_eq!(json, "\"womens_doubles\"");
    }
}
