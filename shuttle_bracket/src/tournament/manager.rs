//! In-memory tournament wizard: configuration, roster, pairing and bracket.

use super::models::{TournamentConfig, TournamentState};
use crate::{
    bracket::{Bracket, BracketError, Match, MatchId, MatchOutcome, MatchSet},
    pairing::{
        Gender, Participant, ParticipantId, PairingStrategy, SkillLevel, Team, TeamId, pair_roster,
    },
};
use log::{debug, info};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

/// Fewest players that can move on to pairing
pub const MIN_PLAYERS: usize = 2;

/// Fewest teams a bracket can be generated from
pub const MIN_TEAMS: usize = 2;

/// Tournament errors
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid player: {0}")]
    InvalidPlayer(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(ParticipantId),

    #[error("Tournament not in correct state: expected {expected}, got {actual}")]
    InvalidState {
        expected: TournamentState,
        actual: TournamentState,
    },

    #[error("Insufficient players: need {needed}, have {current}")]
    InsufficientPlayers { needed: usize, current: usize },

    #[error("Insufficient teams: need {needed}, have {current}")]
    InsufficientTeams { needed: usize, current: usize },

    #[error("Bracket error: {0}")]
    Bracket(#[from] BracketError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type TournamentResult<T> = Result<T, TournamentError>;

/// A single tournament moving through the wizard stages.
///
/// Owns the canonical roster, team list and bracket. The pairing and bracket
/// engines are called with copies of this data and their output replaces the
/// stored collection wholesale.
#[derive(Debug, Clone)]
pub struct Tournament {
    config: TournamentConfig,
    state: TournamentState,
    players: Vec<Participant>,
    teams: Vec<Team>,
    bracket: Option<Bracket>,
}

#[derive(Serialize)]
struct TournamentSnapshot<'a> {
    config: &'a TournamentConfig,
    state: TournamentState,
    players: &'a [Participant],
    teams: &'a [Team],
    matches: &'a [Match],
    champion: Option<TeamId>,
}

impl Tournament {
    /// Create a tournament from a validated configuration, ready for registration
    pub fn new(config: TournamentConfig) -> TournamentResult<Self> {
        config.validate().map_err(TournamentError::InvalidConfig)?;

        info!(
            "Tournament '{}' created ({}, best of {}, {} points)",
            config.name, config.tournament_type, config.sets, config.points_per_set
        );

        Ok(Self {
            config,
            state: TournamentState::Registration,
            players: Vec::new(),
            teams: Vec::new(),
            bracket: None,
        })
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    pub fn state(&self) -> TournamentState {
        self.state
    }

    pub fn players(&self) -> &[Participant] {
        &self.players
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn bracket(&self) -> Option<&Bracket> {
        self.bracket.as_ref()
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Winning team, once the final has been decided
    pub fn champion(&self) -> Option<&Team> {
        self.bracket
            .as_ref()
            .and_then(Bracket::champion)
            .and_then(|id| self.team(id))
    }

    /// Add a player to the roster
    pub fn register_player(
        &mut self,
        name: &str,
        skill: SkillLevel,
        gender: Gender,
    ) -> TournamentResult<ParticipantId> {
        self.expect_state(TournamentState::Registration)?;

        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::InvalidPlayer(
                "Player name must not be empty".to_string(),
            ));
        }

        let player = Participant::new(name, skill, gender);
        let id = player.id;
        debug!("Registered {} (skill {}, {})", player.name, skill, gender);
        self.players.push(player);

        Ok(id)
    }

    /// Remove a player from the roster
    pub fn remove_player(&mut self, id: ParticipantId) -> TournamentResult<Participant> {
        self.expect_state(TournamentState::Registration)?;

        let pos = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(TournamentError::PlayerNotFound(id))?;

        let removed = self.players.remove(pos);
        debug!("Removed {} from the roster", removed.name);
        Ok(removed)
    }

    /// Close registration and move on to pairing
    pub fn begin_pairing(&mut self) -> TournamentResult<()> {
        self.expect_state(TournamentState::Registration)?;

        if self.players.len() < MIN_PLAYERS {
            return Err(TournamentError::InsufficientPlayers {
                needed: MIN_PLAYERS,
                current: self.players.len(),
            });
        }

        self.transition(TournamentState::Pairing);
        Ok(())
    }

    /// Build teams from the full roster, replacing any earlier pairing
    pub fn pair_teams<R>(
        &mut self,
        strategy: PairingStrategy,
        rng: &mut R,
    ) -> TournamentResult<&[Team]>
    where
        R: Rng + ?Sized,
    {
        self.expect_state(TournamentState::Pairing)?;

        self.teams = pair_roster(strategy, &self.players, rng);

        info!("{} pairing produced {} teams", strategy, self.teams.len());
        Ok(&self.teams)
    }

    /// Step back from pairing to registration, discarding teams
    pub fn back(&mut self) -> TournamentResult<()> {
        self.expect_state(TournamentState::Pairing)?;

        self.teams.clear();
        self.transition(TournamentState::Registration);
        Ok(())
    }

    /// Generate the bracket from the confirmed teams
    pub fn start_bracket(&mut self) -> TournamentResult<&Bracket> {
        self.expect_state(TournamentState::Pairing)?;

        if self.teams.len() < MIN_TEAMS {
            return Err(TournamentError::InsufficientTeams {
                needed: MIN_TEAMS,
                current: self.teams.len(),
            });
        }

        let bracket = Bracket::generate(&self.teams, self.config.sets);
        self.transition(TournamentState::Ongoing);
        Ok(self.bracket.insert(bracket))
    }

    /// Record the sets of a match and advance the winner
    pub fn record_result(
        &mut self,
        match_id: MatchId,
        sets: Vec<MatchSet>,
    ) -> TournamentResult<MatchOutcome> {
        self.expect_state(TournamentState::Ongoing)?;

        let Some(bracket) = self.bracket.as_mut() else {
            return Err(TournamentError::InvalidState {
                expected: TournamentState::Ongoing,
                actual: self.state,
            });
        };

        let outcome = bracket.apply_match_result(match_id, sets)?;

        if bracket.is_complete() {
            self.transition(TournamentState::Completed);
            if let Some(champion) = self.champion() {
                info!("'{}' won by {}", self.config.name, champion.name);
            }
        }

        Ok(outcome)
    }

    /// Pretty JSON view of the current tournament, for display
    pub fn to_json(&self) -> TournamentResult<String> {
        let snapshot = TournamentSnapshot {
            config: &self.config,
            state: self.state,
            players: &self.players,
            teams: &self.teams,
            matches: self.bracket.as_ref().map(Bracket::matches).unwrap_or(&[]),
            champion: self.bracket.as_ref().and_then(Bracket::champion),
        };

        Ok(serde_json::to_string_pretty(&snapshot)?)
    }

    fn expect_state(&self, expected: TournamentState) -> TournamentResult<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(TournamentError::InvalidState {
                expected,
                actual: self.state,
            })
        }
    }

    fn transition(&mut self, next: TournamentState) {
        info!("Tournament '{}': {} -> {}", self.config.name, self.state, next);
        self.state = next;
    }
}
