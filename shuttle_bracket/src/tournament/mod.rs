//! Tournament wizard tying the pairing and bracket engines together.
//!
//! This module provides:
//! - Tournament configuration and validation
//! - Player registration and removal
//! - Team pairing (random or skill-balanced)
//! - Bracket generation and result recording until a champion emerges
//!
//! State lives in memory only; nothing is persisted between sessions.
//!
//! ## Example
//!
//! ```
//! use shuttle_bracket::bracket::MatchSet;
//! use shuttle_bracket::pairing::{Gender, PairingStrategy, SkillLevel};
//! use shuttle_bracket::tournament::{Tournament, TournamentConfig, TournamentState, TournamentType};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TournamentConfig::new("Winter Open", TournamentType::MixedDoubles);
//! let mut tournament = Tournament::new(config)?;
//!
//! for (name, skill) in [("Ana", 9), ("Ben", 3), ("Cy", 7), ("Dee", 5)] {
//!     let skill = SkillLevel::new(skill).ok_or("bad skill")?;
//!     tournament.register_player(name, skill, Gender::Female)?;
//! }
//!
//! tournament.begin_pairing()?;
//! tournament.pair_teams(PairingStrategy::Fair, &mut rand::rng())?;
//! let final_id = tournament.start_bracket()?.matches()[0].id;
//!
//! tournament.record_result(final_id, vec![MatchSet::new(21, 17), MatchSet::new(21, 19)])?;
//! assert_eq!(tournament.state(), TournamentState::Completed);
//! # Ok(())
//! # }
//! ```

pub mod manager;
pub mod models;

pub use manager::{MIN_PLAYERS, MIN_TEAMS, Tournament, TournamentError, TournamentResult};
pub use models::{
    MAX_SETS, MIN_SETS, POINTS_PER_SET_OPTIONS, TournamentConfig, TournamentState, TournamentType,
};
