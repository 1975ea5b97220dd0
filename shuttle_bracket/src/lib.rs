//! # Shuttle Bracket
//!
//! Team pairing and single-elimination brackets for small doubles tournaments.
//!
//! The library has two pure engines and a thin orchestrator on top:
//!
//! - [`pairing`]: turns a roster into two-person teams, either by random
//!   shuffle or by skill-balanced snake pairing
//! - [`bracket`]: builds the match tree (with round-one byes) and records
//!   set scores, advancing each winner into the match it feeds
//! - [`tournament`]: an in-memory wizard that walks through registration,
//!   pairing and play until a champion emerges
//!
//! The engines hold no state between calls. The caller owns the roster, the
//! team list and the [`Bracket`]; every engine call returns fresh data that
//! replaces what the caller held before.
//!
//! ## Example
//!
//! ```
//! use shuttle_bracket::{Bracket, Gender, Participant, SkillLevel, fair_pair};
//!
//! let roster: Vec<Participant> = [8, 6, 4, 2, 7, 1]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &s)| Participant::new(format!("P{i}"), SkillLevel::new(s).unwrap(), Gender::Male))
//!     .collect();
//!
//! let teams = fair_pair(&roster);
//! let bracket = Bracket::generate(&teams, 3);
//!
//! // three teams: one semi-final, one bye, one final
//! assert_eq!(bracket.len(), 3);
//! ```

/// Roster-to-team pairing strategies.
pub mod pairing;
pub use pairing::{
    Gender, PairingStrategy, Participant, ParticipantId, SkillLevel, Team, TeamId, fair_pair,
    pair_roster, random_pair,
};

/// Single-elimination bracket generation and result propagation.
pub mod bracket;
pub use bracket::{
    Bracket, BracketError, BracketResult, Match, MatchId, MatchOutcome, MatchSet, generate_bracket,
    resolve_winner,
};

/// Tournament wizard and configuration.
pub mod tournament;
pub use tournament::{Tournament, TournamentConfig, TournamentError, TournamentState};
