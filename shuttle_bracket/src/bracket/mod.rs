//! Bracket engine: single-elimination match trees with bye handling.
//!
//! This module provides:
//! - Bracket generation from an ordered team list
//! - Winner determination from set scores
//! - Result recording with forward propagation to the next match
//!
//! Matches live in a [`Bracket`], an arena keyed by [`MatchId`]. Each
//! non-final match carries a [`ForwardLink`] naming the match and slot its
//! winner feeds.
//!
//! ## Example
//!
//! ```
//! use shuttle_bracket::bracket::{Bracket, MatchSet};
//! use shuttle_bracket::pairing::{Gender, Participant, SkillLevel, fair_pair};
//!
//! let roster: Vec<Participant> = ["Ana", "Ben", "Cy", "Dee"]
//!     .iter()
//!     .map(|n| Participant::new(*n, SkillLevel::default(), Gender::Female))
//!     .collect();
//! let teams = fair_pair(&roster);
//!
//! let mut bracket = Bracket::generate(&teams, 3);
//! let final_id = bracket.matches()[0].id;
//! bracket
//!     .apply_match_result(final_id, vec![MatchSet::new(21, 15), MatchSet::new(21, 19)])
//!     .unwrap();
//!
//! assert_eq!(bracket.champion(), Some(teams[0].id));
//! ```

pub mod errors;
pub mod generator;
pub mod models;
pub mod scoring;
pub mod store;

pub use errors::{BracketError, BracketResult};
pub use generator::generate_bracket;
pub use models::{ForwardLink, Match, MatchId, MatchSet, SideSlot, Slot};
pub use scoring::{decide_side, resolve_winner, sets_to_win};
pub use store::{Bracket, MatchOutcome, match_label};
