//! Pairing engine: turns a roster of participants into two-person teams.
//!
//! Two strategies are available:
//! - **Random**: uniform shuffle, then consecutive pairs
//! - **Fair**: snake pairing over the skill-sorted roster, strongest with weakest
//!
//! Both are pure functions of the roster (plus the random source for `Random`)
//! and recompute the whole team list on every call. An odd participant is
//! left out rather than treated as an error.
//!
//! ## Example
//!
//! ```
//! use shuttle_bracket::pairing::{Gender, Participant, SkillLevel, fair_pair};
//!
//! let roster: Vec<Participant> = [9, 7, 3, 1]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &s)| Participant::new(format!("P{i}"), SkillLevel::new(s).unwrap(), Gender::Male))
//!     .collect();
//!
//! let teams = fair_pair(&roster);
//! assert_eq!(teams.len(), 2);
//! assert!(teams.iter().all(|t| t.total_skill == 10));
//! ```

pub mod engine;
pub mod models;

pub use engine::{PairingStrategy, fair_pair, pair_roster, random_pair};
pub use models::{Gender, MAX_SKILL, MIN_SKILL, Participant, ParticipantId, SkillLevel, Team, TeamId};
