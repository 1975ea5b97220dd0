//! Keyed match store and result propagation.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::{
    errors::{BracketError, BracketResult},
    generator::generate_bracket,
    models::{ForwardLink, Match, MatchId, MatchSet, SideSlot},
    scoring::decide_side,
};
use crate::pairing::{Team, TeamId};

/// Result of recording sets on a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// A winner is set; `advanced_to` is where they were written (`None` for the final)
    Decided {
        winner: TeamId,
        advanced_to: Option<ForwardLink>,
    },
    /// Sets stored, but neither side has reached the threshold
    Open,
}

/// Owned bracket: matches in creation order plus an id index
#[derive(Debug, Clone)]
pub struct Bracket {
    matches: Vec<Match>,
    index: HashMap<MatchId, usize>,
    sets_per_match: u8,
}

impl Bracket {
    /// Generate the bracket for `teams` in the given order
    pub fn generate(teams: &[Team], sets_per_match: u8) -> Self {
        Self::from_matches(generate_bracket(teams), sets_per_match)
    }

    /// Wrap an existing match list
    pub fn from_matches(matches: Vec<Match>, sets_per_match: u8) -> Self {
        let index = matches
            .iter()
            .enumerate()
            .map(|(i, m)| (m.id, i))
            .collect();

        Self {
            matches,
            index,
            sets_per_match,
        }
    }

    /// Record the sets for a match and advance its winner.
    ///
    /// Unplayed (0-0) sets are dropped before storage. When the sets decide the
    /// match, the winner is written into the slot its forward link names; an
    /// open result empties that slot. If this changes a later match's side, the
    /// later match is reset (see `settle_downstream`). Bye matches keep their
    /// automatic result and ignore the sets.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NotFound` if no match has this id; nothing changes.
    pub fn apply_match_result(
        &mut self,
        match_id: MatchId,
        sets: Vec<MatchSet>,
    ) -> BracketResult<MatchOutcome> {
        let Some(&idx) = self.index.get(&match_id) else {
            warn!("Result submitted for unknown match {}", match_id);
            return Err(BracketError::NotFound(match_id));
        };

        let sets_per_match = self.sets_per_match;
        let current = &mut self.matches[idx];

        if current.is_bye() {
            debug!("Ignoring sets for bye match {}", match_id);
            return Ok(match current.winner {
                Some(winner) => MatchOutcome::Decided {
                    winner,
                    advanced_to: current.next,
                },
                None => MatchOutcome::Open,
            });
        }

        let played: Vec<MatchSet> = sets.into_iter().filter(|s| !s.is_unplayed()).collect();
        let winner = decide_side(&played, sets_per_match).and_then(|slot| current.side(slot).team());

        current.sets = played;
        current.winner = winner;
        let next = current.next;

        let advanced = winner.map_or(SideSlot::Empty, SideSlot::Team);
        self.settle_downstream(next, advanced);

        match (winner, next) {
            (None, _) => {
                debug!("Match {} still open", match_id);
                Ok(MatchOutcome::Open)
            }
            (Some(winner), Some(link)) => {
                debug!(
                    "Winner of {} advances to slot {} of {}",
                    match_id, link.slot, link.match_id
                );
                Ok(MatchOutcome::Decided {
                    winner,
                    advanced_to: Some(link),
                })
            }
            (Some(winner), None) => {
                info!("Champion decided: team {}", winner);
                Ok(MatchOutcome::Decided {
                    winner,
                    advanced_to: None,
                })
            }
        }
    }

    /// Write `value` into the linked slot. A match whose side changes loses its
    /// sets and winner, and the reset repeats down the chain while a stale winner
    /// was already advanced.
    fn settle_downstream(&mut self, mut link: Option<ForwardLink>, mut value: SideSlot) {
        while let Some(target) = link {
            let Some(&idx) = self.index.get(&target.match_id) else {
                warn!("Link points to missing match {}", target.match_id);
                return;
            };

            let downstream = &mut self.matches[idx];
            let side = downstream.side_mut(target.slot);
            if *side == value {
                return;
            }
            *side = value;

            if downstream.winner.is_none() && downstream.sets.is_empty() {
                return;
            }

            debug!("Match {} reset after its slot {} changed", downstream.id, target.slot);
            let had_winner = downstream.winner.take().is_some();
            downstream.sets.clear();
            if !had_winner {
                return;
            }

            link = downstream.next;
            value = SideSlot::Empty;
        }
    }

    /// Winner of the final, once recorded
    pub fn champion(&self) -> Option<TeamId> {
        self.final_match().and_then(|m| m.winner)
    }

    /// The unique match without a forward link
    pub fn final_match(&self) -> Option<&Match> {
        self.matches.iter().find(|m| m.is_final())
    }

    pub fn is_complete(&self) -> bool {
        self.champion().is_some()
    }

    pub fn get(&self, match_id: MatchId) -> Option<&Match> {
        self.index.get(&match_id).map(|&i| &self.matches[i])
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn into_matches(self) -> Vec<Match> {
        self.matches
    }

    pub fn sets_per_match(&self) -> u8 {
        self.sets_per_match
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Matches grouped by round, ascending, each in creation order
    pub fn rounds(&self) -> Vec<(u32, Vec<&Match>)> {
        let mut rounds: BTreeMap<u32, Vec<&Match>> = BTreeMap::new();
        for m in &self.matches {
            rounds.entry(m.round).or_default().push(m);
        }
        rounds.into_iter().collect()
    }

    pub fn total_rounds(&self) -> u32 {
        self.matches.iter().map(|m| m.round).max().unwrap_or(0)
    }

    /// Matches with both teams known and no result yet
    pub fn playable_matches(&self) -> Vec<&Match> {
        self.matches.iter().filter(|m| m.is_playable()).collect()
    }
}

/// Display label for a round given the bracket depth
pub fn match_label(round: u32, total_rounds: u32) -> String {
    if round == total_rounds {
        "Final".to_string()
    } else if round + 1 == total_rounds {
        "Semi-Finals".to_string()
    } else if round + 2 == total_rounds {
        "Quarter-Finals".to_string()
    } else {
        format!("Round {round}")
    }
}
