//! Bracket data models.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::pairing::TeamId;

/// Match identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchId(pub Uuid);

impl MatchId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First four hex digits, as shown on a bracket card
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..4].to_string()
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the two opponent positions in a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    First,
    Second,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::First => write!(f, "1"),
            Slot::Second => write!(f, "2"),
        }
    }
}

/// Occupant of a side slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SideSlot {
    /// A known team
    Team(TeamId),
    /// No opponent; the other side advances automatically
    Bye,
    /// Waiting for the winner of an earlier match
    #[default]
    Empty,
}

impl SideSlot {
    pub fn team(&self) -> Option<TeamId> {
        match self {
            SideSlot::Team(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, SideSlot::Bye)
    }
}

/// Score of a single set, one value per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MatchSet {
    pub first: u32,
    pub second: u32,
}

impl MatchSet {
    pub fn new(first: u32, second: u32) -> Self {
        Self { first, second }
    }

    /// A set where the scores differ
    pub fn is_decisive(&self) -> bool {
        self.first != self.second
    }

    /// Both scores at zero: the set has not been played
    pub fn is_unplayed(&self) -> bool {
        self.first == 0 && self.second == 0
    }

    /// Side that took the set, if any
    pub fn winner(&self) -> Option<Slot> {
        match self.first.cmp(&self.second) {
            std::cmp::Ordering::Greater => Some(Slot::First),
            std::cmp::Ordering::Less => Some(Slot::Second),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl From<(u32, u32)> for MatchSet {
    fn from((first, second): (u32, u32)) -> Self {
        Self::new(first, second)
    }
}

impl fmt::Display for MatchSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

/// Where a match's winner advances to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ForwardLink {
    pub match_id: MatchId,
    pub slot: Slot,
}

/// A single bracket match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    /// 1-based, increasing toward the final
    pub round: u32,
    pub first: SideSlot,
    pub second: SideSlot,
    pub sets: Vec<MatchSet>,
    pub winner: Option<TeamId>,
    /// `None` only for the final
    pub next: Option<ForwardLink>,
}

impl Match {
    /// A match with both sides waiting on earlier results
    pub fn pending(round: u32) -> Self {
        Self {
            id: MatchId::new(),
            round,
            first: SideSlot::Empty,
            second: SideSlot::Empty,
            sets: Vec::new(),
            winner: None,
            next: None,
        }
    }

    /// A round-one match between two known teams
    pub fn opening(first: TeamId, second: TeamId) -> Self {
        Self {
            first: SideSlot::Team(first),
            second: SideSlot::Team(second),
            ..Self::pending(1)
        }
    }

    /// A round-one bye: the team advances without playing
    pub fn bye(team: TeamId) -> Self {
        Self {
            first: SideSlot::Team(team),
            second: SideSlot::Bye,
            winner: Some(team),
            ..Self::pending(1)
        }
    }

    pub fn side(&self, slot: Slot) -> SideSlot {
        match slot {
            Slot::First => self.first,
            Slot::Second => self.second,
        }
    }

    pub fn side_mut(&mut self, slot: Slot) -> &mut SideSlot {
        match slot {
            Slot::First => &mut self.first,
            Slot::Second => &mut self.second,
        }
    }

    pub fn is_bye(&self) -> bool {
        self.first.is_bye() || self.second.is_bye()
    }

    pub fn is_final(&self) -> bool {
        self.next.is_none()
    }

    /// Both sides known and no result recorded yet
    pub fn is_playable(&self) -> bool {
        self.winner.is_none() && self.first.team().is_some() && self.second.team().is_some()
    }

    /// Number of sets taken by the given side
    pub fn sets_won(&self, slot: Slot) -> usize {
        self.sets.iter().filter(|s| s.winner() == Some(slot)).count()
    }

    /// Slot occupied by the recorded winner
    pub fn winner_slot(&self) -> Option<Slot> {
        let winner = self.winner?;
        if self.first.team() == Some(winner) {
            Some(Slot::First)
        } else if self.second.team() == Some(winner) {
            Some(Slot::Second)
        } else {
            None
        }
    }
}
