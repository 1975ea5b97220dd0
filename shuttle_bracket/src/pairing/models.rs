//! Roster and team data models.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Participant identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticipantId(pub Uuid);

impl ParticipantId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub Uuid);

impl TeamId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TeamId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lowest accepted skill rating
pub const MIN_SKILL: u8 = 1;

/// Highest accepted skill rating
pub const MAX_SKILL: u8 = 10;

/// Skill rating on the 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SkillLevel(u8);

impl SkillLevel {
    /// Create a skill level, `None` when outside 1..=10
    pub fn new(value: u8) -> Option<Self> {
        (MIN_SKILL..=MAX_SKILL).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Display band used on the registration screen
    pub fn band(self) -> &'static str {
        match self.0 {
            0..=4 => "Weak",
            5..=6 => "Average",
            7..=8 => "Good",
            _ => "Excellent",
        }
    }
}

impl Default for SkillLevel {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u8> for SkillLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            format!("skill level must be between {MIN_SKILL} and {MAX_SKILL}, got {value}")
        })
    }
}

impl From<SkillLevel> for u8 {
    fn from(level: SkillLevel) -> Self {
        level.0
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category attribute, carried for display only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// A registered player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub skill: SkillLevel,
    pub gender: Gender,
}

impl Participant {
    /// Create a participant with a fresh identifier
    pub fn new(name: impl Into<String>, skill: SkillLevel, gender: Gender) -> Self {
        Self {
            id: ParticipantId::new(),
            name: name.into(),
            skill,
            gender,
        }
    }
}

/// Two participants playing together.
///
/// Name and aggregate skill are derived once at construction and the team is
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub players: [Participant; 2],
    /// "Name1 & Name2" in pairing order
    pub name: String,
    /// Sum of both members' ratings
    pub total_skill: u32,
}

impl Team {
    /// Build a team from two participants, in pairing order
    pub fn new(first: Participant, second: Participant) -> Self {
        let name = format!("{} & {}", first.name, second.name);
        let total_skill = u32::from(first.skill.value()) + u32::from(second.skill.value());

        Self {
            id: TeamId::new(),
            players: [first, second],
            name,
            total_skill,
        }
    }

    /// Whether the participant is a member of this team
    pub fn has_member(&self, id: ParticipantId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }
}
