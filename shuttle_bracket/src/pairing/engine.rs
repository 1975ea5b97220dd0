//! Team pairing strategies.

use log::{debug, warn};
use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::models::{Participant, Team};

/// How participants are grouped into teams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairingStrategy {
    /// Uniform shuffle, then consecutive pairs
    Random,
    /// Strongest with weakest across the skill-sorted roster
    #[default]
    Fair,
}

impl fmt::Display for PairingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairingStrategy::Random => write!(f, "random"),
            PairingStrategy::Fair => write!(f, "fair"),
        }
    }
}

impl FromStr for PairingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(PairingStrategy::Random),
            "fair" | "balanced" => Ok(PairingStrategy::Fair),
            other => Err(format!("unknown pairing strategy: {other}")),
        }
    }
}

/// Shuffle the roster and pair consecutive entries (0 with 1, 2 with 3, ...).
///
/// With an odd roster the trailing participant after the shuffle is left out.
pub fn random_pair<R>(participants: &[Participant], rng: &mut R) -> Vec<Team>
where
    R: Rng + ?Sized,
{
    let mut shuffled = participants.to_vec();
    shuffled.shuffle(rng);

    if shuffled.len() % 2 == 1 {
        if let Some(left_out) = shuffled.last() {
            warn!("Odd roster: {} left without a partner", left_out.name);
        }
    }

    let teams: Vec<Team> = shuffled
        .chunks_exact(2)
        .map(|pair| Team::new(pair[0].clone(), pair[1].clone()))
        .collect();

    debug!("Random pairing built {} teams", teams.len());
    teams
}

/// Snake pairing: sort by skill descending (stable) and pair rank `i` with
/// rank `len - 1 - i`.
///
/// With an odd roster the middle participant of the sorted list is left out.
pub fn fair_pair(participants: &[Participant]) -> Vec<Team> {
    let mut sorted = participants.to_vec();
    sorted.sort_by(|a, b| b.skill.cmp(&a.skill));

    let len = sorted.len();
    if len % 2 == 1 {
        warn!("Odd roster: {} left without a partner", sorted[len / 2].name);
    }

    let teams: Vec<Team> = (0..len / 2)
        .map(|i| Team::new(sorted[i].clone(), sorted[len - 1 - i].clone()))
        .collect();

    debug!("Fair pairing built {} teams", teams.len());
    teams
}

/// Build teams from the full roster with the given strategy.
///
/// `rng` is only drawn from by `PairingStrategy::Random`.
pub fn pair_roster<R>(
    strategy: PairingStrategy,
    participants: &[Participant],
    rng: &mut R,
) -> Vec<Team>
where
    R: Rng + ?Sized,
{
    match strategy {
        PairingStrategy::Random => random_pair(participants, rng),
        PairingStrategy::Fair => fair_pair(participants),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairing::models::{Gender, SkillLevel};
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    fn roster(skills: &[u8]) -> Vec<Participant> {
        skills
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                Participant::new(format!("P{i}"), SkillLevel::new(s).unwrap(), Gender::Male)
            })
            .collect()
    }

    #[test]
    fn test_fair_pair_snake_order() {
        let players = roster(&[3, 9, 1, 7, 5, 2]);
        let teams = fair_pair(&players);

        // sorted: 9 7 5 3 2 1
        let skills: Vec<(u8, u8)> = teams
            .iter()
            .map(|t| (t.players[0].skill.value(), t.players[1].skill.value()))
            .collect();
        assert_eq!(skills, vec![(9, 1), (7, 2), (5, 3)]);
        let totals: Vec<u32> = teams.iter().map(|t| t.total_skill).collect();
        assert_eq!(totals, vec![10, 9, 8]);
    }

    #[test]
    fn test_fair_pair_odd_drops_middle() {
        let players = roster(&[9, 7, 5, 3, 1]);
        let teams = fair_pair(&players);

        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].total_skill, 10);
        assert_eq!(teams[1].total_skill, 10);
        assert!(teams.iter().all(|t| !t.has_member(players[2].id)));
    }

    #[test]
    fn test_fair_pair_ties_keep_roster_order() {
        let players = roster(&[5, 5, 5, 5]);
        let teams = fair_pair(&players);

        assert_eq!(teams[0].name, "P0 & P3");
        assert_eq!(teams[1].name, "P1 & P2");
    }

    #[test]
    fn test_random_pair_is_reproducible_with_seed() {
        let players = roster(&[1, 2, 3, 4, 5, 6, 7, 8]);

        let first = random_pair(&players, &mut StdRng::seed_from_u64(7));
        let second = random_pair(&players, &mut StdRng::seed_from_u64(7));

        let names = |teams: &[Team]| teams.iter().map(|t| t.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&first), names(&second));
    }

    #[test]
    fn test_random_pair_uses_every_player_once() {
        let players = roster(&[1, 2, 3, 4, 5, 6, 7]);
        let teams = random_pair(&players, &mut StdRng::seed_from_u64(42));

        assert_eq!(teams.len(), 3);
        let members: HashSet<_> = teams
            .iter()
            .flat_map(|t| t.players.iter().map(|p| p.id))
            .collect();
        assert_eq!(members.len(), 6);
    }

    #[test]
    fn test_empty_and_single_rosters() {
        assert!(fair_pair(&[]).is_empty());
        assert!(random_pair(&[], &mut StdRng::seed_from_u64(1)).is_empty());

        let solo = roster(&[6]);
        assert!(fair_pair(&solo).is_empty());
        assert!(random_pair(&solo, &mut StdRng::seed_from_u64(1)).is_empty());
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("fair".parse::<PairingStrategy>(), Ok(PairingStrategy::Fair));
        assert_eq!(" Random ".parse::<PairingStrategy>(), Ok(PairingStrategy::Random));
        assert!("snake-draft".parse::<PairingStrategy>().is_err());
    }

    #[test]
    fn test_pair_roster_dispatches_strategy() {
        let players = roster(&[9, 7, 5, 3]);
        let mut rng = StdRng::seed_from_u64(3);

        let fair = pair_roster(PairingStrategy::Fair, &players, &mut rng);
        assert_eq!(fair[0].total_skill, 12);
        assert_eq!(fair[1].total_skill, 12);

        let random = pair_roster(PairingStrategy::Random, &players, &mut rng);
        let expected = random_pair(&players, &mut StdRng::seed_from_u64(3));
        let names = |teams: &[Team]| teams.iter().map(|t| t.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&random), names(&expected));
    }
}
