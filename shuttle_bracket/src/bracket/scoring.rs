//! Winner determination from set scores.

use super::models::{MatchSet, Slot};
use crate::pairing::TeamId;

/// Sets a side must take to win a best-of-`sets_per_match` match.
///
/// Never below one, so a zero configuration cannot hand out a win for free.
pub fn sets_to_win(sets_per_match: u8) -> usize {
    usize::from(sets_per_match).div_ceil(2).max(1)
}

/// Side that first reaches the win threshold, scanning sets in order.
///
/// Tied sets count for neither side and unplayed (0-0) sets are skipped.
pub fn decide_side(sets: &[MatchSet], sets_per_match: u8) -> Option<Slot> {
    let needed = sets_to_win(sets_per_match);
    let mut first_wins = 0;
    let mut second_wins = 0;

    for set in sets.iter().filter(|s| !s.is_unplayed()) {
        match set.winner() {
            Some(Slot::First) => first_wins += 1,
            Some(Slot::Second) => second_wins += 1,
            None => continue,
        }

        if first_wins >= needed {
            return Some(Slot::First);
        }
        if second_wins >= needed {
            return Some(Slot::Second);
        }
    }

    None
}

/// Winning team id, or `None` while neither side has reached the threshold
pub fn resolve_winner(
    sets: &[MatchSet],
    sets_per_match: u8,
    first: TeamId,
    second: TeamId,
) -> Option<TeamId> {
    decide_side(sets, sets_per_match).map(|slot| match slot {
        Slot::First => first,
        Slot::Second => second,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets(scores: &[(u32, u32)]) -> Vec<MatchSet> {
        scores.iter().copied().map(MatchSet::from).collect()
    }

    #[test]
    fn test_sets_to_win() {
        assert_eq!(sets_to_win(1), 1);
        assert_eq!(sets_to_win(3), 2);
        assert_eq!(sets_to_win(5), 3);
        assert_eq!(sets_to_win(0), 1);
    }

    #[test]
    fn test_best_of_three_first_side() {
        let a = TeamId::new();
        let b = TeamId::new();
        let played = sets(&[(21, 15), (18, 21), (21, 19)]);

        assert_eq!(resolve_winner(&played, 3, a, b), Some(a));
    }

    #[test]
    fn test_straight_sets_second_side() {
        let a = TeamId::new();
        let b = TeamId::new();
        let played = sets(&[(10, 21), (19, 21)]);

        assert_eq!(resolve_winner(&played, 3, a, b), Some(b));
    }

    #[test]
    fn test_not_enough_sets_is_open() {
        let played = sets(&[(21, 15), (18, 21)]);
        assert_eq!(decide_side(&played, 3), None);
    }

    #[test]
    fn test_unplayed_and_tied_sets_do_not_count() {
        let played = sets(&[(0, 0), (20, 20), (21, 5), (0, 0)]);
        assert_eq!(decide_side(&played, 3), None);
        assert_eq!(decide_side(&played, 1), Some(Slot::First));
    }

    #[test]
    fn test_first_to_threshold_wins_even_with_extra_sets() {
        let played = sets(&[(5, 21), (7, 21), (21, 0), (21, 0)]);
        assert_eq!(decide_side(&played, 3), Some(Slot::Second));
    }

    #[test]
    fn test_empty_sets_is_open() {
        assert_eq!(decide_side(&[], 5), None);
    }
}
