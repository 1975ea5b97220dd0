//! Single-elimination tree construction.

use log::debug;

use super::models::{ForwardLink, Match, SideSlot, Slot};
use crate::pairing::Team;

/// Build the complete match tree for the given teams.
///
/// Round one pairs teams in input order (0 vs 1, 2 vs 3, ...); an odd last team
/// gets a bye and is recorded as that match's winner. Each later round pairs the
/// matches still waiting for a destination, in creation order. An odd match left
/// over is carried into the next round's pool instead of getting a one-sided
/// match, so every slot is eventually filled. Bye winners are written into the
/// slot they feed as soon as it exists.
///
/// Fewer than two teams yields no matches.
pub fn generate_bracket(teams: &[Team]) -> Vec<Match> {
    if teams.len() < 2 {
        debug!("Not enough teams for a bracket: {}", teams.len());
        return Vec::new();
    }

    let mut matches: Vec<Match> = Vec::with_capacity(teams.len());
    let mut waiting: Vec<usize> = Vec::with_capacity(teams.len().div_ceil(2));

    for pair in teams.chunks(2) {
        let opening = match pair {
            [first, second] => Match::opening(first.id, second.id),
            [solo] => {
                debug!("{} receives a first-round bye", solo.name);
                Match::bye(solo.id)
            }
            _ => continue,
        };
        waiting.push(matches.len());
        matches.push(opening);
    }

    let mut round = 1;
    while waiting.len() > 1 {
        round += 1;
        let mut next_waiting = Vec::with_capacity(waiting.len().div_ceil(2));

        for pair in waiting.chunks(2) {
            match *pair {
                [first, second] => {
                    let target = matches.len();
                    matches.push(Match::pending(round));
                    link(&mut matches, first, target, Slot::First);
                    link(&mut matches, second, target, Slot::Second);
                    next_waiting.push(target);
                }
                [carried] => next_waiting.push(carried),
                _ => {}
            }
        }

        debug!(
            "Round {} built: {} matches waiting for a destination",
            round,
            next_waiting.len()
        );
        waiting = next_waiting;
    }

    debug!(
        "Bracket generated: {} teams, {} matches, {} rounds",
        teams.len(),
        matches.len(),
        round
    );
    matches
}

/// Point `from` at slot `slot` of `to`, carrying an already-known winner along
fn link(matches: &mut [Match], from: usize, to: usize, slot: Slot) {
    let target_id = matches[to].id;
    matches[from].next = Some(ForwardLink {
        match_id: target_id,
        slot,
    });

    if let Some(winner) = matches[from].winner {
        *matches[to].side_mut(slot) = SideSlot::Team(winner);
    }
}
