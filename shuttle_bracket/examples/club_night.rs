//! Club Night Example
//!
//! Registers a small roster, pairs it fairly, and plays the bracket out with
//! scripted scores, printing each round as it goes.

use shuttle_bracket::bracket::{MatchSet, match_label};
use shuttle_bracket::pairing::{Gender, PairingStrategy, SkillLevel};
use shuttle_bracket::tournament::{Tournament, TournamentConfig, TournamentType};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Club Night Example ===\n");

    let config = TournamentConfig::new("Club Night", TournamentType::MixedDoubles);
    let mut tournament = Tournament::new(config)?;

    let roster = [
        ("Ana", 9, Gender::Female),
        ("Ben", 8, Gender::Male),
        ("Cy", 7, Gender::Male),
        ("Dee", 6, Gender::Female),
        ("Eli", 5, Gender::Male),
        ("Fay", 4, Gender::Female),
        ("Gus", 3, Gender::Male),
        ("Hal", 2, Gender::Male),
        ("Ivy", 1, Gender::Female),
        ("Jo", 1, Gender::Female),
    ];
    for (name, skill, gender) in roster {
        let skill = SkillLevel::new(skill).ok_or("skill out of range")?;
        tournament.register_player(name, skill, gender)?;
    }

    tournament.begin_pairing()?;
    let teams = tournament.pair_teams(PairingStrategy::Fair, &mut rand::rng())?;
    println!("Teams:");
    for team in teams {
        println!("  {:<20} skill {}", team.name, team.total_skill);
    }
    println!();

    tournament.start_bracket()?;

    // Alternate which side wins so the result is not a walkover for seed one.
    let scripts = [
        vec![MatchSet::new(21, 15), MatchSet::new(21, 18)],
        vec![MatchSet::new(19, 21), MatchSet::new(21, 17), MatchSet::new(14, 21)],
    ];
    let mut turn = 0;

    while tournament.champion().is_none() {
        let Some(next) = tournament
            .bracket()
            .and_then(|b| b.playable_matches().first().map(|m| (m.id, m.round)))
        else {
            break;
        };

        let total = tournament.bracket().map(|b| b.total_rounds()).unwrap_or(0);
        let sets = scripts[turn % scripts.len()].clone();
        turn += 1;

        let scores: Vec<String> = sets.iter().map(ToString::to_string).collect();
        println!("{} #{}: {}", match_label(next.1, total), next.0.short(), scores.join(" "));
        tournament.record_result(next.0, sets)?;
    }

    if let Some(champion) = tournament.champion() {
        println!("\nChampion: {}", champion.name);
    }

    Ok(())
}
