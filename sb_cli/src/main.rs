//! Terminal front end for a single-elimination doubles tournament.
//!
//! Loads a roster, pairs it into teams, generates the bracket and reads
//! match scores from stdin until a champion emerges.

mod config;

use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Error};
use ctrlc::set_handler;
use log::{info, warn};
use pico_args::Arguments;
use rand::{SeedableRng, rngs::StdRng};
use serde::Deserialize;
use shuttle_bracket::{
    bracket::{MatchId, MatchOutcome, MatchSet, SideSlot, match_label},
    pairing::{Gender, SkillLevel},
    tournament::{Tournament, TournamentState},
};

use config::{CliConfig, Overrides};

const HELP: &str = "\
Run a single-elimination doubles tournament from the terminal

USAGE:
  sb_cli [OPTIONS] <ROSTER>

ARGS:
  <ROSTER>                 JSON array of players: [{\"name\": \"Ana\", \"skill\": 7, \"gender\": \"female\"}]

OPTIONS:
  --name       NAME        Tournament name             [default: env SB_TOURNAMENT_NAME or Tournament]
  --type       TYPE        mens_doubles, womens_doubles, mixed_doubles, ...
                                                       [default: env SB_TOURNAMENT_TYPE or mixed_doubles]
  --sets       N           Sets per match (1, 3 or 5)  [default: env SB_SETS or 3]
  --points     N           Points per set (11, 15, 21, 30)
                                                       [default: env SB_POINTS_PER_SET or 21]
  --pairing    STRATEGY    fair or random              [default: env SB_PAIRING or fair]
  --seed       N           Seed for random pairing     [default: env SB_SEED or OS entropy]

FLAGS:
  -h, --help               Print help information

Scores are entered per match as space-separated sets, e.g. `21-15 18-21 21-19`.
A blank line skips the match for now; end of input stops the session.
";

/// One roster line as read from the JSON file
#[derive(Debug, Deserialize)]
struct RosterEntry {
    name: String,
    skill: SkillLevel,
    gender: Gender,
}

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = Overrides {
        name: pargs.opt_value_from_str("--name")?,
        tournament_type: pargs.opt_value_from_str("--type")?,
        sets: pargs.opt_value_from_str("--sets")?,
        points_per_set: pargs.opt_value_from_str("--points")?,
        strategy: pargs.opt_value_from_str("--pairing")?,
        seed: pargs.opt_value_from_str("--seed")?,
    };
    let roster_path: PathBuf = pargs
        .free_from_str()
        .context("Missing roster file (see --help)")?;

    let config = CliConfig::from_env(overrides)?;
    config.validate()?;

    // Catching signals for exit.
    set_handler(|| std::process::exit(0))?;

    env_logger::builder().format_target(false).init();
    info!(
        "Starting '{}' with {} pairing",
        config.tournament.name, config.strategy
    );

    let roster = load_roster(&roster_path)?;
    let mut tournament = Tournament::new(config.tournament.clone())?;
    for entry in &roster {
        tournament.register_player(&entry.name, entry.skill, entry.gender)?;
    }
    info!("Registered {} players", tournament.players().len());

    tournament.begin_pairing()?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    tournament.pair_teams(config.strategy, &mut rng)?;
    print_teams(&tournament);

    tournament.start_bracket()?;
    print_bracket(&tournament);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while tournament.state() == TournamentState::Ongoing {
        let playable: Vec<MatchId> = tournament
            .bracket()
            .map(|b| b.playable_matches().iter().map(|m| m.id).collect())
            .unwrap_or_default();

        if playable.is_empty() {
            warn!("No playable matches left before a champion was decided");
            break;
        }

        for match_id in playable {
            println!("{}", describe_match(&tournament, match_id));
            print!("  scores> ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                info!("Input closed, stopping");
                return Ok(());
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let sets = match parse_sets(&line) {
                Ok(sets) => sets,
                Err(e) => {
                    eprintln!("  {e}");
                    continue;
                }
            };

            match tournament.record_result(match_id, sets)? {
                MatchOutcome::Decided { winner, .. } => {
                    println!("  Winner: {}", team_name(&tournament, SideSlot::Team(winner)));
                }
                MatchOutcome::Open => println!("  No winner yet, match stays open"),
            }
        }

        print_bracket(&tournament);
    }

    if let Some(champion) = tournament.champion() {
        println!("\n*** Champion of {}: {} ***", tournament.config().name, champion.name);
    }

    Ok(())
}

fn load_roster(path: &Path) -> Result<Vec<RosterEntry>, Error> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse roster {}", path.display()))
}

/// Parse `21-15 18-21 21-19` into sets
fn parse_sets(line: &str) -> Result<Vec<MatchSet>, String> {
    line.split_whitespace()
        .map(|token| {
            let (first, second) = token
                .split_once('-')
                .ok_or_else(|| format!("Expected a score like 21-15, got '{token}'"))?;
            let first = first
                .parse()
                .map_err(|_| format!("Invalid score '{first}' in '{token}'"))?;
            let second = second
                .parse()
                .map_err(|_| format!("Invalid score '{second}' in '{token}'"))?;
            Ok(MatchSet::new(first, second))
        })
        .collect()
}

fn team_name(tournament: &Tournament, side: SideSlot) -> String {
    match side {
        SideSlot::Team(id) => tournament
            .team(id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
        SideSlot::Bye => "BYE".to_string(),
        SideSlot::Empty => "TBD".to_string(),
    }
}

fn describe_match(tournament: &Tournament, match_id: MatchId) -> String {
    let Some(bracket) = tournament.bracket() else {
        return String::new();
    };
    let Some(m) = bracket.get(match_id) else {
        return format!("Match {match_id} not found");
    };

    let config = tournament.config();
    format!(
        "{} #{}: {} vs {} (best of {}, first to {} sets of {})",
        match_label(m.round, bracket.total_rounds()),
        m.id.short(),
        team_name(tournament, m.first),
        team_name(tournament, m.second),
        config.sets,
        config.sets_to_win(),
        config.points_per_set
    )
}

fn print_teams(tournament: &Tournament) {
    println!("\n=== Teams ({}) ===", tournament.config().tournament_type);
    println!("{:<32} {:>6}", "Team", "Skill");
    println!("{}", "-".repeat(40));
    for team in tournament.teams() {
        println!("{:<32} {:>6}", team.name, team.total_skill);
    }
    println!();
}

fn print_bracket(tournament: &Tournament) {
    let Some(bracket) = tournament.bracket() else {
        return;
    };
    let total = bracket.total_rounds();

    println!("\n=== {} ===", tournament.config().name);
    for (round, matches) in bracket.rounds() {
        println!("{}", match_label(round, total));
        for m in matches {
            let sets: Vec<String> = m.sets.iter().map(ToString::to_string).collect();
            let winner = m
                .winner
                .map(|w| format!("  -> {}", team_name(tournament, SideSlot::Team(w))))
                .unwrap_or_default();
            println!(
                "  #{} {:<24} vs {:<24} {}{}",
                m.id.short(),
                team_name(tournament, m.first),
                team_name(tournament, m.second),
                sets.join(" "),
                winner
            );
        }
    }
    println!();
}
