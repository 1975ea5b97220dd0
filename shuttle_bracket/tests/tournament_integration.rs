//! Integration tests for tournament functionality
//!
//! These tests verify the complete wizard lifecycle from registration
//! through pairing, bracket play and the champion.

#[cfg(test)]
mod tournament_tests {
    use rand::{SeedableRng, rngs::StdRng};
    use shuttle_bracket::bracket::{MatchOutcome, MatchSet, match_label};
    use shuttle_bracket::pairing::{Gender, PairingStrategy, SkillLevel};
    use shuttle_bracket::tournament::{
        Tournament, TournamentConfig, TournamentError, TournamentState, TournamentType,
    };

    fn club_night(players: &[(&str, u8, Gender)]) -> Tournament {
        let config = TournamentConfig {
            name: "Club Night".to_string(),
            tournament_type: TournamentType::MixedDoubles,
            sets: 3,
            points_per_set: 21,
        };
        let mut t = Tournament::new(config).unwrap();
        for &(name, skill, gender) in players {
            t.register_player(name, SkillLevel::new(skill).unwrap(), gender)
                .unwrap();
        }
        t
    }

    fn ten_players() -> Vec<(&'static str, u8, Gender)> {
        vec![
            ("Ana", 9, Gender::Female),
            ("Ben", 8, Gender::Male),
            ("Cy", 7, Gender::Male),
            ("Dee", 6, Gender::Female),
            ("Eli", 5, Gender::Male),
            ("Fay", 5, Gender::Female),
            ("Gus", 4, Gender::Male),
            ("Hal", 3, Gender::Male),
            ("Ivy", 2, Gender::Female),
            ("Jo", 1, Gender::Female),
        ]
    }

    #[test]
    fn test_five_team_tournament_completes() {
        let mut t = club_night(&ten_players());
        t.begin_pairing().unwrap();
        let teams = t
            .pair_teams(PairingStrategy::Fair, &mut StdRng::seed_from_u64(1))
            .unwrap()
            .to_vec();
        assert_eq!(teams.len(), 5);
        assert!(teams.iter().all(|team| team.total_skill == 10));

        let bracket = t.start_bracket().unwrap();
        assert_eq!(bracket.total_rounds(), 3);

        let mut results = 0;
        while t.state() == TournamentState::Ongoing {
            let id = t.bracket().unwrap().playable_matches()[0].id;
            let outcome = t
                .record_result(id, vec![MatchSet::new(15, 21), MatchSet::new(17, 21)])
                .unwrap();
            assert!(matches!(outcome, MatchOutcome::Decided { .. }));
            results += 1;
        }

        assert_eq!(results, 4);
        assert_eq!(t.state(), TournamentState::Completed);
        // second side always wins: the bye team sits in the final's second slot
        assert_eq!(t.champion().map(|c| c.name.as_str()), Some("Eli & Fay"));
    }

    #[test]
    fn test_partial_result_keeps_tournament_running() {
        let mut t = club_night(&ten_players()[..4]);
        t.begin_pairing().unwrap();
        t.pair_teams(PairingStrategy::Fair, &mut rand::rng()).unwrap();
        let final_id = t.start_bracket().unwrap().matches()[0].id;

        let outcome = t
            .record_result(final_id, vec![MatchSet::new(21, 19), MatchSet::new(0, 0)])
            .unwrap();

        assert_eq!(outcome, MatchOutcome::Open);
        assert_eq!(t.state(), TournamentState::Ongoing);
        assert!(t.champion().is_none());
    }

    #[test]
    fn test_results_rejected_after_completion() {
        let mut t = club_night(&ten_players()[..4]);
        t.begin_pairing().unwrap();
        t.pair_teams(PairingStrategy::Fair, &mut rand::rng()).unwrap();
        let final_id = t.start_bracket().unwrap().matches()[0].id;
        t.record_result(final_id, vec![MatchSet::new(21, 0), MatchSet::new(21, 0)])
            .unwrap();

        let err = t.record_result(final_id, Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            TournamentError::InvalidState {
                expected: TournamentState::Ongoing,
                actual: TournamentState::Completed
            }
        ));
    }

    #[test]
    fn test_corrected_semi_final_reopens_final() {
        let mut t = club_night(&ten_players()[..8]);
        t.begin_pairing().unwrap();
        t.pair_teams(PairingStrategy::Fair, &mut rand::rng()).unwrap();
        let matches = t.start_bracket().unwrap().matches().to_vec();
        let (semi_a, semi_b, final_id) = (matches[0].id, matches[1].id, matches[2].id);

        let first_wins = vec![MatchSet::new(21, 10), MatchSet::new(21, 12)];
        let second_wins = vec![MatchSet::new(10, 21), MatchSet::new(12, 21)];
        t.record_result(semi_a, first_wins.clone()).unwrap();
        t.record_result(semi_b, first_wins.clone()).unwrap();
        t.record_result(semi_a, second_wins).unwrap();

        let final_match = t.bracket().unwrap().get(final_id).unwrap().clone();
        assert_eq!(final_match.first, matches[0].second);
        assert!(final_match.is_playable());

        t.record_result(final_id, first_wins).unwrap();
        assert_eq!(t.state(), TournamentState::Completed);
        assert_eq!(t.champion().map(|c| c.id), matches[0].second.team());
    }

    #[test]
    fn test_roster_edits_before_pairing() {
        let mut t = club_night(&ten_players()[..3]);
        let extra = t
            .register_player("Kit", SkillLevel::new(6).unwrap(), Gender::Female)
            .unwrap();
        t.remove_player(extra).unwrap();
        assert_eq!(t.players().len(), 3);

        t.begin_pairing().unwrap();
        let teams = t
            .pair_teams(PairingStrategy::Random, &mut StdRng::seed_from_u64(8))
            .unwrap();
        assert_eq!(teams.len(), 1);
    }

    #[test]
    fn test_round_labels_for_eight_teams() {
        let players: Vec<(String, u8)> = (0..16).map(|i| (format!("P{i}"), (i % 10) as u8 + 1)).collect();
        let config = TournamentConfig::new("Open", TournamentType::MensDoubles);
        let mut t = Tournament::new(config).unwrap();
        for (name, skill) in &players {
            t.register_player(name, SkillLevel::new(*skill).unwrap(), Gender::Male)
                .unwrap();
        }
        t.begin_pairing().unwrap();
        t.pair_teams(PairingStrategy::Fair, &mut rand::rng()).unwrap();
        let bracket = t.start_bracket().unwrap();

        let total = bracket.total_rounds();
        let labels: Vec<String> = bracket
            .rounds()
            .iter()
            .map(|(round, _)| match_label(*round, total))
            .collect();
        assert_eq!(labels, vec!["Quarter-Finals", "Semi-Finals", "Final"]);
    }
}
