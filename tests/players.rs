//! Integration tests for rosters, the player leaderboard, team updates and match administration.

use league_tournament_web::{
    create_fixture, delete_fixture, edit_fixture, generate_schedule, player_leaderboard,
    report_result, submit_prediction, FixtureUpdate, PlayerId, PlayerRanking, PlayerSortKey,
    PlayerUpdate, TeamId, TeamUpdate, Tournament, TournamentError,
};

fn team(t: &Tournament, name: &str) -> TeamId {
    t.team_by_name(name).unwrap().id
}

fn add(t: &mut Tournament, team_name: &str, player: &str) -> PlayerId {
    let team_id = team(t, team_name);
    t.add_player(team_id, player, None, None).unwrap().id
}

fn set_stats(t: &mut Tournament, id: PlayerId, goals: u32, assists: u32, saves: u32, wins: u32) {
    let update = PlayerUpdate {
        goals: Some(goals),
        assists: Some(assists),
        saves: Some(saves),
        wins: Some(wins),
        ..Default::default()
    };
    t.update_player(id, update).unwrap();
}

fn names(board: &[PlayerRanking]) -> Vec<&str> {
    board.iter().map(|r| r.display_name.as_str()).collect()
}

#[test]
fn player_names_are_unique_and_need_a_team() {
    let mut t = Tournament::with_teams("s1", "Season 1", ["Aces", "Brigade"]).unwrap();
    add(&mut t, "Aces", "Nova");
    let aces = team(&t, "Aces");

    assert_eq!(
        t.add_player(aces, " nova ", None, None).err(),
        Some(TournamentError::DuplicatePlayerName)
    );
    assert_eq!(
        t.add_player(aces, "  ", None, None).err(),
        Some(TournamentError::EmptyName)
    );
    let stranger = uuid::Uuid::new_v4();
    assert_eq!(
        t.add_player(stranger, "Orbit", None, None).err(),
        Some(TournamentError::TeamNotFound(stranger))
    );
    assert_eq!(t.players.len(), 1);
}

#[test]
fn rosters_stay_open_after_scheduling() {
    let mut t = Tournament::with_teams("s1", "Season 1", ["Aces", "Brigade"]).unwrap();
    generate_schedule(&mut t, false).unwrap();
    let id = add(&mut t, "Brigade", "Late Signing");
    assert_eq!(t.roster(team(&t, "Brigade")).len(), 1);
    assert!(t.remove_player(id).is_ok());
    assert_eq!(t.remove_player(id).err(), Some(TournamentError::PlayerNotFound(id)));
}

#[test]
fn update_player_transfers_and_sets_counters() {
    let mut t = Tournament::with_teams("s1", "Season 1", ["Aces", "Brigade"]).unwrap();
    let nova = add(&mut t, "Aces", "Nova");
    add(&mut t, "Aces", "Orbit");
    let brigade = team(&t, "Brigade");

    assert_eq!(
        t.update_player(
            nova,
            PlayerUpdate {
                display_name: Some("ORBIT".to_string()),
                ..Default::default()
            }
        )
        .err(),
        Some(TournamentError::DuplicatePlayerName)
    );

    let p = t
        .update_player(
            nova,
            PlayerUpdate {
                team_id: Some(brigade),
                role: Some("captain".to_string()),
                wins: Some(3),
                losses: Some(1),
                goals: Some(6),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(p.team_id, brigade);
    assert_eq!(p.role.as_deref(), Some("captain"));
    let perf = p.performance();
    assert_eq!(perf.total_matches, 4);
    assert_eq!(perf.win_rate, 75.0);
    assert_eq!(perf.goals_per_game, 1.5);
}

#[test]
fn leaderboard_sorts_by_chosen_stat_and_limits() {
    let mut t = Tournament::with_teams("s1", "Season 1", ["Aces", "Brigade"]).unwrap();
    let nova = add(&mut t, "Aces", "Nova");
    let orbit = add(&mut t, "Brigade", "Orbit");
    let pulse = add(&mut t, "Aces", "Pulse");
    set_stats(&mut t, nova, 5, 1, 9, 2);
    set_stats(&mut t, orbit, 7, 4, 0, 2);
    set_stats(&mut t, pulse, 5, 8, 3, 4);

    let board = player_leaderboard(&t, PlayerSortKey::Goals, 50);
    assert_eq!(names(&board), vec!["Orbit", "Nova", "Pulse"]);
    assert_eq!(board[0].position, 1);
    assert_eq!(board[0].team, "Brigade");

    assert_eq!(
        names(&player_leaderboard(&t, PlayerSortKey::Saves, 50)),
        vec!["Nova", "Pulse", "Orbit"]
    );
    // Equal wins keep registration order.
    assert_eq!(
        names(&player_leaderboard(&t, PlayerSortKey::Wins, 50)),
        vec!["Pulse", "Nova", "Orbit"]
    );
    let top = player_leaderboard(&t, PlayerSortKey::parse("assists"), 2);
    assert_eq!(names(&top), vec!["Pulse", "Orbit"]);
    assert_eq!(top[1].position, 2);
}

#[test]
fn team_rename_is_reflected_everywhere() {
    let mut t = Tournament::with_teams("s1", "Season 1", ["Aces", "Brigade"]).unwrap();
    add(&mut t, "Aces", "Nova");
    generate_schedule(&mut t, false).unwrap();
    let aces = team(&t, "Aces");

    t.update_team(
        aces,
        TeamUpdate {
            name: Some("Aerial Aces".to_string()),
            short_name: Some("ACE".to_string()),
        },
    )
    .unwrap();

    assert_eq!(t.team_name(aces), "Aerial Aces");
    let board = player_leaderboard(&t, PlayerSortKey::Goals, 10);
    assert_eq!(board[0].team, "Aerial Aces");
    assert_eq!(board[0].team_short_name.as_deref(), Some("ACE"));
    assert_eq!(
        t.update_team(
            aces,
            TeamUpdate {
                name: Some("brigade".to_string()),
                short_name: None,
            }
        )
        .err(),
        Some(TournamentError::DuplicateTeamName)
    );
}

#[test]
fn match_admin_keeps_standings_in_sync() {
    let mut t = Tournament::with_teams("s1", "Season 1", ["A", "B", "C"]).unwrap();
    generate_schedule(&mut t, false).unwrap();
    let (a, b, c) = (team(&t, "A"), team(&t, "B"), team(&t, "C"));

    // A replay between A and B, played and won by A.
    let replay = create_fixture(&mut t, 4, a, b).unwrap();
    assert_eq!(t.round_count(), 4);
    submit_prediction(&mut t, replay.id, "ada", 1, 0).unwrap();
    report_result(&mut t, replay.id, 2, 0).unwrap();
    assert_eq!(t.standing(a).unwrap().points, 3);

    // Reassigning the away side moves the loss from B to C.
    edit_fixture(
        &mut t,
        replay.id,
        FixtureUpdate {
            away: Some(c),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(t.standing(b).unwrap().played, 0);
    assert_eq!(t.standing(c).unwrap().lost, 1);

    assert_eq!(
        create_fixture(&mut t, 1, a, a).err(),
        Some(TournamentError::SameTeam(a))
    );

    delete_fixture(&mut t, replay.id).unwrap();
    assert!(t.standings.iter().all(|r| r.played == 0));
    assert!(t.predictions.is_empty());
    assert_eq!(t.fixtures.len(), 3);
}
