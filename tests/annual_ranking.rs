//! Integration tests for the annual ranking across days.

use arena_volley_day::{
    aggregate_ranking, annual_ranking, dense_positions, is_day_complete, AnnualRankingEntry,
    GameDay, GameMatch, Participant, Team,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn team(name: &str, players: &[&str]) -> Team {
    let mut t = Team::new(name);
    t.players = players.iter().map(|p| Participant::new(*p)).collect();
    t
}

/// Day where teams finish in the given order: team i beats every team after it.
fn day_in_order(on: NaiveDate, teams: Vec<Team>) -> GameDay {
    let mut day = GameDay::new(on);
    day.players = teams.iter().flat_map(|t| t.players.clone()).collect();
    let mut id = 0;
    for i in 0..teams.len() {
        for j in i + 1..teams.len() {
            id += 1;
            let mut m = GameMatch::new(id, teams[i].id, teams[j].id);
            m.score_1 = Some(21);
            m.score_2 = Some(15);
            m.finished = true;
            day.matches.push(m);
        }
    }
    day.teams = teams;
    day
}

fn entry<'a>(ranking: &'a [AnnualRankingEntry], name: &str) -> &'a AnnualRankingEntry {
    ranking.iter().find(|e| e.player_name == name).unwrap()
}

#[test]
fn two_wins_are_worth_ten_points() {
    let d1 = day_in_order(
        date(2025, 3, 1),
        vec![team("Dupla 1", &["Ana", "Bia"]), team("Dupla 2", &["Caio", "Duda"]), team("Dupla 3", &["Edu", "Fabi"])],
    );
    let d2 = day_in_order(
        date(2025, 3, 8),
        vec![team("Dupla 1", &["Ana", "Caio"]), team("Dupla 2", &["Bia", "Edu"]), team("Dupla 3", &["Duda", "Fabi"])],
    );
    let ranking = annual_ranking(&[d1, d2], 2025);

    let ana = entry(&ranking, "Ana");
    assert_eq!(ana.total_points, 10);
    assert_eq!(ana.days_played, 2);
    assert_eq!(ranking[0].player_name, "Ana");

    assert_eq!(entry(&ranking, "Bia").total_points, 5 + 3);
    assert_eq!(entry(&ranking, "Caio").total_points, 3 + 5);
    assert_eq!(entry(&ranking, "Fabi").total_points, 2 + 2);
    assert_eq!(ranking.len(), 6);
}

#[test]
fn fifth_place_and_below_earn_nothing_but_count_the_day() {
    let teams: Vec<Team> = (1..=6)
        .map(|i| team(&format!("Dupla {i}"), &[format!("A{i}").as_str(), format!("B{i}").as_str()]))
        .collect();
    let ranking = aggregate_ranking(&[day_in_order(date(2025, 5, 1), teams)]);
    let points: Vec<u32> = ["A1", "A2", "A3", "A4", "A5", "A6"]
        .iter()
        .map(|n| entry(&ranking, n).total_points)
        .collect();
    assert_eq!(points, vec![5, 3, 2, 1, 0, 0]);
    assert!(ranking.iter().all(|e| e.days_played == 1));
}

#[test]
fn incomplete_and_empty_days_are_skipped() {
    let mut unfinished = day_in_order(
        date(2025, 6, 1),
        vec![team("Dupla 1", &["Ana", "Bia"]), team("Dupla 2", &["Caio", "Duda"]), team("Dupla 3", &["Edu", "Fabi"])],
    );
    unfinished.matches[2].finished = false;
    let empty = GameDay::new(date(2025, 6, 2));

    assert!(!is_day_complete(&unfinished));
    assert!(!is_day_complete(&empty));
    assert!(annual_ranking(&[unfinished, empty], 2025).is_empty());
}

#[test]
fn other_years_are_ignored() {
    let last_year = day_in_order(
        date(2024, 12, 31),
        vec![team("Dupla 1", &["Ana", "Bia"]), team("Dupla 2", &["Caio", "Duda"]), team("Dupla 3", &["Edu", "Fabi"])],
    );
    assert!(annual_ranking(std::slice::from_ref(&last_year), 2025).is_empty());
    assert_eq!(annual_ranking(&[last_year], 2024).len(), 6);
}

#[test]
fn players_are_matched_by_name_across_days() {
    // Fresh participant ids every day; the name is what links them.
    let d1 = day_in_order(
        date(2025, 1, 4),
        vec![team("Trio 1", &["Ana", "Bia", "Caio"]), team("Trio 2", &["Duda", "Edu", "Fabi"])],
    );
    let d2 = day_in_order(
        date(2025, 1, 11),
        vec![team("Trio 1", &["Duda", "Bia", "Gil"]), team("Trio 2", &["Ana", "Edu", "Caio"])],
    );
    let ranking = annual_ranking(&[d1, d2], 2025);
    assert_eq!(entry(&ranking, "Bia").total_points, 10);
    assert_eq!(entry(&ranking, "Bia").days_played, 2);
    assert_eq!(entry(&ranking, "Gil").days_played, 1);
}

#[test]
fn dense_positions_share_on_equal_totals() {
    let e = |name: &str, pts: u32| AnnualRankingEntry {
        player_name: name.to_string(),
        total_points: pts,
        days_played: 1,
    };
    let ranking = vec![e("A", 10), e("B", 10), e("C", 8), e("D", 5), e("E", 5), e("F", 1)];
    assert_eq!(dense_positions(&ranking), vec![1, 1, 2, 3, 3, 4]);
    assert!(dense_positions(&[]).is_empty());
}
