//! Integration tests for share texts and CSV exports.

use arena_volley_day::export::{
    format_clock, format_date, position_label, ranking_csv, ranking_message, results_message,
    standings_csv, standings_message,
};
use arena_volley_day::{AnnualRankingEntry, GameDay, GameMatch, Participant, Team};
use chrono::NaiveDate;

fn finished_day() -> GameDay {
    let mut day = GameDay::new(NaiveDate::from_ymd_opt(2025, 7, 9).unwrap());
    let mut a = Team::new("Dupla 1");
    a.players = vec![Participant::captain("Ana"), Participant::new("Bia")];
    let mut b = Team::new("Dupla 2");
    b.players = vec![Participant::new("Caio"), Participant::new("Duda")];

    let mut m = GameMatch::new(1, a.id, b.id);
    m.score_1 = Some(21);
    m.score_2 = Some(15);
    m.finished = true;
    m.timer_seconds = 754;
    day.players = a.players.iter().chain(&b.players).cloned().collect();
    day.teams = vec![a, b];
    day.matches = vec![m, GameMatch::new(2, day.teams[1].id, day.teams[0].id)];
    day
}

fn entry(name: &str, points: u32, days: u32) -> AnnualRankingEntry {
    AnnualRankingEntry {
        player_name: name.to_string(),
        total_points: points,
        days_played: days,
    }
}

#[test]
fn formatting_helpers() {
    assert_eq!(format_date(NaiveDate::from_ymd_opt(2025, 7, 9).unwrap()), "09/07/2025");
    assert_eq!(format_clock(754), "12:34");
    assert_eq!(format_clock(5), "0:05");
    assert_eq!(position_label(1), "🥇");
    assert_eq!(position_label(3), "🥉");
    assert_eq!(position_label(4), "4°");
}

#[test]
fn results_message_lists_teams_matches_and_standings() {
    let text = results_message(&finished_day());
    assert!(text.contains("📅 09/07/2025 • Duplas"));
    assert!(text.contains("Dupla 1: ★Ana, Bia"));
    assert!(text.contains("1. Dupla 1 21 x 15 Dupla 2 ⏱12:34"));
    assert!(text.contains("2. Dupla 2 _ x _ Dupla 1"));
    assert!(text.contains("🥇 Dupla 1  V1 D0  SP:+6  (100%)"));
    assert!(text.contains("🥈 Dupla 2  V0 D1  SP:-6  (0%)"));
}

#[test]
fn standings_message_has_only_the_table() {
    let text = standings_message(&finished_day());
    assert!(text.starts_with("🏐 *CLASSIFICAÇÃO FINAL*"));
    assert!(!text.contains("JOGOS"));
    assert_eq!(text.lines().filter(|l| l.contains("SP:")).count(), 2);
}

#[test]
fn ranking_message_shares_medals_on_ties() {
    let ranking = vec![entry("Ana", 10, 2), entry("Bia", 10, 2), entry("Caio", 6, 2), entry("Duda", 4, 2), entry("Edu", 1, 1)];
    let text = ranking_message(&ranking, 2025);
    assert!(text.contains("RANKING ANUAL 2025"));
    assert!(text.contains("🥇 Ana — 10 pts (2 dias)"));
    assert!(text.contains("🥇 Bia — 10 pts (2 dias)"));
    assert!(text.contains("🥈 Caio — 6 pts"));
    assert!(text.contains("🥉 Duda — 4 pts"));
    assert!(text.contains("4° Edu — 1 pts (1 dias)"));
    assert!(text.ends_with("_Pontuação: 1°=5  2°=3  3°=2  4°=1_"));
}

#[test]
fn standings_csv_has_header_and_rows() {
    let day = finished_day();
    let csv = String::from_utf8(standings_csv(&day.standings()).unwrap()).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "position,team,played,wins,losses,points_for,points_against,points_diff,win_percentage"
    );
    assert_eq!(lines[1], "1,Dupla 1,1,1,0,21,15,6,100");
    assert_eq!(lines[2], "2,Dupla 2,1,0,1,15,21,-6,0");
}

#[test]
fn ranking_csv_uses_dense_positions() {
    let ranking = vec![entry("Ana", 5, 1), entry("Bia", 5, 1), entry("Caio", 3, 1)];
    let csv = String::from_utf8(ranking_csv(&ranking).unwrap()).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines, vec!["position,player,total_points,days_played", "1,Ana,5,1", "1,Bia,5,1", "2,Caio,3,1"]);
}
