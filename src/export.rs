//! Share texts and CSV documents for a day and for the annual ranking. Read-only views.

use crate::logic::dense_positions;
use crate::models::{AnnualRankingEntry, GameDay, Standing, RANKING_POINTS};
use chrono::NaiveDate;

const TITLE: &str = "ARENA BEACH VOLLEY";
const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

/// `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Match clock as `M:SS`.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Medal for positions 1-3, `N°` after that. `position` is 1-based.
pub fn position_label(position: usize) -> String {
    match MEDALS.get(position.wrapping_sub(1)) {
        Some(medal) => medal.to_string(),
        None => format!("{}°", position),
    }
}

fn standing_line(position: usize, s: &Standing) -> String {
    format!(
        "{} {}  V{} D{}  SP:{}  ({}%)",
        position_label(position),
        s.team_name,
        s.wins,
        s.losses,
        s.signed_diff(),
        s.win_percentage
    )
}

fn day_subtitle(day: &GameDay) -> String {
    format!("📅 {} • {}s", format_date(day.date), day.format.label())
}

fn scoring_footer() -> String {
    let parts: Vec<String> = RANKING_POINTS
        .iter()
        .enumerate()
        .map(|(i, pts)| format!("{}°={}", i + 1, pts))
        .collect();
    format!("_Pontuação: {}_", parts.join("  "))
}

/// Full day summary: teams, every match with score and clock, standings.
pub fn results_message(day: &GameDay) -> String {
    let mut lines = vec![
        format!("🏐 *{}*", TITLE),
        day_subtitle(day),
        String::new(),
        "🏆 *TIMES*".to_string(),
    ];
    lines.extend(
        day.teams
            .iter()
            .map(|t| format!("  {}: {}", t.name, t.roster_line())),
    );

    lines.push(String::new());
    lines.push("⚔️ *JOGOS*".to_string());
    for (i, m) in day.matches.iter().enumerate() {
        let name = |id| day.team(id).map(|t| t.name.as_str()).unwrap_or("?");
        let score = match m.result() {
            Some((s1, s2)) => format!("{} x {}", s1, s2),
            None => "_ x _".to_string(),
        };
        let clock = if m.finished && m.timer_seconds > 0 {
            format!(" ⏱{}", format_clock(m.timer_seconds))
        } else {
            String::new()
        };
        lines.push(format!(
            "  {}. {} {} {}{}",
            i + 1,
            name(m.team_1),
            score,
            name(m.team_2),
            clock
        ));
    }

    lines.push(String::new());
    lines.push("📊 *CLASSIFICAÇÃO*".to_string());
    lines.extend(
        day.standings()
            .iter()
            .enumerate()
            .map(|(i, s)| format!("  {}", standing_line(i + 1, s))),
    );
    lines.join("\n")
}

/// Standings only. Positions are plain 1, 2, 3, ...
pub fn standings_message(day: &GameDay) -> String {
    let mut lines = vec![
        "🏐 *CLASSIFICAÇÃO FINAL*".to_string(),
        day_subtitle(day),
        String::new(),
    ];
    lines.extend(
        day.standings()
            .iter()
            .enumerate()
            .map(|(i, s)| standing_line(i + 1, s)),
    );
    lines.join("\n")
}

/// Annual ranking. Equal totals share a position (dense ranking).
pub fn ranking_message(ranking: &[AnnualRankingEntry], year: i32) -> String {
    let mut lines = vec![format!("🏐 *RANKING ANUAL {}*", year), String::new()];
    for (entry, position) in ranking.iter().zip(dense_positions(ranking)) {
        lines.push(format!(
            "{} {} — {} pts ({} dias)",
            position_label(position),
            entry.player_name,
            entry.total_points,
            entry.days_played
        ));
    }
    lines.push(String::new());
    lines.push(scoring_footer());
    lines.join("\n")
}

/// Standings as CSV, one row per team in ranked order.
pub fn standings_csv(standings: &[Standing]) -> Result<Vec<u8>, csv::Error> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record([
        "position", "team", "played", "wins", "losses", "points_for", "points_against",
        "points_diff", "win_percentage",
    ])?;
    for (i, s) in standings.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            s.team_name.clone(),
            s.played.to_string(),
            s.wins.to_string(),
            s.losses.to_string(),
            s.points_for.to_string(),
            s.points_against.to_string(),
            s.points_diff.to_string(),
            s.win_percentage.to_string(),
        ])?;
    }
    wtr.into_inner().map_err(|e| e.into_error().into())
}

/// Annual ranking as CSV with dense positions.
pub fn ranking_csv(ranking: &[AnnualRankingEntry]) -> Result<Vec<u8>, csv::Error> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["position", "player", "total_points", "days_played"])?;
    for (entry, position) in ranking.iter().zip(dense_positions(ranking)) {
        wtr.write_record([
            position.to_string(),
            entry.player_name.clone(),
            entry.total_points.to_string(),
            entry.days_played.to_string(),
        ])?;
    }
    wtr.into_inner().map_err(|e| e.into_error().into())
}
