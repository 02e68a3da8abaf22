//! Season leaderboard: standings of every completed day folded into per-player points.
//!
//! Players are identified across days by display name only. A renamed player starts a
//! new entry and two different people sharing a name are merged; that is a known
//! limitation of keying by name.

use crate::logic::standings::compute_standings;
use crate::models::{ranking_points_for, AnnualRankingEntry, GameDay};
use chrono::Datelike;
use std::collections::HashMap;

/// A day counts once it has at least one match and every match is finished.
pub fn is_day_complete(day: &GameDay) -> bool {
    !day.matches.is_empty() && day.matches.iter().all(|m| m.finished)
}

/// Fold the given days into per-player totals, highest total first.
///
/// Incomplete days are skipped. Every member of the team at standings position `idx`
/// earns `RANKING_POINTS[idx]` (0 past 4th) and one day played. Entries with equal
/// totals stay in first-seen order.
pub fn aggregate_ranking<'a, I>(days: I) -> Vec<AnnualRankingEntry>
where
    I: IntoIterator<Item = &'a GameDay>,
{
    let mut entries: Vec<AnnualRankingEntry> = Vec::new();
    let mut by_name: HashMap<String, usize> = HashMap::new();

    for day in days.into_iter().filter(|d| is_day_complete(d)) {
        let standings = compute_standings(&day.teams, &day.matches);
        for (idx, standing) in standings.iter().enumerate() {
            let Some(team) = day.team(standing.team_id) else {
                continue;
            };
            let points = ranking_points_for(idx);
            for player in &team.players {
                let slot = *by_name.entry(player.name.clone()).or_insert_with(|| {
                    entries.push(AnnualRankingEntry {
                        player_name: player.name.clone(),
                        total_points: 0,
                        days_played: 0,
                    });
                    entries.len() - 1
                });
                entries[slot].total_points += points;
                entries[slot].days_played += 1;
            }
        }
    }

    entries.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    entries
}

/// Ranking for one calendar year.
pub fn annual_ranking(days: &[GameDay], year: i32) -> Vec<AnnualRankingEntry> {
    let ranking = aggregate_ranking(days.iter().filter(|d| d.date.year() == year));
    log::debug!("Annual ranking {}: {} players", year, ranking.len());
    ranking
}

/// Ranking for the current local year.
pub fn annual_ranking_for_current_year(days: &[GameDay]) -> Vec<AnnualRankingEntry> {
    annual_ranking(days, chrono::Local::now().year())
}

/// Dense 1-based positions for a ranking sorted by total: entries with equal totals
/// share a position, and the next distinct total takes the next position.
pub fn dense_positions(ranking: &[AnnualRankingEntry]) -> Vec<usize> {
    let mut positions = Vec::with_capacity(ranking.len());
    let mut position = 0;
    let mut previous: Option<u32> = None;
    for entry in ranking {
        if previous != Some(entry.total_points) {
            position += 1;
            previous = Some(entry.total_points);
        }
        positions.push(position);
    }
    positions
}
