//! Day standings, fully recomputed from teams and matches.

use crate::models::{GameMatch, Side, Standing, Team, TeamId};
use std::collections::HashMap;

/// Rounded win percentage; 0 when nothing has been played.
fn win_percentage(wins: u32, played: u32) -> u32 {
    if played == 0 {
        return 0;
    }
    // round(wins / played * 100), halves rounding up
    (wins * 200 + played) / (2 * played)
}

/// One standing per team, best first.
///
/// Only finished matches with both scores set count. A tie adds to played and points
/// but to neither wins nor losses. Order: wins, then point differential, then points
/// for, all descending; teams equal on all three keep their input order.
pub fn compute_standings(teams: &[Team], matches: &[GameMatch]) -> Vec<Standing> {
    let mut standings: Vec<Standing> = teams
        .iter()
        .map(|t| Standing::new(t.id, t.name.clone()))
        .collect();
    let index: HashMap<TeamId, usize> = teams
        .iter()
        .enumerate()
        .map(|(i, t)| (t.id, i))
        .collect();

    for m in matches {
        let Some((score_1, score_2)) = m.result() else {
            continue;
        };
        let (Some(&i1), Some(&i2)) = (index.get(&m.team_1), index.get(&m.team_2)) else {
            log::debug!("Match {} references an unknown team; skipped", m.id);
            continue;
        };

        // Scores entered through a day are capped; saturate for hand-built matches.
        let s1 = &mut standings[i1];
        s1.played += 1;
        s1.points_for = s1.points_for.saturating_add(score_1);
        s1.points_against = s1.points_against.saturating_add(score_2);
        let s2 = &mut standings[i2];
        s2.played += 1;
        s2.points_for = s2.points_for.saturating_add(score_2);
        s2.points_against = s2.points_against.saturating_add(score_1);

        match m.winner() {
            Some(Side::One) => {
                standings[i1].wins += 1;
                standings[i2].losses += 1;
            }
            Some(Side::Two) => {
                standings[i2].wins += 1;
                standings[i1].losses += 1;
            }
            None => {}
        }
    }

    for s in &mut standings {
        s.points_diff = i64::from(s.points_for) - i64::from(s.points_against);
        s.win_percentage = win_percentage(s.wins, s.played);
    }

    // sort_by is stable
    standings.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then(b.points_diff.cmp(&a.points_diff))
            .then(b.points_for.cmp(&a.points_for))
    });
    standings
}
