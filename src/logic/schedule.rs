//! Match schedule: expand pairings for the round type, reorder for rest, emit matches.

use crate::logic::pairing::{all_pairings, Pairing};
use crate::models::{GameMatch, MatchId, RoundType, Team};

/// Last-appearance marker for a team that has not played yet. Far enough back that
/// every team is immediately eligible, small enough that priorities cannot overflow.
const NEVER_PLAYED: i64 = -1_000;

/// Weight of the longer wait over the shorter one in a pairing's priority.
const LONGEST_WAIT_WEIGHT: i64 = 100;

/// Reorder pairings so each team rests as long as possible between appearances.
///
/// Greedy: at every step pick the remaining pair with the highest
/// `100 * max(wait) + min(wait)`; ties go to the pair seen first. The output is always
/// a permutation of the input. Quadratic in the number of pairs, which is fine at the
/// scale of a single day (56 matches for 8 teams playing twice).
pub fn optimize_order(pairings: Vec<Pairing>, num_teams: usize) -> Vec<Pairing> {
    let slots = pairings
        .iter()
        .map(|&(a, b)| a.max(b) + 1)
        .max()
        .unwrap_or(0)
        .max(num_teams);
    let mut last_played = vec![NEVER_PLAYED; slots];

    let mut remaining = pairings;
    let mut ordered = Vec::with_capacity(remaining.len());
    let mut step: i64 = 0;

    while !remaining.is_empty() {
        let mut best_idx = 0;
        let mut best_priority = i64::MIN;
        for (idx, &(a, b)) in remaining.iter().enumerate() {
            let wait_a = step - last_played[a];
            let wait_b = step - last_played[b];
            let priority = LONGEST_WAIT_WEIGHT * wait_a.max(wait_b) + wait_a.min(wait_b);
            if priority > best_priority {
                best_priority = priority;
                best_idx = idx;
            }
        }

        let (a, b) = remaining.remove(best_idx);
        last_played[a] = step;
        last_played[b] = step;
        ordered.push((a, b));
        step += 1;
    }

    ordered
}

/// Pairings for the round type before reordering. `TurnoReturno` appends every
/// pairing again with sides swapped.
pub fn expand_pairings(num_teams: usize, round_type: RoundType) -> Vec<Pairing> {
    let mut pairings = all_pairings(num_teams);
    if round_type == RoundType::TurnoReturno {
        let returns: Vec<Pairing> = pairings.iter().map(|&(a, b)| (b, a)).collect();
        pairings.extend(returns);
    }
    pairings
}

/// Generate the day's matches for the given teams.
///
/// Fewer than 2 teams yields an empty schedule. Matches are numbered from 1 in play
/// order, reference teams by id, and start unscored and unfinished.
pub fn generate_schedule(teams: &[Team], round_type: RoundType) -> Vec<GameMatch> {
    let n = teams.len();
    if n < 2 {
        return Vec::new();
    }

    let pairings = optimize_order(expand_pairings(n, round_type), n);
    log::debug!(
        "Generated {} matches for {} teams ({:?})",
        pairings.len(),
        n,
        round_type
    );

    pairings
        .into_iter()
        .zip(1..)
        .map(|((a, b), id): (Pairing, MatchId)| GameMatch::new(id, teams[a].id, teams[b].id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_pick_is_first_pair_when_everyone_is_fresh() {
        let ordered = optimize_order(vec![(0, 1), (2, 3), (0, 2)], 4);
        assert_eq!(ordered[0], (0, 1));
        // (2, 3) has both teams fresh, (0, 2) has team 0 just played.
        assert_eq!(ordered[1], (2, 3));
        assert_eq!(ordered[2], (0, 2));
    }

    #[test]
    fn rested_teams_go_before_teams_that_just_played() {
        // 0 and 1 just played; (1, 2) would bring 1 straight back.
        let ordered = optimize_order(vec![(0, 1), (1, 2), (2, 3), (0, 3)], 4);
        assert_eq!(ordered[0], (0, 1));
        assert_eq!(ordered[1], (2, 3));
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(optimize_order(Vec::new(), 0).is_empty());
    }
}
