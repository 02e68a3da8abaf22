//! Team formation: random draw with captains spread one per team, or manual assignment.

use crate::models::{DayError, GameFormat, Participant, ParticipantId, Team, MIN_PLAYERS};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Whether a roster of `roster_len` players can be drawn in `format`.
///
/// Returns the number of teams on success. Rosters below [`MIN_PLAYERS`] or not divisible
/// by the team size are rejected with how many players are missing.
pub fn draft_eligibility(roster_len: usize, format: GameFormat) -> Result<usize, DayError> {
    if roster_len < MIN_PLAYERS {
        return Err(DayError::NotEnoughPlayers {
            missing: MIN_PLAYERS - roster_len,
        });
    }
    let team_size = format.team_size();
    let remainder = roster_len % team_size;
    if remainder != 0 {
        return Err(DayError::IndivisibleRoster {
            format,
            missing: team_size - remainder,
        });
    }
    Ok(roster_len / team_size)
}

/// `count` empty teams named by format label and 1-based index ("Dupla 1", "Dupla 2", ...).
fn numbered_teams(format: GameFormat, count: usize) -> Vec<Team> {
    (1..=count)
        .map(|i| Team::new(format!("{} {}", format.label(), i)))
        .collect()
}

/// Draw teams for the roster.
///
/// 1. Shuffle captains and non-captains separately.
/// 2. Give the first `num_teams` captains one team each, in order.
/// 3. Pool everyone else (leftover captains + non-captains), shuffle again, and fill
///    the teams in order up to the team size.
///
/// The roster must pass [`draft_eligibility`]; otherwise nothing is drawn.
pub fn draft_teams<R: Rng + ?Sized>(
    players: &[Participant],
    format: GameFormat,
    rng: &mut R,
) -> Result<Vec<Team>, DayError> {
    let num_teams = draft_eligibility(players.len(), format)?;
    let team_size = format.team_size();

    let (mut captains, mut others): (Vec<Participant>, Vec<Participant>) =
        players.iter().cloned().partition(|p| p.is_captain);
    captains.shuffle(rng);
    others.shuffle(rng);

    let mut teams = numbered_teams(format, num_teams);

    let excess_captains = if captains.len() > num_teams {
        captains.split_off(num_teams)
    } else {
        Vec::new()
    };
    for (team, captain) in teams.iter_mut().zip(captains) {
        team.players.push(captain);
    }

    let mut pool: Vec<Participant> = excess_captains.into_iter().chain(others).collect();
    pool.shuffle(rng);
    let mut pool = pool.into_iter();
    for team in &mut teams {
        while team.players.len() < team_size {
            match pool.next() {
                Some(p) => team.players.push(p),
                None => break,
            }
        }
    }

    log::debug!(
        "Drew {} teams of {} from {} players",
        teams.len(),
        team_size,
        players.len()
    );
    Ok(teams)
}

/// Build teams from a manual assignment of participant ids.
///
/// Each group becomes one team, in order, named like drawn teams. The groups must use
/// every roster participant exactly once, with exactly `team_size` per group.
pub fn build_manual_teams(
    players: &[Participant],
    assignments: &[Vec<ParticipantId>],
    format: GameFormat,
) -> Result<Vec<Team>, DayError> {
    let num_teams = draft_eligibility(players.len(), format)?;
    let team_size = format.team_size();
    if assignments.len() != num_teams {
        return Err(DayError::WrongTeamCount {
            expected: num_teams,
            selected: assignments.len(),
        });
    }

    let mut seen = HashSet::new();
    let mut teams = numbered_teams(format, num_teams);
    for (idx, (team, ids)) in teams.iter_mut().zip(assignments).enumerate() {
        if ids.len() != team_size {
            return Err(DayError::WrongTeamSize {
                team: idx + 1,
                expected: team_size,
                selected: ids.len(),
            });
        }
        for &id in ids {
            if !seen.insert(id) {
                return Err(DayError::PlayerAssignedTwice(id));
            }
            let player = players
                .iter()
                .find(|p| p.id == id)
                .ok_or(DayError::PlayerNotFound(id))?;
            team.players.push(player.clone());
        }
    }
    Ok(teams)
}
