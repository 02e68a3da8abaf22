//! Round-robin pairings via the circle method.

/// Two team indices (positions in the day's team list). First is side one.
pub type Pairing = (usize, usize);

/// Every unordered pair of `num_teams` teams, grouped into rounds.
///
/// Index 0 stays fixed while the others rotate around it. Odd counts get a phantom
/// "bye" index equal to `num_teams`; any pair touching it is dropped, so the result
/// always holds exactly `n * (n - 1) / 2` pairs and no team plays twice in a round.
/// Fewer than 2 teams yields no rounds.
pub fn round_robin_rounds(num_teams: usize) -> Vec<Vec<Pairing>> {
    if num_teams < 2 {
        return Vec::new();
    }
    let slots = if num_teams % 2 == 0 { num_teams } else { num_teams + 1 };
    let is_real = |idx: usize| idx < num_teams;

    let mut circle: Vec<usize> = (1..slots).collect();
    let mut rounds = Vec::with_capacity(slots - 1);

    for _ in 0..slots - 1 {
        let mut round = Vec::with_capacity(slots / 2);

        let opponent = circle[0];
        if is_real(opponent) {
            round.push((0, opponent));
        }
        // Outside-in over the rest of the circle.
        for i in 1..slots / 2 {
            let t1 = circle[i];
            let t2 = circle[circle.len() - i];
            if is_real(t1) && is_real(t2) {
                round.push((t1, t2));
            }
        }

        rounds.push(round);
        circle.rotate_right(1);
    }

    rounds
}

/// Rounds flattened into a single list, round order preserved.
pub fn all_pairings(num_teams: usize) -> Vec<Pairing> {
    round_robin_rounds(num_teams).into_iter().flatten().collect()
}
