//! Round-robin pairing.
//!
//! Every unordered pair of distinct players meets exactly once per
//! round-robin, in ascending `(i, j)` order with `i < j`. The order is fixed
//! so a seeded run always consumes random draws in the same sequence.

/// Number of games in one round-robin over `player_count` players: `P(P-1)/2`.
#[must_use]
pub const fn round_robin_game_count(player_count: usize) -> usize {
    if player_count < 2 {
        0
    } else {
        player_count * (player_count - 1) / 2
    }
}

/// Iterate over all pairs `(i, j)` with `i < j < player_count`, ascending.
///
/// ```
/// use nash_sim::tournament::round_robin_pairs;
///
/// let pairs: Vec<_> = round_robin_pairs(3).collect();
/// assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
/// ```
pub fn round_robin_pairs(player_count: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..player_count).flat_map(move |i| (i + 1..player_count).map(move |j| (i, j)))
}

/// Borrow two distinct elements of a slice mutably.
///
/// Requires `first < second < items.len()`.
pub(crate) fn pair_mut<T>(items: &mut [T], first: usize, second: usize) -> (&mut T, &mut T) {
    debug_assert!(first < second, "pair must be ordered");
    let (head, tail) = items.split_at_mut(second);
    (&mut head[first], &mut tail[0])
}
