use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::domain::{Player, SortDirection, SortKey, SortSpec};

/// Return a copy of `players` ordered by `spec`.
///
/// `name` compares as a plain (case-sensitive) string, every other column
/// numerically. The sort is stable in both directions: players with equal
/// keys keep their input order, descending included.
pub fn sort_players<P>(players: &[P], spec: SortSpec) -> Vec<P>
where
    P: Borrow<Player> + Clone,
{
    let mut sorted = players.to_vec();
    sorted.sort_by(|a, b| compare(Borrow::<Player>::borrow(a), Borrow::<Player>::borrow(b), spec));
    sorted
}

/// Ordering of two players under `spec`
pub fn compare(a: &Player, b: &Player, spec: SortSpec) -> Ordering {
    let ordering = compare_by_key(a, b, spec.key);
    match spec.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

fn compare_by_key(a: &Player, b: &Player, key: SortKey) -> Ordering {
    match (key.numeric_value(a), key.numeric_value(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => a.name.cmp(&b.name),
    }
}
