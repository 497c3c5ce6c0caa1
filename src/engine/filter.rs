use std::borrow::Borrow;

use crate::domain::Player;

/// Keep players whose name contains `term`, ignoring case.
///
/// An empty term keeps everyone. Input order is preserved and the input
/// slice is left untouched.
pub fn filter_players<P>(players: &[P], term: &str) -> Vec<P>
where
    P: Borrow<Player> + Clone,
{
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return players.to_vec();
    }

    players
        .iter()
        .filter(|p| matches_name(Borrow::<Player>::borrow(*p), &needle))
        .cloned()
        .collect()
}

fn matches_name(player: &Player, lowered_term: &str) -> bool {
    player.name.to_lowercase().contains(lowered_term)
}
