use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

use super::models::{Dataset, Player};
use crate::errors::LoadError;

/// Parse a stats feed body into a dataset.
///
/// The body itself must be an object with a `players` array. Individual
/// entries that fail to decode, have a zero rank, or repeat an earlier rank
/// are dropped and logged; the remaining players keep their feed order.
pub fn parse_feed(body: &str) -> Result<Dataset, LoadError> {
    let root: Value = serde_json::from_str(body)
        .map_err(|e| LoadError::new(format!("Failed to parse stats feed: {}", e)))?;

    let entries = extract_players(&root)?;
    let players = decode_players(entries);
    let last_updated = extract_last_updated(&root);

    debug!(
        "Parsed feed: {} of {} players accepted, lastUpdated={:?}",
        players.len(),
        entries.len(),
        last_updated
    );

    Ok(Dataset::new(players, last_updated))
}

fn extract_players(root: &Value) -> Result<&Vec<Value>, LoadError> {
    root.get("players")
        .and_then(Value::as_array)
        .ok_or_else(|| LoadError::new("Failed to parse stats feed: missing 'players' array"))
}

fn extract_last_updated(root: &Value) -> Option<String> {
    root.get("lastUpdated")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn decode_players(entries: &[Value]) -> Vec<Player> {
    let mut seen_ranks = HashSet::new();
    let mut players = Vec::with_capacity(entries.len());

    for (idx, entry) in entries.iter().enumerate() {
        let player = match decode_player(entry) {
            Ok(p) => p,
            Err(reason) => {
                warn!("Skipping player #{} in feed: {}", idx, reason);
                continue;
            }
        };

        if !seen_ranks.insert(player.rank) {
            warn!(
                "Skipping player #{} in feed: duplicate rank {} ({})",
                idx, player.rank, player.name
            );
            continue;
        }

        players.push(player);
    }

    players
}

fn decode_player(entry: &Value) -> Result<Player, String> {
    let player = Player::deserialize(entry).map_err(|e| e.to_string())?;
    if player.rank == 0 {
        return Err(format!("rank must be positive ({})", player.name));
    }
    Ok(player)
}
