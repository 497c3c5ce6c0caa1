use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::errors::UnknownSortKey;

/// One leaderboard entry as published in the stats feed
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Player {
    pub rank: u32,
    pub name: String,
    pub level: u64,
    pub xp: u64,
    pub wins: u64,
    pub goals: u64,
    pub assists: u64,
    pub matches: u64,
    pub mvps: u64,
}

/// A full feed snapshot. Replaced wholesale on reload, never edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub players: Vec<Player>,
    pub last_updated: Option<String>,
}

impl Dataset {
    pub fn new(players: Vec<Player>, last_updated: Option<String>) -> Self {
        Self {
            players,
            last_updated,
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Sortable leaderboard columns, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Rank,
    Name,
    Level,
    Xp,
    Wins,
    Goals,
    Assists,
    Matches,
    Mvps,
}

impl SortKey {
    pub const ALL: [SortKey; 9] = [
        SortKey::Rank,
        SortKey::Name,
        SortKey::Level,
        SortKey::Xp,
        SortKey::Wins,
        SortKey::Goals,
        SortKey::Assists,
        SortKey::Matches,
        SortKey::Mvps,
    ];

    /// Attribute name as it appears in the feed
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Rank => "rank",
            SortKey::Name => "name",
            SortKey::Level => "level",
            SortKey::Xp => "xp",
            SortKey::Wins => "wins",
            SortKey::Goals => "goals",
            SortKey::Assists => "assists",
            SortKey::Matches => "matches",
            SortKey::Mvps => "mvps",
        }
    }

    /// Column header shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Rank => "#",
            SortKey::Name => "Nombre",
            SortKey::Level => "Nivel",
            SortKey::Xp => "XP",
            SortKey::Wins => "Victorias",
            SortKey::Goals => "Goles",
            SortKey::Assists => "Asistencias",
            SortKey::Matches => "Partidos",
            SortKey::Mvps => "MVPs",
        }
    }

    /// Numeric value of this column for a player. `None` for `Name`.
    pub fn numeric_value(&self, player: &Player) -> Option<u64> {
        match self {
            SortKey::Rank => Some(u64::from(player.rank)),
            SortKey::Name => None,
            SortKey::Level => Some(player.level),
            SortKey::Xp => Some(player.xp),
            SortKey::Wins => Some(player.wins),
            SortKey::Goals => Some(player.goals),
            SortKey::Assists => Some(player.assists),
            SortKey::Matches => Some(player.matches),
            SortKey::Mvps => Some(player.mvps),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    /// Accepts either the feed attribute name or the header label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|key| {
                key.as_str().eq_ignore_ascii_case(wanted) || key.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn ascending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    pub fn descending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Descending)
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::ascending(SortKey::Rank)
    }
}
