//! Rank lookups and the stats API payloads they resolve to.

use serde::{Deserialize, Deserializer, Serialize};

/// Rocket League account platform, as understood by the stats API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Steam,
    Epic,
    Xbl,
    Psn,
}

impl Platform {
    pub const ALL: [Platform; 4] = [Platform::Steam, Platform::Epic, Platform::Xbl, Platform::Psn];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Steam => "steam",
            Platform::Epic => "epic",
            Platform::Xbl => "xbl",
            Platform::Psn => "psn",
        }
    }

    /// Name shown in the command's choice list.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Steam => "Steam",
            Platform::Epic => "Epic",
            Platform::Xbl => "Xbox",
            Platform::Psn => "Playstation",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }
}

/// Valorant shard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Na,
    Eu,
    Ap,
    Kr,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::Na, Region::Eu, Region::Ap, Region::Kr];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Na => "na",
            Region::Eu => "eu",
            Region::Ap => "ap",
            Region::Kr => "kr",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Region::Na => "North America/South America",
            Region::Eu => "Europe",
            Region::Ap => "Asia-Pacific",
            Region::Kr => "Korea",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }
}

/// One lookup, built from a single command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankQuery {
    RocketLeague {
        platform: Platform,
        username: String,
    },
    Valorant {
        region: Region,
        username: String,
        tag: String,
    },
}

impl RankQuery {
    pub fn username(&self) -> &str {
        match self {
            RankQuery::RocketLeague { username, .. } | RankQuery::Valorant { username, .. } => username,
        }
    }

    /// Riot tag, for Valorant lookups only.
    pub fn tag(&self) -> Option<&str> {
        match self {
            RankQuery::RocketLeague { .. } => None,
            RankQuery::Valorant { tag, .. } => Some(tag),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RankResult {
    RocketLeague(RocketLeagueProfile),
    Valorant(ValorantProfile),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RocketLeagueProfile {
    pub display_name: String,
    pub rankings: Vec<PlaylistEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistEntry {
    pub playlist: String,
    pub rank_name: String,
    pub division_name: String,
    pub mmr: i64,
    #[serde(default)]
    pub delta_up: i64,
    #[serde(default)]
    pub delta_down: i64,
}

/// Envelope returned by the Valorant MMR endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValorantResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: ValorantProfile,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValorantProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub puuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub current_data: CurrentData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentData {
    #[serde(deserialize_with = "null_as_default")]
    pub currenttier: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub currenttierpatched: String,
    #[serde(deserialize_with = "null_as_default")]
    pub images: TierImages,
    #[serde(deserialize_with = "null_as_default")]
    pub ranking_in_tier: i64,
    #[serde(rename = "mmr_change_to_last_game", deserialize_with = "null_as_default")]
    pub mmr_change_last_game: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub elo: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub games_needed_for_rating: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierImages {
    #[serde(deserialize_with = "null_as_default")]
    pub small: String,
    #[serde(deserialize_with = "null_as_default")]
    pub large: String,
}

// The Valorant API sends `null` for players that have never been ranked.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
