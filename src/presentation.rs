//! # Feature: Rank Presentation
//!
//! Turns stats API payloads into the embed that replaces a deferred
//! interaction response.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Rocket League playlist lines, Valorant tier colours

use crate::models::{PlaylistEntry, RankQuery, RankResult, RocketLeagueProfile, ValorantProfile};

pub const DEFAULT_COLOUR: u32 = 0xFFFFFF;

/// What ends up in the edited interaction response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationOutput {
    pub title: String,
    pub description: Option<String>,
    /// 24-bit RGB.
    pub colour: Option<u32>,
}

/// Embed colour for a Valorant tier name such as `"Gold"`.
pub fn rank_to_colour(rank: &str) -> u32 {
    match rank {
        "Unranked" => 0x797373,
        "Iron" => 0x3b3b3b,
        "Bronze" => 0x69450d,
        "Silver" => 0xbbbfbe,
        "Gold" => 0xdd9623,
        "Platinum" => 0x328d9e,
        "Diamond" => 0xd781e9,
        "Ascendant" => 0x1e8a51,
        "Immortal" => 0xb02639,
        "Radiant" => 0xfce29b,
        _ => DEFAULT_COLOUR,
    }
}

/// Arrow indicator for a playlist's MMR movement.
///
/// Only ever prints one of the two counters: the down counter when
/// `delta_up` is the larger one, the up counter when `delta_down` is.
pub fn get_delta(delta_up: i64, delta_down: i64) -> String {
    if delta_up > delta_down {
        format!("▼ {}", delta_down)
    } else if delta_up < delta_down {
        format!("▲ {}", delta_up)
    } else {
        String::new()
    }
}

/// `"ranked_duos"` -> `"Ranked Duos"`, `"ranked_2v2"` -> `"Ranked 2V2"`.
pub fn format_playlist_name(playlist: &str) -> String {
    let spaced = playlist.replace('_', " ").replacen('v', "V", 1);

    let mut formatted = String::with_capacity(spaced.len());
    let mut word_start = true;
    for c in spaced.chars() {
        if word_start {
            formatted.extend(c.to_uppercase());
        } else {
            formatted.push(c);
        }
        word_start = !(c.is_alphanumeric() || c == '_');
    }
    formatted
}

pub fn playlist_line(entry: &PlaylistEntry) -> String {
    let delta = get_delta(entry.delta_up, entry.delta_down);
    let mmr = if delta.is_empty() {
        entry.mmr.to_string()
    } else {
        format!("{} {}", entry.mmr, delta)
    };

    format!(
        "{}: {} {} ({})",
        format_playlist_name(&entry.playlist),
        entry.rank_name,
        entry.division_name,
        mmr
    )
}

pub fn rocket_league_output(profile: &RocketLeagueProfile) -> PresentationOutput {
    let lines: Vec<String> = profile
        .rankings
        .iter()
        .filter(|entry| entry.playlist != "unranked")
        .map(playlist_line)
        .collect();

    PresentationOutput {
        title: format!("Ranks for {}", profile.display_name),
        description: (!lines.is_empty()).then(|| lines.join("\n")),
        colour: None,
    }
}

pub fn valorant_output(profile: &ValorantProfile) -> PresentationOutput {
    let current = &profile.current_data;
    let tier = current.currenttierpatched.split(' ').next().unwrap_or_default();

    PresentationOutput {
        title: format!("Rank for {}#{}", profile.name, profile.tag),
        description: Some(format!(
            "Rank: {}\nELO: {}\nMMR Last Game: {}",
            current.currenttierpatched, current.elo, current.mmr_change_last_game
        )),
        colour: Some(rank_to_colour(tier)),
    }
}

pub fn success_output(result: &RankResult) -> PresentationOutput {
    match result {
        RankResult::RocketLeague(profile) => rocket_league_output(profile),
        RankResult::Valorant(profile) => valorant_output(profile),
    }
}

/// Failure embed for a lookup; carries a title only.
///
/// A `tag` marks a Valorant lookup, which reports the full Riot ID.
pub fn failure_output(username: &str, tag: Option<&str>) -> PresentationOutput {
    let title = match tag {
        Some(tag) => format!("Failed to get ranks for {}#{}", username, tag),
        None => format!("Failed to get rank for {}", username),
    };
    PresentationOutput {
        title,
        description: None,
        colour: None,
    }
}

pub fn query_failure_output(query: &RankQuery) -> PresentationOutput {
    failure_output(query.username(), query.tag())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CurrentData, Platform, Region};

    fn entry(playlist: &str, mmr: i64, delta_up: i64, delta_down: i64) -> PlaylistEntry {
        PlaylistEntry {
            playlist: playlist.to_string(),
            rank_name: "Diamond".to_string(),
            division_name: "II".to_string(),
            mmr,
            delta_up,
            delta_down,
        }
    }

    #[test]
    fn test_rank_to_colour_known_tiers() {
        let table = [
            ("Unranked", 0x797373),
            ("Iron", 0x3b3b3b),
            ("Bronze", 0x69450d),
            ("Silver", 0xbbbfbe),
            ("Gold", 0xdd9623),
            ("Platinum", 0x328d9e),
            ("Diamond", 0xd781e9),
            ("Ascendant", 0x1e8a51),
            ("Immortal", 0xb02639),
            ("Radiant", 0xfce29b),
        ];
        for (tier, colour) in table {
            assert_eq!(rank_to_colour(tier), colour, "colour for {}", tier);
        }
    }

    #[test]
    fn test_rank_to_colour_unknown_is_white() {
        for tier in ["", "gold", "Gold 2", "Champion", "Grand Champion"] {
            assert_eq!(rank_to_colour(tier), 0xFFFFFF);
        }
    }

    #[test]
    fn test_get_delta() {
        assert_eq!(get_delta(12, 7), "▼ 7");
        assert_eq!(get_delta(3, 9), "▲ 3");
        assert_eq!(get_delta(5, 5), "");
        assert_eq!(get_delta(0, 0), "");
    }

    #[test]
    fn test_get_delta_never_mentions_both_counters() {
        for (up, down) in [(21, 34), (34, 21), (8, 8)] {
            let delta = get_delta(up, down);
            assert!(!(delta.contains(&up.to_string()) && delta.contains(&down.to_string())));
        }
    }

    #[test]
    fn test_format_playlist_name() {
        assert_eq!(format_playlist_name("ranked_duos"), "Ranked Duos");
        assert_eq!(format_playlist_name("ranked_standard"), "Ranked Standard");
        assert_eq!(format_playlist_name("ranked_2v2"), "Ranked 2V2");
        assert_eq!(format_playlist_name("ranked_1v1_duel"), "Ranked 1V1 Duel");
        assert_eq!(format_playlist_name("hoops"), "Hoops");
    }

    #[test]
    fn test_format_playlist_name_only_first_v() {
        assert_eq!(format_playlist_name("rival_vs_v"), "RiVal Vs V");
    }

    #[test]
    fn test_format_playlist_name_idempotent_on_formatted_input() {
        for formatted in ["Ranked Duos", "Tournament Matches", "Ranked 3V3"] {
            assert_eq!(format_playlist_name(formatted), formatted);
        }
    }

    #[test]
    fn test_playlist_line() {
        assert_eq!(playlist_line(&entry("ranked_duos", 900, 5, 5)), "Ranked Duos: Diamond II (900)");
        assert_eq!(playlist_line(&entry("ranked_duos", 900, 10, 4)), "Ranked Duos: Diamond II (900 ▼ 4)");
        assert_eq!(playlist_line(&entry("ranked_duos", 900, 4, 10)), "Ranked Duos: Diamond II (900 ▲ 4)");
    }

    #[test]
    fn test_rocket_league_output_skips_unranked_and_keeps_order() {
        let profile = RocketLeagueProfile {
            display_name: "Foo".to_string(),
            rankings: vec![
                entry("ranked_standard", 1100, 0, 0),
                entry("unranked", 1500, 0, 0),
                entry("ranked_duos", 900, 0, 0),
                entry("hoops", 700, 0, 0),
            ],
        };
        let output = rocket_league_output(&profile);
        assert_eq!(output.title, "Ranks for Foo");
        assert_eq!(
            output.description.as_deref(),
            Some("Ranked Standard: Diamond II (1100)\nRanked Duos: Diamond II (900)\nHoops: Diamond II (700)")
        );
        assert_eq!(output.colour, None);
    }

    #[test]
    fn test_rocket_league_output_without_ranked_playlists() {
        let profile = RocketLeagueProfile {
            display_name: "Foo".to_string(),
            rankings: vec![entry("unranked", 1500, 0, 0)],
        };
        assert_eq!(rocket_league_output(&profile).description, None);
    }

    #[test]
    fn test_valorant_output() {
        let profile = ValorantProfile {
            name: "Bar".to_string(),
            tag: "EUW".to_string(),
            current_data: CurrentData {
                currenttierpatched: "Gold 2".to_string(),
                elo: 1234,
                mmr_change_last_game: -18,
                ..Default::default()
            },
            ..Default::default()
        };
        let output = valorant_output(&profile);
        assert_eq!(output.title, "Rank for Bar#EUW");
        assert_eq!(output.description.as_deref(), Some("Rank: Gold 2\nELO: 1234\nMMR Last Game: -18"));
        assert_eq!(output.colour, Some(0xdd9623));
    }

    #[test]
    fn test_valorant_output_unrated_tier_is_white() {
        let profile = ValorantProfile {
            name: "Bar".to_string(),
            tag: "EUW".to_string(),
            ..Default::default()
        };
        assert_eq!(valorant_output(&profile).colour, Some(DEFAULT_COLOUR));
    }

    #[test]
    fn test_failure_output_titles() {
        let rl = RankQuery::RocketLeague {
            platform: Platform::Epic,
            username: "Foo".to_string(),
        };
        let val = RankQuery::Valorant {
            region: Region::Eu,
            username: "Bar".to_string(),
            tag: "EUW".to_string(),
        };
        assert_eq!(query_failure_output(&rl).title, "Failed to get rank for Foo");
        let output = query_failure_output(&val);
        assert_eq!(output.title, "Failed to get ranks for Bar#EUW");
        assert_eq!(output.description, None);
        assert_eq!(output.colour, None);
    }
}
