use serde::Serialize;
use std::collections::HashMap;

use super::{timestamps::parse_completed_at, GameHistory, Player, PlayerStats};

/// Shown in place of a value the player never recorded
pub const NO_VALUE_PLACEHOLDER: &str = "-";

const DATE_LABEL_FORMAT: &str = "%b %-d, %Y, %I:%M %p";
const SHORT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Display-ready form of [`PlayerStats`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayStats {
    pub darts_thrown: u32,
    pub average_per_turn: String,
    pub highest_turn: u32,
    pub highest_checkout: String,
    pub doubles_hit: u32,
    pub triples_hit: u32,
}

/// One decimal place, halves rounded away from zero
pub fn format_one_decimal(value: f64) -> String {
    let scaled = value * 10.0;
    if !scaled.is_finite() {
        return format!("{:.1}", value);
    }
    let rounded = scaled.round() / 10.0;
    // Negative zero would otherwise render as "-0.0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.1}", rounded)
}

pub fn summarize(stats: &PlayerStats) -> DisplayStats {
    DisplayStats {
        darts_thrown: stats.darts_thrown,
        average_per_turn: format_one_decimal(stats.average_per_turn),
        highest_turn: stats.highest_turn,
        highest_checkout: stats
            .highest_checkout
            .map(|checkout| checkout.to_string())
            .unwrap_or_else(|| NO_VALUE_PLACEHOLDER.to_string()),
        doubles_hit: stats.doubles_hit,
        triples_hit: stats.triples_hit,
    }
}

/// Display stats for every player that has a stats entry. Players without
/// one are left out rather than shown as zeros.
pub fn summarize_game(game: &GameHistory) -> HashMap<String, DisplayStats> {
    game.players
        .iter()
        .filter_map(|player| {
            game.stats_for(&player.id)
                .map(|stats| (player.id.clone(), summarize(stats)))
        })
        .collect()
}

/// Players listed in the game that have no stats entry
pub fn players_missing_stats(game: &GameHistory) -> Vec<&Player> {
    game.players
        .iter()
        .filter(|player| game.stats_for(&player.id).is_none())
        .collect()
}

/// Long label such as "Jan 5, 2024, 03:04 PM", in the timestamp's own offset
pub fn format_date_label(completed_at: &str) -> Option<String> {
    parse_completed_at(completed_at).map(|at| at.format(DATE_LABEL_FORMAT).to_string())
}

/// Short label such as "1/5/2024"
pub fn format_short_date(completed_at: &str) -> Option<String> {
    parse_completed_at(completed_at).map(|at| at.format(SHORT_DATE_FORMAT).to_string())
}
