use std::collections::HashSet;

use super::{timestamps::parse_completed_at, GameHistory, HistoryError};

pub const MIN_PLAYERS: usize = 2;

/// Checks the structural invariants a record must satisfy before it is stored.
///
/// Leg counts against `bestOf` and missing statistics entries are not
/// checked here; the first is the producer's concern and the second is
/// tolerated at display time.
pub fn validate_record(game: &GameHistory) -> Result<(), HistoryError> {
    if game.id.trim().is_empty() {
        return Err(HistoryError::Validation("game id is empty".to_string()));
    }

    if game.players.len() < MIN_PLAYERS {
        return Err(HistoryError::Validation(format!(
            "game {} has {} player(s), at least {} required",
            game.id,
            game.players.len(),
            MIN_PLAYERS
        )));
    }

    let mut seen = HashSet::new();
    for player in &game.players {
        if player.id.trim().is_empty() {
            return Err(HistoryError::Validation(format!(
                "game {} has a player with an empty id",
                game.id
            )));
        }
        if !seen.insert(player.id.as_str()) {
            return Err(HistoryError::Validation(format!(
                "game {} lists player id '{}' more than once",
                game.id, player.id
            )));
        }
    }

    if !seen.contains(game.winner_id.as_str()) {
        return Err(HistoryError::Validation(format!(
            "game {} winner '{}' is not one of its players",
            game.id, game.winner_id
        )));
    }

    let best_of = game.rules.best_of;
    if best_of == 0 || best_of % 2 == 0 {
        return Err(HistoryError::Validation(format!(
            "game {} bestOf must be a positive odd number, got {}",
            game.id, best_of
        )));
    }

    for (player_id, stats) in &game.statistics.player_stats {
        let average = stats.average_per_turn;
        if !average.is_finite() || average < 0.0 {
            return Err(HistoryError::Validation(format!(
                "game {} player '{}' has invalid averagePerTurn {}",
                game.id, player_id, average
            )));
        }
    }

    if parse_completed_at(&game.completed_at).is_none() {
        return Err(HistoryError::Validation(format!(
            "game {} completedAt '{}' is not an ISO-8601 date-time",
            game.id, game.completed_at
        )));
    }

    Ok(())
}
