use serde::Serialize;
use std::cmp::Ordering;

use super::{GameHistory, HistoryError, Player};

/// One line of a game's final standings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub rank: u32, // 1-based, positional
    pub player: Player,
    pub legs_won: u32,
}

/// Standings plus any disagreement between them and the recorded winner
#[derive(Debug, Clone)]
pub struct ResolvedStandings {
    pub standings: Vec<Standing>,
    pub inconsistency: Option<HistoryError>,
}

pub fn is_winner(game: &GameHistory, player_id: &str) -> bool {
    game.winner_id == player_id
}

/// Orders players by legs won, most first.
///
/// Players with equal legs keep their roster order, except that the
/// recorded winner goes first within its group. Ranks are never shared.
pub fn rank_players(game: &GameHistory) -> Vec<Standing> {
    let mut ordered: Vec<(&Player, u32)> = game
        .players
        .iter()
        .map(|player| (player, game.legs_for(&player.id)))
        .collect();

    ordered.sort_by(|(a, a_legs), (b, b_legs)| {
        b_legs
            .cmp(a_legs)
            .then_with(|| winner_first(game, a, b))
    });

    ordered
        .into_iter()
        .enumerate()
        .map(|(index, (player, legs_won))| Standing {
            rank: index as u32 + 1,
            player: player.clone(),
            legs_won,
        })
        .collect()
}

fn winner_first(game: &GameHistory, a: &Player, b: &Player) -> Ordering {
    match (is_winner(game, &a.id), is_winner(game, &b.id)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

/// Confirms the recorded winner has as many legs as the leader of `standings`
pub fn check_winner(game: &GameHistory, standings: &[Standing]) -> Result<(), HistoryError> {
    let Some(leader) = standings.first() else {
        return Ok(());
    };

    let winner_trails = match game.winner() {
        Some(winner) => game.legs_for(&winner.id) < leader.legs_won,
        None => true,
    };

    if winner_trails {
        return Err(HistoryError::RankingInconsistency {
            game_id: game.id.clone(),
            recorded_winner: game.winner_id.clone(),
            leader: leader.player.id.clone(),
        });
    }

    Ok(())
}

/// Ranks the players and checks the recorded winner against the result.
/// The standings are returned even when the check fails.
pub fn resolve_standings(game: &GameHistory) -> ResolvedStandings {
    let standings = rank_players(game);
    let inconsistency = check_winner(game, &standings).err();
    ResolvedStandings {
        standings,
        inconsistency,
    }
}
