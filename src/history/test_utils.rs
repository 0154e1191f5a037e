use std::collections::HashMap;

use super::{GameHistory, GameRules, GameType, Player, PlayerStats, Statistics};

pub fn sample_stats() -> PlayerStats {
    PlayerStats {
        darts_thrown: 30,
        average_per_turn: 45.0,
        highest_turn: 100,
        highest_checkout: Some(32),
        doubles_hit: 2,
        triples_hit: 4,
    }
}

/// Builds valid records; defaults to the Ann (3 legs) vs Bo (1 leg) 501 game
pub struct GameHistoryBuilder {
    game: GameHistory,
}

impl GameHistoryBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            game: GameHistory {
                id: id.to_string(),
                game_type: GameType::FiveOhOne,
                players: vec![],
                winner_id: "a".to_string(),
                legs_won: HashMap::new(),
                rules: GameRules { best_of: 5 },
                statistics: Statistics::default(),
                completed_at: "2024-01-01T12:00:00Z".to_string(),
            },
        }
        .players(&[("a", "Ann", 3), ("b", "Bo", 1)])
    }

    /// Replaces the roster with `(id, name, legs)` entries, each with sample stats
    pub fn players(mut self, roster: &[(&str, &str, u32)]) -> Self {
        self.game.players = roster
            .iter()
            .map(|(id, name, _)| Player {
                id: id.to_string(),
                name: name.to_string(),
                avatar_color: "#39ff14".to_string(),
            })
            .collect();
        self.game.legs_won = roster
            .iter()
            .map(|(id, _, legs)| (id.to_string(), *legs))
            .collect();
        self.game.statistics.player_stats = roster
            .iter()
            .map(|(id, _, _)| (id.to_string(), sample_stats()))
            .collect();
        self
    }

    pub fn game_type(mut self, game_type: GameType) -> Self {
        self.game.game_type = game_type;
        self
    }

    pub fn winner(mut self, winner_id: &str) -> Self {
        self.game.winner_id = winner_id.to_string();
        self
    }

    pub fn completed_at(mut self, completed_at: &str) -> Self {
        self.game.completed_at = completed_at.to_string();
        self
    }

    pub fn best_of(mut self, best_of: u32) -> Self {
        self.game.rules.best_of = best_of;
        self
    }

    pub fn stats(mut self, player_id: &str, stats: PlayerStats) -> Self {
        self.game
            .statistics
            .player_stats
            .insert(player_id.to_string(), stats);
        self
    }

    pub fn without_stats(mut self, player_id: &str) -> Self {
        self.game.statistics.player_stats.remove(player_id);
        self
    }

    pub fn without_legs(mut self, player_id: &str) -> Self {
        self.game.legs_won.remove(player_id);
        self
    }

    pub fn build(self) -> GameHistory {
        self.game
    }
}
