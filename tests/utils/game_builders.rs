use serde_json::{json, Value};

use dartlog::GameHistory;

// ============================================================================
// Game Record Builders
// ============================================================================

/// Builds completed-game records as the live game engine would send them
pub struct GameBuilder {
    id: String,
    game_type: String,
    roster: Vec<(String, String, u32)>,
    winner_id: Option<String>,
    best_of: u32,
    completed_at: String,
    missing_stats: Vec<String>,
}

impl GameBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            game_type: "501".to_string(),
            roster: vec![],
            winner_id: None,
            best_of: 5,
            completed_at: "2024-01-01T12:00:00Z".to_string(),
            missing_stats: vec![],
        }
    }

    /// Ann beats Bo three legs to one
    pub fn with_simple_two_player_game(self) -> Self {
        self.with_player("a", "Ann", 3).with_player("b", "Bo", 1)
    }

    pub fn with_player(mut self, id: &str, name: &str, legs: u32) -> Self {
        self.roster
            .push((id.to_string(), name.to_string(), legs));
        self
    }

    pub fn game_type(mut self, game_type: &str) -> Self {
        self.game_type = game_type.to_string();
        self
    }

    pub fn winner(mut self, winner_id: &str) -> Self {
        self.winner_id = Some(winner_id.to_string());
        self
    }

    pub fn best_of(mut self, best_of: u32) -> Self {
        self.best_of = best_of;
        self
    }

    pub fn completed_at(mut self, completed_at: &str) -> Self {
        self.completed_at = completed_at.to_string();
        self
    }

    pub fn without_stats_for(mut self, player_id: &str) -> Self {
        self.missing_stats.push(player_id.to_string());
        self
    }

    /// Wire form of the record
    pub fn to_json(&self) -> Value {
        let players: Vec<Value> = self
            .roster
            .iter()
            .map(|(id, name, _)| json!({"id": id, "name": name, "avatarColor": "#39ff14"}))
            .collect();

        let legs_won: serde_json::Map<String, Value> = self
            .roster
            .iter()
            .map(|(id, _, legs)| (id.clone(), json!(legs)))
            .collect();

        let player_stats: serde_json::Map<String, Value> = self
            .roster
            .iter()
            .filter(|(id, _, _)| !self.missing_stats.contains(id))
            .map(|(id, _, legs)| {
                let checkout = if *legs > 0 { json!(40 + legs) } else { Value::Null };
                (
                    id.clone(),
                    json!({
                        "dartsThrown": 45,
                        "averagePerTurn": 45.166,
                        "highestTurn": 140,
                        "highestCheckout": checkout,
                        "doublesHit": legs,
                        "triplesHit": 6
                    }),
                )
            })
            .collect();

        let winner_id = self
            .winner_id
            .clone()
            .or_else(|| self.roster.first().map(|(id, _, _)| id.clone()))
            .unwrap_or_default();

        json!({
            "id": self.id,
            "gameType": self.game_type,
            "players": players,
            "winnerId": winner_id,
            "legsWon": legs_won,
            "rules": {"bestOf": self.best_of},
            "statistics": {"playerStats": player_stats},
            "completedAt": self.completed_at
        })
    }

    pub fn build(&self) -> GameHistory {
        GameHistory::from_json_value(self.to_json()).expect("builder produces a decodable record")
    }
}
