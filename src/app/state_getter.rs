//! Gets the current game state from the Game and converts it to JSON.

use log::{debug, error};

use crate::logic::game::Game;

/// 盤面のスナップショットを JSON 文字列にして返します。
pub fn get_game_state_json(game: &Game) -> Result<String, serde_json::Error> {
    debug!("Getting game state...");
    serde_json::to_string(&game.snapshot()).map_err(|e| {
        error!("Failed to serialize game state: {}", e);
        e
    })
}
