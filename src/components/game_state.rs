// src/components/game_state.rs

// serde を使う宣言！ゲーム状態をスナップショットに載せるよ。
use serde::{Deserialize, Serialize};

/// ゲーム全体の現在の状態を表す列挙型だよ！🏆
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    Playing,
    /// 勝利！🏆
    Won,
}

impl GameStatus {
    pub fn from_won(won: bool) -> Self {
        if won {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }
}
