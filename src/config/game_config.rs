// src/config/game_config.rs
//! ゲームのルールに関する定数と設定だよ！
//! 列の数、組札の数、1 回にめくる枚数、勝利判定のやり方など。

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DECK_SIZE: usize = 52; // デッキの枚数
pub const TABLEAU_COLUMNS: usize = 7; // 場札の列数
pub const FOUNDATION_COUNT: usize = 4; // 組札の数 (スートごとに 1 つ)
pub const CARDS_PER_SUIT: usize = 13; // 1 スートの枚数 (A-K)
pub const DEFAULT_DRAW_COUNT: usize = 3; // 山札から 1 回にめくる枚数

// --- 配り終わった直後のカウンター ---
// 場札の裏向き: 0+1+2+...+6 = 21 枚
pub const INITIAL_FACE_DOWN_TABLEAU: usize = TABLEAU_COLUMNS * (TABLEAU_COLUMNS - 1) / 2;
// 山札に残る枚数: 52 - 7 (表向き) - 21 (裏向き) = 24 枚
pub const INITIAL_STOCK_CARDS: usize = DECK_SIZE - TABLEAU_COLUMNS - INITIAL_FACE_DOWN_TABLEAU;

/// 勝ちをどう判定するか。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinRule {
    /// 裏向きカウンターで判定する。場札の裏向きが 0 枚、山札側のカウンターが 1 以下なら勝ち。
    /// 組札が全部そろっていなくても勝ちになる！
    #[default]
    FaceDownCounters,
    /// 4 つの組札が全部 K まで積み上がったら勝ち。
    AllFoundationsComplete,
}

/// 1 ゲーム分の設定。JSON から読み込めるよ。
///
/// ```json
/// { "seed": 42, "draw_count": 3, "win_rule": "face_down_counters" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// シャッフルの乱数シード。None なら毎回違う配り方になる。
    pub seed: Option<u64>,
    pub draw_count: usize,
    pub win_rule: WinRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            draw_count: DEFAULT_DRAW_COUNT,
            win_rule: WinRule::default(),
        }
    }
}

/// 設定の読み込みで起きるエラー。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse game config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("draw count must be at least 1, got {0}")]
    InvalidDrawCount(usize),
}

impl GameConfig {
    /// シード付きの設定を作るヘルパー。
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// JSON 文字列から設定を読み込んで、中身をチェックする。
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.draw_count == 0 {
            return Err(ConfigError::InvalidDrawCount(self.draw_count));
        }
        Ok(())
    }
}
