// src/app/game_app.rs

use log::{error, info};
use wasm_bindgen::prelude::*;

use crate::app::state_getter;
use crate::config::game_config::GameConfig;
use crate::logic::game::Game;

// --- JavaScript 側から 1 ゲームを操作するための窓口 ---
// 描画やクリックの処理は JS 側の仕事。こっちは操作を受け取って、盤面を JSON で返すだけ！
#[wasm_bindgen]
pub struct KlondikeApp {
    game: Game,
}

#[wasm_bindgen]
impl KlondikeApp {
    /// シードを渡すと毎回同じ配り方になる。省略すると毎回違う。
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u32>) -> Self {
        info!("KlondikeApp: Initializing (seed: {:?})...", seed);
        Self {
            game: Game::new(seed.map(u64::from)),
        }
    }

    /// JSON の設定からゲームを作る。設定がおかしければエラー文字列を返すよ。
    pub fn from_config_json(json: &str) -> Result<KlondikeApp, JsValue> {
        let config = GameConfig::from_json(json).map_err(|e| {
            error!("KlondikeApp: Invalid config: {}", e);
            JsValue::from_str(&e.to_string())
        })?;
        let game = Game::with_config(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { game })
    }

    /// 山札をクリックした時。
    pub fn draw_from_stock(&mut self) {
        let outcome = self.game.draw_from_stock();
        info!("KlondikeApp: draw_from_stock -> {:?}", outcome);
    }

    /// 捨て札をクリックした時。
    pub fn select_discard(&mut self) {
        self.game.select_discard();
    }

    /// 場札 `column` 列目の上から `n` 枚目をクリックした時。勝ったら true。
    pub fn select_tableau(&mut self, column: usize, n: usize) -> bool {
        self.game.select_tableau(column, n)
    }

    /// 組札 `foundation` をクリックした時。勝ったら true。
    pub fn move_selection_to_foundation(&mut self, foundation: usize) -> bool {
        self.game.move_selection_to_foundation(foundation)
    }

    /// ダブルクリックとかで、置ける組札に自動で送る時。勝ったら true。
    pub fn auto_move_to_foundation(&mut self) -> bool {
        self.game.auto_move_selection_to_foundation()
    }

    pub fn is_won(&self) -> bool {
        self.game.is_won()
    }

    /// 盤面のスナップショットを JSON 文字列で返す。
    pub fn state_json(&self) -> Result<JsValue, JsValue> {
        state_getter::get_game_state_json(&self.game)
            .map(|json| JsValue::from_str(&json))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl KlondikeApp {
    /// Rust 側から中のゲームを読むため。
    pub fn game(&self) -> &Game {
        &self.game
    }
}
