// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app; // JS 向けの窓口
pub mod components; // カードや山などのデータ部品
pub mod config; // ルールの定数と設定
pub mod logic; // デッキ・ルール・ゲーム進行
pub mod protocol; // 描画側に渡すスナップショット
pub mod systems; // 初期配置

// よく使う型はクレートのルートからも使えるようにしておく！
pub use app::KlondikeApp;
pub use components::{Card, CardColor, Pile, PileId, Rank, Selection, Suit, TableauColumn};
pub use config::{ConfigError, GameConfig, WinRule};
pub use logic::board::Board;
pub use logic::game::Game;
pub use logic::outcome::{DrawOutcome, MoveError, MoveKind, MoveOutcome};
pub use protocol::BoardSnapshot;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}
