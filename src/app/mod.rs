// src/app/mod.rs
//! JavaScript 側へ見せる窓口と、そのための変換処理を置くモジュールだよ！

pub mod game_app;
pub mod state_getter;

pub use game_app::KlondikeApp;
