// src/logic/mod.rs
//! ゲームのロジック (デッキ・ルール・盤面・進行) をまとめるモジュールだよ！

pub mod auto_move;
pub mod board;
pub mod deck;
pub mod game;
pub mod outcome;
pub mod rules;
