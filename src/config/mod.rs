// src/config/mod.rs

pub mod game_config;

pub use game_config::{ConfigError, GameConfig, WinRule};
