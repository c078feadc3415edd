// src/systems/mod.rs

pub mod deal_system;

pub use deal_system::DealInitialCardsSystem;
