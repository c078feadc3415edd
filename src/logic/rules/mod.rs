// src/logic/rules/mod.rs
//! ソリティアのルール関連モジュールをまとめるよ！
//! どれも盤面を書き換えない、ただの判定関数。

pub mod foundation;
pub mod move_validation;
pub mod stock_waste;
pub mod tableau;
pub mod win_condition;


// 各モジュールから公開したい関数をここで再エクスポート！
pub use foundation::*;
pub use move_validation::*;
pub use stock_waste::*;
pub use tableau::*;
pub use win_condition::*;
