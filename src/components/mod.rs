// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
pub mod card;
pub mod pile; // 山札・捨て札・場札・組札の入れ物
pub mod selection; // 選択中のカード
pub mod game_state;

// よく使う型はここから直接 use できるようにしておく！
pub use card::{Card, CardColor, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use game_state::GameStatus;
pub use pile::{Pile, PileId, TableauColumn};
pub use selection::Selection;
