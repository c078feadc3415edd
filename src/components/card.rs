// src/components/card.rs

// serde を使う宣言！カード情報を JSON にしてレンダラーへ渡す時に使うよ。
use serde::{Deserialize, Serialize};
use std::fmt;

/// カードのスート（マーク）を表す列挙型だよ！♣️♦️❤️♠️
///
/// 並び順は山札を作る時の順番 (Club → Diamond → Heart → Spade) と同じ。
/// `as usize` でその順番のインデックスが取れるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Club,    // ♣️
    Diamond, // ♦️
    Heart,   // ❤️
    Spade,   // ♠️
}

/// 全スート。デッキ生成とかでループする時に使う！
pub const ALL_SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

impl Suit {
    /// ダイヤとハートは赤！
    pub fn is_red(self) -> bool {
        matches!(self, Suit::Diamond | Suit::Heart)
    }

    pub fn color(self) -> CardColor {
        CardColor::from_suit(self)
    }
}

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
/// 場札 (Tableau) への移動ルール (色違い) で使う！❤️🖤
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// PartialOrd, Ord も付けて、ランクの大小比較 (`<`, `>`) もできるようにしておく。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1, // A は 1
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // 11
    Queen, // 12
    King,  // 13
}

/// 全ランク (A → K の順)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// 1 (A) から 13 (K) の数値を返すよ。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 数値 (1-13) からランクに戻す。範囲外なら None！
    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            1..=13 => Some(ALL_RANKS[usize::from(value) - 1]),
            _ => None,
        }
    }
}

/// カードそのものを表す値だよ！🃏
///
/// 一度作ったら中身は変わらない (Copy な値)。
/// 表向きか裏向きかはカード自身じゃなくて、どの山に入っているかで決まるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn is_red(&self) -> bool {
        self.suit.is_red()
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self.rank {
            Rank::Ace => "A".to_string(),
            Rank::Jack => "J".to_string(),
            Rank::Queen => "Q".to_string(),
            Rank::King => "K".to_string(),
            other => other.value().to_string(),
        };
        let suit = match self.suit {
            Suit::Club => '♣',
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
            Suit::Spade => '♠',
        };
        write!(f, "{}{}", rank, suit)
    }
}
