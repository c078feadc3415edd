// src/components/pile.rs

// serde を使うためにインポート！スナップショットで JSON にするよ。
use serde::{Deserialize, Serialize};

use crate::components::card::Card;

/// カードが置かれている山の種類を示す Enum だよ。
/// 山札なのか、場札の何列目なのか、などを区別するのに使う。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PileId {
    /// 山札 (Stock)。プレイヤーがカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Discard / Waste)。
    Discard,
    /// 場札 (Tableau)。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation)。4つのスロット (0-3)。
    Foundation(u8),
}

/// カードを積み重ねる山だよ。🃏🃏🃏
///
/// 中身は `Vec` で、末尾が「一番上」(top)。push/pop は一番上でだけ行う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// 下から上の順に並んだカードから山を作る。
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// 一番上のカードを覗くだけ (取り出さない)。
    pub fn peek(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 一番下 (index 0) から一番上までのスライス。
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// 一番上から下へ順番に辿るイテレータ。描画側はだいたいこっちを使う！
    pub fn top_to_bottom(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().rev()
    }

    /// `n` 枚を一番上から別の山へ 1 枚ずつ移す。
    /// 1 枚ずつ積み替えるので、移した分の順番は逆になるよ。
    /// 実際に移した枚数を返す (足りなければ少なくなる)。
    pub fn transfer_to(&mut self, dest: &mut Pile, n: usize) -> usize {
        let mut moved = 0;
        while moved < n {
            match self.cards.pop() {
                Some(card) => {
                    dest.cards.push(card);
                    moved += 1;
                }
                None => break,
            }
        }
        moved
    }

    /// 一番上の `n` 枚を、順番を保ったまま切り取る。
    /// `n` が枚数より多ければ None で、山はそのまま。
    pub fn split_off_top(&mut self, n: usize) -> Option<Vec<Card>> {
        if n > self.cards.len() {
            return None;
        }
        let at = self.cards.len() - n;
        Some(self.cards.split_off(at))
    }

    /// 下から上の順に並んだカード列を、そのまま上に積む。
    pub fn extend(&mut self, run: Vec<Card>) {
        self.cards.extend(run);
    }
}

/// 場札 (Tableau) の 1 列だよ。
///
/// - `face_down`: 裏向きのカード (枚数だけ見える)
/// - `face_up`: 表向きのカード。上から見てランクが 1 ずつ下がって、色が交互になっている。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableauColumn {
    pub face_down: Pile,
    pub face_up: Pile,
}

impl TableauColumn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.face_down.is_empty() && self.face_up.is_empty()
    }

    /// 表向きの山が空で、裏向きのカードが残っていたら 1 枚めくる。
    /// めくったら true！
    pub fn flip_if_needed(&mut self) -> bool {
        if self.face_up.is_empty() {
            if let Some(card) = self.face_down.pop() {
                self.face_up.push(card);
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn pile_stack_discipline() {
        let mut pile = Pile::new();
        assert!(pile.is_empty());
        assert_eq!(pile.peek(), None);

        pile.push(card(Rank::Ace, Suit::Heart));
        pile.push(card(Rank::Two, Suit::Heart));
        assert_eq!(pile.len(), 2);
        assert_eq!(pile.peek(), Some(card(Rank::Two, Suit::Heart)));

        let top_down: Vec<Card> = pile.top_to_bottom().copied().collect();
        assert_eq!(top_down, vec![card(Rank::Two, Suit::Heart), card(Rank::Ace, Suit::Heart)]);

        assert_eq!(pile.pop(), Some(card(Rank::Two, Suit::Heart)));
        assert_eq!(pile.len(), 1);
    }

    #[test]
    fn transfer_reverses_order() {
        let mut src = Pile::from_cards(vec![
            card(Rank::Ace, Suit::Club),
            card(Rank::Two, Suit::Club),
            card(Rank::Three, Suit::Club),
        ]);
        let mut dest = Pile::new();

        assert_eq!(src.transfer_to(&mut dest, 2), 2);
        assert_eq!(src.cards(), &[card(Rank::Ace, Suit::Club)]);
        assert_eq!(dest.cards(), &[card(Rank::Three, Suit::Club), card(Rank::Two, Suit::Club)]);

        // 足りない分は無視されるよ
        assert_eq!(src.transfer_to(&mut dest, 5), 1);
        assert!(src.is_empty());
    }

    #[test]
    fn split_off_top_keeps_order() {
        let mut pile = Pile::from_cards(vec![
            card(Rank::King, Suit::Spade),
            card(Rank::Queen, Suit::Heart),
            card(Rank::Jack, Suit::Club),
        ]);
        let run = pile.split_off_top(2);
        assert_eq!(run, Some(vec![card(Rank::Queen, Suit::Heart), card(Rank::Jack, Suit::Club)]));
        assert_eq!(pile.len(), 1);
        assert_eq!(pile.split_off_top(2), None);
        assert_eq!(pile.len(), 1);
    }

    #[test]
    fn column_flip() {
        let mut column = TableauColumn::new();
        column.face_down.push(card(Rank::Five, Suit::Diamond));
        column.face_up.push(card(Rank::Nine, Suit::Spade));

        // 表向きがまだあるのでめくらない
        assert!(!column.flip_if_needed());

        column.face_up.pop();
        assert!(column.flip_if_needed());
        assert_eq!(column.face_up.peek(), Some(card(Rank::Five, Suit::Diamond)));
        assert!(column.face_down.is_empty());

        column.face_up.pop();
        assert!(!column.flip_if_needed());
        assert!(column.is_empty());
    }
}
