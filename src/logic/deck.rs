// src/logic/deck.rs

use itertools::iproduct;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::components::pile::Pile;
use crate::config::game_config::DECK_SIZE;

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// 並び順はいつも同じ。インデックス `i` のカードは
/// ランク `i % 13 + 1`、スート `i / 13` (♣ → ♦ → ♥ → ♠) になってる。
pub fn create_standard_deck() -> Vec<Card> {
    iproduct!(ALL_SUITS, ALL_RANKS)
        .map(|(suit, rank)| Card::new(rank, suit))
        .collect()
}

/// シードから乱数生成器を作る。None なら OS のエントロピーを使うよ。
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// デッキをシャッフルしながら山札に積んでいく。
///
/// 後ろから順に `i` を下げていって、`[0, i]` から `j` を選び、
/// `deck[j]` を山札に積んで、空いた所に `deck[i]` を詰める (Fisher–Yates)。
/// 山札から pop すると、積んだ順の逆で出てくるよ。
pub fn shuffle_into<R: Rng + ?Sized>(mut deck: Vec<Card>, rng: &mut R, stock: &mut Pile) {
    for i in (0..deck.len()).rev() {
        let j = rng.gen_range(0..=i);
        stock.push(deck[j]);
        deck[j] = deck[i];
    }
}

/// 新しいデッキをシャッフルした山札を返すヘルパー。
pub fn shuffled_stock(seed: Option<u64>) -> Pile {
    let mut rng = create_rng(seed);
    let mut stock = Pile::new();
    shuffle_into(create_standard_deck(), &mut rng, &mut stock);
    debug!("Shuffled {} cards into stock (seed: {:?})", stock.len(), seed);
    debug_assert_eq!(stock.len(), DECK_SIZE);
    stock
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use rand::rngs::mock::StepRng;
    use std::collections::HashSet;

    #[test]
    fn deck_creation() {
        let deck = create_standard_deck();

        // 1. カードが52枚あるかチェック！
        assert_eq!(deck.len(), 52);

        // 2. 重複がないかチェック！
        let unique: HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(unique.len(), 52, "デッキに重複したカードが見つかりました！");
    }

    #[test]
    fn deck_canonical_order() {
        let deck = create_standard_deck();
        for (i, card) in deck.iter().enumerate() {
            assert_eq!(usize::from(card.rank.value()), i % 13 + 1);
            assert_eq!(card.suit as usize, i / 13);
        }
        assert_eq!(deck[0], Card::new(Rank::Ace, Suit::Club));
        assert_eq!(deck[51], Card::new(Rank::King, Suit::Spade));
    }

    #[test]
    fn shuffle_is_permutation() {
        let stock = shuffled_stock(Some(1234));
        assert_eq!(stock.len(), 52);

        let mut shuffled: Vec<Card> = stock.cards().to_vec();
        let mut original = create_standard_deck();
        shuffled.sort_by_key(|c| (c.suit, c.rank));
        original.sort_by_key(|c| (c.suit, c.rank));
        assert_eq!(shuffled, original);
    }

    #[test]
    fn same_seed_same_order() {
        let a = shuffled_stock(Some(42));
        let b = shuffled_stock(Some(42));
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        // 違うシードで同じ並びになるのは (ほぼ) ありえない
        let a = shuffled_stock(Some(1));
        let b = shuffled_stock(Some(2));
        assert_ne!(a, b);
    }

    #[test]
    fn shuffle_changes_order() {
        let stock = shuffled_stock(None);
        assert_eq!(stock.len(), 52);
        assert_ne!(
            stock.cards(),
            create_standard_deck().as_slice(),
            "シャッフルしても順番が変わってない (稀に起こりうる)"
        );
    }

    #[test]
    fn shuffle_pushes_picked_card_then_fills_hole() {
        // いつも 0 を返す乱数だと j は毎回 0。
        // 1 回目は deck[0] (♣A) を積んで、空いた所に deck[51] (♠K) を詰める。
        // そのあとは詰めたカードを次々に積むので ♣A, ♠K, ♠Q, ..., ♣2 の順になる。
        let deck = create_standard_deck();
        let mut rng = StepRng::new(0, 0);
        let mut stock = Pile::new();
        shuffle_into(deck.clone(), &mut rng, &mut stock);

        let mut expected = vec![deck[0]];
        expected.extend(deck[1..].iter().rev().copied());
        assert_eq!(stock.cards(), expected.as_slice());
        assert_eq!(stock.peek(), Some(Card::new(Rank::Two, Suit::Club)));
    }

    #[test]
    fn shuffle_matches_swap_and_push_loop() {
        // 同じシードの乱数で、手書きのループと同じ順に積まれるか
        let mut reference = Vec::new();
        let mut deck = create_standard_deck();
        let mut rng = StdRng::seed_from_u64(99);
        for i in (0..deck.len()).rev() {
            let j = rng.gen_range(0..=i);
            reference.push(deck[j]);
            deck[j] = deck[i];
        }

        let mut stock = Pile::new();
        shuffle_into(create_standard_deck(), &mut StdRng::seed_from_u64(99), &mut stock);
        assert_eq!(stock.cards(), reference.as_slice());
        assert_eq!(stock, shuffled_stock(Some(99)));
    }
}
