// src/logic/board.rs
//! 1 ゲーム分の山をぜんぶ持っている盤面だよ！🗂️
//!
//! 書き換えられるのはこのクレートの中 (`Game`) だけ。
//! 外からは `&Board` で読むだけにしておく。

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::pile::{Pile, PileId, TableauColumn};
use crate::config::game_config::{DECK_SIZE, FOUNDATION_COUNT, TABLEAU_COLUMNS};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub(crate) stock: Pile,
    pub(crate) discard: Pile,
    pub(crate) tableau: [TableauColumn; TABLEAU_COLUMNS],
    pub(crate) foundations: [Pile; FOUNDATION_COUNT],
}

impl Board {
    /// 全部空っぽの盤面を作る。
    pub fn new() -> Self {
        Self::default()
    }

    /// 山を指定して盤面を組み立てる (途中の局面から始めたい時用)。
    pub fn from_parts(
        stock: Pile,
        discard: Pile,
        tableau: [TableauColumn; TABLEAU_COLUMNS],
        foundations: [Pile; FOUNDATION_COUNT],
    ) -> Self {
        Self {
            stock,
            discard,
            tableau,
            foundations,
        }
    }

    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    pub fn discard(&self) -> &Pile {
        &self.discard
    }

    pub fn columns(&self) -> &[TableauColumn] {
        &self.tableau
    }

    pub fn column(&self, index: usize) -> Option<&TableauColumn> {
        self.tableau.get(index)
    }

    pub fn foundations(&self) -> &[Pile] {
        &self.foundations
    }

    pub fn foundation(&self, index: usize) -> Option<&Pile> {
        self.foundations.get(index)
    }

    /// 指定した山の一番上のカード。場札は表向きの一番上を見るよ。
    pub fn top_card(&self, pile: PileId) -> Option<Card> {
        match pile {
            PileId::Stock => self.stock.peek(),
            PileId::Discard => self.discard.peek(),
            PileId::Tableau(index) => {
                self.column(usize::from(index)).and_then(|c| c.face_up.peek())
            }
            PileId::Foundation(index) => self.foundation(usize::from(index)).and_then(Pile::peek),
        }
    }

    /// 盤面のすべてのカードを集める (順番は山ごと)。
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        cards.extend_from_slice(self.stock.cards());
        cards.extend_from_slice(self.discard.cards());
        for column in &self.tableau {
            cards.extend_from_slice(column.face_down.cards());
            cards.extend_from_slice(column.face_up.cards());
        }
        for foundation in &self.foundations {
            cards.extend_from_slice(foundation.cards());
        }
        cards
    }

    /// ちょうど 52 枚で、重複がないかチェックする。
    pub fn has_full_unique_deck(&self) -> bool {
        let cards = self.all_cards();
        let unique: HashSet<Card> = cards.iter().copied().collect();
        cards.len() == DECK_SIZE && unique.len() == DECK_SIZE
    }

    /// 場札にある裏向きカードの枚数 (実際に数える)。
    pub fn face_down_tableau_count(&self) -> usize {
        self.tableau.iter().map(|c| c.face_down.len()).sum()
    }
}
