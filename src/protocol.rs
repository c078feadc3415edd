// src/protocol.rs

// このファイルは、描画する側 (JavaScript とか) に渡す盤面データの形を定義するよ！💌
// 盤面を読むだけのコピー (スナップショット) なので、これを書き換えてもゲームには影響しない。
// `serde` で JSON にして渡す。
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Rank, Suit};
use crate::components::game_state::GameStatus;
use crate::components::pile::Pile;
use crate::components::selection::Selection;
use crate::logic::game::Game;
use crate::logic::outcome::{MoveError, MoveKind};

/// カード1枚の表示用データ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    pub suit: Suit,
    pub rank: Rank,
    /// `rank` の数値 (1-13)。JS 側で比較しやすいように。
    pub value: u8,
    pub is_red: bool,
    /// 画面に出す文字 ("Q♥" みたいなの)
    pub label: String,
}

impl From<Card> for CardData {
    fn from(card: Card) -> Self {
        Self {
            suit: card.suit,
            rank: card.rank,
            value: card.rank.value(),
            is_red: card.is_red(),
            label: card.to_string(),
        }
    }
}

/// 場札 1 列の表示用データ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ColumnData {
    /// 裏向きの枚数だけ (中身は見せない)
    pub face_down_count: usize,
    /// 表向きのカード、上から下の順
    pub face_up: Vec<CardData>,
    /// 上から何枚選ばれているか
    pub number_selected: usize,
}

/// 直近の移動結果の表示用データ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum OutcomeData {
    Moved(MoveKind),
    Rejected { error: MoveError, reason: String },
}

/// 盤面全体の表示用データ。山の中身はどれも「上から下」の順だよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub stock_count: usize,
    pub discard: Vec<CardData>,
    pub discard_selected: bool,
    pub columns: Vec<ColumnData>,
    pub foundations: Vec<Vec<CardData>>,
    pub selection: Selection,
    pub status: GameStatus,
    pub last_outcome: Option<OutcomeData>,
}

fn top_to_bottom(pile: &Pile) -> Vec<CardData> {
    pile.top_to_bottom().copied().map(CardData::from).collect()
}

impl BoardSnapshot {
    pub fn from_game(game: &Game) -> Self {
        let board = game.board();
        let columns = board
            .columns()
            .iter()
            .enumerate()
            .map(|(i, column)| ColumnData {
                face_down_count: column.face_down.len(),
                face_up: top_to_bottom(&column.face_up),
                number_selected: game.number_selected(i),
            })
            .collect();
        let last_outcome = game.last_outcome().map(|outcome| match outcome {
            Ok(kind) => OutcomeData::Moved(*kind),
            Err(error) => OutcomeData::Rejected {
                error: *error,
                reason: error.to_string(),
            },
        });

        Self {
            stock_count: board.stock().len(),
            discard: top_to_bottom(board.discard()),
            discard_selected: game.is_discard_selected(),
            columns,
            foundations: board.foundations().iter().map(top_to_bottom).collect(),
            selection: game.selection(),
            status: GameStatus::from_won(game.is_won()),
            last_outcome,
        }
    }
}

impl Game {
    /// 描画用のスナップショットを作る。
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_game(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_of_new_game() {
        let game = Game::new(Some(42));
        let snapshot = game.snapshot();

        assert_eq!(snapshot.stock_count, 24);
        assert!(snapshot.discard.is_empty());
        assert!(!snapshot.discard_selected);
        assert_eq!(snapshot.columns.len(), 7);
        for (i, column) in snapshot.columns.iter().enumerate() {
            assert_eq!(column.face_down_count, i);
            assert_eq!(column.face_up.len(), 1);
            assert_eq!(column.number_selected, 0);
        }
        assert_eq!(snapshot.foundations.len(), 4);
        assert_eq!(snapshot.status, GameStatus::Playing);
        assert_eq!(snapshot.last_outcome, None);
    }

    #[test]
    fn snapshot_tracks_selection_and_draws() {
        let mut game = Game::new(Some(7));
        game.draw_from_stock();
        game.select_discard();
        let snapshot = game.snapshot();

        assert_eq!(snapshot.stock_count, 21);
        assert_eq!(snapshot.discard.len(), 3);
        assert!(snapshot.discard_selected);
        assert_eq!(snapshot.selection, Selection::Discard);
        // 一番上のカードが先頭
        let top = game.board().discard().peek().map(CardData::from);
        assert_eq!(snapshot.discard.first().cloned(), top);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let game = Game::new(Some(3));
        let json = serde_json::to_string(&game.snapshot()).expect("serialize snapshot");
        let back: BoardSnapshot = serde_json::from_str(&json).expect("deserialize snapshot");
        assert_eq!(back, game.snapshot());
    }
}
