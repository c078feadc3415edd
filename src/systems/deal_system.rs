// src/systems/deal_system.rs

use log::{debug, info};

use crate::config::game_config::TABLEAU_COLUMNS;
use crate::logic::board::Board;

// === 初期カード配置システム！ ===
// ゲーム開始時に、山札から 7 つの場札へカードを配る役割を担うシステムだよ。
#[derive(Default)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    /// シャッフル済みの山札から、クロンダイクの初期配置を作る関数だよ！🎉
    ///
    /// 列 `i` (0-6) ごとに:
    /// 1. 山札の一番上から 1 枚、列 `i` に表向きで配る。
    /// 2. それより右の列 `j > i` に 1 枚ずつ裏向きで配る。
    ///
    /// 終わると列 `i` は裏向き `i` 枚の上に表向き 1 枚。山札には 24 枚残るよ。
    /// 山札が足りなければ、配れる所まで配って止まる。
    pub fn execute(&self, board: &mut Board) {
        let before = board.stock.len();
        for i in 0..TABLEAU_COLUMNS {
            board.stock.transfer_to(&mut board.tableau[i].face_up, 1);
            for j in (i + 1)..TABLEAU_COLUMNS {
                board.stock.transfer_to(&mut board.tableau[j].face_down, 1);
            }
            debug!(
                "  Dealt column {}: {} face down, {} face up",
                i,
                board.tableau[i].face_down.len(),
                board.tableau[i].face_up.len()
            );
        }
        info!(
            "✅ Initial deal complete: {} cards dealt, {} left in stock.",
            before - board.stock.len(),
            board.stock.len()
        );
    }
}

// --- テストコード ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::Card;
    use crate::components::pile::Pile;
    use crate::logic::deck::{create_standard_deck, shuffled_stock};
    use std::collections::HashSet;

    #[test]
    fn test_initial_deal() {
        // --- 準備 ---
        let mut board = Board::new();
        board.stock = shuffled_stock(Some(99));

        // --- 実行 ---
        DealInitialCardsSystem::default().execute(&mut board);

        // --- 検証 ---
        assert_eq!(board.all_cards().len(), 52, "配置されたカードの総数が52枚ではありません！");
        assert_eq!(board.stock().len(), 24, "山札のカード枚数が24枚ではありません！");
        assert!(board.discard().is_empty());
        assert!(board.foundations().iter().all(Pile::is_empty));

        for (i, column) in board.columns().iter().enumerate() {
            assert_eq!(column.face_down.len(), i, "場札[{}]の裏向きが{}枚ではありません！", i, i);
            assert_eq!(column.face_up.len(), 1, "場札[{}]の表向きカードが1枚ではありません！", i);
        }

        let unique: HashSet<Card> = board.all_cards().into_iter().collect();
        assert_eq!(unique.len(), 52, "配置されたカードに重複が見つかりました！");
    }

    #[test]
    fn deal_order_follows_stock_pops() {
        // シャッフルしていない山札で、どのカードがどこに行くか確認する
        let mut board = Board::new();
        board.stock = Pile::from_cards(create_standard_deck());
        let mut expected = board.stock.clone();

        DealInitialCardsSystem.execute(&mut board);

        // 最初の 1 枚は列 0 の表向き、次の 6 枚は列 1..7 の裏向き
        assert_eq!(board.columns()[0].face_up.peek(), expected.pop());
        for j in 1..7 {
            assert_eq!(board.columns()[j].face_down.cards()[0], expected.pop().expect("card"));
        }
        // その次は列 1 の表向き
        assert_eq!(board.columns()[1].face_up.peek(), expected.pop());
    }
}
