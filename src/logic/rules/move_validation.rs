// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。

use log::debug;

use crate::components::card::Card;
use crate::components::pile::PileId;
use crate::logic::board::Board;

use super::{foundation, tableau};

/// 指定されたカードを、盤面の特定の山の一番上に置けるか検証する。
/// 移動先の種類に応じて、場札か組札のルールに振り分けるよ。
pub fn is_move_valid(board: &Board, card: Card, target: PileId) -> bool {
    match target {
        PileId::Tableau(index) => match board.column(usize::from(index)) {
            Some(column) => tableau::can_place_on_tableau(card, column.face_up.peek()),
            None => {
                debug!("[Rules Validation] Tableau index {} is out of range.", index);
                false
            }
        },
        PileId::Foundation(index) => match board.foundation(usize::from(index)) {
            Some(pile) => foundation::can_place_on_foundation(card, pile.peek()),
            None => {
                debug!("[Rules Validation] Foundation index {} is out of range.", index);
                false
            }
        },
        PileId::Stock | PileId::Discard => {
            // 山札と捨て札へ直接置くことはできない
            debug!("[Rules Validation] Moving to {:?} is not allowed.", target);
            false
        }
    }
}
