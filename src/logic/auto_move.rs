// src/logic/auto_move.rs
//! カードの自動移動に関するロジックだよ！🪄
//! どのカードがどの組札に自動で移動できるか、を判断するんだ。

use log::debug;

use crate::components::card::Card;
use crate::components::pile::PileId;
use crate::config::game_config::FOUNDATION_COUNT;
use crate::logic::board::Board;
use crate::logic::rules;

/// カードを置ける組札 (Foundation) を 0 番から順に探して、最初に見つかったスロットを返す。
/// どこにも置けなければ None。
pub fn find_automatic_foundation_move(board: &Board, card: Card) -> Option<usize> {
    let found = (0..FOUNDATION_COUNT)
        .find(|&i| rules::is_move_valid(board, card, PileId::Foundation(i as u8)));
    debug!("[AutoMove] Foundation for {}: {:?}", card, found);
    found
}
