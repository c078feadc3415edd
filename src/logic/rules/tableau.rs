//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use itertools::Itertools;
use log::trace;

use crate::components::card::{Card, Rank};

/// 指定されたカードが、場札の一番上 (`dest_top`) に置けるかチェックする。
///
/// - 列が空なら K だけ置ける
/// - そうでなければ、ランクがちょうど 1 つ下で、色が違う必要がある
pub fn can_place_on_tableau(card: Card, dest_top: Option<Card>) -> bool {
    match dest_top {
        None => {
            let is_king = card.rank == Rank::King;
            trace!("[Tableau Rule] {} onto empty column. Is King: {}", card, is_king);
            is_king
        }
        Some(top) => {
            let colors_different = card.color() != top.color();
            let rank_is_one_less = card.rank.value() + 1 == top.rank.value();
            trace!(
                "[Tableau Rule] {} onto {}. Colors different: {}. Rank is one less: {}.",
                card, top, colors_different, rank_is_one_less
            );
            colors_different && rank_is_one_less
        }
    }
}

/// 下から上の順に並んだカード列が、場札の表向きの並びとして正しいかチェックする。
/// 上に行くほどランクが 1 ずつ下がって、色が交互になっていれば OK。
pub fn is_valid_run(run: &[Card]) -> bool {
    run.iter()
        .tuple_windows()
        .all(|(&lower, &upper)| can_place_on_tableau(upper, Some(lower)))
}
