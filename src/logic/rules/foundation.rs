//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::trace;

use crate::components::card::{Card, Rank};
use crate::components::pile::Pile;
use crate::config::game_config::CARDS_PER_SUIT;

/// 指定されたカードが、組札の一番上 (`dest_top`) に置けるかチェックする。
///
/// - 組札が空なら A だけ置ける
/// - そうでなければ、同じスートでランクがちょうど 1 つ上である必要がある
pub fn can_place_on_foundation(card: Card, dest_top: Option<Card>) -> bool {
    let result = match dest_top {
        None => card.rank == Rank::Ace,
        Some(top) => card.suit == top.suit && card.rank.value() == top.rank.value() + 1,
    };
    trace!("[Foundation Rule] {} onto {:?}: {}", card, dest_top.map(|c| c.to_string()), result);
    result
}

/// 組札が A から K まで全部そろっているか。
pub fn is_foundation_complete(pile: &Pile) -> bool {
    pile.len() == CARDS_PER_SUIT && pile.peek().map_or(false, |top| top.rank == Rank::King)
}
