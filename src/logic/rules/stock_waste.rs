//! 山札 (Stock) と捨て札 (Discard) に関するルールを定義するよ。

use crate::components::pile::Pile;

/// 山札にめくれるカードが残っているか。
pub fn can_deal_from_stock(stock: &Pile) -> bool {
    !stock.is_empty()
}

/// 山札が尽きていて、捨て札を裏返して戻せるか。戻す回数に制限はない。
pub fn can_reset_stock_from_waste(stock: &Pile, discard: &Pile) -> bool {
    stock.is_empty() && !discard.is_empty()
}

/// 1 回の「めくる」で実際に何枚動くか。山札が足りなければ残り全部。
pub fn cards_to_draw(stock_len: usize, draw_count: usize) -> usize {
    stock_len.min(draw_count)
}
