//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::pile::Pile;
use crate::config::game_config::FOUNDATION_COUNT;

use super::foundation::is_foundation_complete;

/// 裏向きカウンターでの勝利判定。
/// 場札の裏向きが 0 枚で、山札側のカウンターが 1 以下なら勝ち。
pub fn check_win_condition(face_down_tableau: usize, face_down_stock: usize) -> bool {
    face_down_tableau == 0 && face_down_stock <= 1
}

/// 4 つの組札が全部 K まで積み上がっているか。
pub fn all_foundations_complete(foundations: &[Pile]) -> bool {
    foundations.len() == FOUNDATION_COUNT && foundations.iter().all(is_foundation_complete)
}
