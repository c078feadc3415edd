// src/components/selection.rs

use serde::{Deserialize, Serialize};

/// いま「持ち上げている」カードを表すよ！✋
///
/// 選べるのは同時に 1 か所だけ。捨て札か、場札 1 列の上から `count` 枚。
/// 2 つを同時に持つことは型の上でできないようになってる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    /// 何も選んでいない
    #[default]
    None,
    /// 捨て札の一番上のカード
    Discard,
    /// 場札 `column` 列目の表向きカード、上から `count` 枚
    Tableau { column: usize, count: usize },
}

impl Selection {
    pub fn is_active(&self) -> bool {
        !matches!(self, Selection::None)
    }

    pub fn is_discard(&self) -> bool {
        matches!(self, Selection::Discard)
    }

    /// 指定した列で選ばれている枚数。他の列や捨て札なら 0。
    pub fn number_selected(&self, column: usize) -> usize {
        match *self {
            Selection::Tableau { column: c, count } if c == column => count,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_none() {
        let selection = Selection::default();
        assert_eq!(selection, Selection::None);
        assert!(!selection.is_active());
    }

    #[test]
    fn number_selected_only_for_that_column() {
        let selection = Selection::Tableau { column: 3, count: 2 };
        assert!(selection.is_active());
        assert!(!selection.is_discard());
        assert_eq!(selection.number_selected(3), 2);
        assert_eq!(selection.number_selected(4), 0);
        assert_eq!(Selection::Discard.number_selected(3), 0);
    }
}
