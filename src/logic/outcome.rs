// src/logic/outcome.rs
//! 1 回の移動がどうなったかを表す型だよ。
//! 成功したらどんな移動だったか、失敗したらその理由。

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::card::Card;
use crate::components::pile::PileId;

/// 成功した移動の種類。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    DiscardToTableau { column: usize },
    DiscardToFoundation { foundation: usize },
    TableauToTableau { from: usize, to: usize, count: usize },
    TableauToFoundation { from: usize, foundation: usize },
}

/// 移動が断られた理由。盤面は何も変わっていないよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MoveError {
    #[error("no cards are selected")]
    NoSelection,
    #[error("{0:?} has no card to move")]
    EmptySource(PileId),
    #[error("a selection of zero cards cannot be moved")]
    EmptySelection,
    #[error("selected {requested} cards but only {available} are face up")]
    RunTooLong { requested: usize, available: usize },
    #[error("the selected cards are not a descending run of alternating colors")]
    InvalidRun,
    #[error("cards cannot be moved onto the column they came from")]
    SameColumn,
    #[error("tableau column {0} does not exist")]
    ColumnOutOfRange(usize),
    #[error("foundation {0} does not exist")]
    FoundationOutOfRange(usize),
    #[error("only a single card can be placed there, {0} were selected")]
    MultipleCards(usize),
    #[error("{card} cannot be placed on {target:?}")]
    IllegalPlacement { card: Card, target: PileId },
    #[error("no foundation accepts {0}")]
    NoFoundationAccepts(Card),
}

/// 1 回の移動の結果。
pub type MoveOutcome = Result<MoveKind, MoveError>;

/// 山札をクリックした時の結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// 山札から捨て札へ n 枚めくった
    Drew(usize),
    /// 山札が空だったので、捨て札 n 枚を山札に戻した
    Recycled(usize),
    /// 山札も捨て札も空で、何も起きなかった
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    #[test]
    fn error_messages() {
        let err = MoveError::IllegalPlacement {
            card: Card::new(Rank::Two, Suit::Heart),
            target: PileId::Tableau(3),
        };
        assert_eq!(err.to_string(), "2♥ cannot be placed on Tableau(3)");
        assert_eq!(
            MoveError::RunTooLong { requested: 4, available: 2 }.to_string(),
            "selected 4 cards but only 2 are face up"
        );
    }
}
