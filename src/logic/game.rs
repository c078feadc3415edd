// src/logic/game.rs
//! ゲームの進行役 (コントローラー) だよ！🎮
//!
//! 盤面 (`Board`) と「いま何を選んでいるか」(`Selection`) を持っていて、
//! 呼び出し側 (描画・入力の層) からの操作を受け取って盤面を書き換える。
//!
//! 操作の流れはいつも「元を選ぶ → 先を選ぶ」。
//! 何かを選んでいる状態でもう一度選ぶと、それは移動の試みとして扱われて、
//! 成功しても失敗しても選択はクリアされるよ。

use log::{debug, info, warn};

use crate::components::card::Card;
use crate::components::pile::PileId;
use crate::components::selection::Selection;
use crate::config::game_config::{
    ConfigError, GameConfig, WinRule, FOUNDATION_COUNT, INITIAL_FACE_DOWN_TABLEAU,
    INITIAL_STOCK_CARDS, TABLEAU_COLUMNS,
};
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::logic::board::Board;
use crate::logic::deck::shuffled_stock;
use crate::logic::outcome::{DrawOutcome, MoveError, MoveKind, MoveOutcome};
use crate::logic::rules;
use crate::systems::DealInitialCardsSystem;

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    selection: Selection,
    // 裏向きカウンター。勝利判定 (WinRule::FaceDownCounters) に使う。
    // 山札側は捨て札から場札・組札へ動かすたびに減る。
    num_face_down_tableau_cards: usize,
    num_face_down_stock_cards: usize,
    config: GameConfig,
    last_outcome: Option<MoveOutcome>,
}

impl Game {
    /// シャッフルして配った新しいゲームを作る。`seed` が None なら毎回違う配り方。
    pub fn new(seed: Option<u64>) -> Self {
        Self::deal(GameConfig {
            seed,
            ..GameConfig::default()
        })
    }

    /// 設定を指定してゲームを作る。設定がおかしければエラー。
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::deal(config))
    }

    fn deal(config: GameConfig) -> Self {
        info!("Starting new game (seed: {:?})", config.seed);
        let mut board = Board::new();
        board.stock = shuffled_stock(config.seed);
        DealInitialCardsSystem.execute(&mut board);
        debug_assert_eq!(board.face_down_tableau_count(), INITIAL_FACE_DOWN_TABLEAU);
        debug_assert_eq!(board.stock.len(), INITIAL_STOCK_CARDS);
        Self {
            board,
            selection: Selection::None,
            num_face_down_tableau_cards: INITIAL_FACE_DOWN_TABLEAU,
            num_face_down_stock_cards: INITIAL_STOCK_CARDS,
            config,
            last_outcome: None,
        }
    }

    /// 並べ終わった盤面からゲームを始める。
    /// カウンターは盤面から数える (場札の裏向き枚数、山札と捨て札の合計)。
    pub fn from_board(board: Board, config: GameConfig) -> Self {
        let num_face_down_tableau_cards = board.face_down_tableau_count();
        let num_face_down_stock_cards = board.stock.len() + board.discard.len();
        Self {
            board,
            selection: Selection::None,
            num_face_down_tableau_cards,
            num_face_down_stock_cards,
            config,
            last_outcome: None,
        }
    }

    // --- 読み取り用 ---

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// 捨て札が選ばれているか (ハイライト表示用)。
    pub fn is_discard_selected(&self) -> bool {
        self.selection.is_discard()
    }

    /// 指定した列で選ばれている枚数 (ハイライト表示用)。
    pub fn number_selected(&self, column: usize) -> usize {
        self.selection.number_selected(column)
    }

    pub fn num_face_down_tableau_cards(&self) -> usize {
        self.num_face_down_tableau_cards
    }

    pub fn num_face_down_stock_cards(&self) -> usize {
        self.num_face_down_stock_cards
    }

    /// 直近の移動の結果。選ぶだけ・キャンセルしただけなら None。
    pub fn last_outcome(&self) -> Option<&MoveOutcome> {
        self.last_outcome.as_ref()
    }

    /// 設定された勝利条件で判定する。
    pub fn is_won(&self) -> bool {
        match self.config.win_rule {
            WinRule::FaceDownCounters => rules::check_win_condition(
                self.num_face_down_tableau_cards,
                self.num_face_down_stock_cards,
            ),
            WinRule::AllFoundationsComplete => self.all_foundations_complete(),
        }
    }

    /// 4 つの組札が全部そろっているか (設定に関係なくいつでも使える)。
    pub fn all_foundations_complete(&self) -> bool {
        rules::all_foundations_complete(self.board.foundations())
    }

    // --- 操作 ---

    /// 山札から捨て札へカードをめくる。
    /// 山札が空なら、捨て札を全部山札に戻す (並びは逆になる)。選択はそのまま。
    pub fn draw_from_stock(&mut self) -> DrawOutcome {
        if rules::can_deal_from_stock(&self.board.stock) {
            let n = rules::cards_to_draw(self.board.stock.len(), self.config.draw_count);
            let drawn = self.board.stock.transfer_to(&mut self.board.discard, n);
            debug!("Drew {} cards from stock ({} left).", drawn, self.board.stock.len());
            DrawOutcome::Drew(drawn)
        } else if rules::can_reset_stock_from_waste(&self.board.stock, &self.board.discard) {
            let n = self.board.discard.len();
            let recycled = self.board.discard.transfer_to(&mut self.board.stock, n);
            debug!("Recycled {} discarded cards back to stock.", recycled);
            DrawOutcome::Recycled(recycled)
        } else {
            debug!("Stock and discard are both empty. Nothing to draw.");
            DrawOutcome::Empty
        }
    }

    /// 捨て札を選ぶ。すでに何か選んでいたら、選択を取り消すだけ。
    pub fn select_discard(&mut self) {
        self.last_outcome = None;
        if self.selection.is_active() {
            debug!("Selection {:?} cancelled by discard click.", self.selection);
            self.clear_selection();
        } else {
            self.selection = Selection::Discard;
            debug!("Discard selected.");
        }
    }

    /// 場札 `column` 列目の上から `n` 枚を選ぶ。
    ///
    /// すでに何か選んでいたら、この列を移動先として移動を試みる
    /// (`n` が 2 以上なら移動はしない)。そのあと選択は必ずクリア。
    /// 勝ったかどうかを返すよ。
    pub fn select_tableau(&mut self, column: usize, n: usize) -> bool {
        match self.selection {
            Selection::None => {
                if column < TABLEAU_COLUMNS {
                    self.selection = Selection::Tableau { column, count: n };
                    self.last_outcome = None;
                    debug!("Selected {} cards from column {}.", n, column);
                } else {
                    self.record(Err(MoveError::ColumnOutOfRange(column)));
                }
            }
            Selection::Discard => {
                let outcome = if n <= 1 {
                    self.discard_to_tableau(column)
                } else {
                    Err(MoveError::MultipleCards(n))
                };
                self.record(outcome);
                self.clear_selection();
            }
            Selection::Tableau { column: source, count } => {
                let outcome = if n <= 1 {
                    self.tableau_to_tableau(source, count, column)
                } else {
                    Err(MoveError::MultipleCards(n))
                };
                self.record(outcome);
                self.clear_selection();
            }
        }
        self.is_won()
    }

    /// 選んでいるカードを組札 `foundation` に動かす。選択はクリアされる。
    pub fn move_selection_to_foundation(&mut self, foundation: usize) -> bool {
        let outcome = match self.selection {
            Selection::Tableau { column, count } => {
                Some(self.tableau_to_foundation(column, count, foundation))
            }
            Selection::Discard => Some(self.discard_to_foundation(foundation)),
            Selection::None => None,
        };
        match outcome {
            Some(outcome) => self.record(outcome),
            None => self.last_outcome = None,
        }
        self.clear_selection();
        self.is_won()
    }

    /// 選んでいるカードを、置ける組札に自動で動かす。
    /// 場札から 2 枚以上選んでいる時や、どこにも置けない時は断られる。
    pub fn auto_move_selection_to_foundation(&mut self) -> bool {
        let card = match self.selected_lead_card() {
            Ok(card) => card,
            Err(err) => {
                self.record(Err(err));
                self.clear_selection();
                return self.is_won();
            }
        };
        if let Selection::Tableau { count, .. } = self.selection {
            if count != 1 {
                self.record(Err(MoveError::MultipleCards(count)));
                self.clear_selection();
                return self.is_won();
            }
        }
        match find_automatic_foundation_move(&self.board, card) {
            Some(foundation) => self.move_selection_to_foundation(foundation),
            None => {
                self.record(Err(MoveError::NoFoundationAccepts(card)));
                self.clear_selection();
                self.is_won()
            }
        }
    }

    /// いまの選択を `target` に置けるか (描画側のヒント用)。盤面は変えない。
    pub fn can_move_selection_to(&self, target: PileId) -> bool {
        if let Selection::Tableau { column, .. } = self.selection {
            if target == PileId::Tableau(column as u8) {
                return false;
            }
        }
        match self.selected_lead_card() {
            Ok(card) => {
                let single =
                    !matches!(self.selection, Selection::Tableau { count, .. } if count != 1);
                match target {
                    PileId::Foundation(_) if !single => false,
                    _ => rules::is_move_valid(&self.board, card, target),
                }
            }
            Err(_) => false,
        }
    }

    // --- 内部処理 ---

    fn clear_selection(&mut self) {
        self.selection = Selection::None;
    }

    fn record(&mut self, outcome: MoveOutcome) {
        match &outcome {
            Ok(kind) => info!("Move succeeded: {:?}", kind),
            Err(err) => debug!("Move rejected: {}", err),
        }
        self.last_outcome = Some(outcome);
    }

    /// 選択中のカードのうち、移動先に最初に乗るカード。
    fn selected_lead_card(&self) -> Result<Card, MoveError> {
        match self.selection {
            Selection::None => Err(MoveError::NoSelection),
            Selection::Discard => {
                self.board.discard.peek().ok_or(MoveError::EmptySource(PileId::Discard))
            }
            Selection::Tableau { column, count } => {
                let cards = self.selected_run(column, count)?;
                cards.first().copied().ok_or(MoveError::EmptySelection)
            }
        }
    }

    /// 列 `column` の表向きの上から `count` 枚 (下から上の順)。
    fn selected_run(&self, column: usize, count: usize) -> Result<&[Card], MoveError> {
        let source = self.board.column(column).ok_or(MoveError::ColumnOutOfRange(column))?;
        if count == 0 {
            return Err(MoveError::EmptySelection);
        }
        let face_up = source.face_up.cards();
        if count > face_up.len() {
            return Err(MoveError::RunTooLong {
                requested: count,
                available: face_up.len(),
            });
        }
        Ok(&face_up[face_up.len() - count..])
    }

    fn check_column(column: usize) -> Result<(), MoveError> {
        if column < TABLEAU_COLUMNS {
            Ok(())
        } else {
            Err(MoveError::ColumnOutOfRange(column))
        }
    }

    fn check_foundation(foundation: usize) -> Result<(), MoveError> {
        if foundation < FOUNDATION_COUNT {
            Ok(())
        } else {
            Err(MoveError::FoundationOutOfRange(foundation))
        }
    }

    /// 元の列の表向きが空になったら、次の裏向きカードをめくる。
    fn flip_source(&mut self, column: usize) {
        if self.board.tableau[column].flip_if_needed() {
            self.num_face_down_tableau_cards = self.num_face_down_tableau_cards.saturating_sub(1);
            debug!(
                "Flipped a card in column {} ({} face-down tableau cards left).",
                column, self.num_face_down_tableau_cards
            );
        }
    }

    fn decrement_stock_counter(&mut self) {
        match self.num_face_down_stock_cards.checked_sub(1) {
            Some(n) => self.num_face_down_stock_cards = n,
            None => warn!("Stock counter is already zero."),
        }
    }

    fn discard_to_tableau(&mut self, column: usize) -> MoveOutcome {
        Self::check_column(column)?;
        let card = self.board.discard.peek().ok_or(MoveError::EmptySource(PileId::Discard))?;
        let target = PileId::Tableau(column as u8);
        if !rules::is_move_valid(&self.board, card, target) {
            return Err(MoveError::IllegalPlacement { card, target });
        }
        self.board.discard.transfer_to(&mut self.board.tableau[column].face_up, 1);
        self.decrement_stock_counter();
        Ok(MoveKind::DiscardToTableau { column })
    }

    fn discard_to_foundation(&mut self, foundation: usize) -> MoveOutcome {
        Self::check_foundation(foundation)?;
        let card = self.board.discard.peek().ok_or(MoveError::EmptySource(PileId::Discard))?;
        let target = PileId::Foundation(foundation as u8);
        if !rules::is_move_valid(&self.board, card, target) {
            return Err(MoveError::IllegalPlacement { card, target });
        }
        self.board.discard.transfer_to(&mut self.board.foundations[foundation], 1);
        self.decrement_stock_counter();
        Ok(MoveKind::DiscardToFoundation { foundation })
    }

    fn tableau_to_tableau(&mut self, from: usize, count: usize, to: usize) -> MoveOutcome {
        Self::check_column(to)?;
        if from == to {
            return Err(MoveError::SameColumn);
        }
        let run = self.selected_run(from, count)?;
        if !rules::is_valid_run(run) {
            return Err(MoveError::InvalidRun);
        }
        // 移動先に最初に乗るのは、切り取る列の一番下のカード
        let lead = run[0];
        let target = PileId::Tableau(to as u8);
        if !rules::is_move_valid(&self.board, lead, target) {
            return Err(MoveError::IllegalPlacement { card: lead, target });
        }

        let run = self.board.tableau[from]
            .face_up
            .split_off_top(count)
            .ok_or(MoveError::RunTooLong {
                requested: count,
                available: self.board.tableau[from].face_up.len(),
            })?;
        self.board.tableau[to].face_up.extend(run);
        self.flip_source(from);
        Ok(MoveKind::TableauToTableau { from, to, count })
    }

    fn tableau_to_foundation(
        &mut self,
        from: usize,
        count: usize,
        foundation: usize,
    ) -> MoveOutcome {
        Self::check_foundation(foundation)?;
        Self::check_column(from)?;
        if count == 0 {
            return Err(MoveError::EmptySelection);
        }
        let card = self.board.tableau[from]
            .face_up
            .peek()
            .ok_or(MoveError::EmptySource(PileId::Tableau(from as u8)))?;
        if count != 1 {
            return Err(MoveError::MultipleCards(count));
        }
        let target = PileId::Foundation(foundation as u8);
        if !rules::is_move_valid(&self.board, card, target) {
            return Err(MoveError::IllegalPlacement { card, target });
        }
        self.board.tableau[from]
            .face_up
            .transfer_to(&mut self.board.foundations[foundation], 1);
        self.flip_source(from);
        Ok(MoveKind::TableauToFoundation { from, foundation })
    }
}
