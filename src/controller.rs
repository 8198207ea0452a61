//! Board tree controller
//!
//! Owns the current [`Board`] snapshot and the column list derived from it.
//! Every operation computes a whole new board and swaps it in only once the
//! new tree passes validation, so callers never observe a half-applied
//! change. The one relaxation is [`BoardController::move_or_reorder_cards`],
//! where a card may be held by two columns between the halves of a drag.

use crate::domain::{
    apply_drag, Board, BoardConfig, BoardId, Card, CardId, Column, ColumnId, DropResult,
};
use crate::error::{BoardError, Result};
use crate::seed::SeedSource;

/// Result of an add operation fed by a title input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome<Id> {
    /// The item was created with this id
    Added(Id),
    /// The title was empty after trimming; nothing changed and the input
    /// should get focus back
    BlankTitle,
}

impl<Id> AddOutcome<Id> {
    pub fn id(&self) -> Option<&Id> {
        match self {
            Self::Added(id) => Some(id),
            Self::BlankTitle => None,
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }
}

/// Change to a single column
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnEdit {
    /// Replace the column with the same id
    Replace(Column),
    /// Drop the column and every card in it
    Remove(ColumnId),
}

/// Holds the board tree and applies user edits to it
#[derive(Debug, Clone)]
pub struct BoardController {
    board: Board,
    columns: Vec<Column>,
    config: BoardConfig,
}

impl BoardController {
    /// Creates a controller with the default configuration
    pub fn new(board: Board) -> Result<Self> {
        Self::with_config(board, BoardConfig::default())
    }

    pub fn with_config(board: Board, config: BoardConfig) -> Result<Self> {
        config.validate()?;
        board.validate()?;

        let columns = board.ordered_columns();
        let board = board.with_columns(columns.clone());
        tracing::debug!(
            board = %board.id,
            columns = columns.len(),
            cards = board.card_count(),
            "board loaded"
        );

        Ok(Self {
            board,
            columns,
            config,
        })
    }

    /// Loads `board_id` from a seed source
    pub async fn from_seed(source: &dyn SeedSource, board_id: &BoardId) -> Result<Self> {
        let seed = source.load().await?;
        Self::new(seed.find_board(board_id)?)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Columns in display order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| &column.id == id)
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Applies a column drag on the board
    pub fn reorder_columns(&mut self, drop: &DropResult<Column>) -> Result<&Board> {
        let columns = apply_drag(&self.columns, drop)?;
        self.commit(columns)?;

        tracing::debug!(
            removed = ?drop.removed_index,
            added = ?drop.added_index,
            "columns reordered"
        );
        Ok(&self.board)
    }

    /// Applies one column's half of a card drag
    ///
    /// A drop that neither removes nor adds is ignored. Cards dropped into the
    /// column are re-pointed at it. When a card moves between columns the
    /// target may be updated before the source, so the card can be held by
    /// both columns until the second half lands; [`Self::transfer_card`]
    /// applies both halves at once.
    pub fn move_or_reorder_cards(
        &mut self,
        column_id: &ColumnId,
        drop: &DropResult<Card>,
    ) -> Result<&Board> {
        if !drop.is_move() {
            return Ok(&self.board);
        }

        let index = self.column_position(column_id)?;
        let column = &self.columns[index];

        let drop = DropResult {
            payload: drop
                .payload
                .as_ref()
                .map(|card| card.placed_in(&column.board_id, &column.id)),
            ..drop.clone()
        };
        let cards = apply_drag(&column.cards, &drop)?;

        let mut columns = self.columns.clone();
        columns[index] = column.with_cards(cards);
        self.commit_half_move(columns)?;

        tracing::debug!(
            column = %column_id,
            removed = ?drop.removed_index,
            added = ?drop.added_index,
            "cards moved"
        );
        Ok(&self.board)
    }

    /// Moves a card from one column to a position in another in one step
    pub fn transfer_card(
        &mut self,
        from: &ColumnId,
        removed_index: usize,
        to: &ColumnId,
        added_index: usize,
    ) -> Result<&Board> {
        if from == to {
            let drop = DropResult::reorder(removed_index, added_index);
            return self.move_or_reorder_cards(from, &drop);
        }

        let source_index = self.column_position(from)?;
        let target_index = self.column_position(to)?;
        let source = &self.columns[source_index];
        let target = &self.columns[target_index];

        let card = source.cards.get(removed_index).ok_or_else(|| {
            BoardError::InvalidDrop(format!(
                "removed index {} out of range for {} items",
                removed_index,
                source.len()
            ))
        })?;
        let moved = card.placed_in(&target.board_id, &target.id);
        let card_id = moved.id.clone();

        let source_cards = apply_drag(&source.cards, &DropResult::removal(removed_index))?;
        let target_cards = apply_drag(&target.cards, &DropResult::insertion(added_index, moved))?;

        let mut columns = self.columns.clone();
        columns[source_index] = source.with_cards(source_cards);
        columns[target_index] = target.with_cards(target_cards);
        self.commit(columns)?;

        tracing::debug!(card = %card_id, from = %from, to = %to, "card transferred");
        Ok(&self.board)
    }

    /// Appends a new empty column titled `title`
    pub fn add_column(&mut self, title: &str) -> Result<AddOutcome<ColumnId>> {
        let title = title.trim();
        if title.is_empty() {
            tracing::debug!("ignoring column with blank title");
            return Ok(AddOutcome::BlankTitle);
        }

        let id = self.fresh_id(ColumnId::generate)?;
        let column = Column::new(id.clone(), self.board.id.clone(), title.to_string());

        let mut columns = self.columns.clone();
        columns.push(column);
        self.commit(columns)?;
        tracing::debug!(column = %id, "column added");

        Ok(AddOutcome::Added(id))
    }

    /// Replaces or removes one column
    pub fn update_column(&mut self, edit: ColumnEdit) -> Result<&Board> {
        let mut columns = self.columns.clone();
        match &edit {
            ColumnEdit::Replace(column) => {
                let index = self.column_position(&column.id)?;
                columns[index] = column.clone();
            }
            ColumnEdit::Remove(id) => {
                let index = self.column_position(id)?;
                columns.remove(index);
            }
        }
        self.commit(columns)?;

        match edit {
            ColumnEdit::Replace(column) => tracing::debug!(column = %column.id, "column updated"),
            ColumnEdit::Remove(id) => tracing::debug!(column = %id, "column removed"),
        }
        Ok(&self.board)
    }

    pub fn remove_column(&mut self, id: &ColumnId) -> Result<&Board> {
        self.update_column(ColumnEdit::Remove(id.clone()))
    }

    /// Sets a column title; a blank title keeps the current one
    pub fn rename_column(&mut self, id: &ColumnId, title: &str) -> Result<&Board> {
        let column = self
            .column(id)
            .ok_or_else(|| BoardError::ColumnNotFound(id.to_string()))?;

        let title = title.trim();
        if title.is_empty() || title == column.title {
            return Ok(&self.board);
        }

        let renamed = column.with_title(title);
        self.update_column(ColumnEdit::Replace(renamed))
    }

    /// Appends a new card titled `title` to the end of a column
    pub fn add_card(&mut self, title: &str, column_id: &ColumnId) -> Result<AddOutcome<CardId>> {
        let title = title.trim();
        if title.is_empty() {
            tracing::debug!(column = %column_id, "ignoring card with blank title");
            return Ok(AddOutcome::BlankTitle);
        }

        let column = self
            .column(column_id)
            .ok_or_else(|| BoardError::ColumnNotFound(column_id.to_string()))?;
        let id = self.fresh_id(CardId::generate)?;
        let card = Card::new(
            id.clone(),
            column.board_id.clone(),
            column.id.clone(),
            title.to_string(),
        );

        let mut updated = column.clone();
        updated.cards.push(card);
        updated.card_order.push(id.clone());

        self.update_column(ColumnEdit::Replace(updated))?;
        tracing::debug!(card = %id, column = %column_id, "card added");

        Ok(AddOutcome::Added(id))
    }

    /// Sets a card title; a blank title keeps the current one
    pub fn rename_card(
        &mut self,
        column_id: &ColumnId,
        card_id: &CardId,
        title: &str,
    ) -> Result<&Board> {
        let column = self
            .column(column_id)
            .ok_or_else(|| BoardError::ColumnNotFound(column_id.to_string()))?;
        let index = column
            .card_index(card_id)
            .ok_or_else(|| BoardError::CardNotFound(card_id.to_string()))?;

        let title = title.trim();
        if title.is_empty() || title == column.cards[index].title {
            return Ok(&self.board);
        }

        let mut updated = column.clone();
        updated.cards[index].title = title.to_string();
        self.update_column(ColumnEdit::Replace(updated))
    }

    pub fn remove_card(&mut self, column_id: &ColumnId, card_id: &CardId) -> Result<&Board> {
        let index = self
            .column(column_id)
            .ok_or_else(|| BoardError::ColumnNotFound(column_id.to_string()))?
            .card_index(card_id)
            .ok_or_else(|| BoardError::CardNotFound(card_id.to_string()))?;

        self.move_or_reorder_cards(column_id, &DropResult::removal(index))
    }

    fn column_position(&self, id: &ColumnId) -> Result<usize> {
        self.columns
            .iter()
            .position(|column| &column.id == id)
            .ok_or_else(|| BoardError::ColumnNotFound(id.to_string()))
    }

    fn fresh_id<Id, G>(&self, generate: G) -> Result<Id>
    where
        Id: AsRef<str>,
        G: Fn(usize) -> Id,
    {
        for _ in 0..self.config.max_id_attempts {
            let id = generate(self.config.id_length);
            if !self.board.id_in_use(id.as_ref()) {
                return Ok(id);
            }
        }
        Err(BoardError::IdExhausted(self.config.max_id_attempts))
    }

    /// Swaps in the board built from `columns` if every invariant holds
    fn commit(&mut self, columns: Vec<Column>) -> Result<&Board> {
        let board = self.board.with_columns(columns);
        board.validate()?;
        Ok(self.replace(board))
    }

    /// Like [`Self::commit`], but lets a card sit in two columns while the
    /// halves of a cross-column drop land separately
    fn commit_half_move(&mut self, columns: Vec<Column>) -> Result<&Board> {
        let board = self.board.with_columns(columns);
        board.validate_layout()?;
        Ok(self.replace(board))
    }

    fn replace(&mut self, board: Board) -> &Board {
        self.columns = board.ordered_columns();
        self.board = board;
        &self.board
    }
}
