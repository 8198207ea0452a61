use crate::domain::board::BoardId;
use crate::domain::column::ColumnId;
use crate::domain::id::string_id;
use serde::{Deserialize, Serialize};

string_id!(
    /// Unique identifier for a card within a board
    CardId
);

/// A task card: the leaf of the board tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub board_id: BoardId,
    pub column_id: ColumnId,
    pub title: String,
    /// Image reference shown above the title
    #[serde(default)]
    pub cover: Option<String>,
}

impl Card {
    /// Creates a card without a cover
    pub fn new(id: CardId, board_id: BoardId, column_id: ColumnId, title: String) -> Self {
        Self {
            id,
            board_id,
            column_id,
            title,
            cover: None,
        }
    }

    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = Some(cover.into());
        self
    }

    /// Returns a copy owned by the given board and column
    pub fn placed_in(&self, board_id: &BoardId, column_id: &ColumnId) -> Self {
        Self {
            board_id: board_id.clone(),
            column_id: column_id.clone(),
            ..self.clone()
        }
    }
}
