use crate::domain::board::BoardId;
use crate::domain::card::{Card, CardId};
use crate::domain::id::string_id;
use crate::domain::ordering::{is_permutation, map_order};
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};

string_id!(
    /// Unique identifier for a column within a board
    ColumnId
);

/// A board column holding an ordered set of cards
///
/// `card_order` is the display order; `cards` is kept in the same order by
/// every operation in this crate, but data from outside may not be.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    /// Left empty by loose seed data; filled in by `Board::normalized`
    #[serde(default)]
    pub board_id: BoardId,
    pub title: String,
    #[serde(default)]
    pub card_order: Vec<CardId>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Column {
    /// Creates an empty column
    pub fn new(id: ColumnId, board_id: BoardId, title: String) -> Self {
        Self {
            id,
            board_id,
            title,
            card_order: Vec::new(),
            cards: Vec::new(),
        }
    }

    /// Cards in display order
    pub fn ordered_cards(&self) -> Vec<Card> {
        map_order(&self.cards, Some(self.card_order.as_slice()), |card| &card.id)
    }

    /// Returns a copy holding `cards`, with `card_order` rebuilt from them
    pub fn with_cards(&self, cards: Vec<Card>) -> Self {
        let card_order = cards.iter().map(|card| card.id.clone()).collect();
        Self {
            card_order,
            cards,
            ..self.clone()
        }
    }

    /// Returns a copy with a new title
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == id)
    }

    pub fn card_index(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|card| &card.id == id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Checks the column's own invariants against its owning board
    pub fn validate(&self, board_id: &BoardId) -> Result<()> {
        if self.id.as_str().is_empty() {
            return Err(BoardError::InvariantViolation(format!(
                "column with empty id on board {}",
                board_id
            )));
        }

        if let Some(card) = self.cards.iter().find(|card| card.id.as_str().is_empty()) {
            return Err(BoardError::InvariantViolation(format!(
                "card titled {:?} in column {} has an empty id",
                card.title, self.id
            )));
        }

        if &self.board_id != board_id {
            return Err(BoardError::InvariantViolation(format!(
                "column {} belongs to board {}, expected {}",
                self.id, self.board_id, board_id
            )));
        }

        if !is_permutation(&self.cards, &self.card_order, |card| &card.id) {
            return Err(BoardError::InvariantViolation(format!(
                "card order of column {} does not match its cards",
                self.id
            )));
        }

        if let Some(card) = self
            .cards
            .iter()
            .find(|card| card.column_id != self.id || &card.board_id != board_id)
        {
            return Err(BoardError::InvariantViolation(format!(
                "card {} is in column {} but points at column {} on board {}",
                card.id, self.id, card.column_id, card.board_id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_id() -> BoardId {
        BoardId::new("board-1")
    }

    fn card(id: &str, column: &str) -> Card {
        Card::new(
            CardId::new(id),
            board_id(),
            ColumnId::new(column),
            format!("Title {}", id),
        )
    }

    fn column_with(cards: Vec<Card>) -> Column {
        Column::new(ColumnId::new("column-1"), board_id(), "To do".to_string()).with_cards(cards)
    }

    #[test]
    fn test_new_column_is_empty() {
        let column = Column::new(ColumnId::new("column-1"), board_id(), "To do".to_string());
        assert!(column.is_empty());
        assert!(column.card_order.is_empty());
        assert!(column.validate(&board_id()).is_ok());
    }

    #[test]
    fn test_with_cards_rebuilds_order() {
        let column = column_with(vec![card("b", "column-1"), card("a", "column-1")]);

        let order: Vec<_> = column.card_order.iter().map(|id| id.as_str()).collect();
        assert_eq!(order, vec!["b", "a"]);
        assert_eq!(column.len(), 2);
    }

    #[test]
    fn test_ordered_cards_follow_card_order() {
        let mut column = column_with(vec![card("a", "column-1"), card("b", "column-1")]);
        column.card_order = vec![CardId::new("b"), CardId::new("a")];

        let ordered: Vec<_> = column
            .ordered_cards()
            .into_iter()
            .map(|c| c.id.to_string())
            .collect();
        assert_eq!(ordered, vec!["b", "a"]);
    }

    #[test]
    fn test_card_lookup() {
        let column = column_with(vec![card("a", "column-1"), card("b", "column-1")]);

        assert_eq!(column.card_index(&CardId::new("b")), Some(1));
        assert!(column.card(&CardId::new("a")).is_some());
        assert!(column.card(&CardId::new("z")).is_none());
    }

    #[test]
    fn test_validate_rejects_order_mismatch() {
        let mut column = column_with(vec![card("a", "column-1")]);
        column.card_order.push(CardId::new("ghost"));

        assert!(matches!(
            column.validate(&board_id()),
            Err(BoardError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_foreign_card() {
        let column = column_with(vec![card("a", "column-2")]);

        assert!(matches!(
            column.validate(&board_id()),
            Err(BoardError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_ids() {
        let column = column_with(vec![card("", "column-1")]);
        assert!(column.validate(&board_id()).is_err());

        let column = Column::new(ColumnId::default(), board_id(), "Untitled".to_string());
        assert!(column.validate(&board_id()).is_err());
    }

    #[test]
    fn test_missing_board_id_deserializes_as_placeholder() {
        let column: Column =
            serde_json::from_str(r#"{"id": "column-2", "title": "Doing"}"#).unwrap();

        assert_eq!(column.board_id, BoardId::default());
        assert!(column.validate(&board_id()).is_err());
    }

    #[test]
    fn test_validate_rejects_wrong_board() {
        let column = column_with(vec![]);

        assert!(column.validate(&BoardId::new("board-2")).is_err());
    }
}
