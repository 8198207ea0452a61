use crate::domain::column::{Column, ColumnId};
use crate::domain::id::{string_id, MAX_ID_LENGTH};
use crate::domain::ordering::{is_permutation, map_order};
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

string_id!(
    /// Unique identifier for a board
    BoardId
);

/// Tunables for id generation on a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Length of generated column and card ids
    pub id_length: usize,
    /// How many times to regenerate an id that collides before giving up
    pub max_id_attempts: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            id_length: 5,
            max_id_attempts: 16,
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.id_length == 0 || self.id_length > MAX_ID_LENGTH {
            return Err(BoardError::ConfigError(format!(
                "id_length must be between 1 and {}, got {}",
                MAX_ID_LENGTH, self.id_length
            )));
        }
        if self.max_id_attempts == 0 {
            return Err(BoardError::ConfigError(
                "max_id_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Kanban board state: an ordered set of columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    #[serde(default)]
    pub column_order: Vec<ColumnId>,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Board {
    /// Creates a board with no columns
    pub fn new(id: BoardId) -> Self {
        Self {
            id,
            column_order: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// Columns in display order
    pub fn ordered_columns(&self) -> Vec<Column> {
        map_order(&self.columns, Some(self.column_order.as_slice()), |column| {
            &column.id
        })
    }

    /// Returns a copy holding `columns`, with `column_order` rebuilt from them
    pub fn with_columns(&self, columns: Vec<Column>) -> Self {
        let column_order = columns.iter().map(|column| column.id.clone()).collect();
        Self {
            id: self.id.clone(),
            column_order,
            columns,
        }
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| &column.id == id)
    }

    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|column| &column.id == id)
    }

    /// Total number of cards across all columns
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Whether any column or card on the board already uses `id`
    pub fn id_in_use(&self, id: &str) -> bool {
        self.columns.iter().any(|column| {
            column.id.as_str() == id || column.cards.iter().any(|card| card.id.as_str() == id)
        })
    }

    /// Checks order arrays and parent keys at every level of the tree
    ///
    /// A card may briefly sit in two columns while the halves of a
    /// cross-column drop are applied one at a time; this check allows that.
    pub fn validate_layout(&self) -> Result<()> {
        if self.id.as_str().is_empty() {
            return Err(BoardError::InvariantViolation(
                "board has an empty id".to_string(),
            ));
        }

        if !is_permutation(&self.columns, &self.column_order, |column| &column.id) {
            return Err(BoardError::InvariantViolation(format!(
                "column order of board {} does not match its columns",
                self.id
            )));
        }

        for column in &self.columns {
            column.validate(&self.id)?;
        }

        Ok(())
    }

    /// Checks every ordering and ownership invariant of the tree
    pub fn validate(&self) -> Result<()> {
        self.validate_layout()?;

        let mut seen_cards = HashSet::new();
        for column in &self.columns {
            for card in &column.cards {
                if !seen_cards.insert(&card.id) {
                    return Err(BoardError::InvariantViolation(format!(
                        "card {} appears more than once on board {}",
                        card.id, self.id
                    )));
                }
            }
        }

        Ok(())
    }

    /// Repairs loosely shaped board data into a consistent tree
    ///
    /// Missing order arrays fall back to collection order, ids without a
    /// matching item are dropped, and cards are re-pointed at the column that
    /// holds them. Columns and cards end up stored in display order.
    pub fn normalized(&self) -> Self {
        let columns: Vec<Column> = ordered_or_all(
            &self.columns,
            &self.column_order,
            |column| &column.id,
            "column",
            self.id.as_str(),
        )
        .into_iter()
        .map(|column| {
            let cards = ordered_or_all(
                &column.cards,
                &column.card_order,
                |card| &card.id,
                "card",
                column.id.as_str(),
            )
            .into_iter()
            .map(|card| {
                if card.column_id != column.id || card.board_id != self.id {
                    tracing::warn!(
                        card = %card.id,
                        column = %column.id,
                        stale_column = %card.column_id,
                        "re-pointing card at the column holding it"
                    );
                }
                card.placed_in(&self.id, &column.id)
            })
            .collect();

            Column {
                board_id: self.id.clone(),
                ..column.with_cards(cards)
            }
        })
        .collect();

        self.with_columns(columns)
    }
}

/// Applies the order array, or keeps every item when it is missing
fn ordered_or_all<T, K, F>(items: &[T], order: &[K], key: F, kind: &str, owner: &str) -> Vec<T>
where
    T: Clone,
    K: Eq + std::hash::Hash,
    F: Fn(&T) -> &K,
{
    if order.is_empty() && !items.is_empty() {
        tracing::warn!(owner, kind, "missing order array, keeping stored order");
    }

    let ordered = map_order(items, Some(order), &key);
    if ordered.len() != items.len() || (!order.is_empty() && ordered.len() != order.len()) {
        tracing::warn!(
            owner,
            kind,
            items = items.len(),
            listed = order.len(),
            kept = ordered.len(),
            "order array disagrees with stored items"
        );
    }
    ordered
}
