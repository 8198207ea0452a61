use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};

/// Outcome of a drag-and-drop gesture on one sequence
///
/// A drop inside a single sequence carries both indices. A drop that moves an
/// item between two sequences is reported twice: the source sees only
/// `removed_index` and the target sees only `added_index` plus the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropResult<T> {
    pub removed_index: Option<usize>,
    pub added_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<T>,
}

impl<T> DropResult<T> {
    /// Reorder within one sequence
    pub fn reorder(removed_index: usize, added_index: usize) -> Self {
        Self {
            removed_index: Some(removed_index),
            added_index: Some(added_index),
            payload: None,
        }
    }

    /// Source half of a cross-sequence move
    pub fn removal(removed_index: usize) -> Self {
        Self {
            removed_index: Some(removed_index),
            added_index: None,
            payload: None,
        }
    }

    /// Target half of a cross-sequence move
    pub fn insertion(added_index: usize, payload: T) -> Self {
        Self {
            removed_index: None,
            added_index: Some(added_index),
            payload: Some(payload),
        }
    }

    /// A drop that left everything where it was
    pub fn none() -> Self {
        Self {
            removed_index: None,
            added_index: None,
            payload: None,
        }
    }

    /// Whether the drop changes the sequence at all
    pub fn is_move(&self) -> bool {
        self.removed_index.is_some() || self.added_index.is_some()
    }
}

/// Computes the sequence that results from applying a drop
///
/// The removed element is re-inserted when both indices are present, so the
/// payload only matters for insertion-only drops. The input is never mutated.
///
/// # Errors
/// Returns [`BoardError::InvalidDrop`] when the removal index is out of range,
/// the insertion index is past the end of the (already shortened) sequence,
/// or an insertion-only drop carries no payload.
///
/// # Examples
/// ```
/// use taskboard_core::domain::drag::{apply_drag, DropResult};
///
/// let moved = apply_drag(&['a', 'b', 'c'], &DropResult::reorder(0, 2)).unwrap();
/// assert_eq!(moved, vec!['b', 'c', 'a']);
/// ```
pub fn apply_drag<T: Clone>(sequence: &[T], drop: &DropResult<T>) -> Result<Vec<T>> {
    let mut result = sequence.to_vec();
    if !drop.is_move() {
        return Ok(result);
    }

    let mut item_to_add = drop.payload.clone();

    if let Some(removed) = drop.removed_index {
        if removed >= result.len() {
            return Err(BoardError::InvalidDrop(format!(
                "removed index {} out of range for {} items",
                removed,
                result.len()
            )));
        }
        item_to_add = Some(result.remove(removed));
    }

    if let Some(added) = drop.added_index {
        if added > result.len() {
            return Err(BoardError::InvalidDrop(format!(
                "added index {} out of range for {} items",
                added,
                result.len()
            )));
        }
        let item = item_to_add.ok_or_else(|| {
            BoardError::InvalidDrop(format!("nothing to insert at index {}", added))
        })?;
        result.insert(added, item);
    }

    tracing::trace!(
        removed = ?drop.removed_index,
        added = ?drop.added_index,
        len = result.len(),
        "applied drop"
    );

    Ok(result)
}
