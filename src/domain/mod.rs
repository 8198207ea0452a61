pub mod board;
pub mod card;
pub mod column;
pub mod drag;
mod id;
pub mod ordering;

pub use board::{Board, BoardConfig, BoardId};
pub use card::{Card, CardId};
pub use column::{Column, ColumnId};
pub use drag::{apply_drag, DropResult};
pub use id::MAX_ID_LENGTH;
pub use ordering::{is_permutation, map_order};
