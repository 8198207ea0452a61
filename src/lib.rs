//! # Taskboard Core
//!
//! In-memory model for a kanban task board: a board owns ordered columns,
//! each column owns ordered cards. Drag-and-drop results and title edits are
//! applied through [`BoardController`], which replaces the whole board
//! snapshot on every change and keeps each order array in step with the
//! items it orders.
//!
//! Rendering, gesture capture, and input handling are left to the caller.

pub mod controller;
pub mod domain;
pub mod error;
pub mod seed;

// Re-export commonly used types
pub use controller::{AddOutcome, BoardController, ColumnEdit};
pub use domain::{
    apply_drag, map_order, Board, BoardConfig, BoardId, Card, CardId, Column, ColumnId,
    DropResult,
};
pub use error::{BoardError, Result};
pub use seed::{SeedData, SeedSource, StaticSeed};

#[cfg(feature = "file-seed")]
pub use seed::FileSeed;
