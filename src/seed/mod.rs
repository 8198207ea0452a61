use crate::{
    domain::{Board, BoardId},
    error::{BoardError, Result},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[cfg(feature = "file-seed")]
pub mod file_seed;
pub mod static_seed;

#[cfg(feature = "file-seed")]
pub use file_seed::FileSeed;
pub use static_seed::StaticSeed;

/// Initial board data, shaped like `{ "boards": [ ... ] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub boards: Vec<Board>,
}

impl SeedData {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns a consistent copy of the board with the given id
    ///
    /// The stored board is normalised first, so seed data with missing order
    /// arrays or stale parent keys still loads.
    pub fn find_board(&self, id: &BoardId) -> Result<Board> {
        let board = self
            .boards
            .iter()
            .find(|board| &board.id == id)
            .ok_or_else(|| BoardError::BoardNotFound(id.to_string()))?;

        let board = board.normalized();
        board.validate()?;
        Ok(board)
    }
}

/// Where the initial board tree comes from
#[async_trait]
pub trait SeedSource: Send + Sync {
    /// Loads every seeded board
    async fn load(&self) -> Result<SeedData>;
}
