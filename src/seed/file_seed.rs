use crate::{
    error::Result,
    seed::{SeedData, SeedSource},
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Seed data read from a JSON file
pub struct FileSeed {
    path: PathBuf,
}

impl FileSeed {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl SeedSource for FileSeed {
    async fn load(&self) -> Result<SeedData> {
        let contents = fs::read_to_string(&self.path).await?;
        let seed = SeedData::from_json(&contents)?;

        tracing::debug!(
            path = %self.path.display(),
            boards = seed.boards.len(),
            "seed data loaded"
        );
        Ok(seed)
    }
}
