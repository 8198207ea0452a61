use crate::{error::Result, seed::SeedData, seed::SeedSource};
use async_trait::async_trait;

/// Seed data compiled into the binary
pub struct StaticSeed {
    json: &'static str,
}

impl StaticSeed {
    const INITIAL_DATA: &'static str = include_str!("initial_data.json");

    pub fn new(json: &'static str) -> Self {
        Self { json }
    }

    /// The bundled three-column demo board, `board-1`
    pub fn initial() -> Self {
        Self::new(Self::INITIAL_DATA)
    }
}

impl Default for StaticSeed {
    fn default() -> Self {
        Self::initial()
    }
}

#[async_trait]
impl SeedSource for StaticSeed {
    async fn load(&self) -> Result<SeedData> {
        SeedData::from_json(self.json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BoardId;

    #[tokio::test]
    async fn test_initial_seed_loads() {
        let seed = StaticSeed::initial().load().await.unwrap();
        assert_eq!(seed.boards.len(), 1);

        let board = seed.find_board(&BoardId::new("board-1")).unwrap();
        let columns: Vec<_> = board.column_order.iter().map(|id| id.as_str()).collect();
        assert_eq!(columns, vec!["column-1", "column-2", "column-3"]);
        assert_eq!(board.card_count(), 13);
    }

    #[tokio::test]
    async fn test_initial_seed_is_already_consistent() {
        let seed = StaticSeed::default().load().await.unwrap();

        // The bundled data should not need any repair
        let stored = &seed.boards[0];
        assert!(stored.validate().is_ok());
        assert_eq!(&stored.normalized(), stored);
    }

    #[tokio::test]
    async fn test_first_card_has_cover() {
        let seed = StaticSeed::initial().load().await.unwrap();
        let board = seed.find_board(&BoardId::new("board-1")).unwrap();

        let first = &board.columns[0].cards[0];
        assert_eq!(first.id.as_str(), "card-1");
        assert!(first.cover.is_some());
        assert!(board.columns[0].cards[1].cover.is_none());
    }

    #[tokio::test]
    async fn test_custom_static_seed() {
        let seed = StaticSeed::new(r#"{ "boards": [] }"#).load().await.unwrap();
        assert!(seed.boards.is_empty());
    }
}
