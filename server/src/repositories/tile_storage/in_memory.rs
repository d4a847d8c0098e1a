use crate::{models::TileSet, repositories::TileStorage};
use async_trait::async_trait;

pub struct InMemoryTileStorage {
    tiles: TileSet,
}

impl InMemoryTileStorage {
    pub fn new(tiles: TileSet) -> Self {
        Self { tiles }
    }
}

#[async_trait]
impl TileStorage for InMemoryTileStorage {
    async fn load_tiles(&self) -> anyhow::Result<TileSet> {
        Ok(self.tiles.clone())
    }
}
