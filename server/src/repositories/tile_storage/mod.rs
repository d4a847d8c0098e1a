use crate::models::TileSet;
use async_trait::async_trait;

#[async_trait]
pub trait TileStorage: Send + Sync {
    async fn load_tiles(&self) -> anyhow::Result<TileSet>;
}

mod file_system;
mod in_memory;

pub use file_system::{FileSystemTileStorage, TilesConfig};
pub use in_memory::InMemoryTileStorage;
