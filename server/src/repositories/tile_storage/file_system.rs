use crate::{
    models::{TILE_LETTERS, TileSet},
    repositories::TileStorage,
};
use anyhow::Context;
use async_trait::async_trait;
use config::Config;
use image::ImageFormat;
use serde::Deserialize;
use std::{collections::HashMap, path::PathBuf};
use tracing::{debug, instrument};

#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct TilesConfig {
    #[serde(default = "TilesConfig::default_directory")]
    pub directory: PathBuf,
}

impl TilesConfig {
    const CONFIG_PREFIX: &'static str = "TILES";

    fn default_directory() -> PathBuf {
        PathBuf::from("scrabble_tiles")
    }

    pub fn load_from_env() -> anyhow::Result<Self> {
        Config::builder()
            .add_source(config::Environment::with_prefix(Self::CONFIG_PREFIX).separator("__"))
            .build()?
            .try_deserialize::<TilesConfig>()
            .map_err(|e| anyhow::anyhow!("failed to load Tiles Configuration: {}", e))
    }
}

/// Reads one `<LETTER>.png` file per letter from a directory.
#[derive(Clone, Debug)]
pub struct FileSystemTileStorage {
    directory: PathBuf,
}

impl FileSystemTileStorage {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn load_from_env() -> anyhow::Result<Self> {
        let config = TilesConfig::load_from_env()?;
        Ok(Self::new(config.directory))
    }

    fn path(&self, letter: char) -> PathBuf {
        self.directory.join(format!("{letter}.png"))
    }
}

#[async_trait]
impl TileStorage for FileSystemTileStorage {
    #[instrument(skip(self), fields(directory = %self.directory.display()))]
    async fn load_tiles(&self) -> anyhow::Result<TileSet> {
        let mut tiles = HashMap::new();

        for letter in TILE_LETTERS {
            let path = self.path(letter);
            let bytes = tokio::fs::read(&path)
                .await
                .with_context(|| format!("failed to read tile {}", path.display()))?;
            let tile = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
                .with_context(|| format!("failed to decode tile {}", path.display()))?
                .to_rgba8();

            debug!(%letter, width = tile.width(), height = tile.height(), "tile loaded");
            tiles.insert(letter, tile);
        }

        TileSet::new(tiles)
    }
}
