mod tile_storage;
mod word_dictionary;

use std::sync::Arc;

pub use tile_storage::{FileSystemTileStorage, InMemoryTileStorage, TileStorage, TilesConfig};
pub use word_dictionary::{
    DictionaryConfig, InMemoryWordDictionary, WordDictionary, WordListDictionary,
};

// Tiles are mandatory, the word list is optional: without it validation
// requests are refused but layout and rendering keep working.
pub async fn init_repositories()
-> anyhow::Result<(Arc<dyn TileStorage>, Option<Arc<dyn WordDictionary>>)> {
    let tile_storage = Arc::new(FileSystemTileStorage::load_from_env()?) as Arc<dyn TileStorage>;

    let dictionary = WordListDictionary::load_from_env()
        .await?
        .map(|d| Arc::new(d) as Arc<dyn WordDictionary>);

    if dictionary.is_none() {
        tracing::warn!("no word list configured, word validation is disabled");
    }

    Ok((tile_storage, dictionary))
}
