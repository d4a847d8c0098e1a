mod board_service;
mod renderer;
mod word_service;

pub use board_service::{BoardService, BoardServiceError, BoardServiceImpl, BoardSettings};
pub use renderer::{BoardRenderer, encode_png};
pub use word_service::{ValidatedWords, WordService, WordServiceError, WordServiceImpl};

use crate::repositories::{TileStorage, WordDictionary};
use std::sync::Arc;

#[derive(Clone, Copy, Debug)]
pub struct RenderSettings {
    pub tile_padding: u32,
    pub max_rotation_degrees: f32,
}

// Template function to initialize services.
// Tiles are read once here and shared by every render.
pub async fn init_services(
    tile_storage: Arc<dyn TileStorage>,
    dictionary: Option<Arc<dyn WordDictionary>>,
    board_settings: BoardSettings,
    render_settings: RenderSettings,
) -> anyhow::Result<(Arc<dyn BoardService>, Arc<dyn WordService>)> {
    let tiles = tile_storage.load_tiles().await?;
    let renderer = BoardRenderer::new(
        tiles,
        render_settings.tile_padding,
        render_settings.max_rotation_degrees,
    );

    let word_service = Arc::new(WordServiceImpl::new(
        dictionary,
        board_settings.max_words,
    )) as Arc<dyn WordService>;
    let board_service = Arc::new(BoardServiceImpl::new(
        renderer,
        Arc::clone(&word_service),
        board_settings,
    )) as Arc<dyn BoardService>;

    Ok((board_service, word_service))
}
