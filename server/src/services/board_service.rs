use crate::{
    models::{BoardRequest, PngBytes},
    services::{BoardRenderer, WordService, WordServiceError},
};
use async_trait::async_trait;
use scrabble_board_library::{create_layout, models::Board};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum BoardServiceError {
    #[error("board size must be between 1 and {max}, got {size}")]
    InvalidBoardSize { size: usize, max: usize },
    #[error("at most {max} words are allowed, got {count}")]
    TooManyWords { count: usize, max: usize },
    #[error(transparent)]
    Validation(#[from] WordServiceError),
    #[error("failed to render board: {0}")]
    RenderError(String),
}

#[derive(Clone, Copy, Debug)]
pub struct BoardSettings {
    pub default_board_size: usize,
    pub max_board_size: usize,
    pub max_words: usize,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            default_board_size: 15,
            max_board_size: 50,
            max_words: 100,
        }
    }
}

#[async_trait]
pub trait BoardService: Send + Sync {
    async fn layout(&self, request: BoardRequest) -> Result<Board, BoardServiceError>;
    async fn render(&self, request: BoardRequest) -> Result<PngBytes, BoardServiceError>;
}

pub struct BoardServiceImpl {
    renderer: BoardRenderer,
    word_service: Arc<dyn WordService>,
    settings: BoardSettings,
}

impl BoardServiceImpl {
    pub fn new(
        renderer: BoardRenderer,
        word_service: Arc<dyn WordService>,
        settings: BoardSettings,
    ) -> Self {
        Self {
            renderer,
            word_service,
            settings,
        }
    }

    fn board_size(&self, requested: Option<usize>) -> Result<usize, BoardServiceError> {
        let size = requested.unwrap_or(self.settings.default_board_size);

        if size == 0 || size > self.settings.max_board_size {
            return Err(BoardServiceError::InvalidBoardSize {
                size,
                max: self.settings.max_board_size,
            });
        }

        Ok(size)
    }
}

#[async_trait]
impl BoardService for BoardServiceImpl {
    async fn layout(&self, request: BoardRequest) -> Result<Board, BoardServiceError> {
        if request.words.len() > self.settings.max_words {
            return Err(BoardServiceError::TooManyWords {
                count: request.words.len(),
                max: self.settings.max_words,
            });
        }

        let size = self.board_size(request.board_size)?;

        let words = if request.validate {
            self.word_service.filter_valid_words(request.words).await?
        } else {
            request.words
        };

        let board = create_layout(&words, size).map_err(|_| {
            BoardServiceError::InvalidBoardSize {
                size,
                max: self.settings.max_board_size,
            }
        })?;

        for word in board.skipped_words() {
            warn!(%word, "could not find a valid placement");
        }

        Ok(board)
    }

    async fn render(&self, request: BoardRequest) -> Result<PngBytes, BoardServiceError> {
        let board = self.layout(request).await?;
        let renderer = self.renderer.clone();

        tokio::task::spawn_blocking(move || renderer.render_png(&board))
            .await
            .map_err(|e| {
                error!("Render task failed: {}", e);
                BoardServiceError::RenderError(e.to_string())
            })?
            .map_err(|e| {
                error!("Failed to encode board image: {}", e);
                BoardServiceError::RenderError(e.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::TileSet, repositories::InMemoryWordDictionary, services::WordServiceImpl,
    };
    use image::{Rgba, RgbaImage};
    use std::collections::HashMap;

    fn service(settings: BoardSettings) -> BoardServiceImpl {
        let tiles: HashMap<char, RgbaImage> = ('A'..='Z')
            .map(|letter| (letter, RgbaImage::from_pixel(6, 6, Rgba([0, 0, 0, 255]))))
            .collect();
        let renderer = BoardRenderer::new(TileSet::new(tiles).unwrap(), 1, 2.0);
        let dictionary = InMemoryWordDictionary::from_words(["hello", "world"]);
        let word_service = Arc::new(WordServiceImpl::new(Some(Arc::new(dictionary)), 100));

        BoardServiceImpl::new(renderer, word_service, settings)
    }

    fn words(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[tokio::test]
    async fn layout_uses_default_board_size() {
        // Arrange
        let service = service(BoardSettings::default());

        // Act
        let board = service
            .layout(BoardRequest::new(words(&["hello", "world"])))
            .await
            .unwrap();

        // Assert
        assert_eq!(board.size(), 15);
        assert_eq!(board.placed_words().len(), 2);
    }

    #[tokio::test]
    async fn layout_rejects_oversized_board() {
        // Arrange
        let service = service(BoardSettings::default());
        let request = BoardRequest {
            words: words(&["hello"]),
            board_size: Some(51),
            validate: false,
        };

        // Act
        let result = service.layout(request).await;

        // Assert
        assert!(matches!(
            result,
            Err(BoardServiceError::InvalidBoardSize { size: 51, max: 50 })
        ));
    }

    #[tokio::test]
    async fn layout_rejects_zero_board_size() {
        // Arrange
        let service = service(BoardSettings::default());
        let request = BoardRequest {
            words: words(&["hello"]),
            board_size: Some(0),
            validate: false,
        };

        // Act
        let result = service.layout(request).await;

        // Assert
        assert!(matches!(
            result,
            Err(BoardServiceError::InvalidBoardSize { size: 0, .. })
        ));
    }

    #[tokio::test]
    async fn layout_rejects_too_many_words() {
        // Arrange
        let service = service(BoardSettings {
            max_words: 2,
            ..Default::default()
        });

        // Act
        let result = service
            .layout(BoardRequest::new(words(&["a", "b", "c"])))
            .await;

        // Assert
        assert!(matches!(
            result,
            Err(BoardServiceError::TooManyWords { count: 3, max: 2 })
        ));
    }

    #[tokio::test]
    async fn layout_filters_invalid_words_when_asked() {
        // Arrange
        let service = service(BoardSettings::default());
        let request = BoardRequest {
            words: words(&["hello", "xqzt", "world"]),
            board_size: None,
            validate: true,
        };

        // Act
        let board = service.layout(request).await.unwrap();

        // Assert
        let placed: Vec<&str> = board
            .placed_words()
            .iter()
            .map(|p| p.word.as_str())
            .collect();
        assert_eq!(placed, vec!["HELLO", "WORLD"]);
        assert!(board.skipped_words().is_empty());
    }

    #[tokio::test]
    async fn render_returns_png_bytes() {
        // Arrange
        let service = service(BoardSettings::default());
        let request = BoardRequest {
            words: words(&["hello"]),
            board_size: Some(5),
            validate: false,
        };

        // Act
        let png = service.render(request).await.unwrap();

        // Assert
        let image = image::load_from_memory(&png).unwrap();
        assert_eq!((image.width(), image.height()), (40, 40));
    }
}
