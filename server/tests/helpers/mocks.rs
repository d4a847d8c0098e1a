use scrabble_board_library::models::Board;
use scrabble_board_server::models::{BoardRequest, PngBytes};
use scrabble_board_server::services::{
    BoardService, BoardServiceError, ValidatedWords, WordService, WordServiceError,
};
use mockall::mock;

mock! {
    pub BoardServiceImpl {}

    #[async_trait::async_trait]
    impl BoardService for BoardServiceImpl {
        async fn layout(&self, request: BoardRequest) -> Result<Board, BoardServiceError>;
        async fn render(&self, request: BoardRequest) -> Result<PngBytes, BoardServiceError>;
    }
}

mock! {
    pub WordServiceImpl {}

    #[async_trait::async_trait]
    impl WordService for WordServiceImpl {
        async fn filter_valid_words(
            &self,
            words: Vec<String>,
        ) -> Result<Vec<String>, WordServiceError>;
        async fn validate_words(
            &self,
            words: Vec<String>,
        ) -> Result<ValidatedWords, WordServiceError>;
    }
}
