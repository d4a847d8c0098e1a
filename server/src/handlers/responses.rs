// Response bodies returned by the board endpoints.

use crate::services::ValidatedWords;
use scrabble_board_library::models::{Board, Direction, EMPTY_CELL, PlacedWord};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PlacedWordResponse {
    pub word: String,
    pub row: usize,
    pub col: usize,
    #[schema(value_type = String, example = "H")]
    pub direction: Direction,
}

impl From<&PlacedWord> for PlacedWordResponse {
    fn from(placed: &PlacedWord) -> Self {
        Self {
            word: placed.word.clone(),
            row: placed.row,
            col: placed.col,
            direction: placed.direction,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct LayoutResponse {
    pub board_size: usize,
    /// One string per row, `.` marks an empty cell.
    pub rows: Vec<String>,
    pub placed: Vec<PlacedWordResponse>,
    pub skipped: Vec<String>,
}

impl From<&Board> for LayoutResponse {
    fn from(board: &Board) -> Self {
        Self {
            board_size: board.size(),
            rows: board.to_grid(EMPTY_CELL),
            placed: board
                .placed_words()
                .iter()
                .map(PlacedWordResponse::from)
                .collect(),
            skipped: board.skipped_words().to_vec(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidateWordsResponse {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

impl From<ValidatedWords> for ValidateWordsResponse {
    fn from(words: ValidatedWords) -> Self {
        Self {
            valid: words.valid,
            invalid: words.invalid,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
