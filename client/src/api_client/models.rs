// Copies of the server DTOs. Kept separate so the client does not link
// against the server crate.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrabbleRequest {
    pub words: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_size: Option<usize>,
    pub validate: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateWordsRequest {
    pub words: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedWordResponse {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutResponse {
    pub board_size: usize,
    pub rows: Vec<String>,
    pub placed: Vec<PlacedWordResponse>,
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateWordsResponse {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}
