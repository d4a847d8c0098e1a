// Request bodies accepted by the board endpoints.

use crate::models::BoardRequest;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct ScrabbleRequest {
    /// Words to place on the board, in placement order.
    pub words: Vec<String>,
    /// Width and height of the board. Server default when omitted.
    #[serde(default)]
    pub board_size: Option<usize>,
    /// Drop words missing from the dictionary before laying out.
    #[serde(default)]
    pub validate: bool,
}

impl From<ScrabbleRequest> for BoardRequest {
    fn from(val: ScrabbleRequest) -> Self {
        BoardRequest {
            words: val.words,
            board_size: val.board_size,
            validate: val.validate,
        }
    }
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct ValidateWordsRequest {
    pub words: Vec<String>,
}
