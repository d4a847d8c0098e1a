use crate::{
    errors::ServerError,
    handlers::{requests::ScrabbleRequest, responses::ErrorResponse},
    server::ServerState,
};
use axum::{Json, extract::State, http::header, response::IntoResponse};
use bytes::Bytes;
use std::sync::Arc;
use tracing::{error, instrument};

pub const BOARD_FILE_NAME: &str = "scrabble_board.png";

#[utoipa::path(
    post,
    path = "/scrabble",
    tag = "Scrabble Board",
    description = "Lay out the given words and return the board as a PNG image",
    request_body = ScrabbleRequest,
    responses(
        (status = 200, description = "Rendered board", body = String, content_type = "image/png"),
        (status = 400, description = "Invalid board size or too many words", body = ErrorResponse),
        (status = 422, description = "Malformed request body"),
        (status = 503, description = "Word dictionary not available", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse),
    ),
)]
#[instrument(skip(state, request), fields(words = request.words.len()))]
pub async fn scrabble(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<ScrabbleRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let png = state
        .board_service()
        .render(request.into())
        .await
        .map_err(|e| {
            error!("Failed to render board: {:?}", e);
            ServerError::from(e)
        })?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{BOARD_FILE_NAME}\""),
            ),
        ],
        Bytes::from(png),
    ))
}
