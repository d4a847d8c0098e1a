use crate::{
    errors::ServerError,
    handlers::{
        requests::ScrabbleRequest,
        responses::{ErrorResponse, LayoutResponse},
    },
    server::ServerState,
};
use axum::{Json, extract::State};
use std::sync::Arc;
use tracing::{error, instrument};

#[utoipa::path(
    post,
    path = "/layout",
    tag = "Scrabble Board",
    description = "Lay out the given words and return the board as JSON",
    request_body = ScrabbleRequest,
    responses(
        (status = 200, description = "Board layout", body = LayoutResponse),
        (status = 400, description = "Invalid board size or too many words", body = ErrorResponse),
        (status = 422, description = "Malformed request body"),
        (status = 503, description = "Word dictionary not available", body = ErrorResponse),
    ),
)]
#[instrument(skip(state, request), fields(words = request.words.len()))]
pub async fn layout(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<ScrabbleRequest>,
) -> Result<Json<LayoutResponse>, ServerError> {
    let board = state
        .board_service()
        .layout(request.into())
        .await
        .map_err(|e| {
            error!("Failed to lay out board: {:?}", e);
            ServerError::from(e)
        })?;

    Ok(Json(LayoutResponse::from(&board)))
}
