use crate::{
    errors::ServerError,
    handlers::{
        requests::ValidateWordsRequest,
        responses::{ErrorResponse, ValidateWordsResponse},
    },
    server::ServerState,
};
use axum::{Json, extract::State};
use std::sync::Arc;
use tracing::{error, instrument};

#[utoipa::path(
    post,
    path = "/words/validate",
    tag = "Words",
    description = "Split the given words into dictionary words and rejected ones",
    request_body = ValidateWordsRequest,
    responses(
        (status = 200, description = "Validation result", body = ValidateWordsResponse),
        (status = 400, description = "Too many words", body = ErrorResponse),
        (status = 422, description = "Malformed request body"),
        (status = 503, description = "Word dictionary not available", body = ErrorResponse),
    ),
)]
#[instrument(skip(state, request), fields(words = request.words.len()))]
pub async fn validate_words(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<ValidateWordsRequest>,
) -> Result<Json<ValidateWordsResponse>, ServerError> {
    let result = state
        .word_service()
        .validate_words(request.words)
        .await
        .map_err(|e| {
            error!("Failed to validate words: {:?}", e);
            ServerError::from(e)
        })?;

    Ok(Json(ValidateWordsResponse::from(result)))
}
