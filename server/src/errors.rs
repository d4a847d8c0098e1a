use crate::services::{BoardServiceError, WordServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

#[derive(Debug)]
pub struct ServerError {
    status: StatusCode,
    body: Option<Value>,
}

impl ServerError {
    pub fn new(status: StatusCode, body: Option<Value>) -> Self {
        Self { status, body }
    }

    fn with_message(status: StatusCode, message: impl ToString) -> Self {
        Self::new(status, Some(json!({ "error": message.to_string() })))
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self.body {
            Some(v) => (self.status, Json(v)).into_response(),
            None => self.status.into_response(),
        }
    }
}

impl From<WordServiceError> for ServerError {
    fn from(err: WordServiceError) -> Self {
        match err {
            WordServiceError::DictionaryUnavailable => {
                ServerError::with_message(StatusCode::SERVICE_UNAVAILABLE, err)
            }
            WordServiceError::TooManyWords { .. } => {
                ServerError::with_message(StatusCode::BAD_REQUEST, err)
            }
        }
    }
}

impl From<BoardServiceError> for ServerError {
    fn from(err: BoardServiceError) -> Self {
        match err {
            BoardServiceError::InvalidBoardSize { .. } | BoardServiceError::TooManyWords { .. } => {
                ServerError::with_message(StatusCode::BAD_REQUEST, err)
            }
            BoardServiceError::Validation(inner) => ServerError::from(inner),
            BoardServiceError::RenderError(_) => {
                ServerError::with_message(StatusCode::INTERNAL_SERVER_ERROR, err)
            }
        }
    }
}
