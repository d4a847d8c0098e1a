// New route modules are defined here and added to the router.

use crate::server::ServerState;
use std::sync::Arc;
use utoipa_axum::{router::OpenApiRouter, routes};

mod layout;
pub mod requests;
pub mod responses;
mod scrabble;
mod validate_words;

pub use scrabble::BOARD_FILE_NAME;

pub fn router(state: Arc<ServerState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(scrabble::scrabble))
        .routes(routes!(layout::layout))
        .routes(routes!(validate_words::validate_words))
        .with_state(state)
}
