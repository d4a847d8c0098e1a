use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "Scrabble Board API",
    version = "1.0.0",
    description = "Lays out words on a Scrabble-like board and renders it as an image"
))]
pub struct ApiDoc;
