use crate::infrastructure::TracingExtensions;
use crate::services::{BoardService, BoardSettings, RenderSettings, WordService};
use crate::{apidoc::ApiDoc, handlers, repositories, services};
use axum::Router;
use config::Config;
use serde::Deserialize;
use std::{net::Ipv4Addr, sync::Arc};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub struct ServerState {
    board_service: Arc<dyn BoardService>,
    word_service: Arc<dyn WordService>,
}

impl ServerState {
    pub fn new(board_service: Arc<dyn BoardService>, word_service: Arc<dyn WordService>) -> Self {
        Self {
            board_service,
            word_service,
        }
    }

    pub fn board_service(&self) -> Arc<dyn BoardService> {
        Arc::clone(&self.board_service)
    }

    pub fn word_service(&self) -> Arc<dyn WordService> {
        Arc::clone(&self.word_service)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_port")]
    pub port: u16,
    #[serde(default = "ServerConfig::default_board_size")]
    pub board_size: usize,
    #[serde(default = "ServerConfig::default_max_board_size")]
    pub max_board_size: usize,
    #[serde(default = "ServerConfig::default_max_words")]
    pub max_words: usize,
    #[serde(default = "ServerConfig::default_tile_padding")]
    pub tile_padding: u32,
    #[serde(default = "ServerConfig::default_max_rotation_degrees")]
    pub max_rotation_degrees: f32,
}

impl ServerConfig {
    const CONFIG_PREFIX: &'static str = "SERVER_CONFIG";

    fn default_port() -> u16 {
        8080
    }

    fn default_board_size() -> usize {
        15
    }

    fn default_max_board_size() -> usize {
        50
    }

    fn default_max_words() -> usize {
        100
    }

    fn default_tile_padding() -> u32 {
        5
    }

    fn default_max_rotation_degrees() -> f32 {
        2.0
    }

    pub fn load_from_env() -> anyhow::Result<Self> {
        let config = Config::builder()
            .add_source(config::Environment::with_prefix(Self::CONFIG_PREFIX).separator("__"))
            .build()?
            .try_deserialize::<ServerConfig>()?;

        config.validate()
    }

    fn validate(self) -> anyhow::Result<Self> {
        if !self.max_rotation_degrees.is_finite() {
            anyhow::bail!(
                "max_rotation_degrees must be a finite number, got {}",
                self.max_rotation_degrees
            );
        }

        Ok(self)
    }

    pub fn board_settings(&self) -> BoardSettings {
        BoardSettings {
            default_board_size: self.board_size,
            max_board_size: self.max_board_size,
            max_words: self.max_words,
        }
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            tile_padding: self.tile_padding,
            max_rotation_degrees: self.max_rotation_degrees,
        }
    }
}

pub async fn init_server() -> anyhow::Result<(Router, TcpListener)> {
    let config = ServerConfig::load_from_env()?;

    let (tile_storage, dictionary) = repositories::init_repositories().await?;
    let (board_service, word_service) = services::init_services(
        tile_storage,
        dictionary,
        config.board_settings(),
        config.render_settings(),
    )
    .await?;
    let state = ServerState::new(board_service, word_service);
    let server_routes = handlers::router(Arc::new(state));

    let (server, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(server_routes)
        .split_for_parts();

    let server = server
        .with_tracing()
        .with_request_id()
        .with_correlation_id()
        .merge(SwaggerUi::new("/swagger-ui").url("/apidoc/openapi.json", api));

    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, config.port)).await?;
    tracing::info!(port = config.port, "listening");

    Ok((server, listener))
}
