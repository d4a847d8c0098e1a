use axum::Router;
use scrabble_board_server::{
    handlers, infrastructure::TracingExtensions, server::ServerState, services::BoardService,
    services::WordService,
};
use std::sync::Arc;
use tokio::{net::TcpListener, task::JoinHandle};

use crate::helpers::mocks::{MockBoardServiceImpl, MockWordServiceImpl};

pub struct WebServerSimulator {
    base_url: String,
    listener: TcpListener,
    board_service: MockBoardServiceImpl,
    word_service: MockWordServiceImpl,
}

impl WebServerSimulator {
    pub async fn new() -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let host = listener.local_addr()?;
        let base_url = format!("http://{}", host);

        Ok(Self {
            base_url,
            listener,
            board_service: MockBoardServiceImpl::new(),
            word_service: MockWordServiceImpl::new(),
        })
    }

    pub fn url(&self) -> String {
        self.base_url.clone()
    }

    pub fn configure_board_service(&mut self, mut callback: impl FnMut(&mut MockBoardServiceImpl)) {
        callback(&mut self.board_service);
    }

    pub fn configure_word_service(&mut self, mut callback: impl FnMut(&mut MockWordServiceImpl)) {
        callback(&mut self.word_service);
    }

    pub async fn start(self) -> JoinHandle<()> {
        let state = ServerState::new(
            Arc::new(self.board_service) as Arc<dyn BoardService>,
            Arc::new(self.word_service) as Arc<dyn WordService>,
        );

        serve(self.listener, state)
    }

    /// Serves real services instead of the mocks.
    pub async fn start_with_state(self, state: ServerState) -> JoinHandle<()> {
        serve(self.listener, state)
    }
}

// The OpenAPI docs and request logging are left out, only the routes and the
// id headers are served.
fn serve(listener: TcpListener, state: ServerState) -> JoinHandle<()> {
    let routes = handlers::router(Arc::new(state));
    let server = Router::new()
        .merge(Router::from(routes))
        .with_request_id()
        .with_correlation_id();
    let server = axum::serve(listener, server.into_make_service());

    tokio::spawn(async move {
        server.await.unwrap();
    })
}
