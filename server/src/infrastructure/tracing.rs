use axum::{
    Router,
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    middleware::{self, Next},
    response::Response,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Span;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt};
use uuid::Uuid;

pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub trait TracingExtensions {
    fn with_tracing(self) -> Self;
    fn with_request_id(self) -> Self;
    fn with_correlation_id(self) -> Self;
}

pub fn init_tracing() -> anyhow::Result<()> {
    LogTracer::init()?;
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .json()
        .boxed();

    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = Registry::default().with(filter_layer).with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

impl<S> TracingExtensions for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_tracing(self) -> Self {
        self.layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(tracing::Level::INFO)
                        .latency_unit(tower_http::LatencyUnit::Millis),
                ),
        )
    }

    fn with_request_id(self) -> Self {
        self.layer(
            TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                let request_id = req
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default();

                tracing::info_span!(
                    "request",
                    %request_id,
                    method = %req.method(),
                    uri = %req.uri(),
                    version = ?req.version()
                )
            }),
        )
        .layer(middleware::from_fn(request_id_middleware))
    }

    fn with_correlation_id(self) -> Self {
        self.layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<Body>| {
                    match req
                        .headers()
                        .get(CORRELATION_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                    {
                        Some(cid) => tracing::info_span!("correlation_id", correlation_id = %cid),
                        None => Span::none(),
                    }
                })
                .on_request(DefaultOnRequest::new())
                .on_response(
                    DefaultOnResponse::new().latency_unit(tower_http::LatencyUnit::Millis),
                ),
        )
        .layer(middleware::from_fn(correlation_id_middleware))
    }
}

/// Correlation IDs are chosen by the caller and follow a flow across services.
/// When present on the request, the same value is echoed on the response.
async fn correlation_id_middleware(mut req: Request<Body>, next: Next) -> Response {
    let header_name = HeaderName::from_static(CORRELATION_ID_HEADER);

    let Some(cid) = req.headers().get(&header_name).cloned() else {
        return next.run(req).await;
    };

    req.extensions_mut().insert(cid.clone());

    let mut res = next.run(req).await;
    res.headers_mut().insert(header_name, cid);
    res
}

/// Request IDs tag every log line of one request. The server generates one
/// when the caller did not, and always returns it in the response.
async fn request_id_middleware(mut req: Request<Body>, next: Next) -> Response {
    let header_name = HeaderName::from_static(REQUEST_ID_HEADER);

    let request_id = match req.headers().get(&header_name) {
        Some(id) => id.clone(),
        None => new_request_id(),
    };

    req.headers_mut()
        .insert(header_name.clone(), request_id.clone());
    req.extensions_mut().insert(request_id.clone());

    let mut res = next.run(req).await;

    res.headers_mut().insert(header_name, request_id);
    res
}

fn new_request_id() -> HeaderValue {
    // hyphenated UUIDs are plain ASCII
    HeaderValue::from_str(&Uuid::new_v4().to_string())
        .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
}
