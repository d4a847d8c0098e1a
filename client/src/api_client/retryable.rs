use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};
use tokio_retry::{
    RetryIf,
    strategy::{ExponentialBackoff, jitter},
};
use tracing::Instrument;
use uuid::Uuid;

use crate::{ApiClient, api_client::errors::ApiClientError};

fn is_transient_reqwest(e: &reqwest::Error) -> bool {
    e.is_timeout() || e.is_connect() || e.is_request()
}

// 503 means the server has no word list configured, retrying does not help.
fn is_transient_http(status: StatusCode) -> bool {
    (status.is_server_error() && status != StatusCode::SERVICE_UNAVAILABLE)
        || status == StatusCode::TOO_MANY_REQUESTS
}

fn retry_after(resp: &Response) -> Option<Duration> {
    resp.headers()
        .get("retry-after")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_secs)
}

fn not_cloneable() -> ApiClientError {
    ApiClientError::Unexpected("request body cannot be retried".to_owned())
}

// Outcome of a failed attempt. `Fatal` ends the retry loop at once.
enum AttemptError {
    Transient(ApiClientError),
    TransientResponse(Response),
    Fatal(ApiClientError),
}

impl AttemptError {
    fn is_transient(&self) -> bool {
        !matches!(self, AttemptError::Fatal(_))
    }
}

#[derive(Clone, Debug)]
pub struct RetrySettings {
    pub max_retries: usize,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub respect_retry_after: bool,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_retries: 5,
            base_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(5),
            respect_retry_after: true,
        }
    }
}

pub trait Retryable {
    async fn send_with_retries(
        &self,
        req_builder: RequestBuilder,
    ) -> Result<Response, ApiClientError>;
}

impl Retryable for ApiClient {
    async fn send_with_retries(
        &self,
        req_builder: RequestBuilder,
    ) -> Result<Response, ApiClientError> {
        let request = req_builder.try_clone().ok_or_else(not_cloneable)?.build()?;
        let method = request.method().as_str().to_string();
        let path = request.url().path().to_string();
        let url_for_log = request.url().to_string();
        let request_id = Uuid::new_v4().to_string();

        let strategy = ExponentialBackoff::from_millis(self.retry_settings.base_delay.as_millis() as u64)
            .max_delay(self.retry_settings.max_delay)
            .map(jitter)
            .take(self.retry_settings.max_retries);

        let outcome = RetryIf::spawn(
            strategy,
            || {
                let attempt = req_builder.try_clone().map(|b| self.decorate_request(b));
                let settings = self.retry_settings.clone();

                let span = tracing::info_span!(
                    "http.client",
                    %method,
                    %path,
                    %request_id,
                    url = %url_for_log,
                );

                async move {
                    let req_builder = attempt
                        .ok_or_else(not_cloneable)
                        .map_err(AttemptError::Fatal)?;

                    match req_builder.send().instrument(span.clone()).await {
                        Ok(resp) => {
                            let status = resp.status();

                            if !is_transient_http(status) {
                                return Ok(resp);
                            }

                            if settings.respect_retry_after
                                && let Some(wait) = retry_after(&resp)
                            {
                                tracing::warn!(
                                    parent: &span,
                                    status = %status,
                                    ?wait,
                                    "transient HTTP; honoring Retry-After"
                                );
                                tokio::time::sleep(wait.min(settings.max_delay)).await;
                            } else {
                                tracing::warn!(parent: &span, status = %status, "transient HTTP; retrying");
                            }

                            Err(AttemptError::TransientResponse(resp))
                        }
                        Err(e) if is_transient_reqwest(&e) => {
                            tracing::warn!(parent: &span, error = %e, "transient network; retrying");
                            Err(AttemptError::Transient(ApiClientError::from(e)))
                        }
                        Err(e) => {
                            tracing::error!(parent: &span, error = %e, "non-retryable error");
                            Err(AttemptError::Fatal(ApiClientError::from(e)))
                        }
                    }
                }
            },
            |e: &AttemptError| e.is_transient(),
        )
        .await;

        match outcome {
            Ok(resp) => Ok(resp),
            // Out of retries: the caller reads the error body of the last response.
            Err(AttemptError::TransientResponse(resp)) => Ok(resp),
            Err(AttemptError::Transient(e) | AttemptError::Fatal(e)) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApiClientArgs;
    use reqwest::Url;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::{TcpListener, TcpStream},
    };

    // Reads one request, headers and body, so the socket can be closed cleanly.
    async fn read_request(stream: &mut TcpStream) -> std::io::Result<()> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 1024];

        loop {
            let read = stream.read(&mut chunk).await?;
            if read == 0 {
                return Ok(());
            }
            buffer.extend_from_slice(&chunk[..read]);

            if let Some(end) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&buffer[..end]).to_lowercase();
                let length = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|value| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);

                if buffer.len() >= end + 4 + length {
                    return Ok(());
                }
            }
        }
    }

    // Answers every request with the same canned response and counts them.
    async fn canned_server(
        status_line: &'static str,
        extra_headers: &'static str,
        body: &'static str,
    ) -> (ApiClient, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let requests = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&requests);

        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                let counter = Arc::clone(&counter);

                tokio::spawn(async move {
                    if read_request(&mut stream).await.is_err() {
                        return;
                    }
                    counter.fetch_add(1, Ordering::SeqCst);

                    let response = format!(
                        "HTTP/1.1 {status_line}\r\n{extra_headers}Content-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        let mut client = ApiClient::new(ApiClientArgs {
            base_url: Url::parse(&format!("http://{address}/")).unwrap(),
            correlation_id: Uuid::new_v4(),
        })
        .unwrap();
        client.retry_settings = RetrySettings {
            max_retries: 2,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(5),
            respect_retry_after: false,
        };

        (client, requests)
    }

    fn words() -> Vec<String> {
        vec!["hello".to_string()]
    }

    #[test]
    fn server_errors_are_retried_except_unavailable() {
        // Assert
        assert!(is_transient_http(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(is_transient_http(StatusCode::BAD_GATEWAY));
        assert!(is_transient_http(StatusCode::TOO_MANY_REQUESTS));
        assert!(!is_transient_http(StatusCode::SERVICE_UNAVAILABLE));
        assert!(!is_transient_http(StatusCode::BAD_REQUEST));
        assert!(!is_transient_http(StatusCode::OK));
    }

    #[test]
    fn only_fatal_errors_stop_retrying() {
        // Assert
        assert!(AttemptError::Transient(ApiClientError::Unexpected("timeout".into())).is_transient());
        assert!(!AttemptError::Fatal(not_cloneable()).is_transient());
    }

    #[tokio::test]
    async fn non_retryable_errors_are_not_retried() {
        // Arrange
        // Endless redirect: reqwest gives up after 10 hops, i.e. 11 requests.
        let (client, requests) =
            canned_server("302 Found", "Location: /layout\r\n", "").await;

        // Act
        let result = client.layout(&words(), None).await;

        // Assert
        assert!(result.is_err());
        assert_eq!(requests.load(Ordering::SeqCst), 11);
    }

    #[tokio::test]
    async fn client_errors_are_returned_after_one_attempt() {
        // Arrange
        let (client, requests) = canned_server(
            "400 Bad Request",
            "",
            r#"{"error":"board size must be between 1 and 50, got 0"}"#,
        )
        .await;

        // Act
        let result = client.layout(&words(), Some(0)).await;

        // Assert
        assert!(matches!(
            result,
            Err(ApiClientError::BadRequest(msg)) if msg == "board size must be between 1 and 50, got 0"
        ));
        assert_eq!(requests.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn server_error_message_survives_exhausted_retries() {
        // Arrange
        let (client, requests) = canned_server(
            "500 Internal Server Error",
            "",
            r#"{"error":"failed to render board: boom"}"#,
        )
        .await;

        // Act
        let result = client.render_board(&words(), None, false).await;

        // Assert
        assert_eq!(requests.load(Ordering::SeqCst), 3);
        assert!(matches!(
            result,
            Err(ApiClientError::Unexpected(msg)) if msg.contains("failed to render board: boom")
        ));
    }
}
