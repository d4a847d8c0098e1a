use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("Rejected by the server: {0}")]
    BadRequest(String),

    #[error("Word dictionary is not available on the server")]
    DictionaryUnavailable,

    #[error("Unexpected Server response: {0}")]
    Other(StatusCode, String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ApiClientError {
    fn new(status: StatusCode, message: &str) -> Self {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiClientError::BadRequest(extract_error(message))
            }
            StatusCode::SERVICE_UNAVAILABLE => ApiClientError::DictionaryUnavailable,
            s if s.is_client_error() => ApiClientError::Other(status, message.to_owned()),
            _ => ApiClientError::Unexpected(format!(
                "{} (status: {status})",
                extract_error(message)
            )),
        }
    }

    pub async fn from_response(resp: reqwest::Response) -> Self {
        let status = resp.status();
        let message = resp.text().await.unwrap_or_default();

        ApiClientError::new(status, &message)
    }
}

// Server errors come as `{"error": "..."}`, fall back to the raw body otherwise.
fn extract_error(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_owned))
        .unwrap_or_else(|| body.to_owned())
}

impl From<reqwest::Error> for ApiClientError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            let message = err.to_string();

            ApiClientError::new(status, &message)
        } else {
            ApiClientError::Unexpected(err.to_string())
        }
    }
}
