// Thin wrapper around the Scrabble Board HTTP API. It only translates
// requests and responses, no board logic lives here.
mod errors;
mod models;
mod retryable;

use std::time::Duration;

use reqwest::{Client as HttpClient, StatusCode, Url};
use tracing::instrument;
use uuid::Uuid;

pub use crate::api_client::errors::ApiClientError;
pub use crate::api_client::models::{LayoutResponse, PlacedWordResponse, ValidateWordsResponse};
use crate::api_client::{
    models::{ScrabbleRequest, ValidateWordsRequest},
    retryable::{RetrySettings, Retryable},
};

const CORRELATION_ID_HEADER: &str = "X-CORRELATION-ID";

#[derive(Clone)]
pub struct ApiClientArgs {
    pub base_url: Url,
    pub correlation_id: Uuid,
}

#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
    args: ApiClientArgs,
    retry_settings: RetrySettings,
}

impl ApiClient {
    pub fn new(args: ApiClientArgs) -> Result<Self, ApiClientError> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiClientError::Unexpected(e.to_string()))?;

        Ok(Self {
            http,
            args,
            retry_settings: RetrySettings::default(),
        })
    }

    fn decorate_request(&self, req_builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req_builder.header(CORRELATION_ID_HEADER, self.args.correlation_id.to_string())
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiClientError> {
        self.args
            .base_url
            .join(path)
            .map_err(|e| ApiClientError::Unexpected(e.to_string()))
    }

    #[instrument(skip(self), fields(correlation_id = %self.args.correlation_id))]
    pub async fn render_board(
        &self,
        words: &[String],
        board_size: Option<usize>,
        validate: bool,
    ) -> Result<Vec<u8>, ApiClientError> {
        let body = ScrabbleRequest {
            words: words.to_vec(),
            board_size,
            validate,
        };
        let resp = self
            .send_with_retries(self.http.post(self.endpoint("scrabble")?).json(&body))
            .await?;

        if resp.status() != StatusCode::OK {
            return Err(ApiClientError::from_response(resp).await);
        }

        Ok(resp.bytes().await?.to_vec())
    }

    #[instrument(skip(self), fields(correlation_id = %self.args.correlation_id))]
    pub async fn layout(
        &self,
        words: &[String],
        board_size: Option<usize>,
    ) -> Result<LayoutResponse, ApiClientError> {
        let body = ScrabbleRequest {
            words: words.to_vec(),
            board_size,
            validate: false,
        };
        let resp = self
            .send_with_retries(self.http.post(self.endpoint("layout")?).json(&body))
            .await?;

        match resp.status() {
            StatusCode::OK => Ok(resp.json().await?),
            _ => Err(ApiClientError::from_response(resp).await),
        }
    }

    #[instrument(skip(self), fields(correlation_id = %self.args.correlation_id))]
    pub async fn validate_words(
        &self,
        words: &[String],
    ) -> Result<ValidateWordsResponse, ApiClientError> {
        let body = ValidateWordsRequest {
            words: words.to_vec(),
        };
        let resp = self
            .send_with_retries(self.http.post(self.endpoint("words/validate")?).json(&body))
            .await?;

        match resp.status() {
            StatusCode::OK => Ok(resp.json().await?),
            _ => Err(ApiClientError::from_response(resp).await),
        }
    }
}
