mod api_client;
mod commands;

pub use crate::api_client::{
    ApiClient, ApiClientArgs, ApiClientError, LayoutResponse, PlacedWordResponse,
    ValidateWordsResponse,
};
pub use crate::commands::*;
