//! Spotify Web API client used by the track proxy

// Use 3rd party
use log::{debug, error};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

// Use internal modules
use crate::auth::{AuthError, SpotifyCredentials};
use crate::config::{Config, ConfigError, DEFAULT_ACCOUNTS_URL, DEFAULT_API_URL};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Track not found. Please check the Spotify URL.")]
    NotFound,
    #[error("Spotify API error: {status} {body}")]
    Status { status: StatusCode, body: String },
    #[error("Failed to get Spotify access token: {0}")]
    Auth(#[from] AuthError),
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("json parse error: {0}")]
    ParseJSON(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

// Spotify Web API
pub struct Spotify {
    client: Client,
    credentials: SpotifyCredentials,
    api_url: String,
    accounts_url: String,
}

impl Spotify {
    #[must_use]
    pub fn new(credentials: SpotifyCredentials) -> Self {
        Self {
            client: Client::new(),
            credentials,
            api_url: DEFAULT_API_URL.to_owned(),
            accounts_url: DEFAULT_ACCOUNTS_URL.to_owned(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(config.credentials()?).urls(&config.api_url, &config.accounts_url))
    }

    /// Points the lookup at different API and accounts hosts.
    pub fn urls(mut self, api_url: &str, accounts_url: &str) -> Self {
        self.api_url = api_url.trim_end_matches('/').to_owned();
        self.accounts_url = accounts_url.trim_end_matches('/').to_owned();
        self
    }

    /// Authenticated GET against the Web API, returning the raw body.
    /// Every call performs a fresh token exchange.
    pub async fn get(&self, path: &str) -> ApiResult<String> {
        let token = self
            .credentials
            .request_token(&self.client, &self.accounts_url)
            .await?;

        let url = [self.api_url.as_str(), path].concat();
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&token.access_token)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("{} not found", path);
            return Err(ApiError::NotFound);
        }

        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            error!("Spotify request failed. path: {}, status: {}", path, status);
            Err(ApiError::Status { status, body })
        }
    }

    pub(crate) fn convert_result<'a, T: Deserialize<'a>>(input: &'a str) -> ApiResult<T> {
        serde_json::from_str::<T>(input).map_err(Into::into)
    }
}
