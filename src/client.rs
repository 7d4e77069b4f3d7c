// Use 3rd party
use log::{debug, error};
use reqwest::{Client as HttpClient, Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;

// Use internal modules
use crate::config::Config;
use crate::link::extract_track_id;
use crate::model::display::DisplayTrack;
use crate::model::envelope::ProxyEnvelope;

pub const TRACK_PATH: &str = "/api/spotify/track";
const FETCH_FAILED: &str = "Failed to fetch track data";

// Possible errors returned from `spotwall` client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid Spotify URL. Please provide a valid Spotify track URL.")]
    InvalidLink,
    #[error("Track not found. Please check the Spotify URL.")]
    NotFound,
    /// `body` is the raw response text; the message is the proxy's own
    /// error text when the body is an envelope.
    #[error("{}", upstream_message(status, body))]
    Upstream { status: StatusCode, body: String },
    #[error("Unable to connect to Spotify API. Please check your internet connection. ({0})")]
    Transport(#[from] reqwest::Error),
    #[error("json parse error: {0}")]
    ParseJSON(#[from] serde_json::Error),
}

impl ClientError {
    async fn from_response(response: Response) -> Self {
        match response.status() {
            StatusCode::NOT_FOUND => Self::NotFound,
            status => match response.text().await {
                Ok(body) => Self::Upstream { status, body },
                Err(error) => error.into(),
            },
        }
    }
}

fn upstream_message(status: &StatusCode, body: &str) -> String {
    match serde_json::from_str::<ProxyEnvelope>(body) {
        Ok(envelope) => envelope.error.unwrap_or_else(|| FETCH_FAILED.to_owned()),
        Err(_) => format!("upstream error: {} {}", status, body),
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Fetches track metadata through the track proxy.
pub struct Client {
    client: HttpClient,
    proxy_url: String,
}

impl Client {
    #[must_use]
    pub fn new(proxy_url: &str) -> Self {
        Self {
            client: HttpClient::new(),
            proxy_url: proxy_url.trim_end_matches('/').to_owned(),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.proxy_url)
    }

    /// Resolves a track link into display metadata.
    ///
    /// The link is validated locally first; an invalid link never reaches
    /// the network. Otherwise exactly one request is made, without retry.
    pub async fn fetch_track(&self, url: &str) -> ClientResult<DisplayTrack> {
        let track_id = extract_track_id(url).ok_or(ClientError::InvalidLink)?;
        debug!("fetching track {}", track_id);

        let response = self.api_call(url).await?;
        let body = response.text().await?;
        let envelope = Self::convert_result::<ProxyEnvelope>(&body)?;

        match envelope {
            ProxyEnvelope {
                success: true,
                data: Some(track),
                ..
            } => Ok(track),
            ProxyEnvelope { error, .. } => {
                error!(
                    "proxy reported failure for {}: {}",
                    track_id,
                    error.as_deref().unwrap_or(FETCH_FAILED)
                );
                Err(ClientError::Upstream {
                    status: StatusCode::OK,
                    body,
                })
            }
        }
    }

    async fn api_call(&self, url: &str) -> ClientResult<Response> {
        let endpoint = [self.proxy_url.as_str(), TRACK_PATH].concat();

        let response = self
            .client
            .get(&endpoint)
            .query(&[("url", url)])
            .send()
            .await
            .map_err(|e| {
                error!("proxy unreachable at {}: {}", endpoint, e);
                ClientError::from(e)
            })?;

        if response.status().is_success() {
            Ok(response)
        } else {
            debug!("proxy answered {}", response.status());
            Err(ClientError::from_response(response).await)
        }
    }

    fn convert_result<'a, T: Deserialize<'a>>(input: &'a str) -> ClientResult<T> {
        serde_json::from_str::<T>(input).map_err(Into::into)
    }
}
