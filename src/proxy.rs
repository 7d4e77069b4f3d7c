//! Request handling for the track proxy endpoint (`GET /api/spotify/track?url=...`)

// Use 3rd party
use log::{debug, error};
use reqwest::StatusCode;
use thiserror::Error;

// Use internal modules
use crate::link::extract_track_id;
use crate::model::display::DisplayTrack;
use crate::model::envelope::ProxyEnvelope;
use crate::normalize::normalize;
use crate::spotify::{ApiError, Spotify};

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Missing URL parameter")]
    MissingUrl,
    #[error("Invalid Spotify URL. Please provide a valid Spotify track URL.")]
    InvalidLink,
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::MissingUrl | ProxyError::InvalidLink => StatusCode::BAD_REQUEST,
            ProxyError::Api(ApiError::NotFound) => StatusCode::NOT_FOUND,
            ProxyError::Api(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Status and JSON body to send back to the caller.
#[derive(Debug, PartialEq)]
pub struct ProxyReply {
    pub status: StatusCode,
    pub envelope: ProxyEnvelope,
}

impl ProxyReply {
    pub fn body(&self) -> String {
        // Serializing plain strings and bools cannot fail
        serde_json::to_string(&self.envelope).unwrap_or_default()
    }
}

pub struct Proxy {
    spotify: Spotify,
}

impl Proxy {
    #[must_use]
    pub fn new(spotify: Spotify) -> Self {
        Self { spotify }
    }

    /// Handles one request, `url` being the raw query parameter.
    pub async fn handle(&self, url: Option<&str>) -> ProxyReply {
        match self.lookup(url).await {
            Ok(track) => ProxyReply {
                status: StatusCode::OK,
                envelope: ProxyEnvelope::success(track),
            },
            Err(error) => {
                let status = error.status();
                if status.is_server_error() {
                    error!("track proxy failed: {}", error);
                } else {
                    debug!("track proxy rejected request: {}", error);
                }
                ProxyReply {
                    status,
                    envelope: ProxyEnvelope::failure(&error.to_string()),
                }
            }
        }
    }

    pub async fn lookup(&self, url: Option<&str>) -> Result<DisplayTrack, ProxyError> {
        let url = url.filter(|url| !url.is_empty()).ok_or(ProxyError::MissingUrl)?;
        let track_id = extract_track_id(url).ok_or(ProxyError::InvalidLink)?;
        let track = self.spotify.tracks().get(&track_id).await?;
        Ok(normalize(&track))
    }
}
