//! Environment based configuration

// Use 3rd party
use thiserror::Error;

// Use built-in library
use std::env;

// Use internal modules
use crate::auth::SpotifyCredentials;

pub const PROXY_URL_VAR: &str = "SPOTWALL_PROXY_URL";
pub const CLIENT_ID_VAR: &str = "SPOTIFY_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_CLIENT_SECRET";
pub const API_URL_VAR: &str = "SPOTIFY_API_URL";
pub const ACCOUNTS_URL_VAR: &str = "SPOTIFY_ACCOUNTS_URL";

pub const DEFAULT_PROXY_URL: &str = "http://localhost:3000";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com";
pub const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.spotify.com";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Spotify credentials not configured: {0} is not set")]
    MissingVar(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the track proxy, used by the wallpaper client.
    pub proxy_url: String,
    /// Spotify application credentials, only needed by the proxy side.
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub api_url: String,
    pub accounts_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proxy_url: DEFAULT_PROXY_URL.to_owned(),
            client_id: None,
            client_secret: None,
            api_url: DEFAULT_API_URL.to_owned(),
            accounts_url: DEFAULT_ACCOUNTS_URL.to_owned(),
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    /// Call `dotenv().ok()` first to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            proxy_url: var(PROXY_URL_VAR).unwrap_or(defaults.proxy_url),
            client_id: var(CLIENT_ID_VAR),
            client_secret: var(CLIENT_SECRET_VAR),
            api_url: var(API_URL_VAR).unwrap_or(defaults.api_url),
            accounts_url: var(ACCOUNTS_URL_VAR).unwrap_or(defaults.accounts_url),
        }
    }

    pub fn credentials(&self) -> Result<SpotifyCredentials, ConfigError> {
        let client_id = self
            .client_id
            .as_deref()
            .ok_or(ConfigError::MissingVar(CLIENT_ID_VAR))?;
        let client_secret = self
            .client_secret
            .as_deref()
            .ok_or(ConfigError::MissingVar(CLIENT_SECRET_VAR))?;
        Ok(SpotifyCredentials::new(client_id, client_secret))
    }
}
