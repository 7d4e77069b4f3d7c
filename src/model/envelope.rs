// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::display::DisplayTrack;

/// Body returned by the track proxy endpoint.
///
/// `{ "success": true, "data": { ... } }` on success,
/// `{ "success": false, "error": "..." }` otherwise.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProxyEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<DisplayTrack>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProxyEnvelope {
    pub fn success(data: DisplayTrack) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_owned()),
        }
    }
}
