// Use 3rd party
use serde::{Deserialize, Serialize};

// Spotify track example (trimmed):
//{
    //"id": "11dFghVXANMlKmJXsNCbNl",
    //"name": "Cut To The Feeling",
    //"artists": [{ "name": "Carly Rae Jepsen" }],
    //"album": {
        //"name": "Cut To The Feeling",
        //"images": [{ "url": "...", "height": 640, "width": 640 }]
    //},
    //"duration_ms": 207959,
    //"external_urls": { "spotify": "https://open.spotify.com/track/11dFghVXANMlKmJXsNCbNl" }
//}

/// A track record as returned by the Spotify Web API.
///
/// Only the fields needed for a wallpaper are kept. The identifying
/// fields are mandatory, so a partial record fails to deserialize
/// instead of producing a half filled track.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<Artist>,
    pub album: Album,
    pub duration_ms: u64,
    pub external_urls: ExternalUrls,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

/// Artwork descriptor. Spotify sends `null` dimensions for some images.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}
