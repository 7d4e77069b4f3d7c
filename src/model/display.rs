// Use 3rd party
use serde::{Deserialize, Serialize};

/// Normalized track metadata consumed by the wallpaper card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayTrack {
    pub song_name: String,
    /// Artist names joined by `", "`.
    pub artist_name: String,
    /// Largest artwork URL, empty when the album has no images.
    pub album_art: String,
    /// `M:SS`
    pub duration: String,
    pub spotify_url: String,
}
