// Use local
use crate::model::display::DisplayTrack;

const PLACEHOLDER_SONG: &str = "Kickstart My Heart";
const PLACEHOLDER_ARTIST: &str = "Mötley Crüe";
const PLACEHOLDER_TOTAL_TIME: &str = "4:42";
const CURRENT_TIME: &str = "0:21";

/// What the "now playing" card shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub song_name: String,
    pub artist_name: String,
    pub album_art: Option<String>,
    pub current_time: String,
    pub total_time: String,
}

impl Card {
    /// Card shown before any track has been loaded.
    pub fn placeholder() -> Self {
        Self {
            song_name: PLACEHOLDER_SONG.to_owned(),
            artist_name: PLACEHOLDER_ARTIST.to_owned(),
            album_art: None,
            current_time: CURRENT_TIME.to_owned(),
            total_time: PLACEHOLDER_TOTAL_TIME.to_owned(),
        }
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl From<&DisplayTrack> for Card {
    fn from(track: &DisplayTrack) -> Self {
        Self {
            song_name: track.song_name.clone(),
            artist_name: track.artist_name.clone(),
            album_art: Some(track.album_art.clone()).filter(|url| !url.is_empty()),
            current_time: CURRENT_TIME.to_owned(),
            total_time: track.duration.clone(),
        }
    }
}
