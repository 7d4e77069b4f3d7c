//! Conversion of Spotify track records into display metadata

// Use internal modules
use crate::model::display::DisplayTrack;
use crate::model::track::{Image, Track};

/// Maps a track record to the metadata shown on a wallpaper.
pub fn normalize(track: &Track) -> DisplayTrack {
    let artist_name = track
        .artists
        .iter()
        .map(|artist| artist.name.as_str())
        .collect::<Vec<&str>>()
        .join(", ");

    DisplayTrack {
        song_name: track.name.clone(),
        artist_name,
        album_art: best_album_art(&track.album.images).to_owned(),
        duration: format_duration(track.duration_ms),
        spotify_url: track.external_urls.spotify.clone(),
    }
}

impl From<&Track> for DisplayTrack {
    fn from(track: &Track) -> Self {
        normalize(track)
    }
}

/// Formats milliseconds as `M:SS`. Minutes are not wrapped into hours.
pub fn format_duration(duration_ms: u64) -> String {
    let total_seconds = duration_ms / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}", minutes, seconds)
}

/// URL of the tallest image; the first one listed wins a tie.
/// Images without a height count as zero.
pub fn best_album_art(images: &[Image]) -> &str {
    // `max_by_key` keeps the last maximum, so walk the list backwards
    images
        .iter()
        .rev()
        .max_by_key(|image| image.height.unwrap_or(0))
        .map_or("", |image| image.url.as_str())
}
