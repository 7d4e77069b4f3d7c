pub mod tracks;

use crate::endpoints::tracks::*;
use crate::spotify::Spotify;

// Endpoint function namespaces

impl Spotify {
    pub const fn tracks(&self) -> Tracks {
        Tracks(self)
    }
}
