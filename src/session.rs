//! Form state for one wallpaper editor: link loading and generation
//!
//! The session is timer free. Callers debounce input (see
//! [`DEBOUNCE_DELAY`]), call [`Session::set_link`] when the delay elapses,
//! fetch the track for the returned [`Ticket`] and hand the result back
//! through [`Session::complete`]. Results for superseded tickets are
//! dropped, so only the most recent link is ever shown.

// Use 3rd party
use log::debug;

// Use built-in library
use std::time::Duration;

// Use internal modules
use crate::client::ClientError;
use crate::generate::{GenerateError, Generator, Rasterizer, Wallpaper};
use crate::link::extract_track_id;
use crate::model::card::Card;
use crate::model::device::DeviceProfile;
use crate::model::display::DisplayTrack;

pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);
pub const INVALID_LINK_MESSAGE: &str = "Please enter a valid Spotify track URL";

/// Identifies one fetch request. Later tickets compare greater.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LinkState {
    #[default]
    Idle,
    Loading {
        ticket: Ticket,
    },
    Loaded(DisplayTrack),
    Errored(String),
}

#[derive(Debug, Default)]
pub struct Session {
    link: String,
    state: LinkState,
    device: DeviceProfile,
    last_ticket: u64,
    generator: Generator,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn state(&self) -> &LinkState {
        &self.state
    }

    pub fn device(&self) -> DeviceProfile {
        self.device
    }

    pub fn set_device(&mut self, device: DeviceProfile) {
        self.device = device;
    }

    /// Records a new link. Returns a ticket when the link needs fetching.
    pub fn set_link(&mut self, link: &str) -> Option<Ticket> {
        self.link = link.to_owned();
        // Any outstanding fetch is superseded from here on
        self.last_ticket += 1;

        if link.trim().is_empty() {
            self.state = LinkState::Idle;
            return None;
        }
        if extract_track_id(link).is_none() {
            self.state = LinkState::Errored(INVALID_LINK_MESSAGE.to_owned());
            return None;
        }

        let ticket = Ticket(self.last_ticket);
        self.state = LinkState::Loading { ticket };
        Some(ticket)
    }

    /// Applies a fetch result. Returns `false` when the ticket is stale and
    /// the result was discarded.
    pub fn complete(&mut self, ticket: Ticket, result: Result<DisplayTrack, ClientError>) -> bool {
        if self.state != (LinkState::Loading { ticket }) {
            debug!("discarding stale result for {:?}", ticket);
            return false;
        }

        self.state = match result {
            Ok(track) => LinkState::Loaded(track),
            Err(error) => LinkState::Errored(error.to_string()),
        };
        true
    }

    pub fn track(&self) -> Option<&DisplayTrack> {
        match &self.state {
            LinkState::Loaded(track) => Some(track),
            _ => None,
        }
    }

    /// Inline message to show next to the link input.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LinkState::Errored(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LinkState::Loading { .. })
    }

    pub fn is_generating(&self) -> bool {
        self.generator.is_generating()
    }

    pub fn can_generate(&self) -> bool {
        self.track().is_some() && !self.is_generating()
    }

    pub fn card(&self) -> Card {
        self.track().map_or_else(Card::placeholder, Card::from)
    }

    pub async fn generate<R: Rasterizer>(
        &self,
        rasterizer: &R,
        surface: &R::Surface,
        rendered_width: f64,
        rendered_height: f64,
    ) -> Result<Wallpaper, GenerateError> {
        let track = self.track().ok_or(GenerateError::NoTrack)?;
        self.generator
            .generate(rasterizer, surface, rendered_width, rendered_height, self.device, track)
            .await
    }
}
