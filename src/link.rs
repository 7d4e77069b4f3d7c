//! Track link parsing

// Use 3rd party
use regex::Regex;

// Use built-in library
use std::sync::LazyLock;

static URI_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"spotify:track:([a-zA-Z0-9]+)").unwrap());
static WEB_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"spotify\.com/track/([a-zA-Z0-9]+)").unwrap());
static OPEN_WEB_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"open\.spotify\.com/track/([a-zA-Z0-9]+)").unwrap());

/// Link syntaxes a track can be shared with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkSyntax {
    /// `spotify:track:<id>`
    Uri,
    /// `spotify.com/track/<id>`
    Web,
    /// `open.spotify.com/track/<id>`
    OpenWeb,
}

/// Syntaxes in the order they are tried. The first match wins.
pub const SYNTAXES: [LinkSyntax; 3] = [LinkSyntax::Uri, LinkSyntax::Web, LinkSyntax::OpenWeb];

impl LinkSyntax {
    /// Pattern whose first capture group is the track identifier.
    pub fn pattern(self) -> &'static Regex {
        match self {
            LinkSyntax::Uri => &*URI_PATTERN,
            LinkSyntax::Web => &*WEB_PATTERN,
            LinkSyntax::OpenWeb => &*OPEN_WEB_PATTERN,
        }
    }

    /// Returns the identifier of the leftmost match, if any.
    pub fn extract(self, url: &str) -> Option<&str> {
        self.pattern()
            .captures(url)
            .and_then(|captures| captures.get(1))
            .map(|id| id.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackLink {
    pub syntax: LinkSyntax,
    pub id: String,
}

pub fn parse_link(url: &str) -> Option<TrackLink> {
    SYNTAXES.iter().find_map(|&syntax| {
        syntax.extract(url).map(|id| TrackLink {
            syntax,
            id: id.to_owned(),
        })
    })
}

/// Extracts the track identifier from a Spotify link.
///
/// Returns `None` for anything that is not a track link; garbage input is
/// never an error.
///
/// ```
/// use spotwall::link::extract_track_id;
///
/// let id = extract_track_id("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC?si=1");
/// assert_eq!(id.as_deref(), Some("4uLU6hMCjMI75M1A2tKUQC"));
/// assert_eq!(extract_track_id("https://example.com"), None);
/// ```
pub fn extract_track_id(url: &str) -> Option<String> {
    parse_link(url).map(|link| link.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri() {
        assert_eq!(
            extract_track_id("spotify:track:4uLU6hMCjMI75M1A2tKUQC").as_deref(),
            Some("4uLU6hMCjMI75M1A2tKUQC")
        );
    }

    #[test]
    fn web_links() {
        assert_eq!(
            extract_track_id("https://spotify.com/track/abc123").as_deref(),
            Some("abc123")
        );
        assert_eq!(
            extract_track_id("https://open.spotify.com/track/abc123?si=xyz").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn priority_order() {
        // `spotify.com/track/` is a substring of every open.spotify.com link
        let link = parse_link("https://open.spotify.com/track/abc123").unwrap();
        assert_eq!(link.syntax, LinkSyntax::Web);

        let link = parse_link("spotify.com/track/web1 spotify:track:uri1").unwrap();
        assert_eq!(link.syntax, LinkSyntax::Uri);
        assert_eq!(link.id, "uri1");
    }

    #[test]
    fn id_stops_at_first_non_alphanumeric() {
        assert_eq!(extract_track_id("spotify:track:abc-def").as_deref(), Some("abc"));
        assert_eq!(extract_track_id("spotify:track:abc/def").as_deref(), Some("abc"));
    }

    #[test]
    fn later_occurrence_is_tried() {
        assert_eq!(
            extract_track_id("spotify:track:/ spotify:track:good").as_deref(),
            Some("good")
        );
    }

    #[test]
    fn each_syntax_extracts_on_its_own() {
        assert_eq!(LinkSyntax::Uri.extract("spotify:track:abc1"), Some("abc1"));
        assert_eq!(LinkSyntax::Uri.extract("https://open.spotify.com/track/abc1"), None);
        assert_eq!(
            LinkSyntax::OpenWeb.extract("https://open.spotify.com/track/abc1?si=2"),
            Some("abc1")
        );
        assert_eq!(LinkSyntax::OpenWeb.extract("https://spotify.com/track/abc1"), None);
        assert_eq!(LinkSyntax::Web.extract("spotify.com/track/abc1"), Some("abc1"));
    }

    #[test]
    fn not_a_track() {
        for url in [
            "",
            "spotify:track:",
            "https://open.spotify.com/album/abc123",
            "https://open.spotify.com/track/",
            "https://open.spotify.com/track/?si=1",
            "SPOTIFY:TRACK:abc",
            "just some words",
        ] {
            assert_eq!(extract_track_id(url), None, "{}", url);
        }
    }

    #[test]
    fn garbage_input_does_not_panic() {
        assert_eq!(extract_track_id("spotify:track:ñandú"), None);
        assert_eq!(extract_track_id("🎵🎵 spotify.com/track/é"), None);
        assert_eq!(extract_track_id("spotify:track:abcé").as_deref(), Some("abc"));
        assert_eq!(extract_track_id("\u{0}\u{ffff}spotify:track"), None);
    }
}
