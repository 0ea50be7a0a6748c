use std::sync::LazyLock;

use regex::Regex;

static TRACK_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://open\.spotify\.com/track/([a-zA-Z0-9]+)").expect("valid track url regex")
});

/// Track id of a `https://open.spotify.com/track/<id>` URL. Anything after the
/// id (more path segments, `?si=` and the like) is ignored.
pub fn parse_spotify_track_id(input: &str) -> Option<String> {
    let captures = TRACK_URL.captures(input)?;
    captures.get(1).map(|m| m.as_str().to_string())
}

pub fn is_spotify_track_url(input: &str) -> bool {
    TRACK_URL.is_match(input)
}
