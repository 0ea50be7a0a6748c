use spotidal_config::LookupConfig;
use spotidal_core::{
    ConversionResult, LookupOutcome, MSG_INVALID_URL, MSG_SERVICE_ERROR, MSG_SERVICE_UNAVAILABLE,
    MSG_TRACK_NOT_FOUND, SpotidalError, SpotidalResult,
};
use tracing::{info, warn};
use url::Url;

use crate::api::lucida::{LucidaClient, LucidaReply};
use crate::parsers::spotify::{is_spotify_track_url, parse_spotify_track_id};

const TIDAL_URL_PREFIX: &str = "https://listen.tidal.com/";

#[derive(Debug, Clone)]
pub struct TidalConverter {
    client: LucidaClient,
}

impl TidalConverter {
    pub fn new(config: &LookupConfig) -> SpotidalResult<Self> {
        Ok(Self {
            client: LucidaClient::new(config)?,
        })
    }

    /// Result for input that never reaches the network, if `spotify_url` is not a track URL.
    pub fn rejected(spotify_url: &str) -> Option<ConversionResult> {
        if is_spotify_track_url(spotify_url) {
            return None;
        }
        Some(invalid_url(spotify_url))
    }

    pub async fn convert(&self, spotify_url: &str) -> ConversionResult {
        let Some(track_id) = parse_spotify_track_id(spotify_url) else {
            info!(url = spotify_url, "not a spotify track url");
            return invalid_url(spotify_url);
        };
        info!(%track_id, "looking up tidal equivalent");

        let outcome = match self.client.lookup(spotify_url).await {
            Ok(LucidaReply::Redirect { location }) => interpret_redirect(location.as_ref()),
            Ok(LucidaReply::Other { status }) => {
                warn!(status, "lucida answered without a redirect");
                LookupOutcome::error(MSG_SERVICE_ERROR)
            }
            Err(err) => outcome_for_error(&err),
        };

        info!(%track_id, status = ?outcome.status(), "lookup finished");
        ConversionResult::from_outcome(spotify_url, outcome)
    }
}

fn invalid_url(spotify_url: &str) -> ConversionResult {
    ConversionResult::from_outcome(spotify_url, LookupOutcome::fail(MSG_INVALID_URL))
}

/// Reads lucida's redirect target: `failed-to` means no match, a `url` pointing
/// at listen.tidal.com is the match, anything else is unexpected.
pub fn interpret_redirect(location: Option<&Url>) -> LookupOutcome {
    let Some(location) = location else {
        warn!("lucida redirect without a usable location");
        return LookupOutcome::error(MSG_SERVICE_ERROR);
    };

    if first_query_value(location, "failed-to").is_some() {
        return LookupOutcome::fail(MSG_TRACK_NOT_FOUND);
    }

    match first_query_value(location, "url") {
        Some(tidal_url) if tidal_url.starts_with(TIDAL_URL_PREFIX) => {
            LookupOutcome::Success { tidal_url }
        }
        _ => {
            warn!(location = %location, "lucida redirect matched no known pattern");
            LookupOutcome::error(MSG_SERVICE_ERROR)
        }
    }
}

// Blank values are treated as absent.
fn first_query_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(name, value)| name == key && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}

fn outcome_for_error(err: &SpotidalError) -> LookupOutcome {
    warn!("{err}");
    match err {
        SpotidalError::Network(_) | SpotidalError::Api(_) => {
            LookupOutcome::error(MSG_SERVICE_UNAVAILABLE)
        }
        SpotidalError::Config(_) => LookupOutcome::error(MSG_SERVICE_ERROR),
    }
}
