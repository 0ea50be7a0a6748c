use reqwest::header::LOCATION;
use reqwest::{Client, StatusCode, redirect};
use spotidal_config::LookupConfig;
use spotidal_core::{SpotidalError, SpotidalResult};
use tracing::debug;
use url::Url;

const COUNTRY: &str = "auto";
const TARGET: &str = "tidal";

/// What lucida answered, before any interpretation of the redirect target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LucidaReply {
    /// 301, 302, 303, 307 or 308. `location` is `None` when the header is
    /// missing or cannot be resolved to an absolute URL.
    Redirect { location: Option<Url> },
    /// Any other non-error status.
    Other { status: u16 },
}

#[derive(Debug, Clone)]
pub struct LucidaClient {
    client: Client,
    base_url: Url,
}

impl LucidaClient {
    pub fn new(config: &LookupConfig) -> SpotidalResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|err| {
            SpotidalError::Config(format!("invalid lookup base url {:?}: {err}", config.base_url))
        })?;
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .redirect(redirect::Policy::none())
            .timeout(config.timeout())
            .build()
            .map_err(|err| SpotidalError::Network(format!("failed to build http client: {err}")))?;
        Ok(Self {
            client,
            base_url,
        })
    }

    /// `<base>?url=<spotify_url>&country=auto&to=tidal`, form-urlencoded.
    pub fn request_url(&self, spotify_url: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("url", spotify_url)
            .append_pair("country", COUNTRY)
            .append_pair("to", TARGET);
        url
    }

    pub async fn lookup(&self, spotify_url: &str) -> SpotidalResult<LucidaReply> {
        let request_url = self.request_url(spotify_url);
        debug!(url = %request_url, "sending lucida lookup");

        let response = self
            .client
            .get(request_url.clone())
            .send()
            .await
            .map_err(|err| SpotidalError::Network(format!("lucida request failed: {err}")))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(SpotidalError::Api(format!("lucida error: status={status}")));
        }

        if !is_redirect(status) {
            debug!(%status, "lucida did not redirect");
            return Ok(LucidaReply::Other {
                status: status.as_u16(),
            });
        }

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| request_url.join(value).ok());
        debug!(%status, location = ?location.as_ref().map(Url::as_str), "lucida redirected");

        Ok(LucidaReply::Redirect { location })
    }
}

fn is_redirect(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::MOVED_PERMANENTLY
            | StatusCode::FOUND
            | StatusCode::SEE_OTHER
            | StatusCode::TEMPORARY_REDIRECT
            | StatusCode::PERMANENT_REDIRECT
    )
}
