use serde::{Deserialize, Serialize};

pub const MSG_TRACK_FOUND: &str = "Track found";
pub const MSG_TRACK_NOT_FOUND: &str = "Track not found";
pub const MSG_INVALID_URL: &str = "Invalid Spotify track URL";
pub const MSG_MISSING_URL: &str = "Missing Spotify URL";
pub const MSG_SERVICE_UNAVAILABLE: &str = "Service unavailable";
pub const MSG_SERVICE_ERROR: &str = "Service error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
    Error,
}

impl Status {
    /// Process exit code reported for this status.
    pub fn exit_code(self) -> i32 {
        match self {
            Status::Success => 0,
            Status::Fail => 1,
            Status::Error => 2,
        }
    }
}

/// What a single lookup resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Success { tidal_url: String },
    Fail { reason: String },
    Error { reason: String },
}

impl LookupOutcome {
    pub fn fail(reason: impl Into<String>) -> Self {
        Self::Fail {
            reason: reason.into(),
        }
    }

    pub fn error(reason: impl Into<String>) -> Self {
        Self::Error {
            reason: reason.into(),
        }
    }

    pub fn status(&self) -> Status {
        match self {
            LookupOutcome::Success { .. } => Status::Success,
            LookupOutcome::Fail { .. } => Status::Fail,
            LookupOutcome::Error { .. } => Status::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub spotify_url: Option<String>,
    pub tidal_url: Option<String>,
    pub status: Status,
    pub message: String,
}

impl ConversionResult {
    pub fn from_outcome(spotify_url: impl Into<String>, outcome: LookupOutcome) -> Self {
        let spotify_url = Some(spotify_url.into());
        match outcome {
            LookupOutcome::Success { tidal_url } => Self {
                spotify_url,
                tidal_url: Some(tidal_url),
                status: Status::Success,
                message: MSG_TRACK_FOUND.to_string(),
            },
            LookupOutcome::Fail { reason } => Self {
                spotify_url,
                tidal_url: None,
                status: Status::Fail,
                message: reason,
            },
            LookupOutcome::Error { reason } => Self {
                spotify_url,
                tidal_url: None,
                status: Status::Error,
                message: reason,
            },
        }
    }

    pub fn missing_url() -> Self {
        Self {
            spotify_url: None,
            tidal_url: None,
            status: Status::Fail,
            message: MSG_MISSING_URL.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.status.exit_code()
    }
}
