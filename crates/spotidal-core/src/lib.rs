mod error;
mod result;

pub use error::{SpotidalError, SpotidalResult};
pub use result::{
    ConversionResult, LookupOutcome, MSG_INVALID_URL, MSG_MISSING_URL, MSG_SERVICE_ERROR,
    MSG_SERVICE_UNAVAILABLE, MSG_TRACK_FOUND, MSG_TRACK_NOT_FOUND, Status,
};
