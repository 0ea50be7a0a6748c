use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpotidalError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("api error: {0}")]
    Api(String),
}

pub type SpotidalResult<T> = Result<T, SpotidalError>;
