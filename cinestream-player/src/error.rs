use crate::media::MediaError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlayerError {
    #[error("playback rate {0} is not in the supported set")]
    InvalidRate(f64),

    #[error("media command rejected: {0}")]
    CommandRejected(String),

    #[error("media source unavailable: {0}")]
    ResourceUnavailable(String),
}

impl From<MediaError> for PlayerError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::Rejected(reason) => PlayerError::CommandRejected(reason),
            MediaError::Unavailable(reason) => {
                PlayerError::ResourceUnavailable(reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PlayerError>;
