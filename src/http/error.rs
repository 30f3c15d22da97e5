use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response: {0}")]
    InvalidResponseShape(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

/// Why a single catalog entry was skipped. Never reaches the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElementMalformed {
    #[error("entry is not an object")]
    NotAnObject,

    #[error("entry has no usable `{0}`")]
    Field(&'static str),
}
