use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("connect timeout")]
    ConnectTimeout,

    #[error("request timeout")]
    RequestTimeout,

    #[error("http error {status}")]
    Http { status: reqwest::StatusCode },

    #[error("malformed payload: {0}")]
    Decode(String),

    #[error("api reported failure: {0}")]
    Envelope(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl SourceError {
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            if err.is_connect() {
                Self::ConnectTimeout
            } else {
                Self::RequestTimeout
            }
        } else if let Some(status) = err.status() {
            Self::Http { status }
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
