use thiserror::Error;

/// Failure of a single backend request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, timeout)
    #[error("{0}")]
    Transport(String),

    #[error("server returned HTTP {status} for {path}")]
    Status { status: u16, path: String },

    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The backend answered but reported a failure in the payload
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Errors where no usable response was obtained
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
                path: err
                    .url()
                    .map(|u| u.path().to_string())
                    .unwrap_or_default(),
            }
        } else {
            Self::Transport(err.to_string())
        }
    }
}
