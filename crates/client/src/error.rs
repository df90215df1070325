//! Result and Error types for the livechart client

/// Type alias for `Result<T, livechart_client::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// Boxed cause carried by [Error::Unexpected]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(thiserror::Error, Debug)]
/// The error type for `livechart-client`
pub enum Error {
    /// The API answered with a non-success HTTP status
    #[error("HTTP request failed: {status} {reason}")]
    Transport { status: u16, reason: String },

    /// Request is valid, but no data fulfilling the conditions was found
    #[error("request is valid, but no data fulfilling the conditions was found")]
    NoDataFound,

    /// A required query parameter was not given
    #[error("missing parameter: {0}")]
    MissingParameter(String),

    /// A query parameter has a value the API does not accept
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The API signalled an error code without a more specific meaning
    ///
    /// `code` is `None` only if the digits did not fit into a `u64`.
    #[error("{message}")]
    UnknownApi { code: Option<u64>, message: String },

    /// Anything else, e.g. a connection failure or a malformed body
    #[error("unexpected error during request: {0}")]
    Unexpected(#[source] BoxError),
}

impl Error {
    /// The kind of failure, without any of the attached detail
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Transport { .. } => ErrorKind::Transport,
            Error::NoDataFound => ErrorKind::NoDataFound,
            Error::MissingParameter(_) => ErrorKind::MissingParameter,
            Error::InvalidParameter(_) => ErrorKind::InvalidParameter,
            Error::UnknownApi { .. } => ErrorKind::UnknownApi,
            Error::Unexpected(_) => ErrorKind::Unexpected,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Unexpected(Box::new(e))
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::Unexpected(Box::new(e))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Unexpected(Box::new(e))
    }
}

/// Discriminant of [Error]
///
/// Convenient for matching on the category of a failure alone, and used as
/// data in the API error code table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// HTTP level failure
    Transport,
    /// API error code 0
    NoDataFound,
    /// API error codes 1, 2, 4
    MissingParameter,
    /// API error codes 3, 5
    InvalidParameter,
    /// API error code 6 or any unlisted code
    UnknownApi,
    /// Everything else
    Unexpected,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            ErrorKind::Transport => "TransportError",
            ErrorKind::NoDataFound => "NoDataFound",
            ErrorKind::MissingParameter => "MissingParameter",
            ErrorKind::InvalidParameter => "InvalidParameter",
            ErrorKind::UnknownApi => "UnknownAPIError",
            ErrorKind::Unexpected => "UnexpectedError",
        };
        write!(f, "{s}")
    }
}
