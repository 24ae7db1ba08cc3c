use thiserror::Error;

/// Everything that can stop an order lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackError {
    /// A required credential was missing or blank after trimming.
    #[error("Missing {0}: pass it as a flag or set the environment variable")]
    MissingCredential(&'static str),

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-2xx status.
    #[error("Request failed with HTTP status {status}")]
    HttpStatus { status: u16 },

    /// The body was not JSON at all.
    #[error("Could not decode response: {0}")]
    Decode(String),

    /// The endpoint parsed our request but reported a failure.
    #[error("API error {code}: {message}")]
    Api { code: String, message: String },
}

impl TrackError {
    /// True when the error was detected before any network call.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingCredential(_))
    }
}
