//! Failure of a call against the recipe API.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by every recipe API call.
///
/// Screens never show these details; they map any variant to their own
/// generic message and log the detail instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify an HTTP status, returning `Ok` for the 2xx range.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for any status outside 200-299.
    pub fn check_status(status: u16) -> Result<(), Self> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(Self::Status(status))
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
