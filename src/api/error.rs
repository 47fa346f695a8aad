use serde::Deserialize;
use thiserror::Error;

/// Failure modes of one directory fetch.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Superseded by a newer request. Fully swallowed; never surfaced to
    /// the user.
    #[error("request cancelled")]
    Cancelled,

    /// Non-2xx response. `message` is the body's `detail` field when the
    /// body parses, else a generic message carrying the status code.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Transport-level failure; no response was received.
    #[error("Failed to fetch employees. Please check if the backend is running.")]
    Network(#[source] reqwest::Error),

    /// Response arrived but could not be understood.
    #[error("An unexpected error occurred")]
    Unknown,
}

/// Error body convention of the listing endpoint.
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

impl ApiError {
    /// Maps a non-2xx response body to the user-facing error.
    pub fn from_error_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|body| body.detail)
            .unwrap_or_else(|_| format!("HTTP error! status: {status}"));
        ApiError::Http { status, message }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Unknown
        } else {
            ApiError::Network(err)
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_body_becomes_the_message() {
        let err = ApiError::from_error_response(500, r#"{"detail":"DB down"}"#);
        assert_eq!(err.to_string(), "DB down");
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn unparseable_body_falls_back_to_the_status_code() {
        let err = ApiError::from_error_response(502, "<html>bad gateway</html>");
        assert_eq!(err.to_string(), "HTTP error! status: 502");
    }

    #[test]
    fn empty_body_falls_back_to_the_status_code() {
        let err = ApiError::from_error_response(404, "");
        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }

    #[test]
    fn cancelled_is_distinguished_from_every_other_kind() {
        assert!(ApiError::Cancelled.is_cancelled());
        assert!(!ApiError::Unknown.is_cancelled());
        assert!(!ApiError::from_error_response(500, "").is_cancelled());
    }
}
