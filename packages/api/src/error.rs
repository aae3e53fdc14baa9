//! Error type shared by every backend call.

use thiserror::Error;

/// Failure of a single REST call.
///
/// Callers treat every variant the same way; the split only exists so the
/// activity log can say what went wrong.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("API error {0}")]
    Status(u16),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),
    /// The response body was not the JSON we expected.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = ApiError::Status(404);
        assert_eq!(err.to_string(), "API error 404");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_non_status_errors_have_no_code() {
        assert_eq!(ApiError::Transport("offline".into()).status(), None);
        assert_eq!(ApiError::Decode("eof".into()).status(), None);
    }
}
