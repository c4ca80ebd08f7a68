//! Directions client error types.

/// Errors from the directions HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Invalid API key
    #[error("unauthorized: check MAPTILER_API_KEY")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by directions API")]
    RateLimited,

    /// No API key or client available
    #[error("not configured: {0}")]
    NotConfigured(String),

    /// The API answered but found no route
    #[error("no route between the given points")]
    NoRoute,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DirectionsError::NoRoute;
        assert_eq!(err.to_string(), "no route between the given points");

        let err = DirectionsError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = DirectionsError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");

        let err = DirectionsError::NotConfigured("missing API key".into());
        assert_eq!(err.to_string(), "not configured: missing API key");
    }
}
