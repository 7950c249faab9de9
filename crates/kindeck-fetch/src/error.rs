#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Invalid lookup URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
}

impl FetchError {
    /// Connection failures, timeouts, 429 and 5xx are worth another attempt
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Network(e) => e.is_connect() || e.is_timeout(),
            FetchError::Status { status, .. } => *status == 429 || *status >= 500,
            FetchError::InvalidUrl { .. } | FetchError::Header(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: u16) -> FetchError {
        FetchError::Status {
            status,
            url: "http://localhost/".to_string(),
        }
    }

    #[test]
    fn test_server_errors_are_transient() {
        assert!(status(429).is_transient());
        assert!(status(500).is_transient());
        assert!(status(503).is_transient());
    }

    #[test]
    fn test_client_errors_are_final() {
        assert!(!status(404).is_transient());
        assert!(!status(403).is_transient());
        assert!(!status(410).is_transient());
    }
}
