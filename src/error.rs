// src/error.rs

use thiserror::Error;

/// Everything that can go wrong between issuing the GET and holding a
/// decoded result set. Each kind folds to one human-readable message at
/// the fetch boundary; nothing propagates past it.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Response arrived but the status is outside 2xx. `detail` carries
    /// the response body text when the server sent a non-empty one.
    #[error("HTTP error! status: {status}{}", detail_suffix(.detail))]
    Http { status: u16, detail: Option<String> },

    /// Network-layer failure before a usable response was obtained.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body obtained but not decodable as the records envelope.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(" - {}", d),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_without_detail_is_bare() {
        let err = FetchError::Http {
            status: 503,
            detail: None,
        };
        assert_eq!(err.to_string(), "HTTP error! status: 503");
    }

    #[test]
    fn http_error_appends_body_detail() {
        let err = FetchError::Http {
            status: 404,
            detail: Some("dataset not found".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "HTTP error! status: 404 - dataset not found"
        );
    }

    #[test]
    fn decode_error_names_the_cause() {
        let cause = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = FetchError::from(cause);
        assert!(err.to_string().starts_with("invalid response body: "));
    }
}
