//! Widget configuration.
//!
//! Limits and UI strings are compile-time constants shared by the browser
//! widget and the CLI. The endpoint URL for the CLI can be overridden from
//! the environment (`IMGPREDICT_URL`, `.env` supported) or `--url`.

/// MIME types accepted for upload.
pub const ACCEPTED_MIME_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/webp"];

/// Maximum file size for upload (in bytes).
///
/// 50 MB limit, inclusive.
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Multipart field name carrying the file.
pub const UPLOAD_FIELD: &str = "file";

/// Status text while a request is in flight.
pub const STATUS_UPLOADING: &str = "Uploading and predicting…";

/// Label shown when the result has none.
pub const NO_LABEL: &str = "(no label)";

/// Placeholder for missing confidence / rationale.
pub const PLACEHOLDER: &str = "—";

/// Endpoint used by the CLI when nothing else is configured.
pub const DEFAULT_PREDICT_URL: &str = "http://localhost:8000/predict";

/// Environment variable overriding [`DEFAULT_PREDICT_URL`].
pub const PREDICT_URL_ENV: &str = "IMGPREDICT_URL";

/// Runtime configuration for native clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Absolute URL of the `/predict` endpoint.
    pub predict_url: String,
}

impl Config {
    /// Build from the process environment.
    pub fn from_env() -> Self {
        let predict_url = std::env::var(PREDICT_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PREDICT_URL.to_string());
        Self { predict_url }
    }

    /// Replace the endpoint if one was given explicitly.
    pub fn with_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.predict_url = url;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            predict_url: DEFAULT_PREDICT_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_url_wins() {
        let config = Config::default().with_url(Some("http://10.0.0.2:9000/predict".into()));
        assert_eq!(config.predict_url, "http://10.0.0.2:9000/predict");

        let config = Config::default().with_url(None);
        assert_eq!(config.predict_url, DEFAULT_PREDICT_URL);
    }

    #[test]
    fn test_size_limit_is_fifty_mebibytes() {
        assert_eq!(MAX_FILE_SIZE, 52_428_800);
    }
}
