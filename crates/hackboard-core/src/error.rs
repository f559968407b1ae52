//! Error types for hackboard-core
//!
//! All calculator-level "failures" (missing price, missing target) are `None`
//! fields in the result, never errors. `CoreError` covers the acquisition
//! surface only: file reads, JSON parses, HTTP, and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for hackboard operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No stats file found (tried {tried} candidate paths)")]
    FileNotFound { tried: usize },

    // ===================
    // Parse Errors
    // ===================
    #[error("Failed to parse JSON in {path}: {message}")]
    JsonParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    // ===================
    // HTTP Errors
    // ===================
    #[error("Request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Malformed response from {url}: {message}")]
    MalformedResponse { url: String, message: String },

    // ===================
    // Config Errors
    // ===================
    #[error("Missing credentials: {what}")]
    MissingCredentials { what: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_resource() {
        let err = CoreError::HttpStatus {
            url: "https://flavortown.hackclub.com/api/v1/store".to_string(),
            status: 503,
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("flavortown"));

        let err = CoreError::FileNotFound { tried: 2 };
        assert!(err.to_string().contains("2 candidate"));
    }
}
