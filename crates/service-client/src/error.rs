use thiserror::Error;

/// Errors that can occur when calling a remote Metflix service
#[derive(Error, Debug)]
pub enum RemoteCallError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Failed to reach {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RemoteCallError>;
