use crate::catalog::ResourceKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompanionError {
    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("{kind} {id} not found upstream{}", .status.map(|s| format!(" (status {})", s)).unwrap_or_default())]
    UpstreamNotFound {
        kind: ResourceKind,
        id: String,
        status: Option<u16>,
    },

    #[error("Upstream failure: {0}")]
    UpstreamFailure(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl CompanionError {
    /// The HTTP-equivalent status a web front end would answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            CompanionError::NotFound(_) | CompanionError::UpstreamNotFound { .. } => 404,
            CompanionError::Validation(_) => 400,
            CompanionError::UpstreamFailure(_) => 502,
            _ => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, CompanionError>;
