use std::path::PathBuf;

/// Errors raised by the transport collaborators.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed question data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered, but not with a success status.
    #[error("{url} answered {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Cannot write response log: {0}")]
    Csv(#[from] csv::Error),

    /// An empty answer list was handed to a sink that refuses it.
    #[error("No responses received")]
    NoResponses,
}

impl TransportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
