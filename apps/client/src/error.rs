use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error (status {status}, {kind}): {detail}")]
    Api {
        status: u16,
        kind: String,
        detail: String,
    },

    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }

    /// Message shown next to the list when a request fails.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Transport(_) => "The server could not be reached".to_string(),
            ClientError::Api { status: 400, detail, .. } => format!("Invalid data: {detail}"),
            ClientError::Api { status: 404, .. } => "The record no longer exists".to_string(),
            ClientError::Api { .. } => "The server could not complete the request".to_string(),
            ClientError::Decode(_) => "The server sent an unexpected response".to_string(),
        }
    }
}
