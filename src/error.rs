//! Error taxonomy for the worksheet client.

use serde::Deserialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ClientError {
    #[error("Please tell us how you're feeling today! 😊")]
    MissingMood,

    #[error("Please choose a subject to get started! 📚")]
    MissingSubject,

    #[error("No worksheet to download! Please generate one first.")]
    NoWorksheet,

    #[error("Could not reach the worksheet service ({0})")]
    Network(String),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response from the worksheet service ({0})")]
    Decode(String),

    #[error("Could not save the file ({0})")]
    Browser(String),
}

/// Shape of the JSON body the backend attaches to failed requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl ClientError {
    /// Builds the error for a non-success response, preferring the server's
    /// `message` field over a status-coded fallback.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP error! status: {}", status));
        ClientError::Status { status, message }
    }
}

impl From<gloo_net::Error> for ClientError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ClientError::Decode(e.to_string()),
            other => ClientError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_used_verbatim() {
        let err = ClientError::from_status(429, r#"{"error": "x", "message": "rate limited"}"#);
        assert_eq!(
            err,
            ClientError::Status {
                status: 429,
                message: "rate limited".into()
            }
        );
        assert_eq!(err.to_string(), "rate limited");
    }

    #[test]
    fn unparseable_body_falls_back_to_status_code() {
        let err = ClientError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "HTTP error! status: 502");
    }

    #[test]
    fn body_without_message_falls_back_to_status_code() {
        let err = ClientError::from_status(500, r#"{"error": "Generation failed"}"#);
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }
}
