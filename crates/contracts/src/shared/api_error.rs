use serde::Deserialize;
use thiserror::Error;

/// Failure of a call to the analytics backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Transport failure: the request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status
    #[error("{}", http_message(*status, message.as_deref()))]
    Http { status: u16, message: Option<String> },

    /// Response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

fn http_message(status: u16, message: Option<&str>) -> String {
    match message {
        Some(msg) if !msg.trim().is_empty() => msg.to_string(),
        _ => format!("HTTP error: {}", status),
    }
}

/// Error fields the backend puts into failing responses
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl ApiError {
    /// Builds an [`ApiError::Http`] from a status and raw body text,
    /// picking up the first of `message`, `error` or `detail` when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed.message.or(parsed.error).or_else(|| match parsed.detail {
            Some(serde_json::Value::String(s)) => Some(s),
            _ => None,
        });
        ApiError::Http { status, message }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_message_taken_from_body() {
        let err = ApiError::from_status(500, r#"{"message":"Database is locked"}"#);
        assert_eq!(err.to_string(), "Database is locked");

        let err = ApiError::from_status(422, r#"{"detail":"year must be an integer"}"#);
        assert_eq!(err.to_string(), "year must be an integer");
    }

    #[test]
    fn test_http_message_falls_back_to_status() {
        let err = ApiError::from_status(502, "<html>Bad gateway</html>");
        assert_eq!(err.to_string(), "HTTP error: 502");
    }

    #[test]
    fn test_network_message() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}
