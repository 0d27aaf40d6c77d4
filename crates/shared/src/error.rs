use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Load,
    Timeout,
}

/// Failure recorded by the feed controller. None of these reach the user;
/// they are logged and broadcast so a presentation layer may react.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code:?}: {message}")]
pub struct ClientError {
    pub code: ErrorCode,
    pub message: String,
}

impl ClientError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn load(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Load, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Timeout, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code_and_message() {
        let err = ClientError::load("source unavailable");
        assert_eq!(err.to_string(), "Load: source unavailable");
        assert_eq!(err.code, ErrorCode::Load);
    }

    #[test]
    fn codes_serialize_as_snake_case() {
        let err = ClientError::timeout("slow source");
        let json = serde_json::to_value(&err).expect("serialize");
        assert_eq!(json["code"], "timeout");
        assert_eq!(
            serde_json::to_value(ErrorCode::Load).expect("serialize"),
            "load"
        );
    }
}
