//! The API's error body.
//!
//! Every non-2xx response carries `{"error": "<message>"}`; the client
//! parses the `error` field back out and surfaces it verbatim.

use serde::{Deserialize, Serialize};

/// JSON error body for failed requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    // Common error constructors
    pub fn post_not_found() -> Self {
        Self::new("Post not found")
    }

    pub fn invalid_post_id() -> Self {
        Self::new("Invalid post id")
    }

    pub fn internal() -> Self {
        Self::new("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_single_error_field() {
        let body = ErrorBody::post_not_found();
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"error":"Post not found"}"#
        );
    }
}
