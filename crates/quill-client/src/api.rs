//! Typed HTTP client for the post API.
//!
//! Every response goes through the same contract: a non-2xx status becomes
//! a [`ClientError::Api`] carrying the server's `{"error": …}` message, and
//! a 2xx response with an empty body resolves to absence instead of a JSON
//! parse failure.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use quill_shared::ErrorBody;
use quill_shared::dto::{CreatePostRequest, DeleteResponse, PostResponse, UpdatePostRequest};

/// Message used when a failed response carries no parseable error body.
const GENERIC_FAILURE: &str = "Request failed. Unexpected response.";

/// Failures surfaced by the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-2xx status. `message` is the
    /// server-supplied error text, verbatim.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never completed.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body could not be interpreted.
    #[error("Malformed response body: {0}")]
    Decode(String),
}

/// Client for the post API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Option<T>, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        decode_body(status, &body)
    }

    /// GET /api/posts
    pub async fn list_posts(&self) -> Result<Vec<PostResponse>, ClientError> {
        self.execute(self.http.get(self.url("/posts")))
            .await?
            .ok_or_else(missing_body)
    }

    /// GET /api/posts/{id}
    pub async fn get_post(&self, id: i64) -> Result<PostResponse, ClientError> {
        self.execute(self.http.get(self.url(&format!("/posts/{id}"))))
            .await?
            .ok_or_else(missing_body)
    }

    /// POST /api/posts
    pub async fn create_post(&self, post: &CreatePostRequest) -> Result<PostResponse, ClientError> {
        self.execute(self.http.post(self.url("/posts")).json(post))
            .await?
            .ok_or_else(missing_body)
    }

    /// PUT /api/posts/{id}
    pub async fn update_post(
        &self,
        id: i64,
        post: &UpdatePostRequest,
    ) -> Result<PostResponse, ClientError> {
        self.execute(self.http.put(self.url(&format!("/posts/{id}"))).json(post))
            .await?
            .ok_or_else(missing_body)
    }

    /// DELETE /api/posts/{id}
    ///
    /// An empty 2xx body resolves to `None`; a body is decoded as the
    /// confirmation payload.
    pub async fn delete_post(&self, id: i64) -> Result<Option<DeleteResponse>, ClientError> {
        self.execute(self.http.delete(self.url(&format!("/posts/{id}"))))
            .await
    }
}

fn missing_body() -> ClientError {
    ClientError::Decode("expected a response body".to_string())
}

/// The uniform response contract, kept pure so it is testable without a
/// network.
fn decode_body<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<Option<T>, ClientError> {
    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|e| e.error)
            .unwrap_or_else(|_| GENERIC_FAILURE.to_string());
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    if body.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(body)
        .map(Some)
        .map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_message_is_surfaced_verbatim() {
        let err = decode_body::<PostResponse>(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"db down"}"#)
            .unwrap_err();

        match &err {
            ClientError::Api { status, message } => {
                assert_eq!(*status, 500);
                assert_eq!(message, "db down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.to_string(), "db down");
    }

    #[test]
    fn test_not_found_body_is_surfaced() {
        let err = decode_body::<PostResponse>(StatusCode::NOT_FOUND, r#"{"error":"Post not found"}"#)
            .unwrap_err();

        assert_eq!(err.to_string(), "Post not found");
    }

    #[test]
    fn test_unparseable_error_body_falls_back_to_generic_message() {
        let err =
            decode_body::<PostResponse>(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>")
                .unwrap_err();

        assert_eq!(err.to_string(), GENERIC_FAILURE);
    }

    #[test]
    fn test_empty_success_body_resolves_to_absence() {
        let result = decode_body::<DeleteResponse>(StatusCode::OK, "").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_success_body_is_decoded() {
        let body = r#"{
            "post_id": 1,
            "author_id": 2,
            "title": "A",
            "content": "B",
            "tags": [],
            "images": [],
            "created_at": "2024-01-15T10:00:00Z",
            "updated_at": "2024-01-15T10:00:00Z"
        }"#;

        let post = decode_body::<PostResponse>(StatusCode::OK, body)
            .unwrap()
            .unwrap();
        assert_eq!(post.post_id, 1);
        assert!(post.tags.is_empty());
    }

    #[test]
    fn test_malformed_success_body_is_a_decode_error() {
        let err = decode_body::<PostResponse>(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
