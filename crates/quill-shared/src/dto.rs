//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quill_core::domain::{NewPost, Post, PostUpdate};

/// Request to create a post. `tags` and `images` default to empty when
/// omitted from the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author_id: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl From<CreatePostRequest> for NewPost {
    fn from(req: CreatePostRequest) -> Self {
        Self {
            author_id: req.author_id,
            title: req.title,
            content: req.content,
            tags: req.tags,
            images: req.images,
        }
    }
}

/// Request to update a post. A full replace of the mutable fields:
/// omitted `tags`/`images` arrive as empty and overwrite the stored lists,
/// matching the defaulting behavior of create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl From<UpdatePostRequest> for PostUpdate {
    fn from(req: UpdatePostRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            tags: req.tags,
            images: req.images,
        }
    }
}

/// A post as it appears on the wire. Field names follow the `blogpost`
/// relation's columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostResponse {
    pub post_id: i64,
    pub author_id: i64,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            post_id: post.id,
            author_id: post.author_id,
            title: post.title,
            content: post.content,
            tags: post.tags,
            images: post.images,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Response body for a successful delete: a confirmation message plus the
/// row the store reported as removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub data: PostResponse,
}

impl DeleteResponse {
    pub fn new(data: PostResponse) -> Self {
        Self {
            message: "Post deleted successfully".to_string(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_defaults_tags_and_images() {
        let req: CreatePostRequest =
            serde_json::from_str(r#"{"title":"A","content":"B","author_id":1}"#).unwrap();
        assert!(req.tags.is_empty());
        assert!(req.images.is_empty());
    }

    #[test]
    fn update_request_defaults_tags_and_images() {
        let req: UpdatePostRequest =
            serde_json::from_str(r#"{"title":"A","content":"B"}"#).unwrap();
        assert!(req.tags.is_empty());
        assert!(req.images.is_empty());
    }

    #[test]
    fn post_response_uses_relation_field_names() {
        let post = NewPost {
            author_id: 2,
            title: "A".to_string(),
            content: "B".to_string(),
            tags: vec!["rust".to_string()],
            images: vec![],
        }
        .into_post(5);

        let value = serde_json::to_value(PostResponse::from(post)).unwrap();
        assert_eq!(value["post_id"], 5);
        assert_eq!(value["author_id"], 2);
        assert_eq!(value["tags"][0], "rust");
    }
}
