//! The locally-held, possibly-unsaved copy of a post being edited.

use quill_shared::dto::{PostResponse, UpdatePostRequest};

/// Split a comma-delimited input into a list: comma + trim, empty
/// segments dropped. This is the inverse of [`join_list`] for well-formed
/// lists, so edited tags round-trip without drift.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join a list for display in a delimited-string field.
pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

/// Editable copy of a post's mutable fields. Tag and image lists are held
/// as delimited strings while editing and split on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub title: String,
    pub content: String,
    pub tags_input: String,
    pub images_input: String,
}

impl Draft {
    /// Load current server state into a fresh draft.
    pub fn from_post(post: &PostResponse) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            tags_input: join_list(&post.tags),
            images_input: join_list(&post.images),
        }
    }

    /// Turn the draft into the full-replace update payload.
    pub fn to_update(&self) -> UpdatePostRequest {
        UpdatePostRequest {
            title: self.title.clone(),
            content: self.content.clone(),
            tags: split_list(&self.tags_input),
            images: split_list(&self.images_input),
        }
    }
}
