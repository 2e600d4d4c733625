//! The create/edit form.

use quill_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::api::{ApiClient, ClientError};

use super::draft::{join_list, split_list};

/// Form state for creating a post or editing an existing one.
///
/// A failed save leaves every field intact so the user can re-attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Editor {
    editing: Option<i64>,
    pub title: String,
    pub content: String,
    pub tags_input: String,
    pub images_input: String,
    saving: bool,
    error: Option<String>,
}

impl Editor {
    /// An empty form for a new post.
    pub fn create() -> Self {
        Self {
            editing: None,
            title: String::new(),
            content: String::new(),
            tags_input: String::new(),
            images_input: String::new(),
            saving: false,
            error: None,
        }
    }

    /// A form pre-filled from an existing post.
    pub fn edit(post: &PostResponse) -> Self {
        Self {
            editing: Some(post.post_id),
            title: post.title.clone(),
            content: post.content.clone(),
            tags_input: join_list(&post.tags),
            images_input: join_list(&post.images),
            saving: false,
            error: None,
        }
    }

    /// The id of the post being edited, or `None` when creating.
    pub fn editing_id(&self) -> Option<i64> {
        self.editing
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Title and content are required; nothing is submitted while a save
    /// is already in flight.
    pub fn can_save(&self) -> bool {
        !self.saving && !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    pub fn to_create_request(&self, author_id: i64) -> CreatePostRequest {
        CreatePostRequest {
            title: self.title.clone(),
            content: self.content.clone(),
            author_id,
            tags: split_list(&self.tags_input),
            images: split_list(&self.images_input),
        }
    }

    pub fn to_update_request(&self) -> UpdatePostRequest {
        UpdatePostRequest {
            title: self.title.clone(),
            content: self.content.clone(),
            tags: split_list(&self.tags_input),
            images: split_list(&self.images_input),
        }
    }

    pub fn save_succeeded(&mut self) {
        self.saving = false;
        self.error = None;
    }

    pub fn save_failed(&mut self, message: impl Into<String>) {
        self.saving = false;
        self.error = Some(message.into());
    }

    /// Submit the form. Returns `Ok(None)` when the form is not
    /// submittable (missing required fields, or already saving).
    pub async fn submit(
        &mut self,
        api: &ApiClient,
        author_id: i64,
    ) -> Result<Option<PostResponse>, ClientError> {
        if !self.can_save() {
            return Ok(None);
        }
        self.saving = true;

        let result = match self.editing {
            Some(id) => api.update_post(id, &self.to_update_request()).await,
            None => api.create_post(&self.to_create_request(author_id)).await,
        };

        match result {
            Ok(post) => {
                self.save_succeeded();
                Ok(Some(post))
            }
            Err(e) => {
                self.save_failed(e.to_string());
                Err(e)
            }
        }
    }
}
