use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a single blog post as stored in the `blogpost` relation.
///
/// `id`, `created_at` and `updated_at` are assigned by the store.
/// `tags` and `images` are never null; absence is an empty vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating a post. The store mints the id and both
/// timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub author_id: i64,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub images: Vec<String>,
}

impl NewPost {
    /// Materialize this draft into a post with the given id, stamping both
    /// timestamps from a single clock read so `created_at == updated_at`.
    pub fn into_post(self, id: i64) -> Post {
        let now = Utc::now();
        Post {
            id,
            author_id: self.author_id,
            title: self.title,
            content: self.content,
            tags: self.tags,
            images: self.images,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Full replacement of the four mutable fields of a post.
///
/// This is not a patch: omitted tags or images on the wire arrive here as
/// empty vectors and overwrite whatever was stored, matching the
/// defaulting behavior of create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostUpdate {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub images: Vec<String>,
}

impl Post {
    /// Apply a full-replace update, refreshing `updated_at`.
    /// `id`, `author_id` and `created_at` are immutable.
    pub fn apply(&mut self, update: PostUpdate) {
        self.title = update.title;
        self.content = update.content;
        self.tags = update.tags;
        self.images = update.images;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post() -> NewPost {
        NewPost {
            author_id: 1,
            title: "A".to_string(),
            content: "B".to_string(),
            tags: vec![],
            images: vec![],
        }
    }

    #[test]
    fn into_post_stamps_equal_timestamps() {
        let post = new_post().into_post(7);
        assert_eq!(post.id, 7);
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn apply_replaces_fields_and_refreshes_updated_at() {
        let mut post = new_post().into_post(1);
        let created = post.created_at;
        let before = post.updated_at;

        post.apply(PostUpdate {
            title: "New title".to_string(),
            content: "New content".to_string(),
            tags: vec!["rust".to_string()],
            images: vec![],
        });

        assert_eq!(post.title, "New title");
        assert_eq!(post.tags, vec!["rust".to_string()]);
        assert_eq!(post.created_at, created);
        assert!(post.updated_at >= before);
    }

    #[test]
    fn apply_with_empty_lists_clears_previous_values() {
        let mut post = NewPost {
            tags: vec!["old".to_string()],
            images: vec!["https://example.com/a.png".to_string()],
            ..new_post()
        }
        .into_post(1);

        post.apply(PostUpdate {
            title: post.title.clone(),
            content: post.content.clone(),
            tags: vec![],
            images: vec![],
        });

        assert!(post.tags.is_empty());
        assert!(post.images.is_empty());
    }
}
