use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostUpdate};
use crate::error::RepoError;

/// Persistence gateway for the `blogpost` relation.
///
/// A thin pass-through: each method is a single call against the backing
/// store with no retries, transactions, or caching. Missing rows surface
/// as `Ok(None)` on lookup and `RepoError::NotFound` on mutation, so
/// callers can distinguish 404 from 500.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, in insertion order.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its unique ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// Insert a new post; the store assigns the id and both timestamps.
    async fn insert(&self, new: NewPost) -> Result<Post, RepoError>;

    /// Full replace of the mutable fields, refreshing `updated_at`.
    /// Returns the post state after the update.
    async fn update(&self, id: i64, update: PostUpdate) -> Result<Post, RepoError>;

    /// Hard delete. Returns the removed row.
    async fn delete(&self, id: i64) -> Result<Post, RepoError>;
}
