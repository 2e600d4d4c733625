//! In-memory post store - used when no database is configured, and by tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{NewPost, Post, PostUpdate};
use quill_core::error::RepoError;
use quill_core::ports::PostStore;

/// In-memory post store backed by an ordered map with async RwLock.
///
/// Ids are minted from a monotonic counter and never reused, even after a
/// delete. Note: data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<BTreeMap<i64, Post>>,
    next_id: AtomicI64,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.get(&id).cloned())
    }

    async fn insert(&self, new: NewPost) -> Result<Post, RepoError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let post = new.into_post(id);

        let mut posts = self.posts.write().await;
        posts.insert(id, post.clone());

        Ok(post)
    }

    async fn update(&self, id: i64, update: PostUpdate) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts.get_mut(&id).ok_or(RepoError::NotFound)?;
        post.apply(update);
        Ok(post.clone())
    }

    async fn delete(&self, id: i64) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        posts.remove(&id).ok_or(RepoError::NotFound)
    }
}
