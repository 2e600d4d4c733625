//! PostgreSQL post store.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, DbConn, EntityTrait, IntoActiveModel, QueryOrder};

use quill_core::domain::{NewPost, Post, PostUpdate};
use quill_core::error::RepoError;
use quill_core::ports::PostStore;

use super::entity::post::{ActiveModel, Column, Entity as PostEntity};

/// PostgreSQL implementation of the post store.
///
/// Every method is a single statement against the `blogpost` table,
/// except update/delete which read the target row first so the returned
/// value reflects what was actually stored.
pub struct PostgresPostStore {
    db: DbConn,
}

impl PostgresPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    fn query_err(e: sea_orm::DbErr) -> RepoError {
        tracing::error!("Database query error: {}", e);
        RepoError::Query(e.to_string())
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .order_by_asc(Column::PostId)
            .all(&self.db)
            .await
            .map_err(Self::query_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let row = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(Self::query_err)?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, new: NewPost) -> Result<Post, RepoError> {
        let now = Utc::now();
        let model = ActiveModel {
            post_id: NotSet,
            author_id: Set(new.author_id),
            title: Set(new.title),
            content: Set(new.content),
            tags: Set(new.tags),
            images: Set(new.images),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let stored = model.insert(&self.db).await.map_err(Self::query_err)?;
        Ok(stored.into())
    }

    async fn update(&self, id: i64, update: PostUpdate) -> Result<Post, RepoError> {
        let existing = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(Self::query_err)?
            .ok_or(RepoError::NotFound)?;

        let mut active = existing.into_active_model();
        active.title = Set(update.title);
        active.content = Set(update.content);
        active.tags = Set(update.tags);
        active.images = Set(update.images);
        active.updated_at = Set(Utc::now().into());

        let stored = active.update(&self.db).await.map_err(Self::query_err)?;
        Ok(stored.into())
    }

    async fn delete(&self, id: i64) -> Result<Post, RepoError> {
        let existing = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(Self::query_err)?
            .ok_or(RepoError::NotFound)?;

        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(Self::query_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(existing.into())
    }
}
