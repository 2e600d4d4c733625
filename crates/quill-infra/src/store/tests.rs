#[cfg(test)]
mod tests {
    use crate::store::entity::post;
    use crate::store::postgres::PostgresPostStore;
    use quill_core::error::RepoError;
    use quill_core::ports::PostStore;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn model(post_id: i64, title: &str) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            post_id,
            author_id: 1,
            title: title.to_owned(),
            content: "Content".to_owned(),
            tags: vec!["rust".to_owned()],
            images: vec![],
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        // Mock the query expectation
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(7, "Test Post")]])
            .into_connection();

        let store = PostgresPostStore::new(db);

        let result = store.find_by_id(7).await.unwrap();

        assert!(result.is_some());
        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, 7);
        assert_eq!(post.tags, vec!["rust".to_owned()]);
    }

    #[tokio::test]
    async fn test_find_missing_post_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let store = PostgresPostStore::new(db);

        let result = store.find_by_id(9999).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_list_preserves_row_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(1, "First"), model(2, "Second")]])
            .into_connection();

        let store = PostgresPostStore::new(db);

        let posts = store.list().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[1].id, 2);
    }

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        // The store reads the target row before writing; an empty result
        // must become RepoError::NotFound without issuing the update.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let store = PostgresPostStore::new(db);

        let err = store
            .update(
                9999,
                quill_core::domain::PostUpdate {
                    title: "T".to_owned(),
                    content: "C".to_owned(),
                    tags: vec![],
                    images: vec![],
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let store = PostgresPostStore::new(db);

        let err = store.delete(9999).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }
}
