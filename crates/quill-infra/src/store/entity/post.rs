//! Post entity for SeaORM, mapping the `blogpost` relation.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blogpost")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub post_id: i64,
    pub author_id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain Post.
impl From<Model> for quill_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.post_id,
            author_id: model.author_id,
            title: model.title,
            content: model.content,
            tags: model.tags,
            images: model.images,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
