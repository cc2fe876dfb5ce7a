//! Category repository for database operations.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::entities::category;

/// Repository for category-related database operations.
pub struct CategoryRepository;

impl CategoryRepository {
    /// Get all categories, newest first.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<category::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        category::Entity::find()
            .order_by_desc(category::Column::CreatedAt)
            .all(conn)
            .await
    }

    /// Get a single category by UUID.
    pub async fn get_by_id<C>(conn: &C, uuid: &Uuid) -> Result<Option<category::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        category::Entity::find()
            .filter(category::Column::Uuid.eq(*uuid))
            .one(conn)
            .await
    }

    /// Insert a new category.
    pub async fn insert<C>(conn: &C, category: category::ActiveModel) -> Result<category::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        category.insert(conn).await
    }

    /// Update a category in the database.
    pub async fn update<C>(conn: &C, category: category::ActiveModel) -> Result<category::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        category.update(conn).await
    }

    /// Delete a category by UUID, returning the number of deleted rows.
    pub async fn delete<C>(conn: &C, uuid: &Uuid) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(category::Entity::delete_by_id(*uuid).exec(conn).await?.rows_affected)
    }
}
