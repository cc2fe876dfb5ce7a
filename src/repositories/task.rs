//! Task repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::entities::task;

/// Repository for task-related database operations.
pub struct TaskRepository;

impl TaskRepository {
    /// Get all tasks of a category, oldest first.
    pub async fn get_for_category<C>(conn: &C, category_uuid: &Uuid) -> Result<Vec<task::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        task::Entity::find()
            .filter(task::Column::CategoryUuid.eq(*category_uuid))
            .order_by_asc(task::Column::CreatedAt)
            .all(conn)
            .await
    }

    /// Get a single task by UUID.
    pub async fn get_by_id<C>(conn: &C, uuid: &Uuid) -> Result<Option<task::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        task::Entity::find().filter(task::Column::Uuid.eq(*uuid)).one(conn).await
    }

    /// Count the tasks of a category.
    pub async fn count_for_category<C>(conn: &C, category_uuid: &Uuid) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        task::Entity::find()
            .filter(task::Column::CategoryUuid.eq(*category_uuid))
            .count(conn)
            .await
    }

    /// Count the completed tasks of a category.
    pub async fn count_completed_for_category<C>(conn: &C, category_uuid: &Uuid) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        task::Entity::find()
            .filter(task::Column::CategoryUuid.eq(*category_uuid))
            .filter(task::Column::IsCompleted.eq(true))
            .count(conn)
            .await
    }

    /// Insert a new task.
    pub async fn insert<C>(conn: &C, task: task::ActiveModel) -> Result<task::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        task.insert(conn).await
    }

    /// Update a task in the database.
    pub async fn update<C>(conn: &C, task: task::ActiveModel) -> Result<task::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        task.update(conn).await
    }

    /// Delete a task by UUID, returning the number of deleted rows.
    pub async fn delete<C>(conn: &C, uuid: &Uuid) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(task::Entity::delete_by_id(*uuid).exec(conn).await?.rows_affected)
    }

    /// Delete every task of a category, returning the number of deleted rows.
    pub async fn delete_for_category<C>(conn: &C, category_uuid: &Uuid) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(task::Entity::delete_many()
            .filter(task::Column::CategoryUuid.eq(*category_uuid))
            .exec(conn)
            .await?
            .rows_affected)
    }
}
