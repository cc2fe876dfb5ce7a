//! Local storage module for goals and tasks
//!
//! [`TodoStore`] is the only persistence surface the UI talks to. The
//! SQLite-backed [`LocalStorage`] implements it on top of SeaORM.

use async_trait::async_trait;
use sea_orm::DbErr;
use uuid::Uuid;

use crate::models::{Category, Task};

pub mod db;

pub use db::LocalStorage;

/// Errors returned by storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: Uuid },

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence operations consumed by the application controller.
///
/// Every call completes before the next frame is processed.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All categories, newest first
    async fn list_categories(&self) -> StorageResult<Vec<Category>>;

    /// Tasks of one category, oldest first
    async fn list_tasks(&self, category_id: Uuid) -> StorageResult<Vec<Task>>;

    async fn get_task(&self, id: Uuid) -> StorageResult<Option<Task>>;

    async fn insert_category(&self, name: &str) -> StorageResult<Uuid>;

    /// Fails with `NotFound` when the category does not exist
    async fn insert_task(&self, category_id: Uuid, name: &str) -> StorageResult<Uuid>;

    async fn update_category_name(&self, id: Uuid, name: &str) -> StorageResult<()>;

    async fn update_task_name(&self, id: Uuid, name: &str) -> StorageResult<()>;

    async fn set_task_completed(&self, id: Uuid, completed: bool) -> StorageResult<()>;

    /// Deletes the category and every task that belongs to it
    async fn delete_category(&self, id: Uuid) -> StorageResult<()>;

    async fn delete_task(&self, id: Uuid) -> StorageResult<()>;

    async fn count_tasks(&self, category_id: Uuid) -> StorageResult<u64>;

    async fn count_completed_tasks(&self, category_id: Uuid) -> StorageResult<u64>;

    /// Flip the completion flag and return the new value
    async fn toggle_task(&self, id: Uuid) -> StorageResult<bool> {
        let task = self
            .get_task(id)
            .await?
            .ok_or(StorageError::NotFound { kind: "Task", id })?;
        let completed = !task.completed;
        self.set_task_completed(id, completed).await?;
        Ok(completed)
    }
}
