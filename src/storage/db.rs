use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use sea_orm::{
    ActiveValue, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema,
    TransactionTrait,
};
use uuid::Uuid;

use super::{StorageError, StorageResult, TodoStore};
use crate::entities::{category, task};
use crate::models::{Category, Task};
use crate::repositories::{CategoryRepository, TaskRepository};

/// Local storage manager for goals and tasks
pub struct LocalStorage {
    pub(crate) conn: DatabaseConnection,
    last_created_at: Mutex<Option<DateTime<Utc>>>,
}

impl LocalStorage {
    /// Open (or create) the SQLite database at `path`
    pub async fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create database directory: {}", parent.display()))?;
            }
        }

        let url = format!("sqlite://{}?mode=rwc", path.display());
        let mut options = ConnectOptions::new(url);
        options
            .min_connections(1)
            .max_connections(4)
            .connect_timeout(Duration::from_secs(5))
            .sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .with_context(|| format!("Failed to open database: {}", path.display()))?;

        Self::with_connection(conn).await
    }

    /// Open a private in-memory database
    pub async fn in_memory() -> Result<Self> {
        // Every pooled connection would get its own empty database, so keep exactly one.
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.min_connections(1).max_connections(1).sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .context("Failed to open in-memory database")?;

        Self::with_connection(conn).await
    }

    async fn with_connection(conn: DatabaseConnection) -> Result<Self> {
        let storage = LocalStorage {
            conn,
            last_created_at: Mutex::new(None),
        };
        storage.init_schema().await.context("Failed to initialize database schema")?;
        Ok(storage)
    }

    /// Initialize database schema
    async fn init_schema(&self) -> Result<(), DbErr> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut categories = schema.create_table_from_entity(category::Entity);
        categories.if_not_exists();
        self.conn.execute(backend.build(&categories)).await?;

        let mut tasks = schema.create_table_from_entity(task::Entity);
        tasks.if_not_exists();
        self.conn.execute(backend.build(&tasks)).await?;

        Ok(())
    }

    /// Hand out strictly increasing creation timestamps so ordering by
    /// `created_at` is total even for inserts within one clock tick.
    fn next_created_at(&self) -> DateTime<Utc> {
        let now = Utc::now().trunc_subsecs(6);
        let mut last = match self.last_created_at.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let next = match *last {
            Some(previous) if now <= previous => previous + chrono::Duration::microseconds(1),
            _ => now,
        };
        *last = Some(next);
        next
    }

    async fn require_category(&self, id: Uuid) -> StorageResult<category::Model> {
        CategoryRepository::get_by_id(&self.conn, &id)
            .await?
            .ok_or(StorageError::NotFound { kind: "Category", id })
    }

    async fn require_task(&self, id: Uuid) -> StorageResult<task::Model> {
        TaskRepository::get_by_id(&self.conn, &id)
            .await?
            .ok_or(StorageError::NotFound { kind: "Task", id })
    }
}

#[async_trait]
impl TodoStore for LocalStorage {
    async fn list_categories(&self) -> StorageResult<Vec<Category>> {
        let categories = CategoryRepository::get_all(&self.conn).await?;
        Ok(categories.into_iter().map(Category::from).collect())
    }

    async fn list_tasks(&self, category_id: Uuid) -> StorageResult<Vec<Task>> {
        let tasks = TaskRepository::get_for_category(&self.conn, &category_id).await?;
        Ok(tasks.into_iter().map(Task::from).collect())
    }

    async fn get_task(&self, id: Uuid) -> StorageResult<Option<Task>> {
        Ok(TaskRepository::get_by_id(&self.conn, &id).await?.map(Task::from))
    }

    async fn insert_category(&self, name: &str) -> StorageResult<Uuid> {
        let model = category::ActiveModel {
            uuid: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(self.next_created_at()),
        };
        let inserted = CategoryRepository::insert(&self.conn, model).await?;
        Ok(inserted.uuid)
    }

    async fn insert_task(&self, category_id: Uuid, name: &str) -> StorageResult<Uuid> {
        self.require_category(category_id).await?;

        let model = task::ActiveModel {
            uuid: ActiveValue::Set(Uuid::new_v4()),
            category_uuid: ActiveValue::Set(category_id),
            name: ActiveValue::Set(name.to_string()),
            is_completed: ActiveValue::Set(false),
            created_at: ActiveValue::Set(self.next_created_at()),
        };
        let inserted = TaskRepository::insert(&self.conn, model).await?;
        Ok(inserted.uuid)
    }

    async fn update_category_name(&self, id: Uuid, name: &str) -> StorageResult<()> {
        let mut active_model: category::ActiveModel = self.require_category(id).await?.into();
        active_model.name = ActiveValue::Set(name.to_string());
        CategoryRepository::update(&self.conn, active_model).await?;
        Ok(())
    }

    async fn update_task_name(&self, id: Uuid, name: &str) -> StorageResult<()> {
        let mut active_model: task::ActiveModel = self.require_task(id).await?.into();
        active_model.name = ActiveValue::Set(name.to_string());
        TaskRepository::update(&self.conn, active_model).await?;
        Ok(())
    }

    async fn set_task_completed(&self, id: Uuid, completed: bool) -> StorageResult<()> {
        let mut active_model: task::ActiveModel = self.require_task(id).await?.into();
        active_model.is_completed = ActiveValue::Set(completed);
        TaskRepository::update(&self.conn, active_model).await?;
        Ok(())
    }

    async fn delete_category(&self, id: Uuid) -> StorageResult<()> {
        let txn = self.conn.begin().await?;

        TaskRepository::delete_for_category(&txn, &id).await?;
        let deleted = CategoryRepository::delete(&txn, &id).await?;
        if deleted == 0 {
            txn.rollback().await?;
            return Err(StorageError::NotFound { kind: "Category", id });
        }

        txn.commit().await?;
        Ok(())
    }

    async fn delete_task(&self, id: Uuid) -> StorageResult<()> {
        if TaskRepository::delete(&self.conn, &id).await? == 0 {
            return Err(StorageError::NotFound { kind: "Task", id });
        }
        Ok(())
    }

    async fn count_tasks(&self, category_id: Uuid) -> StorageResult<u64> {
        Ok(TaskRepository::count_for_category(&self.conn, &category_id).await?)
    }

    async fn count_completed_tasks(&self, category_id: Uuid) -> StorageResult<u64> {
        Ok(TaskRepository::count_completed_for_category(&self.conn, &category_id).await?)
    }
}
