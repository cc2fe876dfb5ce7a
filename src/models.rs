//! Domain records handed to the UI.
//!
//! The storage adapter maps persisted rows onto these structs so nothing above
//! the storage layer deals with SeaORM models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{category, task};

/// A goal grouping tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A single todo item. `category_id` always refers to a live category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// A category together with the progress numbers shown on its card.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: Category,
    pub task_count: u64,
    pub completed_count: u64,
}

impl CategorySummary {
    /// True when the category has tasks and all of them are completed
    pub fn is_complete(&self) -> bool {
        self.task_count > 0 && self.completed_count == self.task_count
    }

    /// Badge text, e.g. `2/5`
    pub fn progress_label(&self) -> String {
        format!("{}/{}", self.completed_count, self.task_count)
    }
}

impl From<category::Model> for Category {
    fn from(model: category::Model) -> Self {
        Self {
            id: model.uuid,
            name: model.name,
            created_at: model.created_at,
        }
    }
}

impl From<task::Model> for Task {
    fn from(model: task::Model) -> Self {
        Self {
            id: model.uuid,
            category_id: model.category_uuid,
            name: model.name,
            completed: model.is_completed,
            created_at: model.created_at,
        }
    }
}
