//! pixeltodo - a pixel-art todo list for the terminal
//!
//! Goals group tasks. Both lists are paginated card views with inline
//! editing, confirmation dialogs and a local SQLite store.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`storage`] - Persistence interface and the SQLite adapter
//! * [`models`] - Goal and task records used by the UI
//! * [`ui`] - Controllers, components and terminal rendering

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// File logging setup
pub mod logger;

/// Domain records handed to the UI
pub mod models;

/// Repository layer for database operations
pub mod repositories;

/// Local storage layer for goals and tasks
pub mod storage;

/// Terminal user interface components and rendering
pub mod ui;

pub use models::{Category, CategorySummary, Task};
pub use storage::{LocalStorage, StorageError, StorageResult, TodoStore};
