//! SeaORM entities describing how goals and tasks are persisted.

pub mod category;
pub mod task;

pub use category::Entity as Category;
pub use task::Entity as Task;
