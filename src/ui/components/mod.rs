//! Reusable UI components

pub mod button;
pub mod card;
pub mod list_pager;
pub mod text_input;

// Component architecture
pub mod category_list_component;
pub mod modal;
pub mod task_list_component;

// Component exports
pub use button::Button;
pub use category_list_component::CategoryListComponent;
pub use list_pager::ListPager;
pub use modal::{ModalController, ModalState};
pub use task_list_component::TaskListComponent;
pub use text_input::TextInput;
