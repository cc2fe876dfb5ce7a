use std::sync::Arc;

use log::{debug, error, info};
use uuid::Uuid;

use crate::config::UiConfig;
use crate::constants::{
    ERROR_CATEGORY_CREATE_FAILED, ERROR_CATEGORY_DELETE_FAILED, ERROR_CATEGORY_UPDATE_FAILED,
    ERROR_LOAD_CATEGORIES_FAILED, ERROR_LOAD_TASKS_FAILED, ERROR_TASK_CREATE_FAILED, ERROR_TASK_DELETE_FAILED,
    ERROR_TASK_TOGGLE_FAILED, ERROR_TASK_UPDATE_FAILED,
};
use crate::models::CategorySummary;
use crate::storage::{StorageError, StorageResult, TodoStore};
use crate::ui::components::{CategoryListComponent, ModalController, ModalState, TaskListComponent};
use crate::ui::core::{Action, Component, InputEvent};

/// Which list is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Categories,
    Tasks,
}

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub view: View,
    pub selected_category: Option<(Uuid, String)>,
    pub error_message: Option<String>,
}

/// Top-level controller: routes input to the open dialog or the active view
/// and runs the resulting actions against the store.
pub struct AppComponent {
    // Component composition
    categories: CategoryListComponent,
    tasks: TaskListComponent,
    modal: ModalController,

    // Application state
    state: AppState,

    // Services
    store: Arc<dyn TodoStore>,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(store: Arc<dyn TodoStore>, config: &UiConfig) -> Self {
        Self {
            categories: CategoryListComponent::new(config),
            tasks: TaskListComponent::new(config),
            modal: ModalController::new(config.max_input_length, config.cursor_blink_ticks),
            state: AppState::default(),
            store,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> View {
        self.state.view
    }

    pub fn categories(&self) -> &CategoryListComponent {
        &self.categories
    }

    pub fn categories_mut(&mut self) -> &mut CategoryListComponent {
        &mut self.categories
    }

    pub fn tasks(&self) -> &TaskListComponent {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut TaskListComponent {
        &mut self.tasks
    }

    pub fn modal(&self) -> &ModalController {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut ModalController {
        &mut self.modal
    }

    /// Initial load of the goal list. Unlike later reloads, a failure here is
    /// returned to the caller.
    pub async fn load(&mut self) -> StorageResult<()> {
        let summaries = self.fetch_summaries().await?;
        info!("App: loaded {} goals", summaries.len());
        self.categories.update_data(summaries);
        Ok(())
    }

    async fn fetch_summaries(&self) -> StorageResult<Vec<CategorySummary>> {
        let categories = self.store.list_categories().await?;
        let mut summaries = Vec::with_capacity(categories.len());
        for category in categories {
            let task_count = self.store.count_tasks(category.id).await?;
            let completed_count = self.store.count_completed_tasks(category.id).await?;
            summaries.push(CategorySummary {
                category,
                task_count,
                completed_count,
            });
        }
        Ok(summaries)
    }

    async fn reload_categories(&mut self) {
        match self.fetch_summaries().await {
            Ok(summaries) => self.categories.update_data(summaries),
            Err(e) => self.report(ERROR_LOAD_CATEGORIES_FAILED, &e),
        }
    }

    async fn reload_tasks(&mut self) {
        let Some((category_id, _)) = self.state.selected_category else {
            return;
        };
        match self.store.list_tasks(category_id).await {
            Ok(tasks) => self.tasks.update_data(tasks),
            Err(e) => self.report(ERROR_LOAD_TASKS_FAILED, &e),
        }
    }

    /// Log a failed storage call and show it in the status line. The lists
    /// on screen are left as they were.
    fn report(&mut self, message: &str, err: &StorageError) {
        error!("{}: {}", message, err);
        self.state.error_message = Some(message.to_string());
    }

    /// Route one input event. An open dialog gets every event; otherwise the
    /// active view does.
    pub async fn handle_event(&mut self, event: &InputEvent) {
        if matches!(event, InputEvent::Quit) {
            self.should_quit = true;
            return;
        }

        let action = if self.modal.is_active() {
            self.modal.handle_event(event)
        } else {
            match self.state.view {
                View::Categories => self.categories.handle_event(event),
                View::Tasks => self.tasks.handle_event(event),
            }
        };

        self.handle_app_action(action).await;
    }

    /// Perform an action produced by a component
    pub async fn handle_app_action(&mut self, action: Action) {
        if !matches!(action, Action::None) {
            debug!("App: handling {:?}", action);
        }

        match action {
            Action::None => {}
            Action::Quit => {
                info!("App: quit requested");
                self.should_quit = true;
            }
            Action::RequestConfirmation(pending) => {
                self.modal.request(pending);
            }
            Action::OpenCategory { id, name } => match self.store.list_tasks(id).await {
                Ok(tasks) => {
                    info!("App: opening goal '{}' ({} tasks)", name, tasks.len());
                    self.tasks.open(id, &name, tasks);
                    self.state.selected_category = Some((id, name));
                    self.state.view = View::Tasks;
                    self.state.error_message = None;
                }
                Err(e) => self.report(ERROR_LOAD_TASKS_FAILED, &e),
            },
            Action::BackToCategories => {
                info!("App: back to goals");
                self.tasks.close();
                self.categories.pager.reset();
                self.state.selected_category = None;
                self.state.view = View::Categories;
                self.reload_categories().await;
            }
            Action::CreateCategory { name } => match self.store.insert_category(&name).await {
                Ok(id) => {
                    info!("App: created goal {} '{}'", id, name);
                    self.categories.input.clear();
                    self.state.error_message = None;
                    self.reload_categories().await;
                }
                Err(e) => self.report(ERROR_CATEGORY_CREATE_FAILED, &e),
            },
            Action::RenameCategory { id, name } => match self.store.update_category_name(id, &name).await {
                Ok(()) => {
                    info!("App: renamed goal {} to '{}'", id, name);
                    self.state.error_message = None;
                    self.reload_categories().await;
                }
                Err(e) => self.report(ERROR_CATEGORY_UPDATE_FAILED, &e),
            },
            Action::DeleteCategory(id) => match self.store.delete_category(id).await {
                Ok(()) => {
                    info!("App: deleted goal {}", id);
                    self.state.error_message = None;
                    self.reload_categories().await;
                }
                Err(e) => self.report(ERROR_CATEGORY_DELETE_FAILED, &e),
            },
            Action::CreateTask { category_id, name } => match self.store.insert_task(category_id, &name).await {
                Ok(id) => {
                    info!("App: created task {} '{}'", id, name);
                    self.tasks.input.clear();
                    self.state.error_message = None;
                    self.reload_tasks().await;
                }
                Err(e) => self.report(ERROR_TASK_CREATE_FAILED, &e),
            },
            Action::RenameTask { id, name } => match self.store.update_task_name(id, &name).await {
                Ok(()) => {
                    info!("App: renamed task {} to '{}'", id, name);
                    self.state.error_message = None;
                    self.reload_tasks().await;
                }
                Err(e) => self.report(ERROR_TASK_UPDATE_FAILED, &e),
            },
            Action::ToggleTask(id) => match self.store.toggle_task(id).await {
                Ok(completed) => {
                    info!("App: task {} completed={}", id, completed);
                    self.state.error_message = None;
                    self.reload_tasks().await;
                }
                Err(e) => self.report(ERROR_TASK_TOGGLE_FAILED, &e),
            },
            Action::DeleteTask(id) => match self.store.delete_task(id).await {
                Ok(()) => {
                    info!("App: deleted task {}", id);
                    self.state.error_message = None;
                    self.reload_tasks().await;
                }
                Err(e) => self.report(ERROR_TASK_DELETE_FAILED, &e),
            },
        }
    }

    /// Advance the cursor blink of the input box that currently has the user's attention
    pub fn tick(&mut self) {
        if matches!(self.modal.state(), ModalState::Editing(_)) {
            self.modal.tick();
            return;
        }
        match self.state.view {
            View::Categories => self.categories.tick(),
            View::Tasks => self.tasks.tick(),
        }
    }
}
