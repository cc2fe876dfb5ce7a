use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use pixeltodo::config::UiConfig;
use pixeltodo::constants::{ERROR_CATEGORY_CREATE_FAILED, ERROR_LOAD_CATEGORIES_FAILED, ERROR_LOAD_TASKS_FAILED};
use pixeltodo::models::{Category, Task};
use pixeltodo::storage::{LocalStorage, StorageError, StorageResult, TodoStore};
use pixeltodo::ui::app_component::{AppState, View};
use pixeltodo::ui::components::ModalState;
use pixeltodo::ui::core::{InputEvent, Key, Point};
use pixeltodo::ui::AppComponent;
use sea_orm::DbErr;
use uuid::Uuid;

// Logical positions of the controls on the first card row and the bottom row
const INPUT: (i32, i32) = (200, 520);
const ADD: (i32, i32) = (600, 520);
const BACK: (i32, i32) = (30, 30);
const CARD_BODY: (i32, i32) = (300, 160);
const CARD_EDIT: (i32, i32) = (620, 160);
const CARD_DELETE: (i32, i32) = (670, 160);
const CARD_CHECKBOX: (i32, i32) = (100, 160);
const YES: (i32, i32) = (260, 350);
const NO: (i32, i32) = (440, 350);

async fn setup(config: UiConfig) -> (AppComponent, Arc<LocalStorage>) {
    let store = Arc::new(LocalStorage::in_memory().await.unwrap());
    let mut app = AppComponent::new(store.clone(), &config);
    app.load().await.unwrap();
    (app, store)
}

async fn click(app: &mut AppComponent, (x, y): (i32, i32)) {
    app.handle_event(&InputEvent::PointerDown(Point::new(x, y))).await;
}

async fn press(app: &mut AppComponent, key: Key) {
    app.handle_event(&InputEvent::Key(key)).await;
}

async fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, Key::Char(c)).await;
    }
}

#[test]
fn test_app_state_default() {
    let state = AppState::default();
    assert_eq!(state.view, View::Categories);
    assert!(state.selected_category.is_none());
    assert!(state.error_message.is_none(), "Default AppState should have no error message");
}

#[tokio::test]
async fn test_added_category_is_listed_first() {
    let (mut app, store) = setup(UiConfig::default()).await;
    store.insert_category("Work").await.unwrap();
    app.load().await.unwrap();

    click(&mut app, INPUT).await;
    type_text(&mut app, "Gym").await;
    press(&mut app, Key::Enter).await;

    let categories = store.list_categories().await.unwrap();
    assert_eq!(categories[0].name, "Gym");
    assert!(categories[0].created_at >= categories[1].created_at);
    assert_eq!(app.categories().summaries[0].category.name, "Gym");
    assert_eq!(app.categories().input.text(), "");
}

#[tokio::test]
async fn test_add_button_ignores_blank_input() {
    let (mut app, store) = setup(UiConfig::default()).await;

    click(&mut app, INPUT).await;
    type_text(&mut app, "   ").await;
    click(&mut app, ADD).await;

    assert!(store.list_categories().await.unwrap().is_empty());
    assert_eq!(app.categories().input.text(), "   ");
    assert!(app.state().error_message.is_none());
}

#[tokio::test]
async fn test_open_category_and_add_task() {
    let (mut app, store) = setup(UiConfig::default()).await;
    let category = store.insert_category("Groceries").await.unwrap();
    app.load().await.unwrap();

    click(&mut app, CARD_BODY).await;
    assert_eq!(app.view(), View::Tasks);
    assert_eq!(app.state().selected_category, Some((category, "Groceries".to_string())));

    click(&mut app, INPUT).await;
    type_text(&mut app, "Buy milk").await;
    click(&mut app, ADD).await;

    let tasks = store.list_tasks(category).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].name, "Buy milk");
    assert_eq!(app.tasks().tasks.len(), 1);
    assert_eq!(app.tasks().input.text(), "");
}

#[tokio::test]
async fn test_blank_edit_keeps_task_name() {
    let (mut app, store) = setup(UiConfig::default()).await;
    let category = store.insert_category("Groceries").await.unwrap();
    let task = store.insert_task(category, "Buy milk").await.unwrap();
    app.load().await.unwrap();

    click(&mut app, CARD_BODY).await;
    click(&mut app, CARD_EDIT).await;
    assert!(matches!(app.modal().state(), ModalState::Confirming(_)));

    click(&mut app, YES).await;
    assert!(matches!(app.modal().state(), ModalState::Editing(_)));
    assert_eq!(app.modal().edit_input().text(), "Buy milk");

    for _ in 0.."Buy milk".len() {
        press(&mut app, Key::Backspace).await;
    }
    press(&mut app, Key::Enter).await;

    assert_eq!(app.modal().state(), &ModalState::Idle);
    assert_eq!(store.get_task(task).await.unwrap().unwrap().name, "Buy milk");
}

#[tokio::test]
async fn test_edit_category_name() {
    let (mut app, store) = setup(UiConfig::default()).await;
    store.insert_category("Gym").await.unwrap();
    app.load().await.unwrap();

    click(&mut app, CARD_EDIT).await;
    press(&mut app, Key::Enter).await;
    type_text(&mut app, " & Swim").await;
    press(&mut app, Key::Enter).await;

    assert_eq!(store.list_categories().await.unwrap()[0].name, "Gym & Swim");
    assert_eq!(app.categories().summaries[0].category.name, "Gym & Swim");
}

#[tokio::test]
async fn test_delete_category_after_confirmation() {
    let (mut app, store) = setup(UiConfig::default()).await;
    let category = store.insert_category("Doomed").await.unwrap();
    for name in ["one", "two", "three"] {
        store.insert_task(category, name).await.unwrap();
    }
    app.load().await.unwrap();

    // NO keeps everything
    click(&mut app, CARD_DELETE).await;
    click(&mut app, NO).await;
    assert_eq!(store.list_categories().await.unwrap().len(), 1);

    click(&mut app, CARD_DELETE).await;
    click(&mut app, YES).await;

    assert!(store.list_categories().await.unwrap().is_empty());
    assert!(store.list_tasks(category).await.unwrap().is_empty());
    assert!(app.categories().summaries.is_empty());
}

#[tokio::test]
async fn test_modal_swallows_view_input() {
    let (mut app, store) = setup(UiConfig::default()).await;
    for i in 0..8 {
        store.insert_category(&format!("Goal {i}")).await.unwrap();
    }
    app.load().await.unwrap();

    click(&mut app, CARD_DELETE).await;
    app.handle_event(&InputEvent::Wheel(-1)).await;
    assert_eq!(app.categories().pager.offset(), 0);

    // A click inside the dialog body must not reach the card underneath
    click(&mut app, (400, 260)).await;
    assert_eq!(app.view(), View::Categories);
    assert!(app.modal().is_active());
}

#[tokio::test]
async fn test_wheel_sign_convention() {
    let (mut app, store) = setup(UiConfig::default()).await;
    for i in 0..8 {
        store.insert_category(&format!("Goal {i}")).await.unwrap();
    }
    app.load().await.unwrap();

    // wheel down moves toward later items
    app.handle_event(&InputEvent::Wheel(-1)).await;
    assert_eq!(app.categories().pager.offset(), 1);
    app.handle_event(&InputEvent::Wheel(-10)).await;
    assert_eq!(app.categories().pager.offset(), 3);
    // wheel up moves toward earlier items
    app.handle_event(&InputEvent::Wheel(1)).await;
    assert_eq!(app.categories().pager.offset(), 2);
    app.handle_event(&InputEvent::Wheel(10)).await;
    assert_eq!(app.categories().pager.offset(), 0);
}

#[tokio::test]
async fn test_delete_pulls_offset_back() {
    let (mut app, store) = setup(UiConfig::default()).await;
    for i in 0..7 {
        store.insert_category(&format!("Goal {i}")).await.unwrap();
    }
    app.load().await.unwrap();
    app.handle_event(&InputEvent::Wheel(-5)).await;
    assert_eq!(app.categories().pager.offset(), 2);

    click(&mut app, CARD_DELETE).await;
    click(&mut app, YES).await;

    assert_eq!(app.categories().summaries.len(), 6);
    assert_eq!(app.categories().pager.offset(), 1);
}

#[tokio::test]
async fn test_checkbox_toggles_without_confirmation() {
    let (mut app, store) = setup(UiConfig::default()).await;
    let category = store.insert_category("Groceries").await.unwrap();
    let task = store.insert_task(category, "Milk").await.unwrap();
    app.load().await.unwrap();
    click(&mut app, CARD_BODY).await;

    click(&mut app, CARD_CHECKBOX).await;
    assert!(!app.modal().is_active());
    assert!(store.get_task(task).await.unwrap().unwrap().completed);
    assert!(app.tasks().tasks[0].completed);

    click(&mut app, CARD_CHECKBOX).await;
    assert!(!store.get_task(task).await.unwrap().unwrap().completed);
}

#[tokio::test]
async fn test_checkbox_with_confirmation_enabled() {
    let config = UiConfig {
        confirm_toggle: true,
        ..UiConfig::default()
    };
    let (mut app, store) = setup(config).await;
    let category = store.insert_category("Groceries").await.unwrap();
    let task = store.insert_task(category, "Milk").await.unwrap();
    app.load().await.unwrap();
    click(&mut app, CARD_BODY).await;

    click(&mut app, CARD_CHECKBOX).await;
    assert!(matches!(app.modal().state(), ModalState::Confirming(_)));
    assert!(!store.get_task(task).await.unwrap().unwrap().completed);

    press(&mut app, Key::Char('y')).await;
    assert!(store.get_task(task).await.unwrap().unwrap().completed);
    assert!(!app.modal().is_active());
}

#[tokio::test]
async fn test_back_clears_task_input_and_resets_scroll() {
    let (mut app, store) = setup(UiConfig::default()).await;
    for i in 0..8 {
        store.insert_category(&format!("Goal {i}")).await.unwrap();
    }
    app.load().await.unwrap();
    app.handle_event(&InputEvent::Wheel(-2)).await;

    click(&mut app, CARD_BODY).await;
    click(&mut app, INPUT).await;
    type_text(&mut app, "half typed").await;
    click(&mut app, BACK).await;

    assert_eq!(app.view(), View::Categories);
    assert_eq!(app.categories().pager.offset(), 0);
    assert_eq!(app.tasks().input.text(), "");
    assert!(app.state().selected_category.is_none());
}

#[tokio::test]
async fn test_escape_goes_back_from_tasks() {
    let (mut app, store) = setup(UiConfig::default()).await;
    store.insert_category("Gym").await.unwrap();
    app.load().await.unwrap();

    click(&mut app, CARD_BODY).await;
    press(&mut app, Key::Escape).await;
    assert_eq!(app.view(), View::Categories);
}

#[tokio::test]
async fn test_quit_event() {
    let (mut app, _) = setup(UiConfig::default()).await;
    assert!(!app.should_quit());
    app.handle_event(&InputEvent::Quit).await;
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_tick_only_blinks_relevant_input() {
    let config = UiConfig {
        cursor_blink_ticks: 1,
        ..UiConfig::default()
    };
    let (mut app, _) = setup(config).await;

    app.tick();
    app.tick();
    assert!(!app.categories().input.cursor_visible());
    assert!(app.tasks().input.cursor_visible());
    assert!(app.modal().edit_input().cursor_visible());
}

/// Store whose writes always fail
struct BrokenStore;

#[async_trait]
impl TodoStore for BrokenStore {
    async fn list_categories(&self) -> StorageResult<Vec<Category>> {
        Ok(Vec::new())
    }

    async fn list_tasks(&self, _category_id: Uuid) -> StorageResult<Vec<Task>> {
        Ok(Vec::new())
    }

    async fn get_task(&self, _id: Uuid) -> StorageResult<Option<Task>> {
        Ok(None)
    }

    async fn insert_category(&self, _name: &str) -> StorageResult<Uuid> {
        Err(StorageError::Database(DbErr::Custom("disk full".to_string())))
    }

    async fn insert_task(&self, category_id: Uuid, _name: &str) -> StorageResult<Uuid> {
        Err(StorageError::NotFound {
            kind: "Category",
            id: category_id,
        })
    }

    async fn update_category_name(&self, id: Uuid, _name: &str) -> StorageResult<()> {
        Err(StorageError::NotFound { kind: "Category", id })
    }

    async fn update_task_name(&self, id: Uuid, _name: &str) -> StorageResult<()> {
        Err(StorageError::NotFound { kind: "Task", id })
    }

    async fn set_task_completed(&self, id: Uuid, _completed: bool) -> StorageResult<()> {
        Err(StorageError::NotFound { kind: "Task", id })
    }

    async fn delete_category(&self, id: Uuid) -> StorageResult<()> {
        Err(StorageError::NotFound { kind: "Category", id })
    }

    async fn delete_task(&self, id: Uuid) -> StorageResult<()> {
        Err(StorageError::NotFound { kind: "Task", id })
    }

    async fn count_tasks(&self, _category_id: Uuid) -> StorageResult<u64> {
        Ok(0)
    }

    async fn count_completed_tasks(&self, _category_id: Uuid) -> StorageResult<u64> {
        Ok(0)
    }
}

#[tokio::test]
async fn test_storage_failure_is_not_fatal() {
    let mut app = AppComponent::new(Arc::new(BrokenStore), &UiConfig::default());
    app.load().await.unwrap();

    click(&mut app, INPUT).await;
    type_text(&mut app, "Gym").await;
    press(&mut app, Key::Enter).await;

    assert!(!app.should_quit());
    assert_eq!(app.state().error_message.as_deref(), Some(ERROR_CATEGORY_CREATE_FAILED));
    // the typed name survives so the user can retry
    assert_eq!(app.categories().input.text(), "Gym");
}

/// Store that writes normally but can be told to fail every list read
struct ReadFailingStore {
    inner: LocalStorage,
    fail_reads: AtomicBool,
}

impl ReadFailingStore {
    fn read_error() -> StorageError {
        StorageError::Database(DbErr::Custom("database is locked".to_string()))
    }
}

#[async_trait]
impl TodoStore for ReadFailingStore {
    async fn list_categories(&self) -> StorageResult<Vec<Category>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Self::read_error());
        }
        self.inner.list_categories().await
    }

    async fn list_tasks(&self, category_id: Uuid) -> StorageResult<Vec<Task>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Self::read_error());
        }
        self.inner.list_tasks(category_id).await
    }

    async fn get_task(&self, id: Uuid) -> StorageResult<Option<Task>> {
        self.inner.get_task(id).await
    }

    async fn insert_category(&self, name: &str) -> StorageResult<Uuid> {
        self.inner.insert_category(name).await
    }

    async fn insert_task(&self, category_id: Uuid, name: &str) -> StorageResult<Uuid> {
        self.inner.insert_task(category_id, name).await
    }

    async fn update_category_name(&self, id: Uuid, name: &str) -> StorageResult<()> {
        self.inner.update_category_name(id, name).await
    }

    async fn update_task_name(&self, id: Uuid, name: &str) -> StorageResult<()> {
        self.inner.update_task_name(id, name).await
    }

    async fn set_task_completed(&self, id: Uuid, completed: bool) -> StorageResult<()> {
        self.inner.set_task_completed(id, completed).await
    }

    async fn delete_category(&self, id: Uuid) -> StorageResult<()> {
        self.inner.delete_category(id).await
    }

    async fn delete_task(&self, id: Uuid) -> StorageResult<()> {
        self.inner.delete_task(id).await
    }

    async fn count_tasks(&self, category_id: Uuid) -> StorageResult<u64> {
        self.inner.count_tasks(category_id).await
    }

    async fn count_completed_tasks(&self, category_id: Uuid) -> StorageResult<u64> {
        self.inner.count_completed_tasks(category_id).await
    }
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_lists() {
    let store = Arc::new(ReadFailingStore {
        inner: LocalStorage::in_memory().await.unwrap(),
        fail_reads: AtomicBool::new(false),
    });
    let category = store.insert_category("Groceries").await.unwrap();
    let milk = store.insert_task(category, "Milk").await.unwrap();
    store.insert_task(category, "Eggs").await.unwrap();

    let mut app = AppComponent::new(store.clone(), &UiConfig::default());
    app.load().await.unwrap();
    click(&mut app, CARD_BODY).await;
    assert_eq!(app.state().view, View::Tasks);
    assert_eq!(app.tasks().tasks.len(), 2);

    store.fail_reads.store(true, Ordering::SeqCst);

    // The toggle itself is written; only the refresh afterwards fails
    click(&mut app, CARD_CHECKBOX).await;
    assert!(store.get_task(milk).await.unwrap().unwrap().completed);
    assert_eq!(app.state().error_message.as_deref(), Some(ERROR_LOAD_TASKS_FAILED));
    let names: Vec<_> = app.tasks().tasks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Milk", "Eggs"]);
    assert!(!app.tasks().tasks[0].completed);

    click(&mut app, BACK).await;
    assert_eq!(app.state().view, View::Categories);
    assert_eq!(app.state().error_message.as_deref(), Some(ERROR_LOAD_CATEGORIES_FAILED));
    assert_eq!(app.categories().summaries.len(), 1);
    assert_eq!(app.categories().summaries[0].category.name, "Groceries");
    assert!(!app.should_quit());
}
