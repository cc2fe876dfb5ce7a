use pixeltodo::storage::{LocalStorage, StorageError, TodoStore};
use uuid::Uuid;

#[tokio::test]
async fn test_tasks_are_listed_oldest_first() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let category = storage.insert_category("Groceries").await.unwrap();
    for name in ["Milk", "Eggs", "Bread"] {
        storage.insert_task(category, name).await.unwrap();
    }

    let tasks = storage.list_tasks(category).await.unwrap();
    let names: Vec<_> = tasks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Milk", "Eggs", "Bread"]);
    assert!(tasks.iter().all(|t| t.category_id == category && !t.completed));
}

#[tokio::test]
async fn test_toggle_twice_restores_state() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let category = storage.insert_category("Groceries").await.unwrap();
    let task = storage.insert_task(category, "Milk").await.unwrap();

    assert!(storage.toggle_task(task).await.unwrap());
    assert!(storage.get_task(task).await.unwrap().unwrap().completed);
    assert!(!storage.toggle_task(task).await.unwrap());
    assert!(!storage.get_task(task).await.unwrap().unwrap().completed);
}

#[tokio::test]
async fn test_rename_and_delete_task() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let category = storage.insert_category("Groceries").await.unwrap();
    let task = storage.insert_task(category, "Buy milk").await.unwrap();

    storage.update_task_name(task, "Buy oat milk").await.unwrap();
    assert_eq!(storage.get_task(task).await.unwrap().unwrap().name, "Buy oat milk");

    storage.delete_task(task).await.unwrap();
    assert!(storage.get_task(task).await.unwrap().is_none());
    assert_eq!(storage.count_tasks(category).await.unwrap(), 0);
}

#[tokio::test]
async fn test_unknown_task_is_not_found() {
    let storage = LocalStorage::in_memory().await.unwrap();
    let missing = Uuid::new_v4();

    assert!(matches!(
        storage.set_task_completed(missing, true).await,
        Err(StorageError::NotFound { .. })
    ));
    assert!(matches!(
        storage.update_task_name(missing, "x").await,
        Err(StorageError::NotFound { .. })
    ));
    assert!(matches!(storage.delete_task(missing).await, Err(StorageError::NotFound { .. })));
    assert!(matches!(storage.toggle_task(missing).await, Err(StorageError::NotFound { .. })));
}
