use pixeltodo::storage::{LocalStorage, TodoStore};

#[tokio::test]
async fn test_local_storage_creation() {
    // In-memory database for tests
    let result = LocalStorage::in_memory().await;
    assert!(result.is_ok(), "LocalStorage should be created successfully");
}

#[tokio::test]
async fn test_file_storage_persists_between_opens() {
    let temp_dir = std::env::temp_dir().join("pixeltodo_test_storage");
    if temp_dir.exists() {
        let _ = std::fs::remove_dir_all(&temp_dir);
    }
    let db_path = temp_dir.join("nested").join("todo.db");

    {
        let storage = LocalStorage::open(&db_path).await.unwrap();
        assert!(storage.list_categories().await.unwrap().is_empty());
        storage.insert_category("Gym").await.unwrap();
    }

    let storage = LocalStorage::open(&db_path).await.unwrap();
    let categories = storage.list_categories().await.unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "Gym");

    drop(storage);
    let _ = std::fs::remove_dir_all(&temp_dir);
}

