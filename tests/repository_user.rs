mod common;

use sqlx::PgPool;
use std::sync::Arc;
use users_api::domain::entities::{NewUser, UserPatch};
use users_api::domain::repositories::UserRepository;
use users_api::error::{AppError, StorageFault};
use users_api::infrastructure::persistence::PgUserRepository;

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
    }
}

#[sqlx::test]
async fn test_create_user(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let result = repo
        .create(new_user("John Doe", "john.doe@example.com"))
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert!(user.id > 0);
    assert_eq!(user.name, "John Doe");
    assert_eq!(user.email, "john.doe@example.com");
    assert_eq!(user.created_at, user.updated_at);
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let id = common::insert_user(&pool, "Jane Smith", "jane.smith@example.com").await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let user = repo.find_by_id(id).await.unwrap();

    assert!(user.is_some());
    assert_eq!(user.unwrap().email, "jane.smith@example.com");
}

#[sqlx::test]
async fn test_find_by_id_not_found(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let result = repo.find_by_id(999_999).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_newest_first(pool: PgPool) {
    let a = common::insert_user(&pool, "A", "a@example.com").await;
    let b = common::insert_user(&pool, "B", "b@example.com").await;
    let c = common::insert_user(&pool, "C", "c@example.com").await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let users = repo.list().await.unwrap();

    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![c, b, a]);
}

#[sqlx::test]
async fn test_create_duplicate_email(pool: PgPool) {
    common::insert_user(&pool, "Bob", "bob@example.com").await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let result = repo.create(new_user("Other Bob", "bob@example.com")).await;

    match result.unwrap_err() {
        AppError::Storage {
            fault, constraint, ..
        } => {
            assert_eq!(fault, StorageFault::UniqueViolation);
            assert_eq!(constraint.as_deref(), Some("users_email_key"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[sqlx::test]
async fn test_update_partial(pool: PgPool) {
    let id = common::insert_user(&pool, "Bob Johnson", "bob.johnson@example.com").await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let patch = UserPatch {
        name: Some("Robert Johnson".to_string()),
        email: None,
    };
    let user = repo.update(id, patch).await.unwrap().unwrap();

    assert_eq!(user.name, "Robert Johnson");
    assert_eq!(user.email, "bob.johnson@example.com");
    assert!(user.updated_at >= user.created_at);
}

#[sqlx::test]
async fn test_update_empty_patch_refreshes_timestamp(pool: PgPool) {
    let id = common::insert_user(&pool, "Bob", "bob@example.com").await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let before = repo.find_by_id(id).await.unwrap().unwrap();
    let after = repo
        .update(id, UserPatch::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(after.name, before.name);
    assert_eq!(after.email, before.email);
    assert!(after.updated_at >= before.updated_at);
}

#[sqlx::test]
async fn test_update_missing_user(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let result = repo.update(999_999, UserPatch::default()).await;

    assert!(result.unwrap().is_none());
}

#[sqlx::test]
async fn test_delete(pool: PgPool) {
    let id = common::insert_user(&pool, "John", "john@example.com").await;
    let repo = PgUserRepository::new(Arc::new(pool));

    assert!(repo.delete(id).await.unwrap());
    assert!(!repo.delete(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_undefined_column_is_classified(pool: PgPool) {
    let err: AppError = sqlx::query("SELECT nope FROM users")
        .fetch_all(&pool)
        .await
        .unwrap_err()
        .into();

    assert!(matches!(
        err,
        AppError::Storage {
            fault: StorageFault::UndefinedColumn,
            ..
        }
    ));
    assert_eq!(err.classify().message, "Invalid field in query.");
}
