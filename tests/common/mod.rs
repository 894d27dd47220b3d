#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::HeaderValue;
use axum_test::TestServer;
use chrono::Utc;
use sqlx::PgPool;
use std::sync::{Arc, Mutex};
use users_api::application::services::UserService;
use users_api::config::RuntimeMode;
use users_api::domain::entities::{NewUser, User, UserPatch};
use users_api::domain::repositories::UserRepository;
use users_api::error::{AppError, StorageFault};
use users_api::infrastructure::persistence::PgUserRepository;
use users_api::routes::app_router;
use users_api::state::AppState;

pub const TEST_ORIGIN: &str = "http://localhost:5173";

/// Repository backed by a `Vec`, enforcing the same unique-email rule as the
/// `users_email_key` constraint.
#[derive(Default)]
pub struct InMemoryUserRepository {
    inner: Mutex<Store>,
}

#[derive(Default)]
struct Store {
    users: Vec<User>,
    next_id: i64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().users.len()
    }

    pub fn get(&self, id: i64) -> Option<User> {
        self.inner
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }
}

fn duplicate_email() -> AppError {
    AppError::storage(
        StorageFault::UniqueViolation,
        "duplicate key value violates unique constraint \"users_email_key\"",
        Some("users_email_key".to_string()),
    )
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        let mut users = self.inner.lock().unwrap().users.clone();
        users.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(users)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.get(id))
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut store = self.inner.lock().unwrap();

        if store.users.iter().any(|u| u.email == new_user.email) {
            return Err(duplicate_email());
        }

        store.next_id += 1;
        let now = Utc::now();
        let user = User::new(store.next_id, new_user.name, new_user.email, now, now);
        store.users.push(user.clone());

        Ok(user)
    }

    async fn update(&self, id: i64, patch: UserPatch) -> Result<Option<User>, AppError> {
        let mut store = self.inner.lock().unwrap();

        if let Some(email) = &patch.email
            && store.users.iter().any(|u| u.id != id && &u.email == email)
        {
            return Err(duplicate_email());
        }

        let Some(user) = store.users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };

        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        user.updated_at = Utc::now();

        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut store = self.inner.lock().unwrap();
        let before = store.users.len();
        store.users.retain(|u| u.id != id);
        Ok(store.users.len() < before)
    }
}

pub fn create_test_state(repo: Arc<dyn UserRepository>, mode: RuntimeMode) -> AppState {
    let user_service = Arc::new(UserService::new(repo));
    AppState::new(user_service, mode)
}

/// Full application router over an in-memory repository.
pub fn make_server(mode: RuntimeMode) -> (TestServer, Arc<InMemoryUserRepository>) {
    let repo = Arc::new(InMemoryUserRepository::new());
    let state = create_test_state(repo.clone(), mode);
    let app = app_router(state, HeaderValue::from_static(TEST_ORIGIN));

    (TestServer::new(app).unwrap(), repo)
}

/// Full application router over the PostgreSQL repository.
pub fn make_pg_server(pool: PgPool, mode: RuntimeMode) -> TestServer {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool)));
    let state = create_test_state(repo, mode);
    let app = app_router(state, HeaderValue::from_static(TEST_ORIGIN));

    TestServer::new(app).unwrap()
}

pub async fn insert_user(pool: &PgPool, name: &str, email: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}
