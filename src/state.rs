//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::UserService;
use crate::config::RuntimeMode;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub runtime_mode: RuntimeMode,
}

impl AppState {
    pub fn new(user_service: Arc<UserService>, runtime_mode: RuntimeMode) -> Self {
        Self {
            user_service,
            runtime_mode,
        }
    }
}
