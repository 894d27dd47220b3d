//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod index;
pub mod users;

pub use health::health_handler;
pub use index::{api_index_handler, route_not_found_handler};
pub use users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
