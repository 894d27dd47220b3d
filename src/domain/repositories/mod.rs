//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are generated via `mockall` for service tests.
//!
//! See integration tests in `tests/repository_user.rs` for usage examples.

pub mod user_repository;

pub use user_repository::UserRepository;

#[cfg(test)]
pub use user_repository::MockUserRepository;
