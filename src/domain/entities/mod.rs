//! Core domain entities.
//!
//! Entities follow the "New Type" pattern with separate structs for creation and
//! partial updates:
//! - [`User`] - A persisted user record
//! - [`NewUser`] - Validated input for inserting a record
//! - [`UserPatch`] - Partial update; `None` fields are left unchanged

pub mod user;

pub use user::{NewUser, User, UserPatch};
