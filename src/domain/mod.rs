//! Domain layer containing the user entity and the storage contract.
//!
//! - [`entities`] - Core data structures (`User`, `NewUser`, `UserPatch`)
//! - [`repositories`] - Data access trait implemented by the infrastructure layer
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod entities;
pub mod repositories;
