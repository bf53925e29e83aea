//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Request types used by the API layer, where the entity has any

pub mod course;
pub mod outline;
pub mod outline_draft;
pub mod outline_version;
pub mod user;
