//! Domain types for the atrium school-portal backend.
//!
//! This crate has no internal dependencies so it can be used by the data
//! layer, the API server, and any future CLI or worker tooling. It holds
//! the shared id/timestamp aliases, the domain error enum, and the course
//! outline content model with its validation and hour-derivation rules.

pub mod error;
pub mod outline;
pub mod types;
