//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input, delegate to the repositories in `atrium_db`,
//! and map errors via [`crate::error::AppError`].

pub mod course;
pub mod outline;
pub mod outline_draft;
pub mod outline_history;
