//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) where partial updates exist

pub mod canvas;
pub mod chat_history;
pub mod course;
pub mod enrollment;
pub mod feedback;
pub mod step_description;
pub mod template;
pub mod user;
