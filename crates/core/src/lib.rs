//! Domain core for the Startovate platform.
//!
//! Pure types and logic shared by the database and API layers: the error
//! taxonomy, role constants, the ownership capability, progress aggregation,
//! and template-key parsing. This crate performs no I/O.

pub mod error;
pub mod ownership;
pub mod progress;
pub mod roles;
pub mod stepkey;
pub mod types;
