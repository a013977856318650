//! Request extractors: the identity resolver and role gates.

pub mod auth;
pub mod rbac;
