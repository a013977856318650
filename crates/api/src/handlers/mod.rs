//! Request handlers, one module per resource family.

pub mod canvas;
pub mod chatbot;
pub mod course;
pub mod enrollment;
pub mod feedback;
pub mod template;
pub mod user;
