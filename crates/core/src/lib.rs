//! Domain layer for the Todo API.
//!
//! Holds the Todo data model, the error type shared by every layer, the
//! persistence contract ([`todo_service::TodoStore`]), and the domain service
//! that enforces defaulting, validation, and soft-delete rules.

pub mod config;
pub mod error;
pub mod todo;
pub mod todo_service;
pub mod types;
