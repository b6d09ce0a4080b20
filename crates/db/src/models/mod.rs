//! Row structs read with `sqlx::FromRow` and converted into domain types.

pub mod todo;
