//! Todo entity, priority enumeration, and request DTOs.
//!
//! Priorities are stored as their lowercase name but carry an explicit
//! numeric rank; any ordering by severity must go through [`Priority::rank`],
//! never through the stored text (lexically "medium" and "low" sort above
//! "high").

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Entity name used in `NotFound` / `AlreadyDeleted` errors.
pub const TODO_ENTITY: &str = "Todo";

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

pub const PRIORITY_LOW: &str = "low";
pub const PRIORITY_MEDIUM: &str = "medium";
pub const PRIORITY_HIGH: &str = "high";
pub const PRIORITY_URGENT: &str = "urgent";

/// All valid priority values, lowest severity first.
pub const VALID_PRIORITIES: &[&str] = &[
    PRIORITY_LOW,
    PRIORITY_MEDIUM,
    PRIORITY_HIGH,
    PRIORITY_URGENT,
];

/// Severity of a todo item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Every member, lowest rank first.
    pub const ALL: [Priority; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    /// Parse a priority string from a request or the database.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            PRIORITY_LOW => Ok(Self::Low),
            PRIORITY_MEDIUM => Ok(Self::Medium),
            PRIORITY_HIGH => Ok(Self::High),
            PRIORITY_URGENT => Ok(Self::Urgent),
            _ => Err(CoreError::Validation(format!(
                "Invalid priority '{s}'. Must be one of: {}",
                VALID_PRIORITIES.join(", ")
            ))),
        }
    }

    /// Convert to the stored / serialized string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => PRIORITY_LOW,
            Self::Medium => PRIORITY_MEDIUM,
            Self::High => PRIORITY_HIGH,
            Self::Urgent => PRIORITY_URGENT,
        }
    }

    /// Severity rank; higher is more severe.
    pub fn rank(self) -> i16 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Urgent => 4,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve an optional request priority: absent or empty means `medium`.
pub fn resolve_priority(raw: Option<&str>) -> Result<Priority, CoreError> {
    match raw {
        None | Some("") => Ok(Priority::default()),
        Some(s) => Priority::parse(s),
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A live (not soft-deleted) row from the `todos` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fully resolved insert payload handed to the store. New todos are always
/// incomplete.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// DTO for creating a todo.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateTodo {
    #[validate(
        length(min = 1, max = 255, message = "title must be between 1 and 255 characters"),
        custom(function = "not_blank")
    )]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Defaults to `medium` if omitted or empty.
    pub priority: Option<String>,
    pub due_date: Option<Timestamp>,
}

/// DTO for updating a todo. All fields are optional; only present fields are
/// applied.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTodo {
    #[validate(
        length(min = 1, max = 255, message = "title must be between 1 and 255 characters"),
        custom(function = "not_blank")
    )]
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<String>,
    pub due_date: Option<Timestamp>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::from("title must not be blank"));
        return Err(err);
    }
    Ok(())
}
