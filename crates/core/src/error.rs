use crate::types::DbId;

/// Boxed error produced by a persistence backend.
pub type StoreSource = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{entity} with id {id} is already deleted")]
    AlreadyDeleted { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A persistence failure, tagged with the operation that hit it.
    #[error("{context}: {source}")]
    Store {
        context: String,
        #[source]
        source: StoreSource,
    },
}

impl CoreError {
    /// Wrap a store-layer error with an operation-specific message.
    pub fn store<E>(context: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Store {
            context: context.into(),
            source: Box::new(source),
        }
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("connection refused")]
    struct Refused;

    #[test]
    fn store_error_prefixes_context() {
        let err = CoreError::store("Failed to list todos", Refused);
        assert_eq!(err.to_string(), "Failed to list todos: connection refused");
    }

    #[test]
    fn store_error_exposes_source() {
        let err = CoreError::store("Failed to create todo", Refused);
        let source = std::error::Error::source(&err).expect("source should be set");
        assert_eq!(source.to_string(), "connection refused");
    }

    #[test]
    fn already_deleted_message_names_entity() {
        let err = CoreError::AlreadyDeleted {
            entity: "Todo",
            id: 7,
        };
        assert_eq!(err.to_string(), "Todo with id 7 is already deleted");
    }
}
