//! # Servicios - service-record form over an embedded SQLite file
//!
//! Servicios keeps a small list of delivery services (who, where from,
//! where to, phone, amount to collect) in a single SQLite file and lets an
//! operator manage it from an interactive terminal form.
//!
//! - `storage`: the record store, sole owner of the SQLite connection
//! - `form`: the form controller, translating operator actions into store calls
//! - `shell`: the terminal front end driving the controller
//! - `ui`: styled output and table rendering

pub mod record;
pub mod storage;
pub mod form;
pub mod shell;
pub mod ui;
pub mod config;

// Re-exports for convenient access
pub use record::{NewService, ServiceDraft, ServiceRecord};
pub use storage::RecordStore;
pub use form::{FormController, FormFields, Notice, NoticeLevel, Notifier};

/// Result type alias for Servicios operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Servicios operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Persistence(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

/// Local form errors, raised before any statement reaches the store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Por favor, complete todos los campos")]
    MissingFields,

    #[error("Por favor, ingrese un término de búsqueda")]
    EmptySearchTerm,

    #[error("El dinero a recaudar debe ser un número entero: {0:?}")]
    InvalidAmount(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_failure_converts() {
        let err: Error = dialoguer::Error::from(std::io::Error::other("stdin closed")).into();
        assert!(matches!(err, Error::Prompt(_)));
        assert!(err.to_string().contains("stdin closed"));
    }
}
