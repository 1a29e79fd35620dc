//! Error types for desk operations
//!
//! Every user action either completes or fails with a `DeskError` before
//! touching the store. The shell turns these into modal notices.

use thiserror::Error;

/// Coarse classification used to pick how an error is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or missing form input
    Validation,
    /// Update/delete attempted with no row selected
    NoSelection,
    /// The store rejected or failed a statement
    Store,
}

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("{field} must be a number, got '{input}'")]
    InvalidNumber { field: &'static str, input: String },

    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    #[error("select a row in the table first")]
    NoSelection,

    #[error("record {0} no longer exists")]
    NotFound(i64),

    #[error("ID {0} is already taken, clear the ID field to get a new one")]
    IdTaken(i64),

    #[error("database error: {0}")]
    Store(#[from] rusqlite::Error),
}

impl DeskError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeskError::MissingField { .. }
            | DeskError::InvalidNumber { .. }
            | DeskError::Negative { .. }
            | DeskError::IdTaken(_) => ErrorKind::Validation,
            DeskError::NoSelection => ErrorKind::NoSelection,
            DeskError::NotFound(_) | DeskError::Store(_) => ErrorKind::Store,
        }
    }
}

pub type DeskResult<T> = Result<T, DeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_are_distinct() {
        let missing = DeskError::MissingField { field: "Name" };
        let invalid = DeskError::InvalidNumber {
            field: "Price",
            input: "abc".to_string(),
        };
        assert_eq!(missing.kind(), ErrorKind::Validation);
        assert_eq!(invalid.kind(), ErrorKind::Validation);
        assert_eq!(DeskError::NoSelection.kind(), ErrorKind::NoSelection);
        assert_eq!(DeskError::NotFound(3).kind(), ErrorKind::Store);
        assert_eq!(DeskError::IdTaken(3).kind(), ErrorKind::Validation);
        assert!(!matches!(invalid, DeskError::MissingField { .. }));
    }

    #[test]
    fn test_messages_name_the_field() {
        let err = DeskError::InvalidNumber {
            field: "Quantity",
            input: "ten".to_string(),
        };
        assert_eq!(err.to_string(), "Quantity must be a number, got 'ten'");
        assert_eq!(
            DeskError::MissingField { field: "Name" }.to_string(),
            "Name is required"
        );
    }

    #[test]
    fn test_store_error_converts() {
        let err: DeskError = rusqlite::Error::InvalidQuery.into();
        assert_eq!(err.kind(), ErrorKind::Store);
    }
}
