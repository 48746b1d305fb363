//! Error types for document operations.
//!
//! [`DocumentError`] covers addressing failures (descending through a
//! primitive, missing targets, out-of-range indices). [`ValidationError`]
//! covers property names rejected before any mutation happens.

use thiserror::Error;

/// Structured errors for path-addressed document operations.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// A segment addressed into a value of the wrong kind.
    #[error("Type mismatch at '{path}': expected {expected}, found {actual}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// The addressed node does not exist.
    #[error("Nothing at '{path}'")]
    NotFound { path: String },

    /// A sequence index past the end (sequences never have holes).
    #[error("Index {index} out of bounds at '{path}' (length {len})")]
    IndexOutOfBounds {
        path: String,
        index: usize,
        len: usize,
    },

    /// The root has no parent to be removed from.
    #[error("The document root cannot be removed")]
    RootRemoval,
}

impl DocumentError {
    /// Check if this error is a type mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, DocumentError::TypeMismatch { .. })
    }

    /// Check if this error means the target does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DocumentError::NotFound { .. } | DocumentError::IndexOutOfBounds { .. }
        )
    }

    /// Get the path the error refers to, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            DocumentError::TypeMismatch { path, .. }
            | DocumentError::NotFound { path }
            | DocumentError::IndexOutOfBounds { path, .. } => Some(path),
            DocumentError::RootRemoval => None,
        }
    }
}

/// A property name rejected by add/rename.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Blank or whitespace-only name.
    #[error("Property name cannot be empty.")]
    EmptyName,

    /// The name is already used by a sibling.
    #[error("Property name '{name}' already exists.")]
    DuplicateKey { name: String },

    /// The name contains a character that path text uses as a separator.
    #[error("Property name '{name}' cannot contain '.', '[' or ']'.")]
    ReservedCharacter { name: String },

    /// Text typed into a number field that does not parse as a number.
    #[error("'{input}' is not a number.")]
    NotANumber { input: String },
}

impl ValidationError {
    /// Check if this error is a duplicate sibling name
    pub fn is_duplicate(&self) -> bool {
        matches!(self, ValidationError::DuplicateKey { .. })
    }
}

impl From<DocumentError> for crate::Error {
    fn from(err: DocumentError) -> Self {
        crate::Error::Document(err)
    }
}

impl From<ValidationError> for crate::Error {
    fn from(err: ValidationError) -> Self {
        crate::Error::Validation(err)
    }
}
