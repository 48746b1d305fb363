//!
//! Dynamic Layout: the editing core of a tree / form / text editor for nested JSON-like data.
//!
//! ## Core Concepts
//!
//! * **Documents (`doc::Value`)**: a tree of ordered maps and sequences ending in primitives.
//!   Edits never change a document in place; they produce a new one that shares every
//!   untouched subtree with the old.
//! * **Paths (`doc::PathBuf`)**: addresses into a document, written `a.b[2].c`.
//! * **The store (`store::DocumentStore`)**: owns the live document, applies path-addressed
//!   writes and notifies subscribers.
//! * **Projections**: derived views a host renders and feeds edits back through:
//!     * **Tree (`tree`)**: the navigator tree and a flat outline.
//!     * **Form (`form`)**: a typed editor for one selected node.
//!     * **Text (`text`)**: the whole document as JSON, or YAML with the "yaml" feature.
//! * **Editor (`editor::Editor`)**: ties the store and projections together with selection,
//!   highlight, tabs and notices.
//! * **Layout (`layout`)**: size bookkeeping for measured containers.

pub mod config;
pub mod doc;
pub mod editor;
pub mod form;
pub mod layout;
pub mod store;
pub mod text;
pub mod tree;

/// Re-export the `Editor` struct for easier access.
pub use editor::Editor;

/// Result type used throughout the Dynamic Layout library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Dynamic Layout library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed path text
    #[error(transparent)]
    Path(doc::PathError),

    /// Structured addressing errors from document operations
    #[error(transparent)]
    Document(doc::DocumentError),

    /// Rejected user input
    #[error(transparent)]
    Validation(doc::ValidationError),

    /// Text parse and conversion errors
    #[error(transparent)]
    Text(text::TextError),

    /// Invalid editor configuration
    #[error(transparent)]
    Config(config::ConfigError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Path(_) => "path",
            Error::Document(_) => "doc",
            Error::Validation(_) => "validation",
            Error::Text(_) => "text",
            Error::Config(_) => "config",
        }
    }

    /// Check if this error indicates the addressed node was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Document(doc_err) => doc_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is a type mismatch while addressing a document.
    pub fn is_type_mismatch(&self) -> bool {
        match self {
            Error::Document(doc_err) => doc_err.is_type_mismatch(),
            _ => false,
        }
    }

    /// Check if this error is validation-related.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this error is a text parse failure.
    pub fn is_parse_error(&self) -> bool {
        match self {
            Error::Text(text_err) => text_err.is_parse_error(),
            _ => false,
        }
    }

    /// Check if this error is a malformed path.
    pub fn is_path_error(&self) -> bool {
        matches!(self, Error::Path(_))
    }
}
