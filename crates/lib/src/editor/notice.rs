//! User-facing notices.
//!
//! Every rejected edit and every applied text buffer leaves a [`Notice`] for
//! the host. Error notices get their title from the error kind and their
//! description from the error message.

use crate::{
    Error,
    doc::{DocumentError, ValidationError},
    text::{Format, TextError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient message for the host to show, e.g. as a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Shown after a text buffer is applied.
    pub fn text_applied(format: Format) -> Self {
        Self::success(
            format!("{} Updated", format.label()),
            "Configuration updated successfully.",
        )
    }

    /// Shown when the buffer cannot be converted to another format.
    pub fn conversion_failed() -> Self {
        Self::error(
            "Format conversion failed",
            "Please ensure the current format is valid.",
        )
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl From<&Error> for Notice {
    fn from(err: &Error) -> Self {
        let title = match err {
            Error::Validation(
                ValidationError::EmptyName | ValidationError::ReservedCharacter { .. },
            ) => "Invalid Name".to_string(),
            Error::Validation(ValidationError::DuplicateKey { .. }) => "Duplicate Key".to_string(),
            Error::Validation(ValidationError::NotANumber { .. }) => "Invalid Number".to_string(),
            Error::Document(DocumentError::TypeMismatch { .. }) => "Type Mismatch".to_string(),
            Error::Text(TextError::Parse { format, .. }) => format!("Invalid {}", format.label()),
            Error::Text(TextError::FormatUnavailable { format }) => {
                format!("{} library not available", format.label())
            }
            Error::Path(_) => "Invalid Path".to_string(),
            Error::Config(_) => "Invalid Configuration".to_string(),
            _ => "Edit Failed".to_string(),
        };
        let description = match err {
            Error::Text(text) => text.message(),
            other => other.to_string(),
        };
        Notice::error(title, description)
    }
}
