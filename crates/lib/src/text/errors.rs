//! Error types for the text projection.

use thiserror::Error;

use super::Format;

/// Errors raised while converting between text and documents.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextError {
    /// The buffer does not parse in its format, or parses to a primitive.
    #[error("Invalid {format}: {message}")]
    Parse { format: Format, message: String },

    /// The document could not be written out in the format.
    #[error("Failed to write {format}: {message}")]
    Serialize { format: Format, message: String },

    /// No formatter is registered for the format.
    #[error("{format} library not available")]
    FormatUnavailable { format: Format },
}

impl TextError {
    /// Check if this error is a parse failure
    pub fn is_parse_error(&self) -> bool {
        matches!(self, TextError::Parse { .. })
    }

    /// The format involved in the failure
    pub fn format(&self) -> Format {
        match self {
            TextError::Parse { format, .. }
            | TextError::Serialize { format, .. }
            | TextError::FormatUnavailable { format } => *format,
        }
    }

    /// The parser or serializer message, without the format prefix.
    pub fn message(&self) -> String {
        match self {
            TextError::Parse { message, .. } | TextError::Serialize { message, .. } => {
                message.clone()
            }
            TextError::FormatUnavailable { .. } => self.to_string(),
        }
    }
}

impl From<TextError> for crate::Error {
    fn from(err: TextError) -> Self {
        crate::Error::Text(err)
    }
}
