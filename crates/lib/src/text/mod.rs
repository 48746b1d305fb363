//! Text projection of the whole document.
//!
//! A [`TextProjection`] keeps an edit buffer holding the document in one text
//! [`Format`]. JSON is always available through [`JsonFormatter`]; other
//! formats are plugged in as [`Formatter`] implementations. With the `yaml`
//! feature enabled, [`YamlFormatter`] provides YAML.
//!
//! ```
//! use dynamic_layout::{store::DocumentStore, text::TextProjection};
//!
//! let mut store = DocumentStore::new(serde_json::from_str(r#"{"a":1}"#)?);
//! let mut text = TextProjection::default();
//! text.load(store.document())?;
//!
//! text.set_text(r#"{"a": 2}"#);
//! text.apply(&mut store)?;
//! assert_eq!(store.document().to_string(), r#"{"a":2}"#);
//! assert_eq!(text.text(), "{\n  \"a\": 2\n}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{info, trace};

use crate::{doc::Value, store::DocumentStore};

mod errors;
mod json;
#[cfg(feature = "yaml")]
mod yaml;

pub use errors::TextError;
pub use json::JsonFormatter;
#[cfg(feature = "yaml")]
pub use yaml::YamlFormatter;

/// Text formats a document can be edited in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Yaml,
}

impl Format {
    /// Upper-case name used in titles ("JSON", "YAML").
    pub fn label(self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Yaml => "YAML",
        }
    }

    /// True if this build can read and write the format without extra setup.
    pub fn is_builtin(self) -> bool {
        match self {
            Format::Json => true,
            Format::Yaml => cfg!(feature = "yaml"),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            other => Err(format!("unknown text format '{other}'")),
        }
    }
}

/// Converts whole documents to and from one text format.
pub trait Formatter {
    /// The format this formatter handles.
    fn format(&self) -> Format;

    /// Display name of the format.
    fn name(&self) -> &'static str {
        self.format().label()
    }

    fn serialize(&self, document: &Value) -> Result<String, TextError>;

    fn deserialize(&self, text: &str) -> Result<Value, TextError>;
}

/// Edit buffer for the textual view of a document.
pub struct TextProjection {
    buffer: String,
    format: Format,
    dirty: bool,
    formatters: Vec<Box<dyn Formatter>>,
}

impl fmt::Debug for TextProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextProjection")
            .field("format", &self.format)
            .field("dirty", &self.dirty)
            .field("formatters", &self.formats())
            .field("buffer", &self.buffer)
            .finish()
    }
}

impl Default for TextProjection {
    fn default() -> Self {
        Self::new(2)
    }
}

impl TextProjection {
    /// Creates a JSON projection with the given indent width.
    pub fn new(indent: usize) -> Self {
        Self {
            buffer: String::new(),
            format: Format::Json,
            dirty: false,
            formatters: vec![Box::new(JsonFormatter::new(indent))],
        }
    }

    /// Registers `formatter`, replacing any formatter for the same format.
    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.register(Box::new(formatter));
        self
    }

    /// Registers `formatter`, replacing any formatter for the same format.
    pub fn register(&mut self, formatter: Box<dyn Formatter>) {
        let format = formatter.format();
        self.formatters.retain(|existing| existing.format() != format);
        self.formatters.push(formatter);
    }

    /// Formats with a registered formatter.
    pub fn formats(&self) -> Vec<Format> {
        self.formatters.iter().map(|f| f.format()).collect()
    }

    fn formatter(&self, format: Format) -> Result<&dyn Formatter, TextError> {
        self.formatters
            .iter()
            .find(|f| f.format() == format)
            .map(|f| &**f)
            .ok_or(TextError::FormatUnavailable { format })
    }

    /// The current buffer.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// The format the buffer is written in.
    pub fn format(&self) -> Format {
        self.format
    }

    /// True if the buffer was edited since the last load.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Rewrites the buffer from `document` in the current format.
    pub fn load(&mut self, document: &Value) -> Result<(), TextError> {
        self.buffer = self.formatter(self.format)?.serialize(document)?;
        self.dirty = false;
        trace!(format = %self.format, bytes = self.buffer.len(), "loaded text projection");
        Ok(())
    }

    /// Replaces the buffer with user text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.dirty = true;
    }

    /// Parses the buffer with the current format.
    pub fn parse(&self) -> Result<Value, TextError> {
        self.formatter(self.format)?.deserialize(&self.buffer)
    }

    /// Parses the buffer and replaces the store's document with it.
    ///
    /// The parsed root must be a map or a sequence. On any failure the store
    /// is left as it was.
    pub fn apply(&mut self, store: &mut DocumentStore) -> Result<(), TextError> {
        let parsed = self.parse()?;
        if parsed.is_leaf() {
            return Err(TextError::Parse {
                format: self.format,
                message: "Invalid object format".to_string(),
            });
        }
        store.replace(parsed);
        self.load(store.document())?;
        info!(format = %self.format, version = store.version(), "applied text buffer");
        Ok(())
    }

    /// Re-writes the buffer in `format`.
    ///
    /// The buffer is parsed with the current format first; if that or the
    /// conversion fails, neither the buffer nor the format changes.
    pub fn switch_format(&mut self, format: Format) -> Result<(), TextError> {
        if format == self.format {
            return Ok(());
        }
        let target = self.formatter(format)?;
        let parsed = self.parse()?;
        let converted = target.serialize(&parsed)?;
        info!(from = %self.format, to = %format, "switched text format");
        self.buffer = converted;
        self.format = format;
        Ok(())
    }
}
