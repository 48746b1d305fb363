//! JSON text through `serde_json`, always available.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::{Format, Formatter, TextError};
use crate::doc::Value;

/// Pretty JSON with a configurable indent. Keys come out in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFormatter {
    indent: String,
}

impl JsonFormatter {
    pub fn new(indent: usize) -> Self {
        Self {
            indent: " ".repeat(indent),
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Formatter for JsonFormatter {
    fn format(&self) -> Format {
        Format::Json
    }

    fn serialize(&self, document: &Value) -> Result<String, TextError> {
        let mut out = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut out,
            PrettyFormatter::with_indent(self.indent.as_bytes()),
        );
        document
            .serialize(&mut serializer)
            .map_err(|err| TextError::Serialize {
                format: Format::Json,
                message: err.to_string(),
            })?;
        String::from_utf8(out).map_err(|err| TextError::Serialize {
            format: Format::Json,
            message: err.to_string(),
        })
    }

    fn deserialize(&self, text: &str) -> Result<Value, TextError> {
        serde_json::from_str(text).map_err(|err| TextError::Parse {
            format: Format::Json,
            message: err.to_string(),
        })
    }
}
