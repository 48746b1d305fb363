//! YAML text, compiled in with the `yaml` feature.

use super::{Format, Formatter, TextError};
use crate::doc::Value;

/// YAML through `serde_yaml`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format(&self) -> Format {
        Format::Yaml
    }

    fn serialize(&self, document: &Value) -> Result<String, TextError> {
        serde_yaml::to_string(document).map_err(|err| TextError::Serialize {
            format: Format::Yaml,
            message: err.to_string(),
        })
    }

    fn deserialize(&self, text: &str) -> Result<Value, TextError> {
        serde_yaml::from_str(text).map_err(|err| TextError::Parse {
            format: Format::Yaml,
            message: err.to_string(),
        })
    }
}
