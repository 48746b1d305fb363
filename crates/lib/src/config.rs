//! Editor configuration.
//!
//! [`EditorConfig`] is plain serde data. Every field has a default, so a host
//! only needs to spell out what it changes:
//!
//! ```
//! use dynamic_layout::config::{EditorConfig, Tab};
//!
//! let config = EditorConfig::from_json(r#"{"default_tab": "json", "left_panel_width": 30}"#)?;
//! assert_eq!(config.default_tab, Tab::Json);
//! assert_eq!(config.right_panel_width, 80);
//! # Ok::<(), dynamic_layout::Error>(())
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::text::Format;

/// Number of columns in the host's layout grid.
pub const GRID_COLUMNS: u32 = 24;

/// Right-hand tabs of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// The property form for the selected node.
    #[default]
    Tree,
    /// The raw text editor.
    Json,
}

/// Errors for invalid configuration.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for this struct.
    #[error("Invalid editor configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value outside its range.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl From<ConfigError> for crate::Error {
    fn from(err: ConfigError) -> Self {
        crate::Error::Config(err)
    }
}

/// Grid spans for one panel: full width on small screens, `md` from medium up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpans {
    pub xs: u32,
    pub sm: u32,
    pub md: u32,
}

impl ColumnSpans {
    /// Converts a percentage width into grid spans.
    pub fn from_width(width: u32) -> Self {
        let md = (f64::from(width) / 100.0 * f64::from(GRID_COLUMNS)).round() as u32;
        Self {
            xs: GRID_COLUMNS,
            sm: GRID_COLUMNS,
            md,
        }
    }
}

/// Settings for an [`Editor`](crate::editor::Editor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Tab shown first.
    pub default_tab: Tab,
    /// Format the text buffer starts in.
    pub default_format: Format,
    /// Indent width for pretty JSON.
    pub indent: usize,
    /// Navigator width, in percent.
    pub left_panel_width: u32,
    /// Editor width, in percent.
    pub right_panel_width: u32,
    /// How long a selected row stays highlighted.
    pub highlight_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_tab: Tab::Tree,
            default_format: Format::Json,
            indent: 2,
            left_panel_width: 20,
            right_panel_width: 80,
            highlight_ms: 1500,
        }
    }
}

impl EditorConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(text: &str) -> crate::Result<Self> {
        let config: EditorConfig = serde_json::from_str(text).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks ranges and that the default format is compiled in.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent == 0 {
            return Err(ConfigError::InvalidValue {
                field: "indent",
                reason: "must be at least 1".to_string(),
            });
        }
        for (field, width) in [
            ("left_panel_width", self.left_panel_width),
            ("right_panel_width", self.right_panel_width),
        ] {
            if width > 100 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("{width} is more than 100 percent"),
                });
            }
        }
        if !self.default_format.is_builtin() {
            return Err(ConfigError::InvalidValue {
                field: "default_format",
                reason: format!("{} support is not compiled in", self.default_format),
            });
        }
        Ok(())
    }

    /// Grid spans for the left and right panels.
    pub fn column_spans(&self) -> (ColumnSpans, ColumnSpans) {
        (
            ColumnSpans::from_width(self.left_panel_width),
            ColumnSpans::from_width(self.right_panel_width),
        )
    }

    pub fn highlight_duration(&self) -> Duration {
        Duration::from_millis(self.highlight_ms)
    }
}
