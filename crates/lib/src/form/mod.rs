//! Form projection of a single selected node.
//!
//! [`build_form`] turns a value into a [`FormNode`] whose [`FormField`] is
//! picked from the value's runtime kind. User input comes back as a
//! [`FormEdit`] and is applied with [`apply_edit`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    Result,
    doc::{List, Map, Number, PathBuf, ValidationError, Value},
};

mod edit;
pub use edit::{FormEdit, apply_edit};

/// Kinds offered when adding a property to a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    #[default]
    String,
    Number,
    Boolean,
    Object,
    Array,
    Null,
}

impl PropertyKind {
    /// Every kind, in the order a picker lists them.
    pub const ALL: [PropertyKind; 6] = [
        PropertyKind::String,
        PropertyKind::Number,
        PropertyKind::Boolean,
        PropertyKind::Object,
        PropertyKind::Array,
        PropertyKind::Null,
    ];

    /// The value a new property of this kind starts with.
    pub fn default_value(self) -> Value {
        match self {
            PropertyKind::String => Value::from(""),
            PropertyKind::Number => Value::from(0),
            PropertyKind::Boolean => Value::from(false),
            PropertyKind::Object => Value::Map(Map::new()),
            PropertyKind::Array => Value::List(List::new()),
            PropertyKind::Null => Value::Null,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PropertyKind::String => "string",
            PropertyKind::Number => "number",
            PropertyKind::Boolean => "boolean",
            PropertyKind::Object => "object",
            PropertyKind::Array => "array",
            PropertyKind::Null => "null",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PropertyKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        PropertyKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown property kind '{s}'"))
    }
}

/// One rendered node of the property form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormNode {
    /// Label shown next to the field.
    pub key: String,
    pub path: PathBuf,
    /// The edit that deletes this row from its parent, if it has one.
    pub removal: Option<FormEdit>,
    pub field: FormField,
}

/// The editor widget for a node, chosen by value kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    /// A sequence of primitives, edited as tags.
    Tags { items: Vec<Value> },
    /// A sequence with at least one map or sequence element.
    Items { items: Vec<FormNode> },
    /// A map, one row per key.
    Object {
        fields: Vec<FormNode>,
        /// Keys a new property must not collide with.
        existing_keys: Vec<String>,
    },
    Toggle { checked: bool },
    Number { value: Number },
    Text { value: String },
    Null,
}

/// True if every element is a primitive or null. An empty list qualifies.
pub fn is_primitive_array(list: &List) -> bool {
    list.iter().all(Value::is_leaf)
}

/// Text shown on a tag chip: strings bare, everything else as JSON.
pub fn tag_label(value: &Value) -> String {
    match value {
        Value::Text(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Parses user input for a number field.
///
/// Integers are tried first, then finite floats. Surrounding whitespace is
/// ignored.
pub fn coerce_number(input: &str) -> Result<Number> {
    let trimmed = input.trim();
    let not_a_number = || ValidationError::NotANumber {
        input: input.to_string(),
    };
    if let Ok(int) = trimmed.parse::<i64>() {
        return Ok(int.into());
    }
    if let Ok(uint) = trimmed.parse::<u64>() {
        return Ok(uint.into());
    }
    let float: f64 = trimmed.parse().map_err(|_| not_a_number())?;
    Ok(Number::from_f64(float).ok_or_else(not_a_number)?)
}

fn build_node(key: String, path: PathBuf, value: &Value, removal: Option<FormEdit>) -> FormNode {
    let field = match value {
        Value::List(list) if is_primitive_array(list) => FormField::Tags {
            items: list.iter().cloned().collect(),
        },
        Value::List(list) => FormField::Items {
            items: list
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    let removal = FormEdit::RemoveItem {
                        path: path.clone(),
                        index,
                    };
                    build_node(
                        format!("Item {}", index + 1),
                        path.child(index),
                        item,
                        Some(removal),
                    )
                })
                .collect(),
        },
        Value::Map(map) => FormField::Object {
            fields: map
                .iter()
                .map(|(child_key, child)| {
                    let removal = FormEdit::DeleteProperty {
                        path: path.clone(),
                        key: child_key.to_string(),
                    };
                    build_node(
                        child_key.to_string(),
                        path.child(child_key),
                        child,
                        Some(removal),
                    )
                })
                .collect(),
            existing_keys: map.keys().map(str::to_string).collect(),
        },
        Value::Bool(checked) => FormField::Toggle { checked: *checked },
        Value::Number(value) => FormField::Number {
            value: value.clone(),
        },
        Value::Text(value) => FormField::Text {
            value: value.clone(),
        },
        Value::Null => FormField::Null,
    };
    FormNode {
        key,
        path,
        removal,
        field,
    }
}

/// Builds the form for the node `value` found at `path`.
pub fn build_form(key: impl Into<String>, path: impl Into<PathBuf>, value: &Value) -> FormNode {
    let path = path.into();
    trace!(path = %path, kind = value.type_name(), "built form projection");
    build_node(key.into(), path, value, None)
}
