//! Edits produced by the form and how they reach the store.

use tracing::debug;

use super::{PropertyKind, coerce_number};
use crate::{
    Result,
    doc::{DocumentError, Path, PathBuf, Segment, Value, ValueKind},
    store::DocumentStore,
};

/// A user action on the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEdit {
    /// Replace a text field. The string is stored as typed.
    SetText { path: PathBuf, value: String },
    /// Replace a number field from raw input.
    SetNumber { path: PathBuf, input: String },
    SetBool { path: PathBuf, value: bool },
    /// Flip a boolean field.
    Toggle { path: PathBuf },
    /// Append a string tag to a primitive array.
    AddTag { path: PathBuf, tag: String },
    /// Remove the element at `index` of the sequence at `path`.
    RemoveItem { path: PathBuf, index: usize },
    /// Add a property of `kind` to the map at `path`.
    AddProperty {
        path: PathBuf,
        name: String,
        kind: PropertyKind,
    },
    /// Delete `key` from the map at `path`.
    DeleteProperty { path: PathBuf, key: String },
    /// Rename `key` of the map at `path`.
    RenameProperty {
        path: PathBuf,
        key: String,
        new_key: String,
    },
}

impl FormEdit {
    /// The field or container the edit acts on.
    pub fn target(&self) -> &Path {
        match self {
            FormEdit::SetText { path, .. }
            | FormEdit::SetNumber { path, .. }
            | FormEdit::SetBool { path, .. }
            | FormEdit::Toggle { path }
            | FormEdit::AddTag { path, .. }
            | FormEdit::RemoveItem { path, .. }
            | FormEdit::AddProperty { path, .. }
            | FormEdit::DeleteProperty { path, .. }
            | FormEdit::RenameProperty { path, .. } => path,
        }
    }

    /// The edit that deletes the node at `path` from its parent.
    ///
    /// The root has no parent and yields `None`.
    pub fn removal_of(path: &Path) -> Option<FormEdit> {
        let (parent, last) = path.split_last()?;
        Some(match last {
            Segment::Index(index) => FormEdit::RemoveItem {
                path: parent.to_path_buf(),
                index: *index,
            },
            Segment::Key(key) => FormEdit::DeleteProperty {
                path: parent.to_path_buf(),
                key: key.clone(),
            },
        })
    }

    /// The path of the node this edit deletes, if it deletes one.
    pub fn removed_path(&self) -> Option<PathBuf> {
        match self {
            FormEdit::RemoveItem { path, index } => Some(path.child(*index)),
            FormEdit::DeleteProperty { path, key } => Some(path.child(key.as_str())),
            _ => None,
        }
    }
}

/// Applies `edit` to the store.
///
/// Input is validated before the store is touched, so a rejected edit leaves
/// the document unchanged.
pub fn apply_edit(store: &mut DocumentStore, edit: FormEdit) -> Result<()> {
    debug!(target_path = %edit.target(), "applying form edit");
    match edit {
        FormEdit::SetText { path, value } => store.mutate(&path, Value::Text(value)),
        FormEdit::SetNumber { path, input } => {
            let number = coerce_number(&input)?;
            store.mutate(&path, Value::Number(number))
        }
        FormEdit::SetBool { path, value } => store.mutate(&path, Value::Bool(value)),
        FormEdit::Toggle { path } => {
            let current = match store.get(&path)? {
                Some(Value::Bool(b)) => *b,
                Some(other) => {
                    return Err(DocumentError::TypeMismatch {
                        path: path.to_string(),
                        expected: ValueKind::Boolean.name(),
                        actual: other.type_name(),
                    }
                    .into());
                }
                None => {
                    return Err(DocumentError::NotFound {
                        path: path.to_string(),
                    }
                    .into());
                }
            };
            store.mutate(&path, Value::Bool(!current))
        }
        FormEdit::AddTag { path, tag } => store.append(&path, Value::Text(tag)),
        FormEdit::RemoveItem { path, index } => store.delete_at(path.child(index)),
        FormEdit::AddProperty { path, name, kind } => {
            store.add_property(&path, &name, kind.default_value())
        }
        FormEdit::DeleteProperty { path, key } => store.delete_at(path.child(key)),
        FormEdit::RenameProperty { path, key, new_key } => {
            store.rename(path.child(key), &new_key)
        }
    }
}
