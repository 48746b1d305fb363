//! Path-addressed document model.
//!
//! A document is a [`Value`] tree. The free functions in this module read and
//! rewrite it by [`Path`]:
//!
//! - [`get`] resolves a path to a value, or to "absent"
//! - [`set`], [`remove`], [`append`], [`rename`] and [`add_property`] return a
//!   new document and leave the input untouched
//!
//! Rewrites are copy-on-write. Only the maps and lists on the way from the
//! root to the edited node are copied; every other subtree is shared between
//! the old and the new document.
//!
//! # Usage
//!
//! ```
//! use dynamic_layout::doc::{self, PathBuf, Value};
//! use std::str::FromStr;
//!
//! let before: Value = serde_json::from_str(r#"{"user":{"name":"Jane"},"tags":["x","y"]}"#)?;
//! let path = PathBuf::from_str("user.name")?;
//!
//! let after = doc::set(&before, &path, Value::from("Ada"))?;
//! assert_eq!(doc::get(&after, &path)?, Some(&Value::from("Ada")));
//! assert_eq!(doc::get(&before, &path)?, Some(&Value::from("Jane")));
//!
//! let after = doc::remove(&after, &PathBuf::from_str("tags[0]")?)?;
//! assert_eq!(after.to_string(), r#"{"user":{"name":"Ada"},"tags":["y"]}"#);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use tracing::trace;

use crate::Result;

// Submodules
pub mod errors;
pub mod list;
pub mod map;
pub mod path;
pub mod value;

pub use errors::{DocumentError, ValidationError};
pub use list::List;
pub use map::Map;
pub use path::{Path, PathBuf, PathError, Segment, generate_key_path, parse_path};
pub use value::{Number, Value, ValueKind};

fn mismatch(at: &Path, expected: ValueKind, found: &Value) -> DocumentError {
    DocumentError::TypeMismatch {
        path: at.to_string(),
        expected: expected.name(),
        actual: found.type_name(),
    }
}

fn not_found(at: &Path) -> DocumentError {
    DocumentError::NotFound {
        path: at.to_string(),
    }
}

/// Looks up one segment inside `container`, which sits at `at`.
fn child<'a>(container: &'a Value, segment: &Segment, at: &Path) -> Result<Option<&'a Value>> {
    match container {
        Value::Map(map) => match segment {
            Segment::Key(key) => Ok(map.get(key)),
            Segment::Index(_) => Err(mismatch(at, ValueKind::Array, container).into()),
        },
        Value::List(list) => match segment.as_index() {
            Some(index) => Ok(list.get(index)),
            None => Err(mismatch(at, ValueKind::Object, container).into()),
        },
        leaf => {
            let expected = match segment {
                Segment::Key(_) => ValueKind::Object,
                Segment::Index(_) => ValueKind::Array,
            };
            Err(mismatch(at, expected, leaf).into())
        }
    }
}

/// Resolves `path` against `document`.
///
/// Returns `Ok(None)` when a map key is missing or an index is out of range.
/// Fails with [`DocumentError::TypeMismatch`] when the path descends into a
/// primitive or indexes a map by position.
pub fn get<'a>(document: &'a Value, path: impl AsRef<Path>) -> Result<Option<&'a Value>> {
    let path = path.as_ref();
    let mut current = document;
    for (depth, segment) in path.iter().enumerate() {
        match child(current, segment, path.prefix(depth))? {
            Some(next) => current = next,
            None => return Ok(None),
        }
    }
    Ok(Some(current))
}

/// Walks to the node at `path`, unsharing every level on the way.
fn resolve_mut<'a>(root: &'a mut Value, path: &Path) -> Result<&'a mut Value> {
    let mut current = root;
    for (depth, segment) in path.iter().enumerate() {
        let at = path.prefix(depth);
        current = match current {
            Value::Map(map) => match segment {
                Segment::Key(key) => map
                    .get_mut(key)
                    .ok_or_else(|| not_found(path.prefix(depth + 1)))?,
                Segment::Index(_) => {
                    return Err(DocumentError::TypeMismatch {
                        path: at.to_string(),
                        expected: ValueKind::Array.name(),
                        actual: ValueKind::Object.name(),
                    }
                    .into());
                }
            },
            Value::List(list) => {
                let len = list.len();
                let index = segment.as_index().ok_or_else(|| DocumentError::TypeMismatch {
                    path: at.to_string(),
                    expected: ValueKind::Object.name(),
                    actual: ValueKind::Array.name(),
                })?;
                list.get_mut(index)
                    .ok_or_else(|| DocumentError::IndexOutOfBounds {
                        path: at.to_string(),
                        index,
                        len,
                    })?
            }
            leaf => {
                let expected = match segment {
                    Segment::Key(_) => ValueKind::Object,
                    Segment::Index(_) => ValueKind::Array,
                };
                return Err(mismatch(at, expected, leaf).into());
            }
        };
    }
    Ok(current)
}

fn set_in(target: &mut Value, path: &Path, depth: usize, value: Value) -> Result<()> {
    let Some(segment) = path.get(depth) else {
        *target = value;
        return Ok(());
    };
    let at = path.prefix(depth);
    let is_last = depth + 1 == path.len();

    match target {
        Value::Map(map) => {
            let Segment::Key(key) = segment else {
                return Err(DocumentError::TypeMismatch {
                    path: at.to_string(),
                    expected: ValueKind::Array.name(),
                    actual: ValueKind::Object.name(),
                }
                .into());
            };
            if is_last {
                map.insert(key.as_str(), value);
                return Ok(());
            }
            match map.get_mut(key) {
                Some(next) => set_in(next, path, depth + 1, value),
                None => {
                    // Missing intermediates become maps; sequences are never invented.
                    if let Some(Segment::Index(_)) = path.get(depth + 1) {
                        return Err(not_found(path.prefix(depth + 1)).into());
                    }
                    let mut created = Value::Map(Map::new());
                    set_in(&mut created, path, depth + 1, value)?;
                    map.insert(key.as_str(), created);
                    Ok(())
                }
            }
        }
        Value::List(list) => {
            let len = list.len();
            let index = segment.as_index().ok_or_else(|| DocumentError::TypeMismatch {
                path: at.to_string(),
                expected: ValueKind::Object.name(),
                actual: ValueKind::Array.name(),
            })?;
            let out_of_bounds = || DocumentError::IndexOutOfBounds {
                path: at.to_string(),
                index,
                len,
            };
            if is_last {
                if index < len {
                    list.set(index, value);
                } else if index == len {
                    list.push(value);
                } else {
                    return Err(out_of_bounds().into());
                }
                return Ok(());
            }
            match list.get_mut(index) {
                Some(next) => set_in(next, path, depth + 1, value),
                None => Err(out_of_bounds().into()),
            }
        }
        leaf => {
            let expected = match segment {
                Segment::Key(_) => ValueKind::Object,
                Segment::Index(_) => ValueKind::Array,
            };
            Err(mismatch(at, expected, leaf).into())
        }
    }
}

/// Returns a new document with the value at `path` replaced by `value`.
///
/// Missing intermediate map keys are created as empty maps. Missing
/// sequences are never created. An index equal to the sequence length
/// appends; anything past it fails. Setting the root replaces the document.
pub fn set(document: &Value, path: impl AsRef<Path>, value: Value) -> Result<Value> {
    let path = path.as_ref();
    let mut next = document.clone();
    set_in(&mut next, path, 0, value)?;
    trace!(path = %path, "set value");
    Ok(next)
}

/// Returns a new document without the node at `path`.
///
/// Map keys are deleted; sequence elements are spliced out and later
/// elements shift down.
pub fn remove(document: &Value, path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let Some((parent_path, last)) = path.split_last() else {
        return Err(DocumentError::RootRemoval.into());
    };

    let mut next = document.clone();
    let parent = resolve_mut(&mut next, parent_path)?;
    let removed = match parent {
        Value::Map(map) => match last {
            Segment::Key(key) => map.remove(key),
            Segment::Index(_) => {
                return Err(DocumentError::TypeMismatch {
                    path: parent_path.to_string(),
                    expected: ValueKind::Array.name(),
                    actual: ValueKind::Object.name(),
                }
                .into());
            }
        },
        Value::List(list) => match last.as_index() {
            Some(index) => list.remove(index),
            None => {
                return Err(DocumentError::TypeMismatch {
                    path: parent_path.to_string(),
                    expected: ValueKind::Object.name(),
                    actual: ValueKind::Array.name(),
                }
                .into());
            }
        },
        leaf => {
            let expected = match last {
                Segment::Key(_) => ValueKind::Object,
                Segment::Index(_) => ValueKind::Array,
            };
            return Err(mismatch(parent_path, expected, leaf).into());
        }
    };

    if removed.is_none() {
        return Err(not_found(path).into());
    }
    trace!(path = %path, "removed value");
    Ok(next)
}

/// Returns a new document with `value` pushed onto the sequence at `path`.
pub fn append(document: &Value, path: impl AsRef<Path>, value: Value) -> Result<Value> {
    let path = path.as_ref();
    let mut next = document.clone();
    match resolve_mut(&mut next, path)? {
        Value::List(list) => list.push(value),
        other => return Err(mismatch(path, ValueKind::Array, other).into()),
    }
    trace!(path = %path, "appended value");
    Ok(next)
}

/// Checks a new property name against its would-be siblings.
///
/// Names are trimmed before the emptiness check; the duplicate check uses the
/// name as given. Names may not contain the path separators `.`, `[` or `]`.
pub fn validate_property_name(name: &str, siblings: &Map) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName.into());
    }
    if name.contains(['.', '[', ']']) {
        return Err(ValidationError::ReservedCharacter {
            name: name.to_string(),
        }
        .into());
    }
    if siblings.contains_key(name) {
        return Err(ValidationError::DuplicateKey {
            name: name.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Returns a new document with `name` added to the map at `path`.
///
/// Fails with [`ValidationError`] for an empty or duplicate name, and with a
/// type mismatch if `path` is not a map.
pub fn add_property(
    document: &Value,
    path: impl AsRef<Path>,
    name: &str,
    value: Value,
) -> Result<Value> {
    let path = path.as_ref();
    let mut next = document.clone();
    match resolve_mut(&mut next, path)? {
        Value::Map(map) => {
            validate_property_name(name, map)?;
            map.insert(name, value);
        }
        other => return Err(mismatch(path, ValueKind::Object, other).into()),
    }
    trace!(path = %path, name, "added property");
    Ok(next)
}

/// Returns a new document with the map key at `path` renamed to `new_key`.
///
/// The key keeps its position among its siblings. Renaming to the same name
/// is a no-op.
pub fn rename(document: &Value, path: impl AsRef<Path>, new_key: &str) -> Result<Value> {
    let path = path.as_ref();
    let Some((parent_path, last)) = path.split_last() else {
        return Err(DocumentError::RootRemoval.into());
    };
    let Segment::Key(old_key) = last else {
        return Err(DocumentError::TypeMismatch {
            path: path.to_string(),
            expected: ValueKind::Object.name(),
            actual: ValueKind::Array.name(),
        }
        .into());
    };
    if old_key == new_key {
        return Ok(document.clone());
    }

    let mut next = document.clone();
    match resolve_mut(&mut next, parent_path)? {
        Value::Map(map) => {
            if !map.contains_key(old_key) {
                return Err(not_found(path).into());
            }
            validate_property_name(new_key, map)?;
            map.rename(old_key, new_key);
        }
        other => return Err(mismatch(parent_path, ValueKind::Object, other).into()),
    }
    trace!(path = %path, new_key, "renamed property");
    Ok(next)
}
