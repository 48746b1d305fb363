//! Path types for addressing nodes inside a document.
//!
//! A path is an ordered list of [`Segment`]s. Each segment is either a map
//! key or a sequence index. The [`Path`]/[`PathBuf`] types follow the same
//! borrowed/owned pattern as `std::path::Path`/`PathBuf`.
//!
//! # Text form
//!
//! Keys are joined with `.` and indices are written as `[n]` after the
//! segment they index into:
//!
//! ```rust
//! use dynamic_layout::doc::{PathBuf, Segment};
//! use std::str::FromStr;
//!
//! let path = PathBuf::from_str("permissions[0].scopes[1]")?;
//! assert_eq!(
//!     path.segments(),
//!     &[
//!         Segment::from("permissions"),
//!         Segment::Index(0),
//!         Segment::from("scopes"),
//!         Segment::Index(1),
//!     ]
//! );
//!
//! // Build incrementally
//! let built = PathBuf::root().key("permissions").index(0).key("scopes").index(1);
//! assert_eq!(built, path);
//! assert_eq!(built.to_string(), "permissions[0].scopes[1]");
//! # Ok::<(), dynamic_layout::doc::PathError>(())
//! ```
//!
//! The empty string is the root path. Keys containing `.`, `[` or `]` can be
//! addressed structurally but have no faithful text form.

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

use thiserror::Error;

/// Error type for path parsing failures.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// The text is not a canonical path.
    #[error("Invalid path '{path}': {reason}")]
    Malformed { path: String, reason: String },
}

impl PathError {
    fn malformed(path: &str, reason: impl Into<String>) -> Self {
        PathError::Malformed {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    /// The offending path text.
    pub fn path(&self) -> &str {
        match self {
            PathError::Malformed { path, .. } => path,
        }
    }
}

impl From<PathError> for crate::Error {
    fn from(err: PathError) -> Self {
        crate::Error::Path(err)
    }
}

/// One step of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Segment {
    /// Map access by key
    Key(String),
    /// Sequence access by index
    Index(usize),
}

impl Segment {
    /// Returns the key, if this is a key segment.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Segment::Key(key) => Some(key),
            Segment::Index(_) => None,
        }
    }

    /// Returns the index this segment selects in a sequence.
    ///
    /// Key segments made only of digits also count, so the dotted form
    /// `tags.0` addresses the same element as `tags[0]`.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Segment::Index(index) => Some(*index),
            Segment::Key(key) if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) => {
                key.parse().ok()
            }
            Segment::Key(_) => None,
        }
    }

    /// The label shown for this segment in a tree view.
    pub fn label(&self) -> String {
        match self {
            Segment::Key(key) => key.clone(),
            Segment::Index(index) => index.to_string(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

/// Joins a base path string and one segment into a canonical path string.
///
/// An empty base yields the bare segment.
///
/// ```rust
/// # use dynamic_layout::doc::path::generate_key_path;
/// assert_eq!(generate_key_path("", "user"), "user");
/// assert_eq!(generate_key_path("user", "name"), "user.name");
/// assert_eq!(generate_key_path("tags", 2), "tags[2]");
/// assert_eq!(generate_key_path("", 0), "[0]");
/// ```
pub fn generate_key_path(base: &str, segment: impl Into<Segment>) -> String {
    match segment.into() {
        Segment::Key(key) if base.is_empty() => key,
        Segment::Key(key) => format!("{base}.{key}"),
        Segment::Index(index) => format!("{base}[{index}]"),
    }
}

/// Parses a canonical path string into its segments.
pub fn parse_path(input: &str) -> Result<PathBuf, PathError> {
    let bytes = input.as_bytes();
    let mut segments = Vec::new();
    let mut start = 0;
    let mut i = 0;
    // Set after a '.', where the next component must be a non-empty key.
    let mut need_key = false;

    while i < bytes.len() {
        match bytes[i] {
            b'.' => {
                let key = &input[start..i];
                if !key.is_empty() {
                    segments.push(Segment::Key(key.to_string()));
                } else if need_key || segments.is_empty() {
                    return Err(PathError::malformed(input, "empty key component"));
                }
                need_key = true;
                start = i + 1;
            }
            b'[' => {
                let key = &input[start..i];
                if !key.is_empty() {
                    segments.push(Segment::Key(key.to_string()));
                } else if need_key {
                    return Err(PathError::malformed(input, "empty key component"));
                }
                let close = input[i + 1..]
                    .find(']')
                    .map(|offset| i + 1 + offset)
                    .ok_or_else(|| PathError::malformed(input, "unterminated '['"))?;
                let digits = &input[i + 1..close];
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(PathError::malformed(
                        input,
                        format!("'{digits}' is not a sequence index"),
                    ));
                }
                let index = digits
                    .parse()
                    .map_err(|_| PathError::malformed(input, "sequence index too large"))?;
                segments.push(Segment::Index(index));

                i = close + 1;
                if i < bytes.len() && bytes[i] != b'.' && bytes[i] != b'[' {
                    return Err(PathError::malformed(input, "expected '.' or '[' after ']'"));
                }
                need_key = false;
                start = i;
                continue;
            }
            b']' => return Err(PathError::malformed(input, "unexpected ']'")),
            _ => {}
        }
        i += 1;
    }

    let key = &input[start..];
    if !key.is_empty() {
        segments.push(Segment::Key(key.to_string()));
    } else if need_key {
        return Err(PathError::malformed(input, "trailing '.'"));
    }

    Ok(PathBuf { segments })
}

/// A borrowed path, the unsized counterpart of [`PathBuf`].
///
/// This type is unsized and must always be used behind a reference.
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Path {
    segments: [Segment],
}

/// An owned path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct PathBuf {
    segments: Vec<Segment>,
}

impl Path {
    /// Wraps a segment slice as a path.
    pub fn new(segments: &[Segment]) -> &Path {
        // SAFETY: Path is repr(transparent) over [Segment]
        unsafe { &*(segments as *const [Segment] as *const Path) }
    }

    /// The root path (no segments).
    pub fn root() -> &'static Path {
        const ROOT: &[Segment] = &[];
        Path::new(ROOT)
    }

    /// Returns the segments as a slice.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterates over the segments.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Returns the segment at `depth`.
    pub fn get(&self, depth: usize) -> Option<&Segment> {
        self.segments.get(depth)
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns `true` if this is the root path.
    pub fn is_root(&self) -> bool {
        self.is_empty()
    }

    /// The first `depth` segments of this path.
    pub fn prefix(&self, depth: usize) -> &Path {
        Path::new(&self.segments[..depth.min(self.segments.len())])
    }

    /// Returns the parent path, or `None` for the root.
    pub fn parent(&self) -> Option<&Path> {
        self.split_last().map(|(parent, _)| parent)
    }

    /// Returns the last segment, or `None` for the root.
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Splits into the parent path and the last segment.
    pub fn split_last(&self) -> Option<(&Path, &Segment)> {
        self.segments
            .split_last()
            .map(|(last, parent)| (Path::new(parent), last))
    }

    /// Returns true if `base` is a prefix of this path (every path starts with the root).
    pub fn starts_with(&self, base: impl AsRef<Path>) -> bool {
        self.segments.starts_with(&base.as_ref().segments)
    }

    /// Converts this `Path` to an owned `PathBuf`.
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf {
            segments: self.segments.to_vec(),
        }
    }
}

impl PathBuf {
    /// Creates a new empty (root) path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alias for [`PathBuf::new`] that reads better at call sites.
    pub fn root() -> Self {
        Self::default()
    }

    /// Appends a key segment.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.segments.push(Segment::Key(key.into()));
        self
    }

    /// Appends an index segment.
    pub fn index(mut self, index: usize) -> Self {
        self.segments.push(Segment::Index(index));
        self
    }

    /// Appends a segment in place.
    pub fn push(&mut self, segment: impl Into<Segment>) {
        self.segments.push(segment.into());
    }

    /// Removes and returns the last segment.
    pub fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    /// Returns a new path with `segment` appended.
    pub fn child(&self, segment: impl Into<Segment>) -> PathBuf {
        let mut path = self.clone();
        path.push(segment);
        path
    }

    /// Joins this path with another path.
    pub fn join(mut self, other: impl AsRef<Path>) -> Self {
        self.segments
            .extend(other.as_ref().segments.iter().cloned());
        self
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        Path::new(&self.segments)
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self
    }
}

impl ToOwned for Path {
    type Owned = PathBuf;

    fn to_owned(&self) -> PathBuf {
        self.to_path_buf()
    }
}

impl FromStr for PathBuf {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_path(s)
    }
}

impl TryFrom<&str> for PathBuf {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parse_path(s)
    }
}

impl From<Vec<Segment>> for PathBuf {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl From<&Path> for PathBuf {
    fn from(path: &Path) -> Self {
        path.to_path_buf()
    }
}

impl<S: Into<Segment>> FromIterator<S> for PathBuf {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Path {
    /// Writes the canonical text form; the root is the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 && matches!(segment, Segment::Key(_)) {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.deref(), f)
    }
}
