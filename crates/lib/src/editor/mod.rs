//! The embeddable editor.
//!
//! [`Editor`] ties one [`DocumentStore`] to the three projections a host
//! renders: the navigator tree, the property form for the selected node and
//! the text buffer. It also tracks the active tab, the highlight on the
//! last selected row and the notices produced by user actions.
//!
//! All state changes happen in response to host calls; the editor never does
//! I/O and never spawns work. Time is passed in so hosts and tests control
//! when highlights expire.
//!
//! ```
//! use std::time::Instant;
//! use dynamic_layout::{config::EditorConfig, doc::PathBuf, editor::Editor, form::FormEdit};
//! use std::str::FromStr;
//!
//! let initial = serde_json::from_str(r#"{"user":{"name":"Jane","active":true}}"#)?;
//! let mut editor = Editor::new(initial, EditorConfig::default())?;
//!
//! editor.select(&PathBuf::from_str("user")?, Instant::now())?;
//! editor.edit(FormEdit::Toggle { path: PathBuf::from_str("user.active")? })?;
//!
//! assert_eq!(editor.selection().unwrap().value.to_string(), r#"{"name":"Jane","active":false}"#);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::{
    Result,
    config::{EditorConfig, Tab},
    doc::{DocumentError, Path, PathBuf, Value},
    form::{self, FormEdit, FormNode},
    store::{DocumentStore, SubscriptionId},
    text::{Format, TextProjection},
    tree::{self, OutlineRow, TreeNode},
};

mod notice;
mod selection;

pub use notice::{Notice, NoticeLevel};
pub use selection::{Highlight, Selection, Staleness};

/// Host-facing editor state.
#[derive(Debug)]
pub struct Editor {
    store: DocumentStore,
    config: EditorConfig,
    text: TextProjection,
    selection: Option<Selection>,
    highlight: Option<Highlight>,
    active_tab: Tab,
    notices: Vec<Notice>,
}

impl Editor {
    /// Creates an editor for `initial`.
    ///
    /// Fails if the configuration does not validate.
    pub fn new(initial: Value, config: EditorConfig) -> Result<Self> {
        config.validate()?;

        let mut text = TextProjection::new(config.indent);
        #[cfg(feature = "yaml")]
        text.register(Box::new(crate::text::YamlFormatter));
        text.load(&initial)?;
        text.switch_format(config.default_format)?;

        debug!(tab = ?config.default_tab, format = %config.default_format, "editor created");
        Ok(Self {
            store: DocumentStore::new(initial),
            active_tab: config.default_tab,
            config,
            text,
            selection: None,
            highlight: None,
            notices: Vec::new(),
        })
    }

    /// Calls `callback` with the full document after every accepted change.
    pub fn on_change(&mut self, callback: impl FnMut(&Value) + 'static) -> SubscriptionId {
        self.store.subscribe(callback)
    }

    /// Removes a callback registered with [`Editor::on_change`].
    pub fn remove_on_change(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn document(&self) -> &Value {
        self.store.document()
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// The navigator tree for the current document.
    pub fn tree(&self) -> Vec<TreeNode> {
        tree::build_tree(self.store.document())
    }

    /// The flat outline for the current document.
    pub fn outline(&self) -> Vec<OutlineRow> {
        tree::flatten(self.store.document())
    }

    /// Opens the node at `path` in the form and highlights it.
    pub fn select(&mut self, path: &Path, now: Instant) -> Result<&Selection> {
        let value = match self.store.get(path).map(|found| found.cloned()) {
            Ok(Some(value)) => value,
            Ok(None) => {
                return Err(self.reject(
                    DocumentError::NotFound {
                        path: path.to_string(),
                    }
                    .into(),
                ));
            }
            Err(err) => return Err(self.reject(err)),
        };
        let key = path.last().map(|segment| segment.label()).unwrap_or_default();

        debug!(path = %path, "selected node");
        self.highlight = Some(Highlight {
            path: path.to_path_buf(),
            until: now + self.config.highlight_duration(),
        });
        Ok(&*self
            .selection
            .insert(Selection::new(key, path.to_path_buf(), value)))
    }

    /// Opens a tree node in the form.
    pub fn select_node(&mut self, node: &TreeNode, now: Instant) -> Result<&Selection> {
        self.select(&node.path, now)
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// The highlighted path, while the highlight lasts and the row still exists.
    pub fn highlighted(&self, now: Instant) -> Option<&PathBuf> {
        let highlight = self.highlight.as_ref()?;
        if !highlight.is_active(now) {
            return None;
        }
        match self.store.get(&highlight.path) {
            Ok(Some(_)) => Some(&highlight.path),
            _ => None,
        }
    }

    /// The form for the selected node, or `None` when nothing is selected.
    pub fn form(&self) -> Option<FormNode> {
        let selection = self.selection.as_ref()?;
        let mut node = form::build_form(
            selection.key.clone(),
            selection.path.clone(),
            &selection.value,
        );
        node.removal = FormEdit::removal_of(&selection.path);
        Some(node)
    }

    /// Applies a form edit.
    pub fn edit(&mut self, edit: FormEdit) -> Result<()> {
        let removed = edit.removed_path();
        match form::apply_edit(&mut self.store, edit) {
            Ok(()) => {
                self.after_mutation(removed.as_deref());
                Ok(())
            }
            Err(err) => Err(self.reject(err)),
        }
    }

    /// Sets the value at `path` directly.
    pub fn mutate(&mut self, path: &Path, value: Value) -> Result<()> {
        match self.store.mutate(path, value) {
            Ok(()) => {
                self.after_mutation(None);
                Ok(())
            }
            Err(err) => Err(self.reject(err)),
        }
    }

    /// Replaces the whole document.
    pub fn replace(&mut self, document: Value) {
        self.store.replace(document);
        self.after_mutation(None);
    }

    /// Deletes the selected node and closes the form.
    pub fn delete_selected(&mut self) -> Result<()> {
        let Some(selection) = self.selection.take() else {
            return Ok(());
        };
        match self.store.delete_at(&selection.path) {
            Ok(()) => {
                self.after_mutation(Some(&*selection.path));
                Ok(())
            }
            Err(err) => {
                self.selection = Some(selection);
                Err(self.reject(err))
            }
        }
    }

    /// The text buffer.
    pub fn text(&self) -> &str {
        self.text.text()
    }

    pub fn text_format(&self) -> Format {
        self.text.format()
    }

    /// Replaces the text buffer without touching the document.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text.set_text(text);
    }

    /// Parses the text buffer and makes it the document.
    pub fn apply_text(&mut self) -> Result<()> {
        match self.text.apply(&mut self.store) {
            Ok(()) => {
                self.notices.push(Notice::text_applied(self.text.format()));
                self.after_mutation(None);
                Ok(())
            }
            Err(err) => Err(self.reject(err.into())),
        }
    }

    /// Rewrites the text buffer in another format.
    pub fn switch_format(&mut self, format: Format) -> Result<()> {
        match self.text.switch_format(format) {
            Ok(()) => Ok(()),
            Err(err) => {
                let err = crate::Error::from(err);
                let notice = if err.is_parse_error() {
                    Notice::conversion_failed()
                } else {
                    Notice::from(&err)
                };
                warn!(error = %err, "format switch rejected");
                self.notices.push(notice);
                Err(err)
            }
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Drains the pending notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Brings the selection and the text buffer in line with a new document.
    fn after_mutation(&mut self, removed: Option<&Path>) {
        if let Some(selection) = self.selection.as_mut() {
            let deleted = removed.is_some_and(|removed| selection.path.starts_with(removed));
            if deleted || selection.refresh(self.store.document()) == Staleness::Vanished {
                debug!(path = %selection.path, "selection cleared");
                self.selection = None;
            }
        }
        if let Err(err) = self.text.load(self.store.document()) {
            warn!(error = %err, "could not refresh text buffer");
        }
        info!(version = self.store.version(), "document changed");
    }

    fn reject(&mut self, err: crate::Error) -> crate::Error {
        warn!(error = %err, "edit rejected");
        self.notices.push(Notice::from(&err));
        err
    }
}
