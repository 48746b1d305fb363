use std::{
    cell::RefCell,
    rc::Rc,
    time::{Duration, Instant},
};

use dynamic_layout::{
    config::{EditorConfig, Tab},
    doc::Value,
    editor::{Editor, NoticeLevel},
    form::{FormEdit, FormField, PropertyKind},
    text::Format,
};

use crate::helpers::{SAMPLE, doc, p};

fn editor() -> Editor {
    Editor::new(doc(SAMPLE), EditorConfig::default()).unwrap()
}

#[test]
fn on_change_receives_full_document() {
    let mut editor = editor();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    editor.on_change(move |d| sink.borrow_mut().push(d.clone()));

    editor
        .edit(FormEdit::SetBool {
            path: p("user.active"),
            value: false,
        })
        .unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![doc(r#"{"user":{"name":"Jane","active":false},"tags":["x","y"]}"#)]
    );
}

#[test]
fn selection_follows_edits() {
    let mut editor = editor();
    let now = Instant::now();
    editor.select(&p("user"), now).unwrap();

    editor
        .edit(FormEdit::SetText {
            path: p("user.name"),
            value: "Ada".to_string(),
        })
        .unwrap();
    let selection = editor.selection().unwrap();
    assert_eq!(selection.key, "user");
    assert_eq!(selection.value, doc(r#"{"name":"Ada","active":true}"#));

    let form = editor.form().unwrap();
    assert!(matches!(form.field, FormField::Object { .. }));
    assert_eq!(
        form.removal,
        Some(FormEdit::DeleteProperty {
            path: p(""),
            key: "user".to_string(),
        })
    );
}

#[test]
fn deleting_selected_or_ancestor_clears_selection() {
    let mut editor = editor();
    let now = Instant::now();

    editor.select(&p("tags[1]"), now).unwrap();
    editor.delete_selected().unwrap();
    assert!(editor.selection().is_none());
    assert_eq!(editor.document(), &doc(r#"{"user":{"name":"Jane","active":true},"tags":["x"]}"#));

    editor.select(&p("user.name"), now).unwrap();
    editor
        .edit(FormEdit::DeleteProperty {
            path: p(""),
            key: "user".to_string(),
        })
        .unwrap();
    assert!(editor.selection().is_none());
}

#[test]
fn rejected_edits_produce_notices() {
    let mut editor = editor();
    let add = |name: &str| FormEdit::AddProperty {
        path: p("user"),
        name: name.to_string(),
        kind: PropertyKind::String,
    };

    assert!(editor.edit(add("  ")).is_err());
    assert!(editor.edit(add("name")).is_err());
    assert!(editor.edit(add("first.name")).is_err());

    let notices = editor.take_notices();
    let titles: Vec<&str> = notices.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["Invalid Name", "Duplicate Key", "Invalid Name"]);
    assert_eq!(notices[0].description, "Property name cannot be empty.");
    assert!(editor.take_notices().is_empty());
    assert_eq!(editor.store().version(), 0);
}

#[test]
fn text_tab_roundtrip() {
    let mut editor = editor();
    editor.set_tab(Tab::Json);
    assert_eq!(editor.active_tab(), Tab::Json);

    editor.set_text("{");
    assert!(editor.apply_text().unwrap_err().is_parse_error());
    assert_eq!(editor.document(), &doc(SAMPLE));
    let notice = editor.take_notices().pop().unwrap();
    assert_eq!(notice.title, "Invalid JSON");

    editor.set_text(r#"{"fresh": [true]}"#);
    editor.apply_text().unwrap();
    assert_eq!(editor.document(), &doc(r#"{"fresh":[true]}"#));
    let notice = editor.take_notices().pop().unwrap();
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.title, "JSON Updated");
}

#[test]
fn form_edits_refresh_text_buffer() {
    let mut editor = editor();
    editor.mutate(&p("tags"), Value::from(Vec::new())).unwrap();
    assert!(editor.text().contains("\"tags\": []"));
    assert_eq!(editor.text_format(), Format::Json);
}

#[test]
fn highlight_expires_and_needs_row() {
    let mut editor = editor();
    let now = Instant::now();
    editor.select(&p("tags[0]"), now).unwrap();
    assert_eq!(editor.highlighted(now).map(|p| p.to_string()), Some("tags[0]".to_string()));
    assert!(editor.highlighted(now + Duration::from_millis(1600)).is_none());

    editor.select(&p("tags[1]"), now).unwrap();
    editor.replace(doc("{}"));
    assert!(editor.highlighted(now).is_none());
    assert!(editor.selection().is_none());
}

#[test]
fn selecting_missing_path_fails() {
    let mut editor = editor();
    let err = editor.select(&p("nope"), Instant::now()).unwrap_err();
    assert!(err.is_not_found());
    assert!(editor.selection().is_none());
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_default_format() {
    let config = EditorConfig {
        default_format: Format::Yaml,
        ..EditorConfig::default()
    };
    let mut editor = Editor::new(doc(SAMPLE), config).unwrap();
    assert_eq!(editor.text_format(), Format::Yaml);
    assert!(editor.text().contains("tags:"));

    editor.set_text("a: [1, 2");
    assert!(editor.switch_format(Format::Json).is_err());
    let notice = editor.take_notices().pop().unwrap();
    assert_eq!(notice.title, "Format conversion failed");
    assert_eq!(editor.text_format(), Format::Yaml);
}
