use dynamic_layout::doc::{self, Value};

use crate::helpers::{doc, p};

#[test]
fn remove_compacts_sequences() {
    let before = doc(r#"{"a":[1,2,3]}"#);
    let after = doc::remove(&before, p("a[1]")).unwrap();
    assert_eq!(after, doc(r#"{"a":[1,3]}"#));
    assert_eq!(before, doc(r#"{"a":[1,2,3]}"#));
}

#[test]
fn set_then_get() {
    let before = doc(r#"{"user":{"name":"Jane"}}"#);
    let after = doc::set(&before, p("user.email"), Value::from("jane@example.com")).unwrap();
    assert_eq!(
        doc::get(&after, p("user.email")).unwrap(),
        Some(&Value::from("jane@example.com"))
    );
    assert_eq!(doc::get(&before, p("user.email")).unwrap(), None);
}

#[test]
fn descending_into_primitive_is_a_type_mismatch() {
    let d = doc(r#"{"name":"Jane","tags":["x"]}"#);
    for path in ["name.first", "tags[0].label", "name[0]"] {
        let err = doc::get(&d, p(path)).unwrap_err();
        assert!(err.is_type_mismatch(), "{path}");
        let err = doc::set(&d, p(path), Value::Null).unwrap_err();
        assert!(err.is_type_mismatch(), "{path}");
    }
}

#[test]
fn mutation_shares_untouched_branches() {
    let before = doc(r#"{"left":{"deep":{"x":1}},"right":{"y":[1,2]}}"#);
    let after = doc::set(&before, p("left.deep.x"), Value::from(2)).unwrap();

    let untouched = |d: &Value| doc::get(d, p("right")).unwrap().unwrap().clone();
    assert!(untouched(&before).shares_storage(&untouched(&after)));

    let edited = |d: &Value| doc::get(d, p("left")).unwrap().unwrap().clone();
    assert!(!edited(&before).shares_storage(&edited(&after)));
}

#[test]
fn duplicate_property_leaves_document_unchanged() {
    let before = doc(r#"{"cfg":{"name":"x"}}"#);
    let err = doc::add_property(&before, p("cfg"), "name", Value::Null).unwrap_err();
    assert!(err.is_validation_error());
    assert_eq!(before, doc(r#"{"cfg":{"name":"x"}}"#));
}

#[test]
fn rename_rejects_empty_name() {
    let d = doc(r#"{"a":1}"#);
    assert!(doc::rename(&d, p("a"), " ").unwrap_err().is_validation_error());
    assert!(doc::rename(&d, p("missing"), "b").unwrap_err().is_not_found());
}

#[test]
fn set_at_end_then_remove_restores_document() {
    let d = doc(r#"{"a":[1,2,3],"b":{"c":[]}}"#);
    for path in ["a[3]", "b.c[0]", "b.fresh"] {
        let added = doc::set(&d, p(path), Value::from("new")).unwrap();
        assert_eq!(doc::get(&added, p(path)).unwrap(), Some(&Value::from("new")));
        assert_eq!(doc::remove(&added, p(path)).unwrap(), d, "{path}");
    }
}
