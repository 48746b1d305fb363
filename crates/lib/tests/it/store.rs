use std::{cell::RefCell, rc::Rc};

use dynamic_layout::{doc::Value, store::DocumentStore};

use crate::helpers::{doc, p, sample_store};

#[test]
fn mutate_and_delete_sample() {
    let mut store = sample_store();

    store.mutate(p("user.active"), Value::from(false)).unwrap();
    assert_eq!(
        store.document(),
        &doc(r#"{"user":{"name":"Jane","active":false},"tags":["x","y"]}"#)
    );

    store.delete_at(p("tags[0]")).unwrap();
    assert_eq!(
        store.document(),
        &doc(r#"{"user":{"name":"Jane","active":false},"tags":["y"]}"#)
    );
    assert_eq!(store.version(), 2);
}

#[test]
fn subscribers_run_in_order_with_new_document() {
    let mut store = sample_store();
    let log = Rc::new(RefCell::new(Vec::new()));

    for name in ["first", "second"] {
        let log = log.clone();
        store.subscribe(move |d| {
            let active = d.as_map().and_then(|m| m.get("user")).cloned();
            log.borrow_mut().push((name, active));
        });
    }

    store.mutate(p("user.active"), Value::from(false)).unwrap();

    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].0, "first");
    assert_eq!(log[1].0, "second");
    assert_eq!(log[0].1, Some(doc(r#"{"name":"Jane","active":false}"#)));
}

#[test]
fn failed_delete_notifies_nobody() {
    let mut store = sample_store();
    let calls = Rc::new(RefCell::new(0));
    let counter = calls.clone();
    store.subscribe(move |_| *counter.borrow_mut() += 1);

    assert!(store.delete_at(p("tags[5]")).unwrap_err().is_not_found());
    assert!(store.delete_at(p("")).is_err());
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn snapshots_survive_later_writes() {
    let mut store = DocumentStore::new(doc(r#"{"n":1}"#));
    let snapshot = store.snapshot();
    assert!(store.append(p("list"), Value::from(1)).unwrap_err().is_not_found());
    store.mutate(p("n"), Value::from(2)).unwrap();
    assert_eq!(snapshot, doc(r#"{"n":1}"#));
    assert_eq!(store.get(p("n")).unwrap(), Some(&Value::from(2)));
}
