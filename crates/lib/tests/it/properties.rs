//! Property tests for the document operations.

use dynamic_layout::{
    doc::{self, List, Map, Segment, Value},
    text::{Formatter, JsonFormatter},
    tree::flatten,
};
use proptest::{prelude::*, sample::Index};

// -- Strategy helpers --

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        // Quarters are exact in binary, so text round-trips are lossless.
        any::<i32>().prop_map(|n| Value::from(f64::from(n) / 4.0)),
        "[a-z]{0,6}".prop_map(Value::from),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::from),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..5)
                .prop_map(|entries| Value::Map(entries.into_iter().collect::<Map>())),
        ]
    })
}

fn arb_document() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::collection::vec(("[a-z]{1,6}", arb_value()), 1..5)
            .prop_map(|entries| Value::Map(entries.into_iter().collect::<Map>())),
        prop::collection::vec(arb_value(), 1..5).prop_map(|items| Value::List(List::from(items))),
    ]
}

proptest! {
    #[test]
    fn set_then_get_returns_value(document in arb_document(), pick in any::<Index>(), value in arb_value()) {
        let rows = flatten(&document);
        let path = &rows[pick.index(rows.len())].path;

        let updated = doc::set(&document, path, value.clone()).unwrap();
        prop_assert_eq!(doc::get(&updated, path).unwrap(), Some(&value));
    }

    #[test]
    fn removing_an_added_key_restores_document(document in arb_document(), value in arb_value()) {
        // Keys generated above are lowercase, so this one is always new.
        let path = doc::PathBuf::root().key("ADDED");
        prop_assume!(document.as_map().is_some());

        let added = doc::set(&document, &path, value).unwrap();
        prop_assert_eq!(doc::remove(&added, &path).unwrap(), document);
    }

    #[test]
    fn set_then_remove_in_any_container_restores_document(
        document in arb_document(),
        pick in any::<Index>(),
        value in arb_value(),
    ) {
        let mut containers = vec![doc::PathBuf::root()];
        containers.extend(
            flatten(&document)
                .into_iter()
                .filter(|row| row.kind.is_container())
                .map(|row| row.path),
        );
        let parent = &containers[pick.index(containers.len())];

        // Generated keys are lowercase, so an uppercase key is always fresh.
        let target = match doc::get(&document, parent).unwrap() {
            Some(Value::List(list)) => parent.child(Segment::Index(list.len())),
            Some(Value::Map(_)) => parent.child(Segment::Key("ADDED".to_string())),
            _ => unreachable!("only containers are picked"),
        };

        let added = doc::set(&document, &target, value.clone()).unwrap();
        prop_assert_eq!(doc::get(&added, &target).unwrap(), Some(&value));
        prop_assert_eq!(doc::remove(&added, &target).unwrap(), document);
    }

    #[test]
    fn json_text_round_trips(document in arb_document()) {
        let formatter = JsonFormatter::default();
        let text = formatter.serialize(&document).unwrap();
        prop_assert_eq!(formatter.deserialize(&text).unwrap(), document);
    }

    #[test]
    fn remove_touches_only_the_target(document in arb_document(), pick in any::<Index>()) {
        let rows = flatten(&document);
        let target = &rows[pick.index(rows.len())].path;
        let removed = doc::remove(&document, target).unwrap();

        for row in rows.iter().filter(|row| row.level == 0) {
            let unrelated = !target.starts_with(&row.path) && !row.path.starts_with(target);
            if unrelated && document.as_map().is_some() {
                prop_assert_eq!(
                    doc::get(&removed, &row.path).unwrap(),
                    doc::get(&document, &row.path).unwrap()
                );
            }
        }
    }
}

#[cfg(feature = "yaml")]
proptest! {
    #[test]
    fn yaml_text_round_trips(document in arb_document()) {
        use dynamic_layout::text::YamlFormatter;

        let text = YamlFormatter.serialize(&document).unwrap();
        prop_assert_eq!(YamlFormatter.deserialize(&text).unwrap(), document);
    }
}
