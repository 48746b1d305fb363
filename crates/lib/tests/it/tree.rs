use dynamic_layout::{
    doc::{self, ValueKind},
    tree::{build_tree, find_node, flatten},
};

use crate::helpers::{SAMPLE, doc};

#[test]
fn tree_follows_document_order() {
    let tree = build_tree(&doc(SAMPLE));
    let keys: Vec<&str> = tree.iter().map(|n| n.key.as_str()).collect();
    assert_eq!(keys, vec!["user", "tags"]);

    let user_keys: Vec<&str> = tree[0].children.iter().map(|n| n.key.as_str()).collect();
    assert_eq!(user_keys, vec!["name", "active"]);
}

#[test]
fn every_node_path_resolves_to_its_value() {
    let document = doc(r#"{"a":[{"b":null},[1,2]],"c":{"d":{"e":"f"}}}"#);
    let tree = build_tree(&document);
    for row in flatten(&document) {
        let value = doc::get(&document, &row.path).unwrap().unwrap();
        assert_eq!(value.kind(), row.kind);
        assert_eq!(value.children_count(), row.children_count);

        let node = find_node(&tree, &row.path).unwrap();
        assert_eq!(node.is_leaf, value.is_leaf());
    }
}

#[test]
fn outline_levels() {
    let rows = flatten(&doc(SAMPLE));
    let levels: Vec<(String, usize)> = rows.iter().map(|r| (r.path.to_string(), r.level)).collect();
    assert_eq!(
        levels,
        vec![
            ("user".to_string(), 0),
            ("user.name".to_string(), 1),
            ("user.active".to_string(), 1),
            ("tags".to_string(), 0),
            ("tags[0]".to_string(), 1),
            ("tags[1]".to_string(), 1),
        ]
    );
    assert_eq!(rows[3].kind, ValueKind::Array);
}
