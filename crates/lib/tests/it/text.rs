use dynamic_layout::text::{Format, Formatter, JsonFormatter, TextProjection};

use crate::helpers::{SAMPLE, doc, sample_store};

#[test]
fn malformed_text_keeps_document() {
    let mut store = sample_store();
    let mut text = TextProjection::default();
    text.load(store.document()).unwrap();

    text.set_text("{");
    let err = text.apply(&mut store).unwrap_err();
    assert!(err.is_parse_error());
    assert_eq!(err.format(), Format::Json);
    assert_eq!(store.document(), &doc(SAMPLE));
    assert_eq!(store.version(), 0);
    assert!(text.is_dirty());
}

#[test]
fn unchanged_text_reproduces_document() {
    let document = doc(SAMPLE);
    let formatter = JsonFormatter::default();
    let text = formatter.serialize(&document).unwrap();
    assert_eq!(formatter.deserialize(&text).unwrap(), document);
}

#[test]
fn apply_replaces_and_reformats() {
    let mut store = sample_store();
    let mut text = TextProjection::default();
    text.set_text(r#"[1,   2]"#);
    text.apply(&mut store).unwrap();
    assert_eq!(store.document(), &doc("[1,2]"));
    assert_eq!(text.text(), "[\n  1,\n  2\n]");
    assert!(!text.is_dirty());
}

#[cfg(feature = "yaml")]
mod yaml {
    use dynamic_layout::text::{Format, TextProjection, YamlFormatter};

    use crate::helpers::{SAMPLE, doc, sample_store};

    #[test]
    fn switch_and_apply_yaml() {
        let mut store = sample_store();
        let mut text = TextProjection::default().with_formatter(YamlFormatter);
        text.load(store.document()).unwrap();

        text.switch_format(Format::Yaml).unwrap();
        assert!(text.text().contains("name: Jane"));

        let edited = text.text().replace("active: true", "active: false");
        text.set_text(edited);
        text.apply(&mut store).unwrap();
        assert_eq!(
            store.document(),
            &doc(r#"{"user":{"name":"Jane","active":false},"tags":["x","y"]}"#)
        );
        assert_eq!(text.format(), Format::Yaml);
    }

    #[test]
    fn yaml_scalar_root_is_rejected() {
        let mut store = sample_store();
        let mut text = TextProjection::default().with_formatter(YamlFormatter);
        text.load(store.document()).unwrap();
        text.switch_format(Format::Yaml).unwrap();
        text.set_text("just a string");
        assert!(text.apply(&mut store).unwrap_err().is_parse_error());
        assert_eq!(store.document(), &doc(SAMPLE));
    }
}

#[test]
fn wide_object_parses_in_order() {
    let width = 50_000;
    let body: Vec<String> = (0..width).map(|i| format!(r#""k{i}":{i}"#)).collect();
    let text = format!("{{{}}}", body.join(","));

    let document = JsonFormatter::default().deserialize(&text).unwrap();
    let map = document.as_map().unwrap();
    assert_eq!(map.len(), width);
    assert_eq!(map.keys().next(), Some("k0"));
    assert_eq!(map.keys().last(), Some("k49999"));
    assert_eq!(map.get("k1234"), Some(&dynamic_layout::doc::Value::from(1234)));
}
