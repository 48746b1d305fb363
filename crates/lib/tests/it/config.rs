use dynamic_layout::{
    Editor,
    config::{EditorConfig, Tab},
    text::Format,
};

#[test]
fn partial_config_keeps_defaults() {
    let config = EditorConfig::from_json(r#"{"default_tab":"json","indent":4}"#).unwrap();
    assert_eq!(config.default_tab, Tab::Json);
    assert_eq!(config.indent, 4);
    assert_eq!(config.default_format, Format::Json);
    assert_eq!(config.highlight_ms, 1500);
}

#[test]
fn editor_uses_config() {
    let config = EditorConfig {
        default_tab: Tab::Json,
        indent: 4,
        ..EditorConfig::default()
    };
    let editor = Editor::new(serde_json::from_str(r#"{"a":1}"#).unwrap(), config).unwrap();
    assert_eq!(editor.active_tab(), Tab::Json);
    assert_eq!(editor.text(), "{\n    \"a\": 1\n}");
}

#[test]
fn invalid_config_is_rejected_by_editor() {
    let config = EditorConfig {
        right_panel_width: 101,
        ..EditorConfig::default()
    };
    let err = Editor::new(serde_json::from_str("{}").unwrap(), config).unwrap_err();
    assert_eq!(err.module(), "config");
}

#[test]
fn config_serializes_lowercase_enums() {
    let json = serde_json::to_string(&EditorConfig::default()).unwrap();
    assert!(json.contains(r#""default_tab":"tree""#));
    assert!(json.contains(r#""default_format":"json""#));
}
