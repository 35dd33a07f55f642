use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use json_ui::component::{Common, Heading, Text};
use json_ui::{Component, TranslationProvider};

use crate::{resolve, resolve_with, table};

#[test]
fn plain_heading_gets_default_level() -> Result<()> {
    let root = resolve(r#"{"type":"heading","text":"Hello"}"#)?;
    assert_eq!(
        root,
        Component::Heading(Heading {
            common: Common::with_uid("t1"),
            text: "Hello".into(),
            level: 1,
        })
    );
    Ok(())
}

#[test]
fn missing_translation_yields_placeholder() -> Result<()> {
    let root = resolve(r#"{"type":"heading","text":"$$greeting"}"#)?;
    let Component::Heading(heading) = root else { panic!("expected heading") };
    assert_eq!(heading.text, "I18N [greeting] not set.");
    Ok(())
}

#[test]
fn value_token_reads_bound_table() -> Result<()> {
    let src = r#"{"type":"text","text":"Welcome back, {{username}}!"}"#;
    let provider = TranslationProvider::empty();

    let root = resolve_with(&provider, vec![table(0, &[("username", "ada")])], "en", src)?;
    let Component::Text(text) = root else { panic!("expected text") };
    assert!(text.text.contains("ada"));

    let err = resolve_with(&provider, vec![table(0, &[("someone", "else")])], "en", src).unwrap_err();
    assert_eq!(err.reason, "value token [{{username}}] is not bound");
    assert_eq!((err.depth(), err.element()), (0, 0));
    Ok(())
}

#[test]
fn unknown_discriminator_fails_at_root() {
    for _ in 0..3 {
        let err = resolve(r#"{"type":"unknown-type"}"#).unwrap_err();
        assert_eq!((err.depth(), err.element()), (0, 0));
        assert_eq!(err.source_id, "test.json");
    }
}

#[test]
fn token_free_resolution_is_idempotent() -> Result<()> {
    let src = r#"{
        "type": "content",
        "classes": ["page"],
        "children": [
            {"type": "heading", "text": "Title", "level": 9},
            {"type": "row", "children": [
                {"type": "image", "src": "/a.png"},
                {"type": "link", "href": "/next", "children": [{"type": "text", "text": "Next", "inline": true}]}
            ]},
            {"type": "button-bar", "children": [
                {"type": "button", "text": "OK", "btnClass": "primary"},
                {"type": "button", "text": "Cancel"}
            ]}
        ]
    }"#;
    let first = resolve(src)?;
    let second = resolve(src)?;
    assert_eq!(first, second);

    let json = serde_json::to_value(&first)?;
    assert_eq!(json["children"][0]["level"], json!(6));
    assert_eq!(json["children"][1]["direction"], json!("horizontal"));
    assert_eq!(json["children"][1]["children"][1]["text"]["inline"], json!(true));
    assert_eq!(json["children"][2]["buttons"][0]["btnClass"], json!("primary"));
    assert_eq!(json["children"][2]["buttons"][1]["btnClass"], json!("default"));
    Ok(())
}

#[test]
fn typed_values_replace_whole_tokens() -> Result<()> {
    let mut values = json_ui::ValueTable::new();
    values.bind("level", 3)?.bind("inline", true)?;
    let src = r#"{"type":"content","children":[
        {"type":"heading","text":"x","level":"{{level}}"},
        {"type":"text","text":"y","inline":"{{inline}}"}
    ]}"#;
    let root = resolve_with(&TranslationProvider::empty(), vec![values], "en", src)?;
    let Component::Content(content) = root else { panic!("expected content") };
    let [Component::Heading(heading), Component::Text(Text { inline, .. })] = content.children.as_slice() else {
        panic!("unexpected children {:?}", content.children);
    };
    assert_eq!(heading.level, 3);
    assert!(*inline);
    Ok(())
}

#[test]
fn static_envelope_leaves_value_tokens() -> Result<()> {
    let src = r#"{"handling":"static","root":{"type":"text","text":"{{raw}} $$hello"}}"#;
    let Component::Text(text) = resolve(src)? else { panic!("expected text") };
    assert_eq!(text.text, "{{raw}} I18N [hello] not set.");
    Ok(())
}
