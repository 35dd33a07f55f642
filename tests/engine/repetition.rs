use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use json_ui::component::Input;
use json_ui::{Component, TranslationProvider, ValueTable};

use crate::{resolve, resolve_with};

fn rows() -> Result<ValueTable> {
    let data = json!({
        "title": "Team",
        "members": [
            {"name": "Ada", "role": "lead"},
            {"name": "Grace", "role": "dev"}
        ],
        "colors": ["red", "green"]
    });
    let serde_json::Value::Object(object) = data else { unreachable!() };
    Ok(ValueTable::from_json(&object, 0)?)
}

#[test]
fn repeated_nodes_see_their_element() -> Result<()> {
    let src = r#"{"type":"content","children":[
        {"type":"heading","text":"{{title}}"},
        {"type":"text","uid":"member","repeat":"members","text":"{{name}} ({{role}}) in {{title}}"}
    ]}"#;
    let Component::Content(content) = resolve_with(&TranslationProvider::empty(), vec![rows()?], "en", src)? else {
        panic!("expected content")
    };
    assert_eq!(content.children.len(), 3);
    let texts: Vec<_> = content.children[1..]
        .iter()
        .map(|c| match c {
            Component::Text(text) => (text.common.uid.clone(), text.text.clone()),
            other => panic!("expected text, got {other:?}"),
        })
        .collect();
    assert_eq!(
        texts,
        vec![
            ("member-0".to_string(), "Ada (lead) in Team".to_string()),
            ("member-1".to_string(), "Grace (dev) in Team".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn scalar_elements_bind_as_item() -> Result<()> {
    let src = r#"{"type":"form","children":[
        {"type":"checkbox","name":"c","repeat":"colors","submitAs":"color-{{item}}","children":[
            {"type":"option","text":"{{item}}","value":"{{item}}"}
        ]}
    ]}"#;
    let Component::Form(form) = resolve_with(&TranslationProvider::empty(), vec![rows()?], "en", src)? else {
        panic!("expected form")
    };
    let submitted: Vec<_> = form.inputs.iter().map(|i| i.base().submit_as.as_str()).collect();
    assert_eq!(submitted, vec!["color-red", "color-green"]);
    let Input::Checkbox(second) = &form.inputs[1] else { panic!("expected checkbox") };
    assert_eq!(second.options[0].value, "green");
    Ok(())
}

#[test]
fn empty_lists_produce_nothing() -> Result<()> {
    let mut values = ValueTable::new();
    values.bind("none", Vec::<String>::new())?;
    let src = r#"{"type":"content","children":[{"type":"text","text":"x","repeat":"none"}]}"#;
    let Component::Content(content) = resolve_with(&TranslationProvider::empty(), vec![values], "en", src)? else {
        panic!("expected content")
    };
    assert!(content.children.is_empty());
    Ok(())
}

#[test]
fn repeat_sources_must_be_bound_lists() {
    let err = resolve(r#"{"type":"content","children":[{"type":"text","text":"x","repeat":"missing"}]}"#)
        .unwrap_err();
    assert_eq!(err.reason, "repeat source [missing] is not bound");
    assert_eq!((err.depth(), err.element()), (1, 0));
}
