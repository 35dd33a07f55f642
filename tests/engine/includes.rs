use anyhow::Result;
use pretty_assertions::assert_eq;

use json_ui::component::Input;
use json_ui::{Component, DirSource, IdSource, MemorySource, Resolver, TranslationProvider, Value, ValueTable};

use crate::Fixture;

#[test]
fn includes_resolve_in_the_same_scope() -> Result<()> {
    let fixture = Fixture::new()?;
    fixture.write_file("parts/greeting.json", r#"{"type":"heading","text":"Hi {{user.name}}","level":2}"#)?;
    fixture.write_file(
        "parts/fields.json",
        r#"{"type":"textfield","name":"email","placeholder":"{{hint}}"}"#,
    )?;
    let templates = DirSource::new(fixture.root());

    let mut values = ValueTable::new();
    values.bind("user.name", "ada")?.bind("hint", "you@example.org")?;
    let provider = TranslationProvider::empty();
    let resolution = Resolver::new(&provider)
        .with_table(values)
        .with_templates(&templates)
        .with_ids(IdSource::sequential("i"))
        .resolve_str(
            "page.json",
            r#"{"type":"content","children":[
                {"type":"component","path":"parts/greeting.json"},
                {"type":"form","children":[{"type":"component","path":"parts/fields.json"}]}
            ]}"#,
        )?;

    let Component::Content(content) = resolution.root else { panic!("expected content") };
    let Component::Heading(heading) = &content.children[0] else { panic!("expected heading") };
    assert_eq!(heading.text, "Hi ada");
    assert_eq!(heading.level, 2);
    let Component::Form(form) = &content.children[1] else { panic!("expected form") };
    let [Input::Textfield(field)] = form.inputs.as_slice() else { panic!("expected one textfield") };
    assert_eq!(field.placeholder, "you@example.org");
    Ok(())
}

#[test]
fn include_source_scopes_a_bound_map() -> Result<()> {
    let mut templates = MemorySource::new();
    templates.insert("card.json", r#"{"type":"text","text":"{{title}}"}"#);

    let mut values = ValueTable::new();
    values.bind(
        "product",
        Value::Map([("title".to_string(), Value::from("Kettle"))].into_iter().collect()),
    )?;
    let provider = TranslationProvider::empty();
    let root = Resolver::new(&provider)
        .with_table(values)
        .with_templates(&templates)
        .resolve_str("page.json", r#"{"type":"content","children":[{"type":"component","path":"card.json","source":"product"}]}"#)?
        .root;
    let Component::Content(content) = root else { panic!("expected content") };
    let Component::Text(text) = &content.children[0] else { panic!("expected text") };
    assert_eq!(text.text, "Kettle");
    Ok(())
}

#[test]
fn include_failures_name_the_right_source() {
    let mut templates = MemorySource::new();
    templates.insert("bad.json", r#"{"type":"content","children":[{"type":"heading"}]}"#);
    templates.insert("modal.json", r#"{"type":"modal","title":"x"}"#);
    let provider = TranslationProvider::empty();
    let resolver = Resolver::new(&provider).with_templates(&templates);

    let err = resolver
        .resolve_str("page.json", r#"{"type":"content","children":[{"type":"component","path":"bad.json"}]}"#)
        .unwrap_err();
    assert_eq!(err.source_id, "bad.json");
    assert_eq!((err.depth(), err.element()), (1, 0));

    let err = resolver
        .resolve_str("page.json", r#"{"type":"content","children":[{"type":"component","path":"nope.json"}]}"#)
        .unwrap_err();
    assert_eq!(err.source_id, "page.json");
    assert_eq!(err.reason, "included template [nope.json] can not be loaded");

    let err = resolver
        .resolve_str("page.json", r#"{"type":"content","children":[{"type":"component","path":"modal.json"}]}"#)
        .unwrap_err();
    assert_eq!(err.reason, "component [modal] is not allowed inside [content]");
}
