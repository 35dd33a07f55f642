use anyhow::Result;
use pretty_assertions::assert_eq;

use json_ui::{Component, OverlapPolicy, Resolver, TableError, TranslationProvider, Value, ValueTable};

use crate::{resolve_with, table};

#[test]
fn binding_rules_hold_for_every_key() {
    for key in ["a", "user.name", "ÄÖÜ", "with space"] {
        let mut open = ValueTable::new();
        assert!(open.bind(key, 1).is_ok());
        assert_eq!(open.lookup(key), Some(&Value::Integer(1)));
        assert_eq!(open.bind(key, 2).unwrap_err(), TableError::KeyCollision(key.into()));

        let mut sealed = open.clone().sealed();
        assert_eq!(sealed.bind(key, 3).unwrap_err(), TableError::KeyCollision(key.into()));
        assert_eq!(
            sealed.bind(format!("{key}-new"), 3).unwrap_err(),
            TableError::SealedWrite(format!("{key}-new"))
        );
    }
}

#[test]
fn higher_precedence_table_wins() -> Result<()> {
    let src = r#"{"type":"text","text":"{{greeting}}"}"#;
    let provider = TranslationProvider::empty();
    for tables in [
        vec![table(0, &[("greeting", "low")]), table(1, &[("greeting", "high")])],
        vec![table(1, &[("greeting", "high")]), table(0, &[("greeting", "low")])],
    ] {
        let Component::Text(text) = resolve_with(&provider, tables, "en", src)? else { panic!("expected text") };
        assert_eq!(text.text, "high");
    }
    Ok(())
}

#[test]
fn layered_defaults_fill_gaps() -> Result<()> {
    let src = r#"{"type":"text","text":"{{greeting}}, {{name}}"}"#;
    let tables = vec![
        table(0, &[("greeting", "Hello"), ("name", "guest")]),
        table(5, &[("name", "ada")]),
    ];
    let Component::Text(text) = resolve_with(&TranslationProvider::empty(), tables, "en", src)? else {
        panic!("expected text")
    };
    assert_eq!(text.text, "Hello, ada");
    Ok(())
}

#[test]
fn reject_policy_turns_overlap_into_failure() {
    let provider = TranslationProvider::empty();
    let err = Resolver::new(&provider)
        .with_tables([table(0, &[("k", "a")]), table(1, &[("k", "b")])])
        .with_overlap_policy(OverlapPolicy::Reject)
        .resolve_str("overlap.json", r#"{"type":"empty"}"#)
        .unwrap_err();
    assert_eq!(err.source_id, "overlap.json");
    assert!(err.reason.contains("key [k] is already in use"), "{err}");
}

#[test]
fn deactivated_uids_resolve_to_empty() -> Result<()> {
    let mut switches = ValueTable::new();
    switches.deactivate("banner")?;
    let src = r#"{"type":"content","children":[
        {"type":"text","uid":"banner","text":"Sale!"},
        {"type":"text","uid":"body","text":"Welcome"}
    ]}"#;
    let Component::Content(content) = resolve_with(&TranslationProvider::empty(), vec![switches], "en", src)? else {
        panic!("expected content")
    };
    assert_eq!(content.children[0], Component::Empty);
    assert_eq!(content.children[1].uid(), Some("body"));
    Ok(())
}
