use anyhow::Result;
use pretty_assertions::assert_eq;

use json_ui::{Component, Locale};

use crate::{Fixture, resolve_with};

const DE: &str = r#"{
    "language": "de",
    "elements": [
        {"key": "greeting", "text": "Hallo"},
        {"key": "farewell", "text": "Tschüss"},
        {"key": "farewell", "text": "Auf Wiedersehen"}
    ]
}"#;

const DE_AT: &str = r#"{
    "language": "de",
    "country": "AT",
    "elements": [{"key": "greeting", "text": "Servus"}]
}"#;

fn fixture() -> Result<Fixture> {
    let fixture = Fixture::new()?;
    fixture.write_file("i18n/de.json", DE)?;
    fixture.write_file("i18n/de_AT.json", DE_AT)?;
    fixture.write_file("i18n/broken.json", r#"{"language": "fr", "elements": [{"key": 1}]}"#)?;
    Ok(fixture)
}

#[test]
fn lookup_follows_the_fallback_chain() -> Result<()> {
    let fixture = fixture()?;
    let provider = fixture.provider(&["i18n/de.json", "i18n/de_AT.json", "i18n/broken.json", "i18n/missing.json"]);
    let at: Locale = "de-AT".parse()?;
    let de: Locale = "de".parse()?;

    assert_eq!(provider.lookup(&at, "greeting"), "Servus");
    assert_eq!(provider.lookup(&at, "farewell"), "Auf Wiedersehen");
    assert_eq!(provider.lookup(&de, "greeting"), "Hallo");
    assert_eq!(provider.lookup(&at, "unknown"), "I18N [unknown] not set.");
    assert_eq!(provider.lookup(&"fr".parse()?, "greeting"), "I18N [greeting] not set.");
    Ok(())
}

#[test]
fn templates_translate_with_the_active_locale() -> Result<()> {
    let fixture = fixture()?;
    let provider = fixture.provider(&["i18n/de.json", "i18n/de_AT.json"]);
    let src = r#"{"type":"modal","title":"$$greeting","children":[{"type":"text","text":"$$farewell, {{name}}."}]}"#;
    let tables = vec![crate::table(0, &[("name", "Ada")])];

    let Component::Modal(modal) = resolve_with(&provider, tables, "de-AT", src)? else { panic!("expected modal") };
    assert_eq!(modal.title, "Servus");
    assert!(modal.close_on_overlay_click);
    let Component::Text(text) = &modal.children[0] else { panic!("expected text") };
    assert_eq!(text.text, "Auf Wiedersehen, Ada.");
    Ok(())
}
