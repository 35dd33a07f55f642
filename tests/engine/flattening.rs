use anyhow::Result;
use pretty_assertions::assert_eq;

use json_ui::component::Input;
use json_ui::flatten::{TranslatedLink, TranslatedText};
use json_ui::{Component, Dissector, Exposed, Flattenable, Locale, TranslationProvider};

use crate::{Fixture, resolve_with};

struct Order {
    number: i64,
    customer: String,
    express: bool,
    tracking: TranslatedLink,
    notes: Vec<TranslatedText>,
}

impl Flattenable for Order {
    fn expose(&self) -> Vec<(&'static str, Exposed<'_>)> {
        vec![
            ("number", Exposed::Integer(self.number)),
            ("customer", Exposed::text(&self.customer)),
            ("express", Exposed::Bool(self.express)),
            ("tracking", Exposed::Nested(&self.tracking)),
            ("notes", Exposed::list(&self.notes)),
            ("classLoader", Exposed::text("never exposed")),
        ]
    }
}

fn order() -> Order {
    Order {
        number: 1042,
        customer: "Ada".into(),
        express: true,
        tracking: TranslatedLink {
            text: "$$track".into(),
            href: "/orders/1042".into(),
        },
        notes: vec![TranslatedText { text: "fragile".into() }],
    }
}

#[test]
fn dissected_objects_feed_templates() -> Result<()> {
    let fixture = Fixture::new()?;
    fixture.write_file(
        "en.json",
        r#"{"language": "en", "elements": [{"key": "track", "text": "Track parcel"}]}"#,
    )?;
    let provider = fixture.provider(&["en.json"]);
    let locale = Locale::english();

    let table = Dissector::new(&provider).dissect(&order(), 0, &locale)?;
    assert_eq!(table.precedence(), 10);
    assert!(table.lookup("classLoader").is_none());

    let src = r#"{"type":"content","children":[
        {"type":"heading","text":"Order {{number}} for {{customer}}"},
        {"type":"link","href":"{{tracking.href}}","children":[{"type":"text","text":"{{tracking.text}}"}]},
        {"type":"text","text":"{{notes}}"}
    ]}"#;
    let Component::Content(content) = resolve_with(&provider, vec![table], "en", src)? else {
        panic!("expected content")
    };
    let json = serde_json::to_value(&content.children)?;
    assert_eq!(json[0]["text"], "Order 1042 for Ada");
    assert_eq!(json[1]["href"], "/orders/1042");
    assert_eq!(json[1]["text"]["text"], "Track parcel");
    assert_eq!(json[2]["text"], r#"{"text":"fragile"}"#);
    Ok(())
}

#[test]
fn dissected_tables_outrank_request_tables() -> Result<()> {
    let provider = TranslationProvider::empty();
    let dissected = Dissector::new(&provider).dissect(&order(), 1, &Locale::english())?;
    let request = crate::table(0, &[("customer", "someone else")]);
    let Component::Text(text) =
        resolve_with(&provider, vec![request, dissected], "en", r#"{"type":"text","text":"{{customer}}"}"#)?
    else {
        panic!("expected text")
    };
    assert_eq!(text.text, "Ada");
    Ok(())
}

struct Catalog {
    sizes: Vec<String>,
    stock: Vec<i64>,
    extras: Vec<(String, String)>,
}

impl Flattenable for Catalog {
    fn expose(&self) -> Vec<(&'static str, Exposed<'_>)> {
        vec![
            ("sizes", Exposed::values(self.sizes.iter().map(Exposed::text))),
            ("stock", Exposed::values(self.stock.iter().copied().map(Exposed::Integer))),
            ("extras", Exposed::entries(self.extras.iter().map(|(k, v)| (k.as_str(), Exposed::text(v))))),
        ]
    }
}

#[test]
fn scalar_lists_and_maps_feed_templates() -> Result<()> {
    let fixture = Fixture::new()?;
    fixture.write_file(
        "en.json",
        r#"{"language": "en", "elements": [{"key": "gift", "text": "Gift wrapping"}]}"#,
    )?;
    let provider = fixture.provider(&["en.json"]);
    let catalog = Catalog {
        sizes: vec!["S".into(), "M".into()],
        stock: vec![4, 0],
        extras: vec![("wrap".into(), "$$gift".into())],
    };
    let table = Dissector::new(&provider).dissect(&catalog, 0, &Locale::english())?;

    let src = r#"{"type":"content","children":[
        {"type":"text","text":"{{extras.wrap}}, stock {{stock}}"},
        {"type":"form","children":[{"type":"select","name":"size","options":"{{sizes}}"}]}
    ]}"#;
    let Component::Content(content) = resolve_with(&provider, vec![table], "en", src)? else {
        panic!("expected content")
    };
    let json = serde_json::to_value(&content.children)?;
    assert_eq!(json[0]["text"], "Gift wrapping, stock 4, 0");
    let Component::Form(form) = &content.children[1] else { panic!("expected form") };
    let Input::Select(select) = &form.inputs[0] else { panic!("expected select") };
    let values: Vec<_> = select.options.iter().map(|o| (o.text.as_str(), o.value.as_str())).collect();
    assert_eq!(values, vec![("S", "S"), ("M", "M")]);
    Ok(())
}
