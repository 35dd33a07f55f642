//! Typed access to the resolved properties of one node.
//!
//! Every property is substituted once, when the node is known to be active.
//! The typed readers below only convert what substitution produced.
use std::str::FromStr;

use indexmap::{IndexMap, IndexSet};

use super::tokens::{Substituted, Tokens, Unresolved};
use crate::component::{Common, ComponentKind, Direction, UnknownKeyword};
use crate::error::{ParseError, Position};
use crate::tree::{Node, Raw};
use crate::value::Value;

/// Properties read before activation is known, or never substituted.
const ACTIVATION_KEYS: &[&str] = &["active"];
const UNSUBSTITUTED_KEYS: &[&str] = &["repeat"];

/// A property value after token substitution. Nulls are dropped.
#[derive(Debug, Clone, PartialEq)]
enum Prop {
    Bool(bool),
    Number(serde_json::Number),
    Str(Substituted),
    Array(Vec<Prop>),
    Object(IndexMap<String, Prop>),
}

impl Prop {
    fn kind(&self) -> &'static str {
        match self {
            Prop::Bool(_) => "boolean",
            Prop::Number(_) => "number",
            Prop::Str(_) => "text",
            Prop::Array(_) => "array",
            Prop::Object(_) => "object",
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Prop::Bool(b) => Value::Bool(*b),
            Prop::Number(n) => n.as_i64().map_or_else(|| Value::Text(n.to_string()), Value::Integer),
            Prop::Str(Substituted::Typed(value)) => value.clone(),
            Prop::Str(Substituted::Text(text)) => Value::Text(text.clone()),
            Prop::Array(xs) => Value::List(xs.iter().map(Prop::to_value).collect()),
            Prop::Object(map) => Value::Map(map.iter().map(|(k, x)| (k.clone(), x.to_value())).collect()),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Props {
    source_id: String,
    position: Position,
    uid: Option<String>,
    classes: IndexSet<String>,
    attributes: IndexMap<String, String>,
    values: IndexMap<String, Prop>,
}

impl Props {
    /// Substitute what decides whether the node is resolved: `uid` and `active`.
    pub(crate) fn activation(node: &Node, source_id: &str, tokens: Tokens<'_>) -> Result<Self, ParseError> {
        let mut props = Self {
            source_id: source_id.to_string(),
            position: node.position,
            uid: None,
            classes: IndexSet::new(),
            attributes: IndexMap::new(),
            values: IndexMap::new(),
        };
        props.uid = node.uid.as_deref().map(|uid| props.text_of(tokens, uid)).transpose()?;
        for name in ACTIVATION_KEYS {
            props.bind(node, name, tokens)?;
        }
        Ok(props)
    }

    /// Substitute every remaining property, classes and attributes included.
    pub(crate) fn complete(mut self, node: &Node, tokens: Tokens<'_>) -> Result<Self, ParseError> {
        for class in &node.classes {
            let resolved = self.text_of(tokens, class)?;
            self.classes.extend(resolved.split_whitespace().map(str::to_string));
        }
        for (name, value) in &node.attributes {
            let resolved = self.text_of(tokens, value)?;
            self.attributes.insert(name.clone(), resolved);
        }
        for name in node.properties.keys() {
            if ACTIVATION_KEYS.contains(&name.as_str()) || UNSUBSTITUTED_KEYS.contains(&name.as_str()) {
                continue;
            }
            self.bind(node, name, tokens)?;
        }
        Ok(self)
    }

    pub(crate) fn fail(&self, reason: impl Into<String>) -> ParseError {
        ParseError::new(&self.source_id, self.position, reason)
    }

    pub(crate) fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    fn unresolved(&self, Unresolved(key): Unresolved) -> ParseError {
        self.fail(format!("value token [{{{{{key}}}}}] is not bound"))
    }

    fn text_of(&self, tokens: Tokens<'_>, text: &str) -> Result<String, ParseError> {
        tokens.text(text).map_err(|e| self.unresolved(e))
    }

    fn bind(&mut self, node: &Node, name: &str, tokens: Tokens<'_>) -> Result<(), ParseError> {
        if let Some(raw) = node.property(name)
            && let Some(prop) = self.substitute(name, raw, tokens)?
        {
            self.values.insert(name.to_string(), prop);
        }
        Ok(())
    }

    fn substitute(&self, name: &str, raw: &Raw, tokens: Tokens<'_>) -> Result<Option<Prop>, ParseError> {
        let prop = match raw {
            Raw::Null => return Ok(None),
            Raw::Bool(b) => Prop::Bool(*b),
            Raw::Number(n) => Prop::Number(n.clone()),
            Raw::Str(s) => Prop::Str(tokens.substitute(s).map_err(|e| self.unresolved(e))?),
            Raw::Array(xs) => {
                let mut items = Vec::with_capacity(xs.len());
                for x in xs {
                    items.extend(self.substitute(name, x, tokens)?);
                }
                Prop::Array(items)
            }
            Raw::Object(map) => {
                let mut entries = IndexMap::with_capacity(map.len());
                for (k, x) in map {
                    if let Some(prop) = self.substitute(name, x, tokens)? {
                        entries.insert(k.clone(), prop);
                    }
                }
                Prop::Object(entries)
            }
            Raw::Node(nested) => return Err(self.nested(name, nested)),
        };
        Ok(Some(prop))
    }

    /// No variant reads a component from a property; only `children` holds nodes.
    fn nested(&self, name: &str, nested: &Node) -> ParseError {
        match nested.kind.parse::<ComponentKind>() {
            Err(e) => ParseError::new(&self.source_id, nested.position, e.to_string()).with_cause(e),
            Ok(kind) => ParseError::new(
                &self.source_id,
                nested.position,
                format!("parameter [{name}] can not hold a component [{kind}], place it under [children]"),
            ),
        }
    }

    // ————————————————————————————————————————————————————————————————————————
    // SCALARS
    // ————————————————————————————————————————————————————————————————————————

    pub(crate) fn text(&self, name: &str) -> Result<Option<String>, ParseError> {
        let Some(prop) = self.values.get(name) else { return Ok(None) };
        match prop {
            Prop::Str(s) => Ok(Some(s.clone().into_text())),
            Prop::Number(n) => Ok(Some(n.to_string())),
            Prop::Bool(b) => Ok(Some(b.to_string())),
            other => Err(self.fail(format!("parameter [{name}] must be text, found {}", other.kind()))),
        }
    }

    pub(crate) fn text_or(&self, name: &str, default: &str) -> Result<String, ParseError> {
        Ok(self.text(name)?.unwrap_or_else(|| default.to_string()))
    }

    pub(crate) fn required_text(&self, name: &str) -> Result<String, ParseError> {
        self.text(name)?
            .ok_or_else(|| self.fail(format!("parameter [{name}] is expected but not set")))
    }

    pub(crate) fn bool(&self, name: &str, default: bool) -> Result<bool, ParseError> {
        let Some(prop) = self.values.get(name) else { return Ok(default) };
        let text = match prop {
            Prop::Bool(b) | Prop::Str(Substituted::Typed(Value::Bool(b))) => return Ok(*b),
            Prop::Str(s) => s.clone().into_text(),
            other => return Err(self.fail(format!("parameter [{name}] must be a boolean, found {}", other.kind()))),
        };
        match text.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            "" => Ok(default),
            _ => Err(self.fail(format!("parameter [{name}] must be a boolean, found [{text}]"))),
        }
    }

    pub(crate) fn int(&self, name: &str) -> Result<Option<i64>, ParseError> {
        let Some(prop) = self.values.get(name) else { return Ok(None) };
        let text = match prop {
            Prop::Number(n) => {
                return n
                    .as_i64()
                    .map(Some)
                    .ok_or_else(|| self.fail(format!("parameter [{name}] must be an integer, found [{n}]")));
            }
            Prop::Str(Substituted::Typed(Value::Integer(i))) => return Ok(Some(*i)),
            Prop::Str(s) => s.clone().into_text(),
            other => return Err(self.fail(format!("parameter [{name}] must be an integer, found {}", other.kind()))),
        };
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        text.parse::<i64>()
            .map(Some)
            .map_err(|e| self.fail(format!("parameter [{name}] must be an integer, found [{text}]")).with_cause(e))
    }

    pub(crate) fn unsigned(&self, name: &str) -> Result<Option<u32>, ParseError> {
        self.int(name)?
            .map(|i| u32::try_from(i).map_err(|e| self.fail(format!("parameter [{name}] must not be negative")).with_cause(e)))
            .transpose()
    }

    pub(crate) fn keyword<T>(&self, name: &str) -> Result<Option<T>, ParseError>
    where
        T: FromStr<Err = UnknownKeyword>,
    {
        self.text(name)?
            .map(|text| text.parse::<T>().map_err(|e| self.fail(format!("parameter [{name}]: {e}")).with_cause(e)))
            .transpose()
    }

    /// ISO `YYYY-MM-DD`; blank counts as unset.
    pub(crate) fn date(&self, name: &str) -> Result<Option<chrono::NaiveDate>, ParseError> {
        let Some(text) = self.text(name)? else { return Ok(None) };
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        chrono::NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| self.fail(format!("parameter [{name}] is not a valid date (YYYY-MM-DD): [{text}]")).with_cause(e))
    }

    // ————————————————————————————————————————————————————————————————————————
    // STRUCTURED
    // ————————————————————————————————————————————————————————————————————————

    /// Any property as table data. Whole value tokens keep the bound type.
    pub(crate) fn value(&self, name: &str) -> Option<Value> {
        self.values.get(name).map(Prop::to_value)
    }

    /// Attributes every container carries.
    pub(crate) fn common(&self, kind: ComponentKind, uid: String) -> Result<Common, ParseError> {
        let direction = match (self.keyword::<Direction>("direction")?, kind) {
            (Some(direction), _) => direction,
            (None, ComponentKind::Row) => Direction::Horizontal,
            (None, ComponentKind::Column) => Direction::Vertical,
            (None, _) => Direction::None,
        };
        Ok(Common {
            uid,
            classes: self.classes.clone(),
            attributes: self.attributes.clone(),
            direction,
            on_click: self.text_or("onClick", "")?,
            tooltip: self.text_or("tooltip", "")?,
            tooltip_position: self.keyword("tooltipPosition")?.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::TranslationProvider;
    use crate::locale::Locale;
    use crate::table::{OverlapPolicy, TableStack, ValueTable};
    use crate::tree::{self, Handling};
    use pretty_assertions::assert_eq;

    fn props(src: &str) -> Result<Props, ParseError> {
        let node = tree::parse("props.json", src).unwrap().root;
        let mut table = ValueTable::new();
        table
            .bind("on", true)
            .unwrap()
            .bind("three", 3)
            .unwrap()
            .bind("css", "wide  tall")
            .unwrap()
            .bind("choices", vec!["a", "b"])
            .unwrap();
        let stack = TableStack::merge(vec![table], OverlapPolicy::Override).unwrap();
        let provider = TranslationProvider::empty();
        let locale = Locale::english();
        let tokens = Tokens {
            tables: &stack,
            locale: &locale,
            provider: &provider,
            handling: Handling::Dynamic,
        };
        Props::activation(&node, "props.json", tokens)?.complete(&node, tokens)
    }

    fn with_props<R>(src: &str, f: impl FnOnce(&Props) -> R) -> R {
        f(&props(src).unwrap())
    }

    #[test]
    fn scalars_accept_literals_and_tokens() {
        let src = r#"{"type": "x", "a": true, "b": "{{on}}", "c": "FALSE", "n": 4, "m": "{{three}}", "s": " 7 "}"#;
        with_props(src, |p| {
            assert_eq!(p.bool("a", false).unwrap(), true);
            assert_eq!(p.bool("b", false).unwrap(), true);
            assert_eq!(p.bool("c", true).unwrap(), false);
            assert_eq!(p.bool("missing", true).unwrap(), true);
            assert_eq!(p.int("n").unwrap(), Some(4));
            assert_eq!(p.int("m").unwrap(), Some(3));
            assert_eq!(p.int("s").unwrap(), Some(7));
            assert_eq!(p.text("n").unwrap().as_deref(), Some("4"));
        });
    }

    #[test]
    fn type_mismatches_fail_at_node() {
        with_props(r#"{"type": "x", "a": [1], "b": "yes", "c": 1.5}"#, |p| {
            assert!(p.text("a").unwrap_err().reason.contains("must be text"));
            assert!(p.bool("b", false).unwrap_err().reason.contains("must be a boolean"));
            assert!(p.int("c").unwrap_err().reason.contains("must be an integer"));
            assert_eq!(
                p.required_text("nope").unwrap_err().reason,
                "parameter [nope] is expected but not set"
            );
        });
    }

    #[test]
    fn unbound_token_names_the_key() {
        let err = props(r#"{"type": "x", "t": "hi {{who}}"}"#).unwrap_err();
        assert_eq!(err.reason, "value token [{{who}}] is not bound");
    }

    #[test]
    fn every_property_is_substituted() {
        let err = props(r#"{"type": "x", "unread": {"deep": ["ok", "{{missing}}"]}}"#).unwrap_err();
        assert_eq!(err.reason, "value token [{{missing}}] is not bound");
        assert_eq!(err.position, Position::ROOT);

        let p = props(r#"{"type": "x", "repeat": "{{not-a-token-here}}"}"#).unwrap();
        assert_eq!(p.text("repeat").unwrap(), None);
    }

    #[test]
    fn activation_reads_only_uid_and_active() {
        let node = tree::parse("props.json", r#"{"type": "x", "uid": "u", "active": false, "t": "{{who}}"}"#)
            .unwrap()
            .root;
        let stack = TableStack::merge(vec![], OverlapPolicy::Override).unwrap();
        let provider = TranslationProvider::empty();
        let locale = Locale::english();
        let tokens = Tokens {
            tables: &stack,
            locale: &locale,
            provider: &provider,
            handling: Handling::Dynamic,
        };
        let gate = Props::activation(&node, "props.json", tokens).unwrap();
        assert_eq!(gate.uid(), Some("u"));
        assert_eq!(gate.bool("active", true).unwrap(), false);
        assert!(gate.complete(&node, tokens).is_err());
    }

    #[test]
    fn component_properties_are_rejected() {
        let err = props(r#"{"type": "content", "header": {"type": "bogus-kind"}}"#).unwrap_err();
        assert_eq!(err.reason, "unknown component type [bogus-kind]");
        assert_eq!(err.position, Position::new(1, 0));

        let err = props(r#"{"type": "content", "header": [{"type": "text", "text": "x"}]}"#).unwrap_err();
        assert_eq!(err.reason, "parameter [header] can not hold a component [text], place it under [children]");
    }

    #[test]
    fn dates_are_validated() {
        with_props(r#"{"type": "x", "ok": "2024-02-29", "bad": "2023-02-29", "blank": ""}"#, |p| {
            assert!(p.date("ok").unwrap().is_some());
            assert!(p.date("bad").is_err());
            assert_eq!(p.date("blank").unwrap(), None);
        });
    }

    #[test]
    fn common_attributes() {
        let src = r#"{"type": "row", "classes": ["{{css}}", "", "wide"], "attributes": {"k": "{{three}}"}, "tooltip": "tip"}"#;
        with_props(src, |p| {
            let common = p.common(ComponentKind::Row, "r1".into()).unwrap();
            assert_eq!(common.classes.iter().collect::<Vec<_>>(), vec!["wide", "tall"]);
            assert_eq!(common.attributes["k"], "3");
            assert_eq!(common.direction, Direction::Horizontal);
            assert_eq!(common.tooltip, "tip");
        });
    }

    #[test]
    fn structured_values() {
        with_props(r#"{"type": "x", "o": "{{choices}}", "lit": [{"text": "A", "value": "a"}, null]}"#, |p| {
            assert_eq!(p.value("o"), Some(Value::from(vec!["a", "b"])));
            let Some(Value::List(lit)) = p.value("lit") else { panic!("expected list") };
            assert_eq!(lit.len(), 1);
        });
    }
}
