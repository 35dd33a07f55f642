//! Structural parse of template JSON into an order preserving node tree.
//!
//! Nothing is resolved here. The parser only checks that the text is JSON,
//! that every node carries a string `type`, and that the reserved keys have
//! the right shape.
use indexmap::IndexMap;
use serde_json::Value as Json;

use crate::error::{ParseError, Position};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// Whether value tokens are resolved in a template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Handling {
    /// Value tokens stay verbatim; translation tokens still resolve.
    Static,
    #[default]
    Dynamic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub source_id: String,
    pub handling: Handling,
    pub root: Node,
}

/// One JSON object of the template.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// The discriminator exactly as written.
    pub kind: String,
    pub uid: Option<String>,
    pub classes: Vec<String>,
    pub attributes: IndexMap<String, String>,
    pub properties: IndexMap<String, Raw>,
    pub children: Vec<Node>,
    pub position: Position,
}

/// A property value before resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Raw {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Str(String),
    Array(Vec<Raw>),
    Node(Box<Node>),
    Object(IndexMap<String, Raw>),
}

impl Node {
    pub fn property(&self, name: &str) -> Option<&Raw> {
        self.properties.get(name)
    }
}

impl Raw {
    pub fn kind(&self) -> &'static str {
        match self {
            Raw::Null => "null",
            Raw::Bool(_) => "boolean",
            Raw::Number(_) => "number",
            Raw::Str(_) => "text",
            Raw::Array(_) => "array",
            Raw::Node(_) => "node",
            Raw::Object(_) => "object",
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// PARSING
// ————————————————————————————————————————————————————————————————————————————

pub const RESERVED_KEYS: &[&str] = &["type", "uid", "classes", "attributes", "children"];

/// Parse a template document: a bare node or a `{handling, root}` envelope.
pub fn parse(source_id: &str, text: &str) -> Result<Template, ParseError> {
    let json: Json = serde_json::from_str(text).map_err(|error| {
        ParseError::new(
            source_id,
            Position::ROOT,
            format!("malformed JSON at line {} column {}", error.line(), error.column()),
        )
        .with_cause(error)
    })?;
    let parser = TreeParser { source_id };
    let Json::Object(object) = &json else {
        return Err(parser.fail(Position::ROOT, format!("template must be a JSON object, found {}", json_kind(&json))));
    };

    let (handling, root) = if is_envelope(object) {
        parser.envelope(object)?
    } else {
        (Handling::Dynamic, &json)
    };
    let root = parser.node(root, Position::ROOT)?;
    tracing::trace!(source = source_id, kind = %root.kind, "template parsed");
    Ok(Template {
        source_id: source_id.to_string(),
        handling,
        root,
    })
}

fn is_envelope(object: &serde_json::Map<String, Json>) -> bool {
    !object.contains_key("type") && (object.contains_key("handling") || object.contains_key("root"))
}

struct TreeParser<'s> {
    source_id: &'s str,
}

impl<'s> TreeParser<'s> {
    fn fail(&self, position: Position, reason: impl Into<String>) -> ParseError {
        ParseError::new(self.source_id, position, reason)
    }

    fn envelope<'j>(&self, object: &'j serde_json::Map<String, Json>) -> Result<(Handling, &'j Json), ParseError> {
        let handling = match object.get("handling") {
            None => return Err(self.fail(Position::ROOT, "template envelope has no [handling]")),
            Some(Json::String(s)) if s.trim().is_empty() => {
                return Err(self.fail(Position::ROOT, "template [handling] is blank"));
            }
            Some(Json::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "static" => Handling::Static,
                "dynamic" => Handling::Dynamic,
                other => return Err(self.fail(Position::ROOT, format!("unknown template handling [{other}]"))),
            },
            Some(other) => {
                return Err(self.fail(
                    Position::ROOT,
                    format!("template [handling] must be text, found {}", json_kind(other)),
                ));
            }
        };
        let root = object
            .get("root")
            .ok_or_else(|| self.fail(Position::ROOT, "template envelope has no [root]"))?;
        Ok((handling, root))
    }

    fn node(&self, json: &Json, position: Position) -> Result<Node, ParseError> {
        let Json::Object(object) = json else {
            return Err(self.fail(position, format!("expected a node object, found {}", json_kind(json))));
        };
        let kind = match object.get("type") {
            Some(Json::String(kind)) if !kind.trim().is_empty() => kind.trim().to_string(),
            Some(Json::String(_)) => return Err(self.fail(position, "node [type] is blank")),
            Some(other) => {
                return Err(self.fail(position, format!("node [type] must be text, found {}", json_kind(other))));
            }
            None => return Err(self.fail(position, "node has no [type]")),
        };

        let uid = match object.get("uid") {
            None | Some(Json::Null) => None,
            Some(Json::String(uid)) => Some(uid.clone()),
            Some(other) => {
                return Err(self.fail(position, format!("node [uid] must be text, found {}", json_kind(other))));
            }
        };

        let classes = match object.get("classes") {
            None | Some(Json::Null) => Vec::new(),
            Some(Json::Array(xs)) => xs
                .iter()
                .map(|x| match x {
                    Json::String(s) => Ok(s.clone()),
                    other => Err(self.fail(position, format!("[classes] entries must be text, found {}", json_kind(other)))),
                })
                .collect::<Result<_, _>>()?,
            Some(other) => {
                return Err(self.fail(position, format!("[classes] must be an array, found {}", json_kind(other))));
            }
        };

        let attributes = match object.get("attributes") {
            None | Some(Json::Null) => IndexMap::new(),
            Some(Json::Object(map)) => map
                .iter()
                .map(|(k, v)| match v {
                    Json::String(s) => Ok((k.clone(), s.clone())),
                    Json::Number(n) => Ok((k.clone(), n.to_string())),
                    Json::Bool(b) => Ok((k.clone(), b.to_string())),
                    other => Err(self.fail(
                        position,
                        format!("attribute [{k}] must be a scalar, found {}", json_kind(other)),
                    )),
                })
                .collect::<Result<_, _>>()?,
            Some(other) => {
                return Err(self.fail(position, format!("[attributes] must be an object, found {}", json_kind(other))));
            }
        };

        let children = match object.get("children") {
            None | Some(Json::Null) => Vec::new(),
            Some(Json::Array(xs)) => xs
                .iter()
                .enumerate()
                .map(|(i, x)| self.node(x, position.child(i)))
                .collect::<Result<_, _>>()?,
            Some(other) => {
                return Err(self.fail(position, format!("[children] must be an array, found {}", json_kind(other))));
            }
        };

        // Property slots are numbered after the children so the two never share a position.
        let mut properties = IndexMap::new();
        for (i, (name, json)) in object
            .iter()
            .filter(|(name, _)| !RESERVED_KEYS.contains(&name.as_str()))
            .enumerate()
        {
            properties.insert(name.clone(), self.raw(json, position.child(children.len() + i))?);
        }

        Ok(Node {
            kind,
            uid,
            classes,
            attributes,
            properties,
            children,
            position,
        })
    }

    /// Nodes nested anywhere inside one property share that property's slot.
    fn raw(&self, json: &Json, slot: Position) -> Result<Raw, ParseError> {
        Ok(match json {
            Json::Null => Raw::Null,
            Json::Bool(b) => Raw::Bool(*b),
            Json::Number(n) => Raw::Number(n.clone()),
            Json::String(s) => Raw::Str(s.clone()),
            Json::Array(xs) => Raw::Array(xs.iter().map(|x| self.raw(x, slot)).collect::<Result<_, _>>()?),
            Json::Object(map) if map.contains_key("type") => Raw::Node(Box::new(self.node(json, slot)?)),
            Json::Object(map) => Raw::Object(
                map.iter()
                    .map(|(k, v)| Ok((k.clone(), self.raw(v, slot)?)))
                    .collect::<Result<_, ParseError>>()?,
            ),
        })
    }
}

fn json_kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "text",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
