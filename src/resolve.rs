//! Tree resolution: intermediate nodes plus value tables, locale and
//! translations in, typed components out.
//!
//! A resolution is a pure function of its inputs apart from generated
//! identifiers. Every failure aborts the whole resolution; no partial tree is
//! ever returned.
pub mod ids;
mod props;
mod tokens;

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::component::input::{
    Choice, DateInput, HiddenInput, NumberInput, Password, Slider, Switch, Textarea, Textfield,
};
use crate::component::{
    Audio, Button, ButtonBar, ChoiceOption, Component, ComponentKind, Content, Form, Heading, Hidden, Image, Input,
    InputCommon, Link, Modal, Split, Tab, TabItem, Text,
};
use crate::error::{ParseError, Position, TableError};
use crate::i18n::{self, TranslationProvider};
use crate::locale::Locale;
use crate::source::TemplateSource;
use crate::table::{OverlapPolicy, TableStack, ValueTable};
use crate::tree::{self, Handling, Node, Raw, Template};
use crate::value::Value;

pub use ids::IdSource;

use ids::IdGen;
use props::Props;
use tokens::Tokens;

pub const DEFAULT_MAX_INCLUDE_DEPTH: usize = 8;

// ————————————————————————————————————————————————————————————————————————————
// RESOLVER
// ————————————————————————————————————————————————————————————————————————————

/// The resolved root and how long it took.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub root: Component,
    #[serde(skip)]
    pub elapsed: Duration,
}

/// Everything one resolution reads. Reusable across templates.
pub struct Resolver<'a> {
    provider: &'a TranslationProvider,
    tables: Vec<ValueTable>,
    locale: Locale,
    ids: IdSource,
    overlap: OverlapPolicy,
    templates: Option<&'a dyn TemplateSource>,
    max_include_depth: usize,
}

impl Default for Resolver<'static> {
    /// Reads translations from the process-wide provider.
    fn default() -> Self {
        Resolver::new(i18n::global())
    }
}

impl<'a> Resolver<'a> {
    pub fn new(provider: &'a TranslationProvider) -> Self {
        Self {
            provider,
            tables: Vec::new(),
            locale: Locale::default(),
            ids: IdSource::default(),
            overlap: OverlapPolicy::default(),
            templates: None,
            max_include_depth: DEFAULT_MAX_INCLUDE_DEPTH,
        }
    }

    /// Add a value table. Tables are sealed on the way in; supply order
    /// breaks precedence ties.
    pub fn with_table(mut self, table: ValueTable) -> Self {
        self.tables.push(table.sealed());
        self
    }

    pub fn with_tables(mut self, tables: impl IntoIterator<Item = ValueTable>) -> Self {
        self.tables.extend(tables.into_iter().map(ValueTable::sealed));
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_ids(mut self, ids: IdSource) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_overlap_policy(mut self, overlap: OverlapPolicy) -> Self {
        self.overlap = overlap;
        self
    }

    pub fn with_templates(mut self, templates: &'a dyn TemplateSource) -> Self {
        self.templates = Some(templates);
        self
    }

    pub fn with_max_include_depth(mut self, depth: usize) -> Self {
        self.max_include_depth = depth;
        self
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Parse then resolve.
    pub fn resolve_str(&self, source_id: &str, text: &str) -> Result<Resolution, ParseError> {
        let template = tree::parse(source_id, text)?;
        self.resolve(&template)
    }

    pub fn resolve(&self, template: &Template) -> Result<Resolution, ParseError> {
        let started = Instant::now();
        let stack = TableStack::merge(self.tables.clone(), self.overlap).map_err(|error| {
            let reason = format!("value tables can not be merged: {error}");
            ParseError::new(&template.source_id, Position::ROOT, reason).with_cause(error)
        })?;
        tracing::debug!(
            source = %template.source_id,
            locale = %self.locale,
            tables = stack.depth(),
            "resolving template"
        );

        let mut walk = Walk {
            provider: self.provider,
            locale: &self.locale,
            templates: self.templates,
            max_include_depth: self.max_include_depth,
            stack,
            ids: IdGen::new(self.ids.clone()),
            source_id: template.source_id.clone(),
            handling: template.handling,
            includes: 0,
        };
        let root = walk.root(&template.root)?;
        let elapsed = started.elapsed();
        tracing::debug!(source = %template.source_id, ?elapsed, "template resolved");
        Ok(Resolution { root, elapsed })
    }
}

// ————————————————————————————————————————————————————————————————————————————
// WALK
// ————————————————————————————————————————————————————————————————————————————

/// What one node turned into. Parents pick the variants they accept.
enum Built {
    Component(Component),
    Input(Input),
    Option(ChoiceOption),
    TabItem(TabItem),
    Inactive,
}

impl Built {
    fn describe(&self) -> &'static str {
        match self {
            Built::Component(_) => "component",
            Built::Input(_) => "input",
            Built::Option(_) => "option",
            Built::TabItem(_) => "tab item",
            Built::Inactive => "inactive node",
        }
    }
}

struct Walk<'r> {
    provider: &'r TranslationProvider,
    locale: &'r Locale,
    templates: Option<&'r dyn TemplateSource>,
    max_include_depth: usize,
    stack: TableStack,
    ids: IdGen,
    source_id: String,
    handling: Handling,
    includes: usize,
}

impl<'r> Walk<'r> {
    fn fail(&self, node: &Node, reason: impl Into<String>) -> ParseError {
        ParseError::new(&self.source_id, node.position, reason)
    }

    fn tokens(&self) -> Tokens<'_> {
        Tokens {
            tables: &self.stack,
            locale: self.locale,
            provider: self.provider,
            handling: self.handling,
        }
    }

    fn kind(&self, node: &Node) -> Result<ComponentKind, ParseError> {
        node.kind
            .parse::<ComponentKind>()
            .map_err(|e| self.fail(node, e.to_string()).with_cause(e))
    }

    fn root(&mut self, node: &Node) -> Result<Component, ParseError> {
        let kind = self.kind(node)?;
        if !kind.is_container() {
            return Err(self.fail(node, format!("component [{kind}] can not be a template root")));
        }
        if node.property("repeat").is_some() {
            return Err(self.fail(node, "the template root can not repeat"));
        }
        let mut built = self.single(node, kind, None, None)?;
        match (built.pop(), built.is_empty()) {
            (Some(Built::Component(component)), true) => Ok(component),
            (Some(Built::Inactive), true) => Ok(Component::Empty),
            (Some(other), _) => Err(self.fail(node, format!("template root resolved to {}", other.describe()))),
            (None, _) => Ok(Component::Empty),
        }
    }

    /// Resolve a child of `parent`, expanding repetition.
    fn expand(&mut self, node: &Node, parent: ComponentKind) -> Result<Vec<Built>, ParseError> {
        let kind = self.kind(node)?;
        if !parent.allows(kind) {
            return Err(self.fail(node, format!("component [{kind}] is not allowed inside [{parent}]")));
        }
        let Some(repeat) = node.property("repeat") else {
            return self.single(node, kind, Some(parent), None);
        };

        let Raw::Str(key) = repeat else {
            return Err(self.fail(node, format!("[repeat] must name a bound list, found {}", repeat.kind())));
        };
        let key = key.trim().trim_start_matches("{{").trim_end_matches("}}").trim();
        let items = match self.stack.lookup(key) {
            Some(Value::List(items)) => items.clone(),
            Some(other) => {
                return Err(self.fail(node, format!("repeat source [{key}] must be a list, found {}", other.kind())));
            }
            None => return Err(self.fail(node, format!("repeat source [{key}] is not bound"))),
        };
        tracing::trace!(position = %node.position, %kind, key, count = items.len(), "repeating node");

        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let scope = scope_table(item).map_err(|e| {
                self.fail(node, format!("repeat element {index} of [{key}] can not be scoped: {e}"))
                    .with_cause(e)
            })?;
            self.stack.push_scope(scope);
            let built = self.single(node, kind, Some(parent), Some(index));
            self.stack.pop_scope();
            out.extend(built?);
        }
        Ok(out)
    }

    fn single(
        &mut self,
        node: &Node,
        kind: ComponentKind,
        parent: Option<ComponentKind>,
        index: Option<usize>,
    ) -> Result<Vec<Built>, ParseError> {
        let gate = Props::activation(node, &self.source_id, self.tokens())?;
        let explicit_uid = gate.uid().map(|uid| match index {
            Some(i) => format!("{uid}-{i}"),
            None => uid.to_string(),
        });
        let active = gate.bool("active", true)?
            && explicit_uid.as_deref().is_none_or(|uid| self.stack.is_active(uid));
        if !active {
            tracing::trace!(position = %node.position, %kind, uid = ?explicit_uid, "inactive node");
            return Ok(vec![Built::Inactive]);
        }
        let p = gate.complete(node, self.tokens())?;

        match kind {
            ComponentKind::Include => return self.include(node, &p, parent),
            ComponentKind::Option => return Ok(vec![Built::Option(self.option(node, &p)?)]),
            _ => {}
        }

        let uid = explicit_uid.unwrap_or_else(|| self.ids.next());
        tracing::trace!(source = %self.source_id, position = %node.position, %kind, uid = %uid, "resolving node");

        let built = if parent == Some(ComponentKind::Form) {
            Built::Input(self.input(node, &p, kind, uid)?)
        } else if kind == ComponentKind::TabItem {
            Built::TabItem(self.tab_item(node, &p, uid)?)
        } else {
            Built::Component(self.component(node, &p, kind, uid)?)
        };
        Ok(vec![built])
    }

    // ————————————————————————————————————————————————————————————————————————
    // CHILD COLLECTION
    // ————————————————————————————————————————————————————————————————————————

    fn children(&mut self, node: &Node, kind: ComponentKind) -> Result<Vec<(usize, Built)>, ParseError> {
        let mut out = Vec::new();
        for (i, child) in node.children.iter().enumerate() {
            out.extend(self.expand(child, kind)?.into_iter().map(|b| (i, b)));
        }
        Ok(out)
    }

    fn mismatch(&self, node: &Node, i: usize, kind: ComponentKind, built: &Built) -> ParseError {
        let child = node.children.get(i).unwrap_or(node);
        self.fail(child, format!("[{kind}] can not hold a resolved {}", built.describe()))
    }

    /// Inactive children become `empty`.
    fn components(&mut self, node: &Node, kind: ComponentKind) -> Result<Vec<Component>, ParseError> {
        self.children(node, kind)?
            .into_iter()
            .map(|(i, built)| match built {
                Built::Component(component) => Ok(component),
                Built::Inactive => Ok(Component::Empty),
                other => Err(self.mismatch(node, i, kind, &other)),
            })
            .collect()
    }

    /// Inactive inputs are dropped.
    fn inputs(&mut self, node: &Node) -> Result<Vec<Input>, ParseError> {
        let kind = ComponentKind::Form;
        let mut inputs = Vec::new();
        for (i, built) in self.children(node, kind)? {
            match built {
                Built::Input(input) => inputs.push(input),
                Built::Inactive => {}
                other => return Err(self.mismatch(node, i, kind, &other)),
            }
        }
        Ok(inputs)
    }

    fn at_most_one(&mut self, node: &Node, kind: ComponentKind) -> Result<Option<Component>, ParseError> {
        let mut children = self.components(node, kind)?;
        if children.len() > 1 {
            return Err(self.fail(node, format!("[{kind}] accepts a single child, found {}", children.len())));
        }
        Ok(children.pop())
    }

    fn no_children(&self, node: &Node, kind: ComponentKind) -> Result<(), ParseError> {
        match node.children.first() {
            None => Ok(()),
            Some(child) => {
                let child_kind = self.kind(child)?;
                Err(self.fail(child, format!("component [{child_kind}] is not allowed inside [{kind}]")))
            }
        }
    }

    // ————————————————————————————————————————————————————————————————————————
    // CONTAINERS
    // ————————————————————————————————————————————————————————————————————————

    fn component(&mut self, node: &Node, p: &Props, kind: ComponentKind, uid: String) -> Result<Component, ParseError> {
        use ComponentKind as K;
        let component = match kind {
            K::Content | K::Row | K::Column => {
                let children = self.components(node, kind)?;
                Component::Content(Content {
                    common: p.common(kind, uid)?,
                    children,
                })
            }
            K::Split => {
                let children = self.components(node, kind)?;
                let common = p.common(kind, uid)?;
                Component::Split(Split::from_children(common, children))
            }
            K::Tab => {
                let mut items = Vec::new();
                for (i, built) in self.children(node, kind)? {
                    match built {
                        Built::TabItem(item) => items.push(item),
                        Built::Inactive => {}
                        other => return Err(self.mismatch(node, i, kind, &other)),
                    }
                }
                Component::Tab(Tab {
                    common: p.common(kind, uid)?,
                    disabled: p.bool("disabled", false)?,
                    items,
                })
            }
            K::Form => {
                let inputs = self.inputs(node)?;
                let mut common = p.common(kind, uid)?;
                if let Some(button) = p.text("connectedBtn")? {
                    common.attributes.insert("connected-btn".to_string(), button);
                }
                Component::Form(Form { common, inputs })
            }
            K::Heading => {
                self.no_children(node, kind)?;
                Component::Heading(Heading {
                    common: p.common(kind, uid)?,
                    text: p.required_text("text")?,
                    level: p.int("level")?.map_or(Heading::DEFAULT_LEVEL, Heading::clamp_level),
                })
            }
            K::Text => {
                self.no_children(node, kind)?;
                Component::Text(Self::text(p, uid)?)
            }
            K::Link => {
                let text = match self.at_most_one(node, kind)? {
                    Some(Component::Text(text)) => Some(text),
                    Some(Component::Empty) | None => None,
                    Some(other) => {
                        return Err(self.fail(node, format!("[link] expects a text child, found {}", kind_of(&other))));
                    }
                };
                Component::Link(Link {
                    common: p.common(kind, uid)?,
                    href: p.required_text("href")?,
                    target: p.text_or("target", "_self")?,
                    text,
                })
            }
            K::Image => {
                self.no_children(node, kind)?;
                Component::Image(Image {
                    common: p.common(kind, uid)?,
                    src: p.required_text("src")?,
                    alt: p.text_or("alt", "")?,
                })
            }
            K::Audio => {
                self.no_children(node, kind)?;
                Component::Audio(Audio {
                    common: p.common(kind, uid)?,
                    src: p.required_text("src")?,
                    controls: p.bool("controls", false)?,
                    autoplay: p.bool("autoplay", false)?,
                })
            }
            K::Button => {
                self.no_children(node, kind)?;
                Component::Button(Self::button(p, uid)?)
            }
            K::ButtonBar => {
                let mut buttons = Vec::new();
                for component in self.components(node, kind)? {
                    match component {
                        Component::Button(button) => buttons.push(button),
                        Component::Empty => {}
                        other => {
                            return Err(self.fail(node, format!("[button-bar] holds buttons only, found {}", kind_of(&other))));
                        }
                    }
                }
                Component::ButtonBar(ButtonBar {
                    common: p.common(kind, uid)?,
                    buttons,
                })
            }
            K::Hidden => {
                let child = self.at_most_one(node, kind)?.map(Box::new);
                Component::Hidden(Hidden {
                    common: p.common(kind, uid)?,
                    child,
                })
            }
            K::Modal => {
                let children = self.components(node, kind)?;
                Component::Modal(Modal {
                    common: p.common(kind, uid)?,
                    title: p.required_text("title")?,
                    close_on_overlay_click: p.bool("closeOnOverlayClick", true)?,
                    children,
                })
            }
            K::Empty => {
                self.no_children(node, kind)?;
                Component::Empty
            }
            other => {
                return Err(self.fail(node, format!("[{other}] can only be placed inside a matching parent")));
            }
        };
        Ok(component)
    }

    fn text(p: &Props, uid: String) -> Result<Text, ParseError> {
        Ok(Text {
            common: p.common(ComponentKind::Text, uid)?,
            text: p.required_text("text")?,
            inline: p.bool("inline", false)?,
        })
    }

    fn button(p: &Props, uid: String) -> Result<Button, ParseError> {
        Ok(Button {
            common: p.common(ComponentKind::Button, uid)?,
            text: p.required_text("text")?,
            btn_class: p.keyword("btnClass")?.unwrap_or_default(),
        })
    }

    fn tab_item(&mut self, node: &Node, p: &Props, uid: String) -> Result<TabItem, ParseError> {
        let mut body = self.components(node, ComponentKind::TabItem)?;
        if body.len() != 1 {
            return Err(self.fail(node, format!("[tab-item] expects exactly one child, found {}", body.len())));
        }
        let text = p.required_text("text")?;
        let body = body.pop().unwrap_or(Component::Empty);
        Ok(TabItem {
            uid,
            text,
            body: Box::new(body),
        })
    }

    // ————————————————————————————————————————————————————————————————————————
    // INPUTS
    // ————————————————————————————————————————————————————————————————————————

    fn input(&mut self, node: &Node, p: &Props, kind: ComponentKind, uid: String) -> Result<Input, ParseError> {
        use ComponentKind as K;
        let options = match kind {
            K::Checkbox | K::Radio | K::Select => self.options(node, p, kind)?,
            _ => {
                self.no_children(node, kind)?;
                Vec::new()
            }
        };

        let name = p.required_text("name")?;
        let base = InputCommon {
            common: p.common(kind, uid)?,
            submit_as: p.text("submitAs")?.unwrap_or_else(|| name.clone()),
            on_input: p.text_or("onInput", "")?,
            info_text: p.text_or("infoText", "")?,
            name,
        };

        let input = match kind {
            K::Textfield => Input::Textfield(Textfield {
                base,
                value: p.text_or("value", "")?,
                placeholder: p.text_or("placeholder", "")?,
                prefix: p.text_or("prefix", "")?,
                suffix: p.text_or("suffix", "")?,
                max_chars: p.unsigned("maxChars")?,
            }),
            K::Textarea => Input::Textarea(Textarea {
                base,
                value: p.text_or("value", "")?,
                placeholder: p.text_or("placeholder", "")?,
                rows: p.unsigned("rows")?,
            }),
            K::Password => Input::Password(Password {
                base,
                placeholder: p.text_or("placeholder", "")?,
            }),
            K::Number => Input::Number(NumberInput {
                base,
                value: p.int("value")?,
                min: p.int("min")?,
                max: p.int("max")?,
                step: p.int("step")?,
            }),
            K::Slider => {
                let min = p.int("min")?.unwrap_or(Slider::DEFAULT_MIN);
                let max = p.int("max")?.unwrap_or(Slider::DEFAULT_MAX);
                if min > max {
                    return Err(p.fail(format!("slider [min] {min} exceeds [max] {max}")));
                }
                let value = p.int("value")?.unwrap_or(min).clamp(min, max);
                Input::Slider(Slider { base, value, min, max })
            }
            K::Checkbox => Input::Checkbox(Choice { base, options }),
            K::Radio => Input::Radio(Choice { base, options }),
            K::Select => Input::Select(Choice { base, options }),
            K::Switch => Input::Switch(Switch {
                base,
                checked: p.bool("checked", false)?,
            }),
            K::Date => {
                let value = p.date("value")?;
                let min = p.date("min")?;
                let max = p.date("max")?;
                if let (Some(min), Some(max)) = (min, max)
                    && min > max
                {
                    return Err(p.fail(format!("date [min] {min} is after [max] {max}")));
                }
                let iso = |d: Option<chrono::NaiveDate>| d.map(|d| d.format("%Y-%m-%d").to_string());
                Input::Date(DateInput {
                    base,
                    value: iso(value),
                    min: iso(min),
                    max: iso(max),
                })
            }
            K::Hidden => Input::Hidden(HiddenInput {
                base,
                value: p.text_or("value", "")?,
            }),
            other => return Err(p.fail(format!("[{other}] is not a form input"))),
        };
        Ok(input)
    }

    /// `option` children first, then any list bound through `options`.
    fn options(&mut self, node: &Node, p: &Props, kind: ComponentKind) -> Result<Vec<ChoiceOption>, ParseError> {
        let mut options = Vec::new();
        for (i, built) in self.children(node, kind)? {
            match built {
                Built::Option(option) => options.push(option),
                Built::Inactive => {}
                other => return Err(self.mismatch(node, i, kind, &other)),
            }
        }

        match p.value("options") {
            None => {}
            Some(Value::List(items)) => {
                for item in items {
                    options.push(bound_option(item).map_err(|reason| p.fail(reason))?);
                }
            }
            Some(other) => return Err(p.fail(format!("[options] must be a list, found {}", other.kind()))),
        }
        Ok(options)
    }

    fn option(&self, node: &Node, p: &Props) -> Result<ChoiceOption, ParseError> {
        self.no_children(node, ComponentKind::Option)?;
        Ok(ChoiceOption {
            text: p.required_text("text")?,
            value: p.required_text("value")?,
            checked: p.bool("checked", false)?,
        })
    }

    // ————————————————————————————————————————————————————————————————————————
    // INCLUDES
    // ————————————————————————————————————————————————————————————————————————

    fn include(&mut self, node: &Node, p: &Props, parent: Option<ComponentKind>) -> Result<Vec<Built>, ParseError> {
        let path = p.required_text("path")?;
        let source_key = p.text("source")?;
        let Some(templates) = self.templates else {
            return Err(self.fail(node, format!("no template source configured to include [{path}]")));
        };
        if self.includes >= self.max_include_depth {
            return Err(self.fail(
                node,
                format!("include of [{path}] exceeds the include depth of {}", self.max_include_depth),
            ));
        }
        let text = templates
            .load(&path)
            .map_err(|e| self.fail(node, format!("included template [{path}] can not be loaded")).with_cause(e))?;
        let template = tree::parse(&path, &text)?;

        let scope = match source_key {
            None => None,
            Some(key) => match self.stack.lookup(&key) {
                Some(value @ Value::Map(_)) => Some(scope_table(value.clone()).map_err(|e| {
                    self.fail(node, format!("include source [{key}] can not be scoped: {e}"))
                        .with_cause(e)
                })?),
                Some(other) => {
                    return Err(self.fail(node, format!("include source [{key}] must be a map, found {}", other.kind())));
                }
                None => return Err(self.fail(node, format!("include source [{key}] is not bound"))),
            },
        };
        let scoped = scope.is_some();
        if let Some(scope) = scope {
            self.stack.push_scope(scope);
        }
        tracing::debug!(from = %self.source_id, path = %path, depth = self.includes + 1, "including template");

        let outer_source = std::mem::replace(&mut self.source_id, path);
        let outer_handling = std::mem::replace(&mut self.handling, template.handling);
        self.includes += 1;
        let result = match parent {
            Some(parent) => self.expand(&template.root, parent),
            None => self.root(&template.root).map(|root| vec![Built::Component(root)]),
        };
        self.includes -= 1;
        self.handling = outer_handling;
        self.source_id = outer_source;
        if scoped {
            self.stack.pop_scope();
        }
        result
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// Map elements bind their entries; anything else binds as `item`.
fn scope_table(value: Value) -> Result<ValueTable, TableError> {
    let mut table = ValueTable::new();
    match value {
        Value::Map(map) => {
            for (key, value) in map {
                table.bind(key, value)?;
            }
        }
        other => {
            table.bind("item", other)?;
        }
    }
    Ok(table.sealed())
}

fn bound_option(item: Value) -> Result<ChoiceOption, String> {
    match item {
        Value::Map(map) => {
            let text = map
                .get("text")
                .map(Value::to_string)
                .ok_or_else(|| "bound option has no [text]".to_string())?;
            let value = map.get("value").map_or_else(|| text.clone(), Value::to_string);
            let checked = match map.get("checked") {
                None => false,
                Some(Value::Bool(b)) => *b,
                Some(other) => return Err(format!("bound option [checked] must be a boolean, found {}", other.kind())),
            };
            Ok(ChoiceOption { text, value, checked })
        }
        Value::Text(text) => Ok(ChoiceOption {
            value: text.clone(),
            text,
            checked: false,
        }),
        other => Err(format!("bound options must be maps or text, found {}", other.kind())),
    }
}

fn kind_of(component: &Component) -> &'static str {
    match component {
        Component::Content(_) => "content",
        Component::Split(_) => "split",
        Component::Tab(_) => "tab",
        Component::Form(_) => "form",
        Component::Heading(_) => "heading",
        Component::Text(_) => "text",
        Component::Link(_) => "link",
        Component::Image(_) => "image",
        Component::Audio(_) => "audio",
        Component::Button(_) => "button",
        Component::ButtonBar(_) => "button-bar",
        Component::Hidden(_) => "hidden",
        Component::Modal(_) => "modal",
        Component::Empty => "empty",
    }
}
