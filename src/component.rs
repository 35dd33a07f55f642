//! The resolved component tree.
//!
//! One variant per discriminator. Every variant is built once by the resolver
//! and never mutated afterwards. Serialization produces the `type` tagged JSON
//! shape the HTML serializer consumes.
pub mod input;

use std::fmt;
use std::str::FromStr;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

pub use input::{ChoiceOption, Input, InputCommon};

// ————————————————————————————————————————————————————————————————————————————
// DISCRIMINATORS
// ————————————————————————————————————————————————————————————————————————————

/// Every discriminator a template node may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Content,
    Row,
    Column,
    Split,
    Tab,
    TabItem,
    Form,
    Heading,
    Text,
    Link,
    Image,
    Audio,
    Button,
    ButtonBar,
    Hidden,
    Modal,
    Empty,
    /// Include of another template by path.
    Include,
    Textfield,
    Textarea,
    Password,
    Number,
    Slider,
    Checkbox,
    Radio,
    Select,
    Switch,
    Date,
    Option,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown component type [{0}]")]
pub struct UnknownKind(pub String);

impl FromStr for ComponentKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let kind = match normalized.as_str() {
            "content" => ComponentKind::Content,
            "row" => ComponentKind::Row,
            "column" => ComponentKind::Column,
            "split" | "splitted" => ComponentKind::Split,
            "tab" => ComponentKind::Tab,
            "tab-item" => ComponentKind::TabItem,
            "form" => ComponentKind::Form,
            "heading" => ComponentKind::Heading,
            "text" => ComponentKind::Text,
            "link" => ComponentKind::Link,
            "image" => ComponentKind::Image,
            "audio" => ComponentKind::Audio,
            "button" => ComponentKind::Button,
            "button-bar" => ComponentKind::ButtonBar,
            "hidden" => ComponentKind::Hidden,
            "modal" => ComponentKind::Modal,
            "empty" => ComponentKind::Empty,
            "component" => ComponentKind::Include,
            "textfield" => ComponentKind::Textfield,
            "textarea" => ComponentKind::Textarea,
            "password" => ComponentKind::Password,
            "number" => ComponentKind::Number,
            "slider" => ComponentKind::Slider,
            "checkbox" => ComponentKind::Checkbox,
            "radio" => ComponentKind::Radio,
            "select" => ComponentKind::Select,
            "switch" => ComponentKind::Switch,
            "date" => ComponentKind::Date,
            "option" => ComponentKind::Option,
            _ => return Err(UnknownKind(s.to_string())),
        };
        Ok(kind)
    }
}

impl ComponentKind {
    pub fn name(&self) -> &'static str {
        match self {
            ComponentKind::Content => "content",
            ComponentKind::Row => "row",
            ComponentKind::Column => "column",
            ComponentKind::Split => "split",
            ComponentKind::Tab => "tab",
            ComponentKind::TabItem => "tab-item",
            ComponentKind::Form => "form",
            ComponentKind::Heading => "heading",
            ComponentKind::Text => "text",
            ComponentKind::Link => "link",
            ComponentKind::Image => "image",
            ComponentKind::Audio => "audio",
            ComponentKind::Button => "button",
            ComponentKind::ButtonBar => "button-bar",
            ComponentKind::Hidden => "hidden",
            ComponentKind::Modal => "modal",
            ComponentKind::Empty => "empty",
            ComponentKind::Include => "component",
            ComponentKind::Textfield => "textfield",
            ComponentKind::Textarea => "textarea",
            ComponentKind::Password => "password",
            ComponentKind::Number => "number",
            ComponentKind::Slider => "slider",
            ComponentKind::Checkbox => "checkbox",
            ComponentKind::Radio => "radio",
            ComponentKind::Select => "select",
            ComponentKind::Switch => "switch",
            ComponentKind::Date => "date",
            ComponentKind::Option => "option",
        }
    }

    /// Kinds that only make sense inside a form. `hidden` is both.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            ComponentKind::Textfield
                | ComponentKind::Textarea
                | ComponentKind::Password
                | ComponentKind::Number
                | ComponentKind::Slider
                | ComponentKind::Checkbox
                | ComponentKind::Radio
                | ComponentKind::Select
                | ComponentKind::Switch
                | ComponentKind::Date
                | ComponentKind::Hidden
        )
    }

    /// Kinds that resolve to a [`Component`].
    pub fn is_container(&self) -> bool {
        !matches!(
            self,
            ComponentKind::TabItem
                | ComponentKind::Option
                | ComponentKind::Textfield
                | ComponentKind::Textarea
                | ComponentKind::Password
                | ComponentKind::Number
                | ComponentKind::Slider
                | ComponentKind::Checkbox
                | ComponentKind::Radio
                | ComponentKind::Select
                | ComponentKind::Switch
                | ComponentKind::Date
        )
    }

    /// Whether a node of kind `child` may sit directly below this one.
    /// Includes are checked against the root of the included template.
    pub fn allows(&self, child: ComponentKind) -> bool {
        use ComponentKind as K;
        if child == K::Include {
            return self.allows_any();
        }
        match self {
            K::Content | K::Row | K::Column => child.is_container() && child != K::Modal,
            K::Split | K::Hidden | K::TabItem => child.is_container(),
            K::Tab => child == K::TabItem,
            K::Form => child.is_input(),
            K::Link => child == K::Text,
            K::ButtonBar => child == K::Button,
            K::Modal => matches!(child, K::Form | K::Image | K::Link | K::Text | K::Heading | K::Empty),
            K::Checkbox | K::Radio | K::Select => child == K::Option,
            _ => false,
        }
    }

    fn allows_any(&self) -> bool {
        !matches!(
            self,
            ComponentKind::Heading
                | ComponentKind::Text
                | ComponentKind::Image
                | ComponentKind::Audio
                | ComponentKind::Button
                | ComponentKind::Empty
                | ComponentKind::Option
        ) && (self.is_container() || *self == ComponentKind::TabItem)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// KEYWORDS
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {what} [{value}]")]
pub struct UnknownKeyword {
    pub what: &'static str,
    pub value: String,
}

fn keyword(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace('_', "-")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    None,
    Horizontal,
    Vertical,
    HorizontalReverse,
    VerticalReverse,
}

impl FromStr for Direction {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match keyword(s).as_str() {
            "" | "none" => Ok(Direction::None),
            "horizontal" => Ok(Direction::Horizontal),
            "vertical" => Ok(Direction::Vertical),
            "horizontal-reverse" => Ok(Direction::HorizontalReverse),
            "vertical-reverse" => Ok(Direction::VerticalReverse),
            _ => Err(UnknownKeyword {
                what: "direction",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TooltipPosition {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl FromStr for TooltipPosition {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match keyword(s).as_str() {
            "top" => Ok(TooltipPosition::Top),
            "" | "bottom" => Ok(TooltipPosition::Bottom),
            "left" => Ok(TooltipPosition::Left),
            "right" => Ok(TooltipPosition::Right),
            _ => Err(UnknownKeyword {
                what: "tooltip position",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonClass {
    #[default]
    Default,
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
}

impl FromStr for ButtonClass {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match keyword(s).as_str() {
            "" | "default" => Ok(ButtonClass::Default),
            "primary" => Ok(ButtonClass::Primary),
            "secondary" => Ok(ButtonClass::Secondary),
            "success" => Ok(ButtonClass::Success),
            "warning" => Ok(ButtonClass::Warning),
            "danger" => Ok(ButtonClass::Danger),
            _ => Err(UnknownKeyword {
                what: "button class",
                value: s.to_string(),
            }),
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// COMPONENTS
// ————————————————————————————————————————————————————————————————————————————

/// Attributes shared by every container.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Common {
    pub uid: String,
    #[serde(skip_serializing_if = "IndexSet::is_empty")]
    pub classes: IndexSet<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, String>,
    pub direction: Direction,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub on_click: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tooltip: String,
    pub tooltip_position: TooltipPosition,
}

impl Common {
    pub fn with_uid(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Component {
    Content(Content),
    Split(Split),
    Tab(Tab),
    Form(Form),
    Heading(Heading),
    Text(Text),
    Link(Link),
    Image(Image),
    Audio(Audio),
    Button(Button),
    ButtonBar(ButtonBar),
    Hidden(Hidden),
    Modal(Modal),
    Empty,
}

impl Component {
    pub fn common(&self) -> Option<&Common> {
        Some(match self {
            Component::Content(x) => &x.common,
            Component::Split(x) => &x.common,
            Component::Tab(x) => &x.common,
            Component::Form(x) => &x.common,
            Component::Heading(x) => &x.common,
            Component::Text(x) => &x.common,
            Component::Link(x) => &x.common,
            Component::Image(x) => &x.common,
            Component::Audio(x) => &x.common,
            Component::Button(x) => &x.common,
            Component::ButtonBar(x) => &x.common,
            Component::Hidden(x) => &x.common,
            Component::Modal(x) => &x.common,
            Component::Empty => return None,
        })
    }

    pub fn uid(&self) -> Option<&str> {
        self.common().map(|c| c.uid.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    #[serde(flatten)]
    pub common: Common,
    pub children: Vec<Component>,
}

/// First child is the head, last the tail, anything between is centered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Split {
    #[serde(flatten)]
    pub common: Common,
    pub head: Option<Box<Component>>,
    pub center: Vec<Component>,
    pub tail: Option<Box<Component>>,
}

impl Split {
    pub fn from_children(common: Common, children: Vec<Component>) -> Self {
        let mut children = children.into_iter();
        let head = children.next().map(Box::new);
        let mut center: Vec<_> = children.collect();
        let tail = center.pop().map(Box::new);
        Self {
            common,
            head,
            center,
            tail,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tab {
    #[serde(flatten)]
    pub common: Common,
    pub disabled: bool,
    pub items: Vec<TabItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabItem {
    pub uid: String,
    pub text: String,
    pub body: Box<Component>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Form {
    #[serde(flatten)]
    pub common: Common,
    pub inputs: Vec<Input>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    #[serde(flatten)]
    pub common: Common,
    pub text: String,
    pub level: u8,
}

impl Heading {
    pub const DEFAULT_LEVEL: u8 = 1;

    pub fn clamp_level(level: i64) -> u8 {
        // clamped into 1..=6, the cast can not truncate
        level.clamp(1, 6) as u8
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    #[serde(flatten)]
    pub common: Common,
    pub text: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    #[serde(flatten)]
    pub common: Common,
    pub href: String,
    pub target: String,
    pub text: Option<Text>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    #[serde(flatten)]
    pub common: Common,
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Audio {
    #[serde(flatten)]
    pub common: Common,
    pub src: String,
    pub controls: bool,
    pub autoplay: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    #[serde(flatten)]
    pub common: Common,
    pub text: String,
    pub btn_class: ButtonClass,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonBar {
    #[serde(flatten)]
    pub common: Common,
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hidden {
    #[serde(flatten)]
    pub common: Common,
    pub child: Option<Box<Component>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Modal {
    #[serde(flatten)]
    pub common: Common,
    pub title: String,
    pub close_on_overlay_click: bool,
    pub children: Vec<Component>,
}
