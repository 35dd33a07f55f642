use serde::Serialize;

use super::Common;

/// Attributes shared by every form input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputCommon {
    #[serde(flatten)]
    pub common: Common,
    pub name: String,
    pub submit_as: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub on_input: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub info_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Input {
    Textfield(Textfield),
    Textarea(Textarea),
    Password(Password),
    Number(NumberInput),
    Slider(Slider),
    Checkbox(Choice),
    Radio(Choice),
    Select(Choice),
    Switch(Switch),
    Date(DateInput),
    Hidden(HiddenInput),
}

impl Input {
    pub fn base(&self) -> &InputCommon {
        match self {
            Input::Textfield(x) => &x.base,
            Input::Textarea(x) => &x.base,
            Input::Password(x) => &x.base,
            Input::Number(x) => &x.base,
            Input::Slider(x) => &x.base,
            Input::Checkbox(x) | Input::Radio(x) | Input::Select(x) => &x.base,
            Input::Switch(x) => &x.base,
            Input::Date(x) => &x.base,
            Input::Hidden(x) => &x.base,
        }
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Textfield {
    #[serde(flatten)]
    pub base: InputCommon,
    pub value: String,
    pub placeholder: String,
    pub prefix: String,
    pub suffix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_chars: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Textarea {
    #[serde(flatten)]
    pub base: InputCommon,
    pub value: String,
    pub placeholder: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Password {
    #[serde(flatten)]
    pub base: InputCommon,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberInput {
    #[serde(flatten)]
    pub base: InputCommon,
    pub value: Option<i64>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub step: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slider {
    #[serde(flatten)]
    pub base: InputCommon,
    pub value: i64,
    pub min: i64,
    pub max: i64,
}

impl Slider {
    pub const DEFAULT_MIN: i64 = 0;
    pub const DEFAULT_MAX: i64 = 100;
}

/// Checkbox, radio and select share one shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Choice {
    #[serde(flatten)]
    pub base: InputCommon,
    pub options: Vec<ChoiceOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub text: String,
    pub value: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Switch {
    #[serde(flatten)]
    pub base: InputCommon,
    pub checked: bool,
}

/// Dates are kept as validated `YYYY-MM-DD` text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateInput {
    #[serde(flatten)]
    pub base: InputCommon,
    pub value: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiddenInput {
    #[serde(flatten)]
    pub base: InputCommon,
    pub value: String,
}
