//! Token substitution inside template strings.
//!
//! `{{key}}` reads the merged value tables, `$$key` asks the translation
//! provider. One left to right pass; substituted text is never re-scanned.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::i18n::TranslationProvider;
use crate::locale::Locale;
use crate::table::TableStack;
use crate::tree::Handling;
use crate::value::Value;

static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*([^{}\s]+)\s*\}\}|\$\$([A-Za-z0-9_-]+(?:\.[A-Za-z0-9_-]+)*)").expect("token pattern is valid")
});

/// Result of substituting one string.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Substituted {
    /// The whole string was a single value token; the bound value keeps its type.
    Typed(Value),
    Text(String),
}

impl Substituted {
    pub(crate) fn into_text(self) -> String {
        match self {
            Substituted::Typed(value) => value.to_string(),
            Substituted::Text(text) => text,
        }
    }
}

/// A value token whose key is bound in no table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Unresolved(pub String);

#[derive(Clone, Copy)]
pub(crate) struct Tokens<'a> {
    pub tables: &'a TableStack,
    pub locale: &'a Locale,
    pub provider: &'a TranslationProvider,
    pub handling: Handling,
}

impl Tokens<'_> {
    pub(crate) fn substitute(&self, text: &str) -> Result<Substituted, Unresolved> {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for caps in TOKEN.captures_iter(text) {
            let Some(token) = caps.get(0) else { continue };
            out.push_str(&text[last..token.start()]);
            last = token.end();

            if let Some(key) = caps.get(1) {
                if self.handling == Handling::Static {
                    out.push_str(token.as_str());
                    continue;
                }
                let value = self
                    .tables
                    .lookup(key.as_str())
                    .ok_or_else(|| Unresolved(key.as_str().to_string()))?;
                if token.start() == 0 && token.end() == text.len() {
                    return Ok(Substituted::Typed(value.clone()));
                }
                out.push_str(&value.to_string());
            } else if let Some(key) = caps.get(2) {
                out.push_str(&self.provider.lookup(self.locale, key.as_str()));
            }
        }
        out.push_str(&text[last..]);
        Ok(Substituted::Text(out))
    }

    pub(crate) fn text(&self, text: &str) -> Result<String, Unresolved> {
        self.substitute(text).map(Substituted::into_text)
    }
}
