//! Object flattening: data types declare their exposed fields and the
//! dissector turns them into a sealed [`ValueTable`].
use indexmap::IndexMap;

use crate::error::TableError;
use crate::i18n::TranslationProvider;
use crate::locale::Locale;
use crate::table::ValueTable;
use crate::value::Value;

/// Marker prefix for text fields that should be translated while flattening.
pub const TRANSLATION_MARKER: &str = "$$";

/// Field names that never carry template data.
pub const BLACKLIST: &[&str] = &["class", "classLoader", "classes", "calls"];

pub const DEFAULT_MAX_DEPTH: usize = 4;

/// One exposed field value.
pub enum Exposed<'a> {
    Text(String),
    Integer(i64),
    Bool(bool),
    Nested(&'a dyn Flattenable),
    List(Vec<&'a dyn Flattenable>),
    /// A collection of plain values, kept as one ordered list.
    Values(Vec<Exposed<'a>>),
    /// String keyed entries, flattened to `field.key`.
    Map(IndexMap<String, Exposed<'a>>),
    Absent,
}

impl<'a> Exposed<'a> {
    pub fn text(s: impl Into<String>) -> Self {
        Exposed::Text(s.into())
    }

    pub fn optional_text(s: Option<&str>) -> Self {
        s.map_or(Exposed::Absent, Exposed::text)
    }

    pub fn list<T: Flattenable>(xs: &'a [T]) -> Self {
        Exposed::List(xs.iter().map(|x| x as &dyn Flattenable).collect())
    }

    pub fn values(xs: impl IntoIterator<Item = Exposed<'a>>) -> Self {
        Exposed::Values(xs.into_iter().collect())
    }

    pub fn entries<K: Into<String>>(entries: impl IntoIterator<Item = (K, Exposed<'a>)>) -> Self {
        Exposed::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// A data type that can be flattened into template values.
pub trait Flattenable {
    fn expose(&self) -> Vec<(&'static str, Exposed<'_>)>;
}

// ————————————————————————————————————————————————————————————————————————————
// DISSECTOR
// ————————————————————————————————————————————————————————————————————————————

pub struct Dissector<'p> {
    provider: &'p TranslationProvider,
    max_depth: usize,
}

impl<'p> Dissector<'p> {
    pub fn new(provider: &'p TranslationProvider) -> Self {
        Self {
            provider,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Precedence assigned to a table dissected at `depth`.
    pub fn precedence_for(depth: usize) -> i32 {
        let depth = i32::try_from(depth).unwrap_or(i32::MAX / 2 - 10);
        10 + 2 * depth
    }

    /// Flatten `obj` into a sealed table. Nested fields get dotted keys.
    pub fn dissect(&self, obj: &dyn Flattenable, depth: usize, locale: &Locale) -> Result<ValueTable, TableError> {
        let mut flat = IndexMap::new();
        self.flatten_into("", obj, &mut flat, locale, 0)?;

        let mut table = ValueTable::with_precedence(Self::precedence_for(depth));
        for (key, value) in flat {
            table.bind(key, value)?;
        }
        Ok(table.sealed())
    }

    /// Flatten into a plain map, keys relative to `obj`.
    pub fn to_map(&self, obj: &dyn Flattenable, locale: &Locale) -> Result<IndexMap<String, Value>, TableError> {
        let mut flat = IndexMap::new();
        self.flatten_into("", obj, &mut flat, locale, 0)?;
        Ok(flat)
    }

    fn flatten_into(
        &self,
        prefix: &str,
        obj: &dyn Flattenable,
        out: &mut IndexMap<String, Value>,
        locale: &Locale,
        level: usize,
    ) -> Result<(), TableError> {
        for (name, exposed) in obj.expose() {
            if BLACKLIST.contains(&name) {
                tracing::trace!("{}ignore [{name}], blacklisted", "  ".repeat(level));
                continue;
            }
            self.field(join(prefix, name), exposed, out, locale, level)?;
        }
        Ok(())
    }

    /// Bind one field. Nested objects and maps spread into dotted keys.
    fn field(
        &self,
        key: String,
        exposed: Exposed<'_>,
        out: &mut IndexMap<String, Value>,
        locale: &Locale,
        level: usize,
    ) -> Result<(), TableError> {
        let indent = "  ".repeat(level);
        let value = match exposed {
            Exposed::Nested(nested) => {
                if self.too_deep(&key, level) {
                    return Ok(());
                }
                return self.flatten_into(&key, nested, out, locale, level + 1);
            }
            Exposed::Map(entries) => {
                if self.too_deep(&key, level) {
                    return Ok(());
                }
                for (sub, exposed) in entries {
                    self.field(join(&key, &sub), exposed, out, locale, level + 1)?;
                }
                return Ok(());
            }
            other => match self.value(&key, other, locale, level)? {
                Some(value) => value,
                None => {
                    tracing::trace!("{indent}[{key}] absent");
                    return Ok(());
                }
            },
        };
        if out.contains_key(&key) {
            return Err(TableError::KeyCollision(key));
        }
        out.insert(key, value);
        Ok(())
    }

    /// One value on its own, as bound under a key or held in a list.
    fn value(&self, key: &str, exposed: Exposed<'_>, locale: &Locale, level: usize) -> Result<Option<Value>, TableError> {
        let value = match exposed {
            Exposed::Absent => return Ok(None),
            Exposed::Text(text) => Value::Text(self.translate(text, locale)),
            Exposed::Integer(i) => Value::Integer(i),
            Exposed::Bool(b) => Value::Bool(b),
            _ if self.too_deep(key, level) => return Ok(None),
            Exposed::Nested(nested) => {
                let mut element = IndexMap::new();
                self.flatten_into("", nested, &mut element, locale, level + 1)?;
                Value::Map(element)
            }
            Exposed::Map(entries) => {
                let mut element = IndexMap::new();
                for (sub, exposed) in entries {
                    self.field(sub, exposed, &mut element, locale, level + 1)?;
                }
                Value::Map(element)
            }
            Exposed::List(items) => {
                let mut list = Vec::with_capacity(items.len());
                for item in items {
                    let mut element = IndexMap::new();
                    self.flatten_into("", item, &mut element, locale, level + 1)?;
                    list.push(Value::Map(element));
                }
                Value::List(list)
            }
            Exposed::Values(items) => {
                let mut list = Vec::with_capacity(items.len());
                for item in items {
                    list.extend(self.value(key, item, locale, level + 1)?);
                }
                Value::List(list)
            }
        };
        Ok(Some(value))
    }

    fn too_deep(&self, key: &str, level: usize) -> bool {
        let too_deep = level + 1 >= self.max_depth;
        if too_deep {
            tracing::trace!("{}[{key}] beyond depth {}, skipped", "  ".repeat(level), self.max_depth);
        }
        too_deep
    }

    fn translate(&self, text: String, locale: &Locale) -> String {
        match text.strip_prefix(TRANSLATION_MARKER) {
            Some(key) => self.provider.lookup(locale, key),
            None => text,
        }
    }
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

// ————————————————————————————————————————————————————————————————————————————
// BUILT-IN ELEMENTS
// ————————————————————————————————————————————————————————————————————————————

/// A single piece of (possibly translatable) text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedText {
    pub text: String,
}

impl Flattenable for TranslatedText {
    fn expose(&self) -> Vec<(&'static str, Exposed<'_>)> {
        vec![("text", Exposed::text(&self.text))]
    }
}

/// Display text plus link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedLink {
    pub text: String,
    pub href: String,
}

impl Flattenable for TranslatedLink {
    fn expose(&self) -> Vec<(&'static str, Exposed<'_>)> {
        vec![("text", Exposed::text(&self.text)), ("href", Exposed::text(&self.href))]
    }
}
