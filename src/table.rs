//! Value tables: externally supplied substitution data, and the precedence
//! ordered stack the resolver reads them through.
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::value::Value;

// ————————————————————————————————————————————————————————————————————————————
// TABLE
// ————————————————————————————————————————————————————————————————————————————

/// Ordered key → value store. Keys bind once; sealing forbids further writes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueTable {
    precedence: i32,
    sealed: bool,
    values: IndexMap<String, Value>,
    deactivated: IndexSet<String>,
}

impl ValueTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precedence(precedence: i32) -> Self {
        Self {
            precedence,
            ..Self::default()
        }
    }

    /// Build a table from a JSON object. Nulls are skipped; the table is
    /// returned unsealed so callers can keep adding bindings.
    pub fn from_json(object: &serde_json::Map<String, serde_json::Value>, precedence: i32) -> Result<Self, TableError> {
        let mut table = Self::with_precedence(precedence);
        for (key, json) in object {
            if let Some(value) = Value::from_json(json) {
                table.bind(key.clone(), value)?;
            }
        }
        Ok(table)
    }

    pub fn bind(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<&mut Self, TableError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(TableError::BlankKey);
        }
        if self.values.contains_key(&key) {
            return Err(TableError::KeyCollision(key));
        }
        if self.sealed {
            return Err(TableError::SealedWrite(key));
        }
        self.values.insert(key, value.into());
        Ok(self)
    }

    /// Mark a node uid as inactive for any resolution reading this table.
    pub fn deactivate(&mut self, uid: impl Into<String>) -> Result<&mut Self, TableError> {
        let uid = uid.into();
        if self.sealed {
            return Err(TableError::SealedWrite(uid));
        }
        self.deactivated.insert(uid);
        Ok(self)
    }

    pub fn seal(&mut self) {
        self.sealed = true;
    }

    pub fn sealed(mut self) -> Self {
        self.seal();
        self
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn lookup(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn precedence(&self) -> i32 {
        self.precedence
    }

    pub fn is_active(&self, uid: &str) -> bool {
        !self.deactivated.contains(uid)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ————————————————————————————————————————————————————————————————————————————
// STACK
// ————————————————————————————————————————————————————————————————————————————

/// How bindings of the same key in different tables are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapPolicy {
    /// The higher precedence table wins; ties go to the earlier supplied table.
    #[default]
    Override,
    /// A key bound in more than one table is a collision.
    Reject,
}

/// The merged, read-only view of every table applying to one resolution.
///
/// Tables are ordered by descending precedence, ties kept in supply order.
/// Scoped tables (repetition elements, include sources) sit above all of them.
#[derive(Debug, Clone, Default)]
pub struct TableStack {
    tables: Vec<ValueTable>,
    scoped: Vec<ValueTable>,
}

impl TableStack {
    pub fn merge(tables: Vec<ValueTable>, policy: OverlapPolicy) -> Result<Self, TableError> {
        let mut tables = tables;
        // stable sort keeps supply order among equal ranks
        tables.sort_by_key(|t| std::cmp::Reverse(t.precedence()));
        if policy == OverlapPolicy::Reject {
            let mut seen = IndexSet::new();
            for key in tables.iter().flat_map(ValueTable::keys) {
                if !seen.insert(key) {
                    return Err(TableError::KeyCollision(key.to_string()));
                }
            }
        }
        Ok(Self {
            tables,
            scoped: Vec::new(),
        })
    }

    pub fn lookup(&self, key: &str) -> Option<&Value> {
        self.scoped
            .iter()
            .rev()
            .chain(self.tables.iter())
            .find_map(|t| t.lookup(key))
    }

    pub fn is_active(&self, uid: &str) -> bool {
        self.scoped.iter().chain(self.tables.iter()).all(|t| t.is_active(uid))
    }

    pub fn push_scope(&mut self, table: ValueTable) {
        self.scoped.push(table);
    }

    pub fn pop_scope(&mut self) -> Option<ValueTable> {
        self.scoped.pop()
    }

    pub fn depth(&self) -> usize {
        self.tables.len() + self.scoped.len()
    }
}
