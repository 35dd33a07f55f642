//! Failure taxonomy shared by the parser, the value tables and the resolver.
use std::fmt;

use thiserror::Error;

type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

// ————————————————————————————————————————————————————————————————————————————
// PARSING
// ————————————————————————————————————————————————————————————————————————————

/// Where in a template a node sits: tree depth and sibling index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub depth: usize,
    pub element: usize,
}

impl Position {
    pub const ROOT: Position = Position { depth: 0, element: 0 };

    pub fn new(depth: usize, element: usize) -> Self {
        Self { depth, element }
    }

    pub fn child(&self, element: usize) -> Self {
        Self { depth: self.depth + 1, element }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:3}:{:3}", self.depth, self.element)
    }
}

/// Fatal failure of a single parse or resolution. Never accompanied by a partial tree.
#[derive(Debug, Error)]
#[error("[{source_id}] pos [{position}] - {reason}")]
pub struct ParseError {
    pub source_id: String,
    pub position: Position,
    pub reason: String,
    #[source]
    pub cause: Option<Cause>,
}

impl ParseError {
    pub fn new(source_id: impl Into<String>, position: Position, reason: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            position,
            reason: reason.into(),
            cause: None,
        }
    }

    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn depth(&self) -> usize {
        self.position.depth
    }

    pub fn element(&self) -> usize {
        self.position.element
    }
}

// ————————————————————————————————————————————————————————————————————————————
// VALUE TABLES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("key [{0}] is already in use")]
    KeyCollision(String),
    #[error("value table is sealed and can not be modified (key [{0}])")]
    SealedWrite(String),
    #[error("value table keys can not be blank")]
    BlankKey,
}

// ————————————————————————————————————————————————————————————————————————————
// TRANSLATION RESOURCES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("failed to read translation resource {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse translation resource {path}: {detail}")]
    Parse { path: String, detail: String },
    #[error("translation resource {path} has a blank language")]
    BlankLanguage { path: String },
}

// ————————————————————————————————————————————————————————————————————————————
// TEMPLATE SOURCES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("template [{0}] not found")]
    NotFound(String),
    #[error("template path [{0}] leaves the template root")]
    OutsideRoot(String),
    #[error("failed to read template {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ————————————————————————————————————————————————————————————————————————————
// CONFIGURATION
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings {path}: {detail}")]
    Parse { path: String, detail: String },
    #[error("invalid pattern [{pattern}]: {detail}")]
    Pattern { pattern: String, detail: String },
}
