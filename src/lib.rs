//! Declarative JSON UI templates resolved into typed component trees.
//!
//! ```text
//! template text ─ tree::parse ─▶ Node tree ─┐
//! data ─ Dissector / ValueTable ─▶ tables ──┼─ Resolver ─▶ Component
//! translation resources ─▶ TranslationProvider ─┘
//! ```
pub mod component;
pub mod config;
pub mod error;
pub mod flatten;
pub mod i18n;
pub mod locale;
pub mod resolve;
pub mod source;
pub mod table;
pub mod tree;
pub mod value;

pub use component::{Component, ComponentKind};
pub use error::{ParseError, Position, TableError};
pub use flatten::{Dissector, Exposed, Flattenable};
pub use i18n::TranslationProvider;
pub use locale::Locale;
pub use resolve::{IdSource, Resolution, Resolver};
pub use source::{DirSource, MemorySource, TemplateSource};
pub use table::{OverlapPolicy, TableStack, ValueTable};
pub use tree::{Handling, Template};
pub use value::Value;
