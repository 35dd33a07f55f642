use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tempfile::TempDir;

use json_ui::i18n::ResourceDescriptor;
use json_ui::{Component, IdSource, Locale, ParseError, Resolver, TranslationProvider, ValueTable};

mod flattening;
mod includes;
mod repetition;
mod scenarios;
mod tables;
mod translations;

/// Scratch directory for templates and translation resources.
pub struct Fixture {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl Fixture {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            root,
        })
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<PathBuf> {
        let file_path = self.root.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&file_path, content).with_context(|| format!("Failed to write file: {}", file_path.display()))?;
        Ok(file_path)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn provider(&self, files: &[&str]) -> TranslationProvider {
        let descriptors: Vec<_> = files
            .iter()
            .map(|f| ResourceDescriptor::file(self.root.join(f)))
            .collect();
        TranslationProvider::load(&descriptors)
    }
}

/// Resolve with sequential ids so trees compare structurally.
pub fn resolve_with(
    provider: &TranslationProvider,
    tables: Vec<ValueTable>,
    locale: &str,
    src: &str,
) -> Result<Component, ParseError> {
    let locale: Locale = locale.parse().expect("test locale");
    Resolver::new(provider)
        .with_tables(tables)
        .with_locale(locale)
        .with_ids(IdSource::sequential("t"))
        .resolve_str("test.json", src)
        .map(|resolution| resolution.root)
}

pub fn resolve(src: &str) -> Result<Component, ParseError> {
    resolve_with(&TranslationProvider::empty(), Vec::new(), "en", src)
}

pub fn table(precedence: i32, bindings: &[(&str, &str)]) -> ValueTable {
    let mut table = ValueTable::with_precedence(precedence);
    for (key, value) in bindings {
        table.bind(*key, *value).expect("unique test key");
    }
    table.sealed()
}
