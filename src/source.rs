//! Where included templates come from.
use std::path::{Component as PathComponent, Path, PathBuf};

use indexmap::IndexMap;

use crate::error::SourceError;

/// Supplies raw template text by logical path.
pub trait TemplateSource: Send + Sync {
    fn load(&self, path: &str) -> Result<String, SourceError>;
}

/// Templates held in memory, keyed by logical path.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    templates: IndexMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.templates.insert(path.into(), text.into());
        self
    }
}

impl TemplateSource for MemorySource {
    fn load(&self, path: &str) -> Result<String, SourceError> {
        self.templates
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(path.to_string()))
    }
}

/// Templates read from files below a root directory. Paths may not leave it.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateSource for DirSource {
    fn load(&self, path: &str) -> Result<String, SourceError> {
        let relative = Path::new(path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, PathComponent::Normal(_) | PathComponent::CurDir));
        if escapes {
            return Err(SourceError::OutsideRoot(path.to_string()));
        }
        let full = self.root.join(relative);
        std::fs::read_to_string(&full).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => SourceError::NotFound(path.to_string()),
            _ => SourceError::Io {
                path: full.display().to_string(),
                source,
            },
        })
    }
}
