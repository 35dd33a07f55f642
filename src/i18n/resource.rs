use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ResourceError;
use crate::locale::Locale;

/// One translation resource: every entry for a single (language, country).
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationResource {
    pub language: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub elements: Vec<TranslationEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationEntry {
    pub key: String,
    pub text: String,
}

impl TranslationResource {
    pub fn locale(&self) -> Locale {
        Locale::new(&self.language, self.country.as_deref())
    }

    /// Parse resource text. `origin` names the resource in errors.
    pub fn parse(origin: &str, src: &str) -> Result<Self, ResourceError> {
        let de = &mut serde_json::Deserializer::from_str(src);
        let resource: TranslationResource = serde_path_to_error::deserialize(de).map_err(|err| {
            let path = err.path().to_string();
            ResourceError::Parse {
                path: origin.to_string(),
                detail: format!("at JSON path {path} → {}", err.into_inner()),
            }
        })?;
        if resource.language.trim().is_empty() {
            return Err(ResourceError::BlankLanguage { path: origin.to_string() });
        }
        Ok(resource)
    }
}

/// Where a translation resource comes from.
#[derive(Debug, Clone)]
pub enum ResourceDescriptor {
    File(PathBuf),
    Inline { name: String, text: String },
}

impl ResourceDescriptor {
    pub fn file(path: impl AsRef<Path>) -> Self {
        ResourceDescriptor::File(path.as_ref().to_path_buf())
    }

    pub fn inline(name: impl Into<String>, text: impl Into<String>) -> Self {
        ResourceDescriptor::Inline {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn name(&self) -> String {
        match self {
            ResourceDescriptor::File(path) => path.display().to_string(),
            ResourceDescriptor::Inline { name, .. } => name.clone(),
        }
    }

    pub fn load(&self) -> Result<TranslationResource, ResourceError> {
        match self {
            ResourceDescriptor::File(path) => {
                let name = path.display().to_string();
                let src = std::fs::read_to_string(path).map_err(|source| ResourceError::Io {
                    path: name.clone(),
                    source,
                })?;
                TranslationResource::parse(&name, &src)
            }
            ResourceDescriptor::Inline { name, text } => TranslationResource::parse(name, text),
        }
    }
}
