//! File based settings for the command line front end.
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::locale::Locale;
use crate::resolve::DEFAULT_MAX_INCLUDE_DEPTH;
use crate::table::OverlapPolicy;

/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Settings {
    /// Translation resource paths or glob patterns.
    pub translations: Vec<String>,
    pub default_locale: Locale,
    pub overlap_policy: OverlapPolicy,
    pub max_include_depth: usize,
    /// Directory includes are read from. Defaults to the template's directory.
    pub template_root: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            translations: Vec::new(),
            default_locale: Locale::default(),
            overlap_policy: OverlapPolicy::default(),
            max_include_depth: DEFAULT_MAX_INCLUDE_DEPTH,
            template_root: None,
        }
    }
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let src = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: name.clone(),
            source,
        })?;
        Self::parse(&name, &src)
    }

    pub fn parse(origin: &str, src: &str) -> Result<Self, ConfigError> {
        let de = &mut serde_json::Deserializer::from_str(src);
        serde_path_to_error::deserialize(de).map_err(|err| {
            let path = err.path().to_string();
            ConfigError::Parse {
                path: origin.to_string(),
                detail: format!("at JSON path {path} → {}", err.into_inner()),
            }
        })
    }

    /// Relative translation patterns are taken relative to `base`.
    pub fn translation_patterns(&self, base: Option<&Path>) -> Vec<String> {
        self.translations
            .iter()
            .map(|pattern| match base {
                Some(base) if Path::new(pattern).is_relative() => base.join(pattern).to_string_lossy().into_owned(),
                _ => pattern.clone(),
            })
            .collect()
    }
}
