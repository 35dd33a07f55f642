//! Locale aware text lookup.
//!
//! A provider is assembled once from translation resources and is read-only
//! afterwards. Lookups never fail: exact locale, then language only, then the
//! `I18N [<key>] not set.` placeholder.
pub mod resource;

use std::collections::HashMap;

use once_cell::sync::{Lazy, OnceCell};
use rayon::prelude::*;

use crate::locale::Locale;

pub use resource::{ResourceDescriptor, TranslationEntry, TranslationResource};

// ————————————————————————————————————————————————————————————————————————————
// PROVIDER
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Default)]
pub struct TranslationProvider {
    texts: HashMap<Locale, HashMap<String, String>>,
}

pub fn placeholder(key: &str) -> String {
    format!("I18N [{key}] not set.")
}

impl TranslationProvider {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> TranslationProviderBuilder {
        TranslationProviderBuilder::default()
    }

    /// Load every descriptor. Resources that fail to load are skipped with a
    /// warning; the provider is built from whatever did load.
    pub fn load(descriptors: &[ResourceDescriptor]) -> Self {
        let loaded: Vec<_> = descriptors
            .par_iter()
            .map(|d| (d.name(), d.load()))
            .collect();

        let mut builder = Self::builder();
        for (name, result) in loaded {
            match result {
                Ok(resource) => {
                    tracing::debug!(resource = %name, entries = resource.elements.len(), "translation resource loaded");
                    builder.add_resource(&resource);
                }
                Err(error) => {
                    tracing::warn!(resource = %name, %error, "skipping translation resource");
                }
            }
        }
        builder.build()
    }

    pub fn lookup(&self, locale: &Locale, key: &str) -> String {
        if let Some(text) = self.find(locale, key) {
            return text.to_string();
        }
        if locale.country().is_some()
            && let Some(text) = self.find(&locale.language_only(), key)
        {
            return text.to_string();
        }
        tracing::debug!(%locale, key, "translation gap");
        placeholder(key)
    }

    pub fn contains(&self, locale: &Locale, key: &str) -> bool {
        self.find(locale, key).is_some()
    }

    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.texts.keys()
    }

    fn find(&self, locale: &Locale, key: &str) -> Option<&str> {
        self.texts.get(locale)?.get(key).map(String::as_str)
    }
}

/// Single-writer phase of a provider. `build` ends it.
#[derive(Debug, Default)]
pub struct TranslationProviderBuilder {
    texts: HashMap<Locale, HashMap<String, String>>,
}

impl TranslationProviderBuilder {
    /// Later entries for the same key overwrite earlier ones.
    pub fn insert(&mut self, locale: &Locale, key: &str, text: &str) -> &mut Self {
        if key.trim().is_empty() || text.trim().is_empty() {
            tracing::warn!(%locale, key, "skipping translation entry with blank key or text");
            return self;
        }
        self.texts
            .entry(locale.clone())
            .or_default()
            .insert(key.to_string(), text.to_string());
        self
    }

    pub fn add_resource(&mut self, resource: &TranslationResource) -> &mut Self {
        let locale = resource.locale();
        for entry in &resource.elements {
            self.insert(&locale, &entry.key, &entry.text);
        }
        self
    }

    pub fn build(self) -> TranslationProvider {
        TranslationProvider { texts: self.texts }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// PROCESS-WIDE INSTANCE
// ————————————————————————————————————————————————————————————————————————————

static GLOBAL: OnceCell<TranslationProvider> = OnceCell::new();
static EMPTY: Lazy<TranslationProvider> = Lazy::new(TranslationProvider::empty);

/// Install the process-wide provider. Only the first call succeeds; later
/// calls hand the rejected provider back.
pub fn install(provider: TranslationProvider) -> Result<&'static TranslationProvider, TranslationProvider> {
    let mut slot = Some(provider);
    let installed = GLOBAL.get_or_init(|| slot.take().unwrap_or_default());
    match slot {
        None => Ok(installed),
        Some(rejected) => Err(rejected),
    }
}

/// The installed provider, or an empty one that only yields placeholders.
pub fn global() -> &'static TranslationProvider {
    match GLOBAL.get() {
        Some(provider) => provider,
        None => {
            tracing::debug!("translation provider read before install, only placeholders are available");
            &EMPTY
        }
    }
}
