use std::hash::{BuildHasher, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

/// How identifiers are generated for nodes without a `uid`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum IdSource {
    /// `randomid-<16 hex digits>`.
    #[default]
    Random,
    /// `<prefix><n>`, counting from 1 per resolution.
    Sequential(String),
}

impl IdSource {
    pub fn sequential(prefix: impl Into<String>) -> Self {
        IdSource::Sequential(prefix.into())
    }
}

/// Per-resolution generator state.
#[derive(Debug)]
pub(crate) struct IdGen {
    source: IdSource,
    issued: u64,
    hasher: std::collections::hash_map::RandomState,
}

impl IdGen {
    pub(crate) fn new(source: IdSource) -> Self {
        Self {
            source,
            issued: 0,
            hasher: Default::default(),
        }
    }

    pub(crate) fn next(&mut self) -> String {
        self.issued += 1;
        match &self.source {
            IdSource::Sequential(prefix) => format!("{prefix}{}", self.issued),
            IdSource::Random => {
                let mut h = self.hasher.build_hasher();
                h.write_u64(self.issued);
                let nanos = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_nanos())
                    .unwrap_or_default();
                h.write_u128(nanos);
                format!("randomid-{:016x}", h.finish())
            }
        }
    }
}
