use std::fmt;
use std::sync::Arc;
use veneer_types::Source;

/// Tag used when naming a collection whose elements are not model-like,
/// mirroring the lower-cased type-name fallback for plain sequences.
pub const COLLECTION_TAG: &str = "array";

/// Policy for deriving a model name when a source does not report one.
///
/// The self-reported name always wins; the fallback only covers sources
/// without the naming capability. The default fallback lower-cases the
/// source's type tag.
#[derive(Clone)]
pub struct NamePolicy {
    fallback: Arc<dyn Fn(&dyn Source) -> String + Send + Sync>,
}

impl NamePolicy {
    pub fn new(fallback: impl Fn(&dyn Source) -> String + Send + Sync + 'static) -> Self {
        Self {
            fallback: Arc::new(fallback),
        }
    }

    /// Derived model name of `source`.
    pub fn derive(&self, source: &dyn Source) -> String {
        source
            .model_name()
            .unwrap_or_else(|| (self.fallback)(source))
    }
}

impl Default for NamePolicy {
    fn default() -> Self {
        Self::new(|source| source.type_tag().to_ascii_lowercase())
    }
}

impl fmt::Debug for NamePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamePolicy").finish_non_exhaustive()
    }
}
