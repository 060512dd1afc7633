use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a registered template, e.g. `"users/show"`.
///
/// Names are opaque to the engine; the registry that resolves them decides
/// what structure (directories, formats) they carry.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateName(String);

impl TemplateName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TemplateName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TemplateName {
    fn from(value: String) -> Self {
        Self(value)
    }
}
