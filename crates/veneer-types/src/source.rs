use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a bound source object.
pub type SourceHandle = Arc<dyn Source>;

/// Related data resolved for a child or glue directive.
#[derive(Clone)]
pub enum Related {
    /// A single related object, nested or glued as one sub-structure.
    One(SourceHandle),
    /// A collection of related objects, nested as an array of sub-structures.
    Many(Vec<SourceHandle>),
}

impl Related {
    /// Absence rule: an empty collection counts as not present.
    pub fn is_empty(&self) -> bool {
        match self {
            Related::One(_) => false,
            Related::Many(items) => items.is_empty(),
        }
    }
}

impl fmt::Debug for Related {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Related::One(_) => f.write_str("Related::One"),
            Related::Many(items) => write!(f, "Related::Many(len={})", items.len()),
        }
    }
}

/// Capability surface of a bound source object.
///
/// Every method has a permissive default, so a type opts into exactly the
/// capabilities it has. A missing capability is an omission, never an error:
/// attribute directives probe with [`has_member`](Source::has_member) before
/// reading, and child/glue directives skip when
/// [`relation`](Source::relation) returns nothing.
pub trait Source: Send + Sync {
    /// Capability probe: does this object expose a readable member `name`?
    fn has_member(&self, _name: &str) -> bool {
        false
    }

    /// Read a member previously probed with [`has_member`](Source::has_member).
    ///
    /// A present member may still read as `Value::Null`; that null is
    /// included in the output, unlike an absent member.
    fn read_member(&self, _name: &str) -> Value {
        Value::Null
    }

    /// Resolve a named relation for child and glue directives.
    fn relation(&self, _name: &str) -> Option<Related> {
        None
    }

    /// Self-reported singular model name, used for default child naming and
    /// root wrapping.
    fn model_name(&self) -> Option<String> {
        None
    }

    /// Type tag consumed by the fallback naming policy when no model name is
    /// reported.
    fn type_tag(&self) -> &str {
        "object"
    }

    /// Whether this value counts as a model-like entity. Collections of
    /// entities are named by the pluralized name of their first element;
    /// collections of anything else fall back to the collection tag.
    fn is_entity(&self) -> bool {
        true
    }
}
