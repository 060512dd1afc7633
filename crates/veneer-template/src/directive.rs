use crate::Condition;
use crate::Template;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use veneer_types::{DirectiveError, Related, Source, SourceHandle, TemplateName};

/// User-supplied function computing a node's value from the bound object.
pub type ComputeFn = Arc<dyn Fn(&dyn Source) -> Result<Value, DirectiveError> + Send + Sync>;

/// One attribute directive, in either of its two accepted forms.
#[derive(Clone, Debug)]
pub enum AttributeDirective {
    /// Explicit `source -> output` rename pairs, each expanded individually.
    Mapped(Vec<(String, String)>),
    /// One or more bare member names sharing an optional rename.
    ///
    /// Quirk, preserved deliberately: when several names share a rename, the
    /// rename applies to every one of them, so the last readable member wins
    /// the single output key. The rename is group-wide, not per-name.
    Named {
        names: Vec<String>,
        rename: Option<String>,
    },
}

/// Reference to the data a child or glue directive evaluates.
#[derive(Clone)]
pub enum DataRef {
    /// Resolve by asking the bound object for a relation with this name.
    Name(String),
    /// Directly supplied data.
    Direct(Related),
}

impl DataRef {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn object(object: SourceHandle) -> Self {
        Self::Direct(Related::One(object))
    }

    pub fn collection(items: Vec<SourceHandle>) -> Self {
        Self::Direct(Related::Many(items))
    }
}

impl fmt::Debug for DataRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataRef::Name(name) => write!(f, "Name({name:?})"),
            DataRef::Direct(related) => write!(f, "Direct({related:?})"),
        }
    }
}

/// Data selection for a child directive, with or without an explicit key.
#[derive(Clone, Debug)]
pub enum DataSpec {
    /// Nest under an explicit output key.
    Named { data: DataRef, name: String },
    /// Derive the output key from the data itself.
    Auto(DataRef),
}

impl DataSpec {
    pub fn named(data: DataRef, name: impl Into<String>) -> Self {
        Self::Named {
            data,
            name: name.into(),
        }
    }

    pub fn auto(data: DataRef) -> Self {
        Self::Auto(data)
    }

    /// Shorthand for the common case: a relation of the bound object, named
    /// after the data.
    pub fn member(name: impl Into<String>) -> Self {
        Self::Auto(DataRef::name(name))
    }
}

/// A computed node: key, inclusion condition, compute function.
#[derive(Clone)]
pub struct NodeDirective {
    pub key: String,
    pub condition: Condition,
    pub compute: ComputeFn,
}

impl fmt::Debug for NodeDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeDirective")
            .field("key", &self.key)
            .field("condition", &self.condition)
            .finish_non_exhaustive()
    }
}

/// A nested sub-structure evaluated against related data.
#[derive(Clone, Debug)]
pub struct ChildDirective {
    pub data: DataSpec,
    pub template: Template,
}

/// Related fields merged flat into the parent result.
#[derive(Clone, Debug)]
pub struct GlueDirective {
    pub data: DataRef,
    pub template: Template,
}

/// Reuse of a registered template against the same bound object, with the
/// overlay directives extending it for this one evaluation.
#[derive(Clone, Debug)]
pub struct ExtendDirective {
    pub name: TemplateName,
    pub overlay: Template,
}
