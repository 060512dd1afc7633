//! The declarative template model: what to evaluate, not how.
//!
//! A [`Template`] holds five ordered directive groups (attributes, nodes,
//! children, glues, extends) plus root-wrapping options. This crate is
//! data-only: building and combining templates happens here, evaluating them
//! happens in `veneer-engine`.

#![forbid(unsafe_code)]

mod condition;
mod directive;
mod template;

pub use condition::{Condition, Predicate, PredicateFn};
pub use directive::{
    AttributeDirective, ChildDirective, ComputeFn, DataRef, DataSpec, ExtendDirective,
    GlueDirective, NodeDirective,
};
pub use template::Template;
