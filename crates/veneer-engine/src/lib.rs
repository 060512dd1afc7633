//! Pure template evaluation (no I/O).
//!
//! Input: a bound source object and a directive set built elsewhere.
//! Output: an ordered fragment ready for serialization.
//!
//! The [`Evaluator`] walks one (source, template) pair; the [`Engine`] trait
//! is the collaborator it calls back into for nested children, glued
//! siblings, and reused templates. [`TemplateRegistry`] is the in-memory
//! reference engine.

#![forbid(unsafe_code)]

mod engine;
mod evaluator;
mod inflect;
mod naming;

pub mod test_support;

#[cfg(test)]
mod proptest;

pub use engine::{Engine, TemplateRegistry};
pub use evaluator::Evaluator;
pub use inflect::pluralize;
pub use naming::{COLLECTION_TAG, NamePolicy};
