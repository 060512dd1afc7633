//! Stable types shared across the veneer workspace.
//!
//! This crate is intentionally boring:
//! - the ordered fragment every evaluation produces
//! - the capability surface of a bound source object
//! - template names
//! - the error taxonomy
//!
//! Evaluation logic lives in `veneer-engine`; the directive model lives in
//! `veneer-template`.

#![forbid(unsafe_code)]

pub mod error;
pub mod fragment;
pub mod name;
pub mod source;

pub use error::{DirectiveError, EvalError};
pub use fragment::Fragment;
pub use name::TemplateName;
pub use source::{Related, Source, SourceHandle};
