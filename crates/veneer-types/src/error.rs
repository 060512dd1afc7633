use crate::name::TemplateName;
use thiserror::Error;

/// Failure raised by a user-supplied compute or condition function.
pub type DirectiveError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by a template evaluation.
///
/// Absence (a missing member, an empty relation) is never an error; it is
/// silent omission. The variants here are the hard failures: user closures
/// that fail and nested evaluations that cannot complete. There is no retry
/// and no partial result; the first failure aborts the whole evaluation.
#[derive(Debug, Error)]
pub enum EvalError {
    /// An extend directive referenced a template the engine does not know.
    #[error("unknown template '{0}'")]
    UnknownTemplate(TemplateName),

    /// A user-supplied compute function failed.
    #[error("node '{key}' failed")]
    Node {
        key: String,
        #[source]
        source: DirectiveError,
    },

    /// A user-supplied condition failed while deciding inclusion.
    #[error("condition on node '{key}' failed")]
    Condition {
        key: String,
        #[source]
        source: DirectiveError,
    },

    /// Glue merges a single object's fields into the parent; a collection
    /// has no flat form.
    #[error("glue data must resolve to a single object, not a collection")]
    GlueOnCollection,
}
