//! Declarative object-to-JSON templating.
//!
//! A template is a set of directives ("include this attribute", "compute
//! this node", "nest this relation", "merge these fields", "reuse that
//! template") evaluated against a bound source object to produce an ordered
//! key/value fragment ready for serialization.
//!
//! # Example
//!
//! ```
//! use serde_json::{Value, json};
//! use veneer::{Source, Template, TemplateRegistry};
//!
//! struct User {
//!     name: String,
//! }
//!
//! impl Source for User {
//!     fn has_member(&self, name: &str) -> bool {
//!         name == "name"
//!     }
//!
//!     fn read_member(&self, name: &str) -> Value {
//!         match name {
//!             "name" => json!(self.name),
//!             _ => Value::Null,
//!         }
//!     }
//!
//!     fn model_name(&self) -> Option<String> {
//!         Some("user".to_string())
//!     }
//! }
//!
//! let template = Template::new()
//!     .attribute("name")
//!     .node("active", |_| Ok(json!(true)))
//!     .root(true);
//!
//! let registry = TemplateRegistry::new();
//! let user = User { name: "ada".to_string() };
//! let fragment = registry.render(&user, &template, false)?;
//!
//! assert_eq!(
//!     serde_json::to_value(&fragment)?,
//!     json!({ "user": { "name": "ada", "active": true } })
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

pub use veneer_engine::{
    COLLECTION_TAG, Engine, Evaluator, NamePolicy, TemplateRegistry, pluralize,
};
pub use veneer_template::{
    AttributeDirective, ChildDirective, ComputeFn, Condition, DataRef, DataSpec, ExtendDirective,
    GlueDirective, NodeDirective, Predicate, PredicateFn, Template,
};
pub use veneer_types::{
    DirectiveError, EvalError, Fragment, Related, Source, SourceHandle, TemplateName,
};
