use crate::evaluator::Evaluator;
use crate::naming::NamePolicy;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;
use veneer_template::Template;
use veneer_types::{EvalError, Fragment, Source, SourceHandle, TemplateName};

/// Collaborator the evaluator calls back into for nested work.
///
/// All methods are synchronous; failures propagate unchanged to the
/// top-level caller. Nested evaluations are never root-wrapped.
pub trait Engine {
    /// Evaluate `template` against `source`, producing an unwrapped fragment.
    fn evaluate_object(
        &self,
        source: &dyn Source,
        template: &Template,
    ) -> Result<Fragment, EvalError>;

    /// Resolve a registered template name into its directive set.
    fn resolve_template(&self, name: &TemplateName) -> Result<Template, EvalError>;

    /// Naming policy used for root wrapping and default child naming.
    fn naming(&self) -> &NamePolicy;
}

/// In-memory template store; the reference [`Engine`] implementation.
#[derive(Clone, Debug, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<TemplateName, Template>,
    naming: NamePolicy,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_naming(naming: NamePolicy) -> Self {
        Self {
            templates: BTreeMap::new(),
            naming,
        }
    }

    pub fn register(&mut self, name: impl Into<TemplateName>, template: Template) {
        self.templates.insert(name.into(), template);
    }

    /// Top-level entry point. Root wrapping happens when the template's
    /// `root` flag or `wrap_root` requests it.
    pub fn render(
        &self,
        source: &dyn Source,
        template: &Template,
        wrap_root: bool,
    ) -> Result<Fragment, EvalError> {
        Evaluator::new(source, template, self).evaluate(wrap_root)
    }

    /// Render a registered template by name.
    pub fn render_named(
        &self,
        source: &dyn Source,
        name: &TemplateName,
        wrap_root: bool,
    ) -> Result<Fragment, EvalError> {
        debug!(template = %name, "rendering named template");
        let template = self.resolve_template(name)?;
        self.render(source, &template, wrap_root)
    }

    /// Render each element of a collection through the same template.
    /// Elements honor the template's own `root` flag, so per-element
    /// wrapping falls out without a second code path.
    pub fn render_collection(
        &self,
        sources: &[SourceHandle],
        template: &Template,
    ) -> Result<Value, EvalError> {
        let mut entries = Vec::with_capacity(sources.len());
        for source in sources {
            entries.push(self.render(source.as_ref(), template, false)?.into_value());
        }
        Ok(Value::Array(entries))
    }
}

impl Engine for TemplateRegistry {
    fn evaluate_object(
        &self,
        source: &dyn Source,
        template: &Template,
    ) -> Result<Fragment, EvalError> {
        Evaluator::new(source, template, self).evaluate(false)
    }

    fn resolve_template(&self, name: &TemplateName) -> Result<Template, EvalError> {
        debug!(template = %name, "resolving template");
        self.templates
            .get(name)
            .cloned()
            .ok_or_else(|| EvalError::UnknownTemplate(name.clone()))
    }

    fn naming(&self) -> &NamePolicy {
        &self.naming
    }
}
