use crate::engine::Engine;
use crate::inflect::pluralize;
use crate::naming::COLLECTION_TAG;
use serde_json::Value;
use tracing::trace;
use veneer_template::{AttributeDirective, DataRef, DataSpec, Template};
use veneer_types::{EvalError, Fragment, Related, Source};

/// Single-use walker turning one (source, template) pair into a fragment.
///
/// Each directive group produces its own partial fragment; the partials are
/// folded in a fixed order (attributes, nodes, children, glues, extends),
/// so the overwrite contract is explicit: later groups win on key collision.
/// Evaluation is synchronous and recursive; nested evaluations run to
/// completion through the [`Engine`] before control returns here.
pub struct Evaluator<'a> {
    source: &'a dyn Source,
    template: &'a Template,
    engine: &'a dyn Engine,
}

impl<'a> Evaluator<'a> {
    pub fn new(source: &'a dyn Source, template: &'a Template, engine: &'a dyn Engine) -> Self {
        Self {
            source,
            template,
            engine,
        }
    }

    /// Produce the result fragment. `wrap_root` requests root wrapping in
    /// addition to the template's own `root` setting.
    pub fn evaluate(self, wrap_root: bool) -> Result<Fragment, EvalError> {
        let partials = [
            self.attributes(),
            self.nodes()?,
            self.children()?,
            self.glues()?,
            self.extends()?,
        ];
        let mut result = Fragment::new();
        for partial in partials {
            result.merge(partial);
        }

        if self.template.root || wrap_root {
            Ok(result.wrap(self.root_name()))
        } else {
            Ok(result)
        }
    }

    /// Explicit root name override wins; otherwise derive from the object.
    fn root_name(&self) -> String {
        self.template
            .root_name
            .clone()
            .unwrap_or_else(|| self.engine.naming().derive(self.source))
    }

    fn attributes(&self) -> Fragment {
        let mut out = Fragment::new();
        for directive in &self.template.attributes {
            match directive {
                AttributeDirective::Mapped(pairs) => {
                    for (member, output) in pairs {
                        self.read_attribute(&mut out, member, Some(output));
                    }
                }
                AttributeDirective::Named { names, rename } => {
                    for member in names {
                        self.read_attribute(&mut out, member, rename.as_deref());
                    }
                }
            }
        }
        out
    }

    /// Members the object does not expose are omitted, not errors.
    fn read_attribute(&self, out: &mut Fragment, member: &str, output: Option<&str>) {
        if self.source.has_member(member) {
            out.insert(output.unwrap_or(member), self.source.read_member(member));
        }
    }

    fn nodes(&self) -> Result<Fragment, EvalError> {
        let mut out = Fragment::new();
        for node in &self.template.nodes {
            let include = node
                .condition
                .resolve(self.source)
                .map_err(|source| EvalError::Condition {
                    key: node.key.clone(),
                    source,
                })?;
            if !include {
                continue;
            }
            let value = (node.compute)(self.source).map_err(|source| EvalError::Node {
                key: node.key.clone(),
                source,
            })?;
            out.insert(node.key.clone(), value);
        }
        Ok(out)
    }

    fn children(&self) -> Result<Fragment, EvalError> {
        let mut out = Fragment::new();
        for child in &self.template.children {
            let (data, explicit) = match &child.data {
                DataSpec::Named { data, name } => (data, Some(name.as_str())),
                DataSpec::Auto(data) => (data, None),
            };
            let Some(related) = self.resolve_data(data) else {
                continue;
            };
            if related.is_empty() {
                continue;
            }
            let name = match explicit {
                Some(name) => name.to_string(),
                None => self.derived_child_name(&related),
            };
            trace!(key = %name, "nesting child");
            out.insert(name, self.evaluate_related(&related, &child.template)?);
        }
        Ok(out)
    }

    fn glues(&self) -> Result<Fragment, EvalError> {
        let mut out = Fragment::new();
        for glue in &self.template.glues {
            let Some(related) = self.resolve_data(&glue.data) else {
                continue;
            };
            if related.is_empty() {
                continue;
            }
            let object = match &related {
                Related::One(object) => object.clone(),
                Related::Many(_) => return Err(EvalError::GlueOnCollection),
            };
            let fragment = self.engine.evaluate_object(object.as_ref(), &glue.template)?;
            out.merge(fragment);
        }
        Ok(out)
    }

    fn extends(&self) -> Result<Fragment, EvalError> {
        let mut out = Fragment::new();
        for extend in &self.template.extends {
            let base = self.engine.resolve_template(&extend.name)?;
            let merged = base.extended_with(&extend.overlay);
            let fragment = self.engine.evaluate_object(self.source, &merged)?;
            out.merge(fragment);
        }
        Ok(out)
    }

    fn resolve_data(&self, data: &DataRef) -> Option<Related> {
        match data {
            DataRef::Name(name) => self.source.relation(name),
            DataRef::Direct(related) => Some(related.clone()),
        }
    }

    /// Default child key. Entity collections pluralize the first element's
    /// name; other collections fall back to the collection tag. A single
    /// object uses its own derived name.
    fn derived_child_name(&self, related: &Related) -> String {
        match related {
            Related::One(object) => self.engine.naming().derive(object.as_ref()),
            Related::Many(items) => match items.first() {
                Some(first) if first.is_entity() => {
                    pluralize(&self.engine.naming().derive(first.as_ref()))
                }
                _ => COLLECTION_TAG.to_string(),
            },
        }
    }

    fn evaluate_related(&self, related: &Related, template: &Template) -> Result<Value, EvalError> {
        match related {
            Related::One(object) => Ok(self
                .engine
                .evaluate_object(object.as_ref(), template)?
                .into_value()),
            Related::Many(items) => {
                let mut entries = Vec::with_capacity(items.len());
                for item in items {
                    entries.push(
                        self.engine
                            .evaluate_object(item.as_ref(), template)?
                            .into_value(),
                    );
                }
                Ok(Value::Array(entries))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TemplateRegistry;
    use crate::test_support::User;
    use serde_json::json;

    #[test]
    fn groups_fold_in_fixed_order_and_later_keys_win() {
        // An attribute and a node share a key; the node group runs later.
        let template = Template::new()
            .attribute("name")
            .node("name", |_| Ok(json!("overridden")));

        let registry = TemplateRegistry::new();
        let result = registry
            .render(&User::sample(), &template, false)
            .expect("render");

        assert_eq!(result.get("name"), Some(&json!("overridden")));
    }

    #[test]
    fn explicit_root_name_wins_over_derivation() {
        let template = Template::new().attribute("name").root_name("account");

        let registry = TemplateRegistry::new();
        let result = registry
            .render(&User::sample(), &template, true)
            .expect("render");

        assert!(result.contains_key("account"));
        assert!(!result.contains_key("user"));
    }
}
