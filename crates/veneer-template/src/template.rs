use crate::condition::Condition;
use crate::directive::{
    AttributeDirective, ChildDirective, ComputeFn, DataRef, DataSpec, ExtendDirective,
    GlueDirective, NodeDirective,
};
use serde_json::Value;
use std::sync::Arc;
use veneer_types::{DirectiveError, Source, TemplateName};

/// A parsed directive set plus its evaluation options.
///
/// Groups are processed in a fixed order (attributes, nodes, children,
/// glues, extends), so later groups overwrite keys set by earlier ones.
/// All fields are public: a template can be assembled as plain data or
/// through the builder methods below.
#[derive(Clone, Debug, Default)]
pub struct Template {
    /// Wrap the final result under the root name.
    pub root: bool,
    /// Explicit root name; wins over the derived model name.
    pub root_name: Option<String>,
    pub attributes: Vec<AttributeDirective>,
    pub nodes: Vec<NodeDirective>,
    pub children: Vec<ChildDirective>,
    pub glues: Vec<GlueDirective>,
    pub extends: Vec<ExtendDirective>,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(mut self, root: bool) -> Self {
        self.root = root;
        self
    }

    pub fn root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = Some(name.into());
        self
    }

    /// Include one member under its own name.
    pub fn attribute(self, name: impl Into<String>) -> Self {
        self.attributes([name])
    }

    /// Include several members, each under its own name.
    pub fn attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes.push(AttributeDirective::Named {
            names: names.into_iter().map(Into::into).collect(),
            rename: None,
        });
        self
    }

    /// Include one member under a different output key.
    pub fn attribute_as(mut self, name: impl Into<String>, output: impl Into<String>) -> Self {
        self.attributes.push(AttributeDirective::Named {
            names: vec![name.into()],
            rename: Some(output.into()),
        });
        self
    }

    /// Include members from explicit `source -> output` pairs.
    pub fn attribute_map<I, S, T>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        self.attributes.push(AttributeDirective::Mapped(
            pairs
                .into_iter()
                .map(|(source, output)| (source.into(), output.into()))
                .collect(),
        ));
        self
    }

    /// Add an unconditional computed node.
    pub fn node(
        self,
        key: impl Into<String>,
        compute: impl Fn(&dyn Source) -> Result<Value, DirectiveError> + Send + Sync + 'static,
    ) -> Self {
        self.node_if(key, Condition::always(), compute)
    }

    /// Add a computed node gated by a condition.
    pub fn node_if(
        mut self,
        key: impl Into<String>,
        condition: Condition,
        compute: impl Fn(&dyn Source) -> Result<Value, DirectiveError> + Send + Sync + 'static,
    ) -> Self {
        self.nodes.push(NodeDirective {
            key: key.into(),
            condition,
            compute: Arc::new(compute) as ComputeFn,
        });
        self
    }

    /// Nest related data as a child sub-structure.
    pub fn child(mut self, data: DataSpec, template: Template) -> Self {
        self.children.push(ChildDirective { data, template });
        self
    }

    /// Merge a related object's fields flat into this result.
    pub fn glue(mut self, data: DataRef, template: Template) -> Self {
        self.glues.push(GlueDirective { data, template });
        self
    }

    /// Reuse a registered template, extended by `overlay` for this
    /// evaluation only.
    pub fn extends(mut self, name: impl Into<TemplateName>, overlay: Template) -> Self {
        self.extends.push(ExtendDirective {
            name: name.into(),
            overlay,
        });
        self
    }

    /// Overlay another directive set onto this one: base groups first, the
    /// overlay's appended after, so overlay keys win on collision. Overlay
    /// root settings win when set.
    pub fn extended_with(&self, overlay: &Template) -> Template {
        let mut merged = self.clone();
        merged
            .attributes
            .extend(overlay.attributes.iter().cloned());
        merged.nodes.extend(overlay.nodes.iter().cloned());
        merged.children.extend(overlay.children.iter().cloned());
        merged.glues.extend(overlay.glues.iter().cloned());
        merged.extends.extend(overlay.extends.iter().cloned());
        if overlay.root {
            merged.root = true;
        }
        if overlay.root_name.is_some() {
            merged.root_name = overlay.root_name.clone();
        }
        merged
    }
}
