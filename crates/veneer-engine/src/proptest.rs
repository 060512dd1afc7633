//! Property-based tests for the evaluation engine.
//!
//! These tests use proptest to verify invariants around:
//! - idempotence of evaluation with pure closures
//! - attribute probing never inventing keys
//! - literal node conditions gating inclusion exactly
//! - root wrapping always yielding a single key

use crate::engine::TemplateRegistry;
use crate::inflect::pluralize;
use crate::test_support::User;
use proptest::prelude::*;
use serde_json::json;
use veneer_template::{Condition, Predicate, Template};

/// Members the fixture user actually exposes.
const EXPOSED: &[&str] = &["name", "email", "age"];

/// Strategy for member names: a mix of exposed and unexposed ones.
fn arb_member_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("name".to_string()),
        Just("email".to_string()),
        Just("age".to_string()),
        Just("nickname".to_string()),
        Just("login_count".to_string()),
    ]
}

/// Strategy for scalar node values.
fn arb_node_value() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        any::<bool>().prop_map(|b| json!(b)),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,12}".prop_map(|s| json!(s)),
    ]
}

#[derive(Clone, Debug)]
struct NodeCase {
    value: serde_json::Value,
    include: bool,
}

fn arb_nodes() -> impl Strategy<Value = Vec<NodeCase>> {
    prop::collection::vec(
        (arb_node_value(), any::<bool>())
            .prop_map(|(value, include)| NodeCase { value, include }),
        0..6,
    )
}

/// Assemble a template with the given attribute members and literal-gated
/// nodes keyed `node_0`, `node_1`, ...
fn build_template(members: &[String], nodes: &[NodeCase], root: bool) -> Template {
    let mut template = Template::new().attributes(members.to_vec()).root(root);
    for (index, case) in nodes.iter().enumerate() {
        let value = case.value.clone();
        template = template.node_if(
            format!("node_{index}"),
            Condition::when(Predicate::Literal(case.include)),
            move |_| Ok(value.clone()),
        );
    }
    template
}

proptest! {
    /// Evaluating the same (object, template) twice yields equal fragments.
    #[test]
    fn evaluation_is_idempotent(
        members in prop::collection::vec(arb_member_name(), 0..6),
        nodes in arb_nodes(),
        root in any::<bool>(),
    ) {
        let template = build_template(&members, &nodes, root);
        let registry = TemplateRegistry::new();
        let user = User::sample();

        let first = registry.render(&user, &template, false).expect("render");
        let second = registry.render(&user, &template, false).expect("render");

        prop_assert_eq!(first, second);
    }

    /// Attribute directives can only ever surface members the object exposes.
    #[test]
    fn unexposed_members_never_appear(
        members in prop::collection::vec(arb_member_name(), 0..8),
    ) {
        let template = Template::new().attributes(members.clone());
        let result = TemplateRegistry::new()
            .render(&User::sample(), &template, false)
            .expect("render");

        for key in result.keys() {
            prop_assert!(EXPOSED.contains(&key), "unexpected key {}", key);
        }
        for member in &members {
            prop_assert_eq!(
                result.contains_key(member),
                EXPOSED.contains(&member.as_str()),
                "member {} mishandled", member
            );
        }
    }

    /// A literal-false condition omits the key; a literal-true includes the
    /// computed value.
    #[test]
    fn literal_conditions_gate_inclusion_exactly(nodes in arb_nodes()) {
        let template = build_template(&[], &nodes, false);
        let result = TemplateRegistry::new()
            .render(&User::sample(), &template, false)
            .expect("render");

        for (index, case) in nodes.iter().enumerate() {
            let key = format!("node_{index}");
            if case.include {
                prop_assert_eq!(result.get(&key), Some(&case.value));
            } else {
                prop_assert!(!result.contains_key(&key));
            }
        }
    }

    /// Root wrapping always produces exactly one key, named for the object.
    #[test]
    fn root_wrapping_yields_exactly_one_key(
        members in prop::collection::vec(arb_member_name(), 0..6),
        nodes in arb_nodes(),
    ) {
        let template = build_template(&members, &nodes, true);
        let result = TemplateRegistry::new()
            .render(&User::sample(), &template, false)
            .expect("render");

        prop_assert_eq!(result.len(), 1);
        prop_assert!(result.contains_key("user"));
    }

    /// The pluralizer is total over plain lower-case words.
    #[test]
    fn pluralize_is_total_on_lowercase_words(word in "[a-z]{1,16}") {
        let plural = pluralize(&word);
        prop_assert!(!plural.is_empty());
    }
}
