//! Smoke test over the facade: one composed template exercising every
//! directive kind through the re-exported API.

use serde_json::{Value, json};
use std::sync::Arc;
use veneer::{DataRef, DataSpec, Related, Source, Template, TemplateRegistry};

struct Account {
    login: String,
    plan: Plan,
    devices: Vec<Arc<Device>>,
}

struct Plan {
    tier: String,
    seats: u64,
}

struct Device {
    label: String,
}

impl Source for Account {
    fn has_member(&self, name: &str) -> bool {
        name == "login"
    }

    fn read_member(&self, name: &str) -> Value {
        match name {
            "login" => json!(self.login),
            _ => Value::Null,
        }
    }

    fn relation(&self, name: &str) -> Option<Related> {
        match name {
            "plan" => Some(Related::One(Arc::new(Plan {
                tier: self.plan.tier.clone(),
                seats: self.plan.seats,
            }))),
            "devices" => Some(Related::Many(
                self.devices
                    .iter()
                    .map(|device| device.clone() as veneer::SourceHandle)
                    .collect(),
            )),
            _ => None,
        }
    }

    fn model_name(&self) -> Option<String> {
        Some("account".to_string())
    }
}

impl Source for Plan {
    fn has_member(&self, name: &str) -> bool {
        matches!(name, "tier" | "seats")
    }

    fn read_member(&self, name: &str) -> Value {
        match name {
            "tier" => json!(self.tier),
            "seats" => json!(self.seats),
            _ => Value::Null,
        }
    }

    fn model_name(&self) -> Option<String> {
        Some("plan".to_string())
    }
}

impl Source for Device {
    fn has_member(&self, name: &str) -> bool {
        name == "label"
    }

    fn read_member(&self, name: &str) -> Value {
        match name {
            "label" => json!(self.label),
            _ => Value::Null,
        }
    }

    fn model_name(&self) -> Option<String> {
        Some("device".to_string())
    }
}

#[test]
fn composed_template_renders_every_directive_kind() {
    let mut registry = TemplateRegistry::new();
    registry.register(
        "accounts/base",
        Template::new().node("schema", |_| Ok(json!("v1"))),
    );

    let template = Template::new()
        .attribute("login")
        .node("suspended", |_| Ok(json!(false)))
        .child(DataSpec::member("devices"), Template::new().attribute("label"))
        .glue(DataRef::name("plan"), Template::new().attributes(["tier", "seats"]))
        .extends("accounts/base", Template::new())
        .root(true);

    let account = Account {
        login: "ada".to_string(),
        plan: Plan {
            tier: "pro".to_string(),
            seats: 5,
        },
        devices: vec![
            Arc::new(Device {
                label: "laptop".to_string(),
            }),
            Arc::new(Device {
                label: "phone".to_string(),
            }),
        ],
    };

    let fragment = registry
        .render(&account, &template, false)
        .expect("render");

    assert_eq!(
        serde_json::to_value(&fragment).expect("serialize"),
        json!({
            "account": {
                "login": "ada",
                "suspended": false,
                "devices": [
                    { "label": "laptop" },
                    { "label": "phone" },
                ],
                "tier": "pro",
                "seats": 5,
                "schema": "v1",
            }
        })
    );
}
