//! Fixture sources shared by unit, property, and integration tests.

use serde_json::{Value, json};
use std::sync::Arc;
use veneer_types::{Related, Source, SourceHandle};

/// Wrap a concrete source into a shared handle.
pub fn handle<S: Source + 'static>(source: S) -> SourceHandle {
    Arc::new(source)
}

/// Model-like user entity with scalar members and two relations.
#[derive(Clone, Debug)]
pub struct User {
    pub name: String,
    pub email: Option<String>,
    pub age: u64,
    pub address: Option<Address>,
    pub posts: Vec<Post>,
}

impl User {
    pub fn sample() -> Self {
        Self {
            name: "ada".to_string(),
            email: Some("ada@example.com".to_string()),
            age: 36,
            address: Some(Address {
                city: "london".to_string(),
                zip: "n1".to_string(),
            }),
            posts: vec![
                Post {
                    title: "engines".to_string(),
                    published: true,
                },
                Post {
                    title: "notes on analysis".to_string(),
                    published: false,
                },
            ],
        }
    }

    /// A bare user with no relations, for absence tests.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            email: None,
            age: 0,
            address: None,
            posts: Vec::new(),
        }
    }
}

impl Source for User {
    fn has_member(&self, name: &str) -> bool {
        matches!(name, "name" | "email" | "age")
    }

    fn read_member(&self, name: &str) -> Value {
        match name {
            "name" => json!(self.name),
            "email" => self.email.as_deref().map_or(Value::Null, Value::from),
            "age" => json!(self.age),
            _ => Value::Null,
        }
    }

    fn relation(&self, name: &str) -> Option<Related> {
        match name {
            "address" => self
                .address
                .clone()
                .map(|address| Related::One(handle(address))),
            "posts" => Some(Related::Many(
                self.posts.iter().cloned().map(handle).collect(),
            )),
            _ => None,
        }
    }

    fn model_name(&self) -> Option<String> {
        Some("user".to_string())
    }
}

#[derive(Clone, Debug)]
pub struct Address {
    pub city: String,
    pub zip: String,
}

impl Source for Address {
    fn has_member(&self, name: &str) -> bool {
        matches!(name, "city" | "zip")
    }

    fn read_member(&self, name: &str) -> Value {
        match name {
            "city" => json!(self.city),
            "zip" => json!(self.zip),
            _ => Value::Null,
        }
    }

    fn model_name(&self) -> Option<String> {
        Some("address".to_string())
    }
}

#[derive(Clone, Debug)]
pub struct Post {
    pub title: String,
    pub published: bool,
}

impl Source for Post {
    fn has_member(&self, name: &str) -> bool {
        matches!(name, "title" | "published")
    }

    fn read_member(&self, name: &str) -> Value {
        match name {
            "title" => json!(self.title),
            "published" => json!(self.published),
            _ => Value::Null,
        }
    }

    fn model_name(&self) -> Option<String> {
        Some("post".to_string())
    }
}

/// Source without the naming capability; exercises the fallback policy.
#[derive(Clone, Debug)]
pub struct Widget {
    pub id: u64,
}

impl Source for Widget {
    fn has_member(&self, name: &str) -> bool {
        name == "id"
    }

    fn read_member(&self, name: &str) -> Value {
        match name {
            "id" => json!(self.id),
            _ => Value::Null,
        }
    }

    fn type_tag(&self) -> &str {
        "Widget"
    }
}

/// Plain tag value; not an entity, so collections of these are unnamed.
#[derive(Clone, Debug)]
pub struct Label(pub String);

impl Source for Label {
    fn has_member(&self, name: &str) -> bool {
        name == "text"
    }

    fn read_member(&self, name: &str) -> Value {
        match name {
            "text" => json!(self.0),
            _ => Value::Null,
        }
    }

    fn is_entity(&self) -> bool {
        false
    }
}
