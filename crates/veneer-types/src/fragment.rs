use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered key/value mapping produced by evaluating a template.
///
/// Keys appear in the order their directives inserted them (`serde_json` is
/// built with `preserve_order`), so the same template always serializes the
/// same way. Merging is shallow: a colliding key keeps its original position
/// and takes the incoming value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fragment(Map<String, Value>);

impl Fragment {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Shallow-merge `other` into `self`, overwriting on key collision.
    pub fn merge(&mut self, other: Fragment) {
        self.0.extend(other.0);
    }

    /// Wrap the whole fragment under a single key, `{ name: self }`.
    pub fn wrap(self, name: impl Into<String>) -> Fragment {
        let mut wrapped = Fragment::new();
        wrapped.insert(name, Value::Object(self.0));
        wrapped
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<Fragment> for Value {
    fn from(fragment: Fragment) -> Self {
        fragment.into_value()
    }
}

impl From<Map<String, Value>> for Fragment {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Fragment {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Fragment {
    type Item = (String, Value);
    type IntoIter = <Map<String, Value> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
