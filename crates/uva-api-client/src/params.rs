use serde::Serialize;
use serde_json::{Map, Value};

pub const DEFAULT_METHOD: &str = "GET";

/// Action-specific arguments sent as `params` in the gateway body.
///
/// Empty strings and `false` flags are never stored, so an unset flag leaves
/// no key behind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParamMap(Map<String, Value>);

impl ParamMap {
    /// Starts with `method: "GET"`.
    pub fn new() -> Self {
        let mut map = Map::new();
        map.insert("method".to_string(), Value::from(DEFAULT_METHOD));
        Self(map)
    }

    pub fn insert_str(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.0.insert(key.to_string(), Value::from(value));
        }
        self
    }

    pub fn insert_flag(&mut self, key: &str, set: bool) -> &mut Self {
        if set {
            self.0.insert(key.to_string(), Value::Bool(true));
        }
        self
    }

    /// Stores a JSON value; `null` and empty objects/arrays/strings are dropped.
    pub fn insert_json(&mut self, key: &str, value: Option<&Value>) -> &mut Self {
        if let Some(value) = value.filter(|v| is_truthy(v)) {
            self.0.insert(key.to_string(), value.clone());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }
}

impl Default for ParamMap {
    fn default() -> Self {
        Self::new()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Number(_) => true,
    }
}
