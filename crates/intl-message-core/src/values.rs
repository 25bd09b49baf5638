use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;

use crate::{CoreError, CoreResult, Node};

pub type RichTextFn = Arc<dyn Fn(Vec<Node>) -> Node + Send + Sync>;

#[derive(Clone)]
pub enum Value {
    Str(String),
    Num(f64),
    Bool(bool),
    DateTime(i64),
    Element(Arc<Node>),
    RichText(RichTextFn),
    Any(Arc<dyn Any + Send + Sync>),
}

impl Value {
    pub fn element(node: Node) -> Self {
        Value::Element(Arc::new(node))
    }

    pub fn rich_text<F>(f: F) -> Self
    where
        F: Fn(Vec<Node>) -> Node + Send + Sync + 'static,
    {
        Value::RichText(Arc::new(f))
    }

    // NaN matches NaN. Element, RichText and Any compare by pointer, so in-place
    // mutation behind a shared pointer is not seen.
    pub fn shallow_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Num(a), Value::Num(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            (Value::Element(a), Value::Element(b)) => Arc::ptr_eq(a, b),
            (Value::RichText(a), Value::RichText(b)) => Arc::ptr_eq(a, b),
            (Value::Any(a), Value::Any(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Num(_) => "number",
            Value::Bool(_) => "boolean",
            Value::DateTime(_) => "datetime",
            Value::Element(_) => "element",
            Value::RichText(_) => "rich text function",
            Value::Any(_) => "opaque value",
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(value) => f.debug_tuple("Str").field(value).finish(),
            Value::Num(value) => f.debug_tuple("Num").field(value).finish(),
            Value::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Value::DateTime(value) => f.debug_tuple("DateTime").field(value).finish(),
            Value::Element(node) => f.debug_tuple("Element").field(node).finish(),
            Value::RichText(_) => f.write_str("RichText(..)"),
            Value::Any(_) => f.write_str("Any(..)"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(String::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Num(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Num(f64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Node> for Value {
    fn from(value: Node) -> Self {
        Value::element(value)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Values {
    entries: BTreeMap<String, Value>,
}

impl Values {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn require(&self, name: &str) -> CoreResult<&Value> {
        self.entries
            .get(name)
            .ok_or(CoreError::InvalidInput("missing argument"))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn shallow_eq(&self, other: &Values) -> bool {
        if self.entries.len() != other.entries.len() {
            return false;
        }
        self.entries.iter().all(|(name, value)| {
            other
                .entries
                .get(name)
                .is_some_and(|candidate| value.shallow_eq(candidate))
        })
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Values {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Values::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}

pub fn shallow_eq_values(a: Option<&Values>, b: Option<&Values>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.shallow_eq(b),
        _ => false,
    }
}
