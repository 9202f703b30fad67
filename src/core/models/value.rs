//! Parameter values supplied to a path builder

use std::collections::HashMap;

use serde_json::Value as Json;

/// A value bound to one parameter name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    /// Explicitly absent; treated like a missing key
    #[default]
    Null,
    /// A single scalar, already rendered to text
    Single(String),
    /// An ordered list of scalars for a repeating parameter
    List(Vec<String>),
}

impl Value {
    /// Whether this value is absent
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

macro_rules! scalar_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Single(value.to_string())
                }
            }
        )*
    };
}

scalar_from!(i32, i64, u8, u16, u32, u64, usize, bool, char);

/// Floats keep their fractional part (`1.0`, not `1`), like JSON numbers
impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Single(format!("{value:?}"))
    }
}

impl<T: ToString> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.iter().map(ToString::to_string).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<Json> for Value {
    fn from(value: Json) -> Self {
        match value {
            Json::Null => Self::Null,
            Json::Array(items) => Self::List(items.into_iter().map(json_text).collect()),
            other => Self::Single(json_text(other)),
        }
    }
}

/// Render a JSON scalar the way it should appear in a path
fn json_text(value: Json) -> String {
    match value {
        Json::String(s) => s,
        other => other.to_string(),
    }
}

/// Parameter values keyed by name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Params {
    values: HashMap<String, Value>,
}

impl Params {
    /// Create an empty set of parameters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, builder style
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace a value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up a value; `Null` entries read as absent
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).filter(|v| !v.is_null())
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

impl TryFrom<Json> for Params {
    type Error = String;

    fn try_from(value: Json) -> Result<Self, Self::Error> {
        match value {
            Json::Object(map) => Ok(map.into_iter().collect()),
            Json::Null => Ok(Self::new()),
            other => Err(format!("expected a JSON object of parameters, got {other}")),
        }
    }
}
