// meshbridge-core/src/domain/value.rs
//
// Loosely-typed connection configuration, as exchanged with the policy
// framework and the catalog. Values keep whatever type the document carried.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::error::DomainError;

/// One engine's view of a database connection.
pub type ConfigMap = BTreeMap<String, ConfigValue>;

// Variant order matters for `untagged`: integers must be tried before floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum ConfigValue {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<ConfigValue>),
    Map(ConfigMap),
}

impl ConfigValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ConfigMap> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Typed access to a string field; the field name ends up in the error.
    pub fn expect_str(&self, field: &str) -> Result<&str, DomainError> {
        self.as_str().ok_or_else(|| DomainError::ShapeMismatch {
            field: field.to_string(),
            expected: "string",
            found: self.type_name(),
        })
    }

    /// Typed access to a nested map.
    pub fn expect_map(&self, field: &str) -> Result<&ConfigMap, DomainError> {
        self.as_map().ok_or_else(|| DomainError::ShapeMismatch {
            field: field.to_string(),
            expected: "map",
            found: self.type_name(),
        })
    }

    /// Renders a scalar the way it appears inside a `host:port` string.
    /// Floats are printed without decimals (`3306.0` -> `3306`).
    pub fn to_address_part(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            Self::Integer(i) => Some(i.to_string()),
            Self::Float(f) => Some(format!("{:.0}", f)),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::String(s) => write!(f, "{}", s),
            Self::List(items) => write!(f, "[{} items]", items.len()),
            Self::Map(m) => write!(f, "{{{} keys}}", m.len()),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<i32> for ConfigValue {
    fn from(i: i32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<u16> for ConfigValue {
    fn from(i: u16) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<f64> for ConfigValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(m: ConfigMap) -> Self {
        Self::Map(m)
    }
}
