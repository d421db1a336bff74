use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::util::sort::sort_value_keys;

/// Value compared by a [`Validation`](crate::domain::validation::Validation).
///
/// Numeric operators accept only [`Operand::Int`]. Every variant has a
/// canonical byte form used by the deviation, regex and contains operators.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Operand {
    /// Absence of a value.
    #[default]
    Nil,
    Int(i64),
    Str(String),
    Bytes(Vec<u8>),
    Structured(Value),
}

impl Operand {
    /// Classifies a JSON value: integers that fit `i64` become `Int`, strings
    /// become `Str`, `null` becomes `Nil`, anything else stays structured.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => Self::Nil,
            Value::String(text) => Self::Str(text),
            Value::Number(number) => match number.as_i64() {
                Some(int) => Self::Int(int),
                None => Self::Structured(Value::Number(number)),
            },
            other => Self::Structured(other),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Deterministic JSON encoding with object keys sorted recursively.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        match self {
            Self::Structured(value) => serde_json::to_vec(&sort_value_keys(value)),
            other => serde_json::to_vec(other),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Str(text) => write!(f, "{text:?}"),
            Self::Bytes(bytes) => write!(f, "{bytes:?}"),
            Self::Structured(value) => write!(f, "{value}"),
        }
    }
}

impl<'de> Deserialize<'de> for Operand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_json)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<u8>> for Operand {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<&[u8]> for Operand {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Self::from_json(value)
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}
