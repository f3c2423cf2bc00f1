//! Tagged runtime values produced by dynamic binding

use std::fmt;
use std::time::Duration;

use crate::schema::FieldKind;

/// A parsed option value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean flag value
    Bool(bool),
    /// Elapsed-time value
    Duration(Duration),
    /// 64-bit float value
    Float(f64),
    /// Signed 32-bit integer value
    Int32(i32),
    /// Signed 64-bit integer value
    Int64(i64),
    /// Unsigned 32-bit integer value
    UInt32(u32),
    /// Unsigned 64-bit integer value
    UInt64(u64),
    /// UTF-8 text value
    Text(String),
}

impl Value {
    /// The kind this value belongs to
    pub fn kind(&self) -> FieldKind {
        match self {
            Value::Bool(_) => FieldKind::Bool,
            Value::Duration(_) => FieldKind::Duration,
            Value::Float(_) => FieldKind::Float,
            Value::Int32(_) => FieldKind::Int32,
            Value::Int64(_) => FieldKind::Int64,
            Value::UInt32(_) => FieldKind::UInt32,
            Value::UInt64(_) => FieldKind::UInt64,
            Value::Text(_) => FieldKind::Text,
        }
    }

    /// The contained boolean, if this is a boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// The contained duration, if this is a duration value
    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            Value::Duration(v) => Some(*v),
            _ => None,
        }
    }

    /// The contained float, if this is a float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// The contained signed 32-bit integer, if present
    pub fn as_int32(&self) -> Option<i32> {
        match self {
            Value::Int32(v) => Some(*v),
            _ => None,
        }
    }

    /// The contained signed 64-bit integer, if present
    pub fn as_int64(&self) -> Option<i64> {
        match self {
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// The contained unsigned 32-bit integer, if present
    pub fn as_uint32(&self) -> Option<u32> {
        match self {
            Value::UInt32(v) => Some(*v),
            _ => None,
        }
    }

    /// The contained unsigned 64-bit integer, if present
    pub fn as_uint64(&self) -> Option<u64> {
        match self {
            Value::UInt64(v) => Some(*v),
            _ => None,
        }
    }

    /// The contained text, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{}", v),
            Value::Duration(v) => write!(f, "{}", humantime::format_duration(*v)),
            Value::Float(v) => write!(f, "{}", v),
            Value::Int32(v) => write!(f, "{}", v),
            Value::Int64(v) => write!(f, "{}", v),
            Value::UInt32(v) => write!(f, "{}", v),
            Value::UInt64(v) => write!(f, "{}", v),
            Value::Text(v) => f.write_str(v),
        }
    }
}

/// Ordered record of bound option values
///
/// Entries keep the declaration order of the schema that produced them. The
/// record lives for one binding call; it carries no cross-call state.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValueMap {
    entries: Vec<(String, Value)>,
}

impl ValueMap {
    pub(crate) fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.entries.push((name.into(), value));
    }

    /// Look up a value by option name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, value)| value)
    }

    /// Iterate entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of bound options
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record holds no values
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
