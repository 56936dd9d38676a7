//! Host cell values with a first-class missing marker.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::DataType;

/// A single host-side cell: a typed value or the canonical absent marker.
///
/// `Missing` is the only representation of absence, regardless of which
/// foreign sentinel produced it. It is distinct from every domain value;
/// in particular the text `"NA"` stays `Text("NA")`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
    Text(String),
    Int(i64),
    Real(f64),
    Bool(bool),
    Date(NaiveDate),
    Missing,
}

impl Value {
    /// True for the canonical missing marker only.
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// The data type this value belongs to; `None` for `Missing`, which
    /// belongs to every column type.
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Value::Text(_) => Some(DataType::Text),
            Value::Int(_) => Some(DataType::Integer),
            Value::Real(_) => Some(DataType::Real),
            Value::Bool(_) => Some(DataType::Boolean),
            Value::Date(_) => Some(DataType::Date),
            Value::Missing => None,
        }
    }

    /// Borrow the text payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Integer payload, if any.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric payload widened to f64, if any.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Real(v) => Some(*v),
            _ => None,
        }
    }

    /// Render for delimited output. Missing renders as the empty field.
    pub fn render(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Int(v) => v.to_string(),
            Value::Real(v) => v.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
            Value::Missing => String::new(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => write!(f, "<missing>"),
            other => write!(f, "{}", other.render()),
        }
    }
}
