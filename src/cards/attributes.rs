//! Card property values.
//!
//! Property values are typed while a card is being built and queried, but
//! rendering and template matching only ever see their text form.
//!
//! ## AttributeValue Types
//!
//! - `Int`: Numbers (cost, strength)
//! - `Bool`: Flags (unique, loyal)
//! - `Text`: Strings (name, rules text, traits)
//! - `IntList` / `TextList`: Multi-valued fields, joined with ", "

use std::fmt;

use serde::{Deserialize, Serialize};

/// Value of a single card property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Integer value.
    Int(i64),
    /// Boolean flag.
    Bool(bool),
    /// Text value.
    Text(String),
    /// List of integers.
    IntList(Vec<i64>),
    /// List of strings.
    TextList(Vec<String>),
}

impl AttributeValue {
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Canonical text form fed to proxy rendering and template matching.
impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Int(v) => write!(f, "{v}"),
            AttributeValue::Bool(v) => f.write_str(if *v { "True" } else { "False" }),
            AttributeValue::Text(s) => f.write_str(s),
            AttributeValue::IntList(values) => {
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{v}")?;
                }
                Ok(())
            }
            AttributeValue::TextList(values) => f.write_str(&values.join(", ")),
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Int(v as i64)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}

impl From<Vec<i64>> for AttributeValue {
    fn from(v: Vec<i64>) -> Self {
        AttributeValue::IntList(v)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(v: Vec<String>) -> Self {
        AttributeValue::TextList(v)
    }
}
