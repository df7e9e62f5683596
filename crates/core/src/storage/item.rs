use std::collections::HashMap;

/// A scalar attribute value as the key-value backend stores it.
///
/// Mirrors the scalar subset of DynamoDB's attribute types. User records only
/// ever use `S`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeValue {
    S(String),
    /// Numbers travel as strings, as DynamoDB sends them.
    N(String),
    Bool(bool),
    Null,
}

impl AttributeValue {
    /// Returns the string payload if this is an `S` value.
    pub fn as_s(&self) -> Option<&str> {
        match self {
            AttributeValue::S(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::S(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::S(value)
    }
}

/// One stored item (or key, or set of updates): attribute name to value.
pub type Item = HashMap<String, AttributeValue>;
