//! Input coercion for field setters.
//!
//! List-valued fields accept either a single value or a sequence at the
//! call site; a bare string is stored as a one-element list. The Expires
//! setter accepts either an already-typed timestamp or an RFC 3339
//! string still to be parsed.

use chrono::{DateTime, FixedOffset, Utc};

/// One or more values for a list-valued field.
///
/// ```
/// use st_fields::ValueList;
///
/// let one: ValueList = "https://example.com".into();
/// let many: ValueList = vec!["https://a.example", "https://b.example"].into();
/// assert_eq!(one.as_slice().len(), 1);
/// assert_eq!(many.as_slice().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueList(Vec<String>);

impl ValueList {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for ValueList {
    fn from(value: &str) -> Self {
        ValueList(vec![value.to_string()])
    }
}

impl From<String> for ValueList {
    fn from(value: String) -> Self {
        ValueList(vec![value])
    }
}

impl From<Vec<String>> for ValueList {
    fn from(values: Vec<String>) -> Self {
        ValueList(values)
    }
}

impl From<Vec<&str>> for ValueList {
    fn from(values: Vec<&str>) -> Self {
        ValueList(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ValueList {
    fn from(values: &[&str]) -> Self {
        ValueList(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Input accepted by the Expires setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpiresValue {
    /// An already-typed timestamp, accepted as-is.
    Timestamp(DateTime<FixedOffset>),
    /// An RFC 3339 string, parsed (and possibly rejected) by the setter.
    Text(String),
}

impl From<DateTime<FixedOffset>> for ExpiresValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        ExpiresValue::Timestamp(value)
    }
}

impl From<DateTime<Utc>> for ExpiresValue {
    fn from(value: DateTime<Utc>) -> Self {
        ExpiresValue::Timestamp(value.fixed_offset())
    }
}

impl From<&str> for ExpiresValue {
    fn from(value: &str) -> Self {
        ExpiresValue::Text(value.to_string())
    }
}

impl From<String> for ExpiresValue {
    fn from(value: String) -> Self {
        ExpiresValue::Text(value)
    }
}
