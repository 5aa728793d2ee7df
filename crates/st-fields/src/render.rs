//! Rendering of a field set into the RFC 9116 text body and into a
//! label-keyed mapping.
//!
//! Output order is fixed by [`FieldName::ALL`] regardless of the order
//! fields were set. Absent fields are omitted entirely.

use chrono::SecondsFormat;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::field::FieldName;
use crate::fields::Fields;

/// A field's value as it appears in mapping output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A single rendered value (Expires, Preferred-Languages).
    One(String),
    /// One value per rendered line (all other fields).
    Many(Vec<String>),
}

impl FieldValue {
    /// The `"<Label>: <value>"` lines this value contributes.
    fn lines(&self, field: FieldName) -> Vec<String> {
        match self {
            FieldValue::One(v) => vec![format!("{}: {}", field.label(), v)],
            FieldValue::Many(vs) => vs
                .iter()
                .map(|v| format!("{}: {}", field.label(), v))
                .collect(),
        }
    }
}

impl Fields {
    /// The mapping form of this field set: RFC label to value, in fixed
    /// field order, absent fields omitted.
    ///
    /// Expires is rendered by chrono's RFC 3339 formatter;
    /// Preferred-Languages is joined into a single comma-separated
    /// value.
    pub fn entries(&self) -> Vec<(FieldName, FieldValue)> {
        let mut out = Vec::new();
        for field in FieldName::ALL {
            let value = match field {
                FieldName::Acknowledgments => self.acknowledgments().map(many),
                FieldName::Canonical => self.canonical().map(many),
                FieldName::Contact => self.contact().map(many),
                FieldName::Encryption => self.encryption().map(many),
                FieldName::Expires => self
                    .expires()
                    .map(|ts| FieldValue::One(ts.to_rfc3339_opts(SecondsFormat::AutoSi, true))),
                FieldName::Hiring => self.hiring().map(many),
                FieldName::PreferredLanguages => self
                    .preferred_languages()
                    .map(|tags| FieldValue::One(tags.join(", "))),
            };
            if let Some(value) = value {
                out.push((field, value));
            }
        }
        out
    }
}

fn many(values: &[String]) -> FieldValue {
    FieldValue::Many(values.to_vec())
}

/// Serializes to the mapping form of [`Fields::entries`], with RFC
/// labels as keys.
impl Serialize for Fields {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (field, value) in &entries {
            map.serialize_entry(field.label(), value)?;
        }
        map.end()
    }
}

/// Renders the security.txt body: one `"<Label>: <value>"` line per
/// element, lines of the same field newline-separated, a blank line
/// between different fields, no trailing newline. An empty field set
/// renders as the empty string.
impl std::fmt::Display for Fields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let groups: Vec<String> = self
            .entries()
            .iter()
            .map(|(field, value)| value.lines(*field).join("\n"))
            .filter(|group| !group.is_empty())
            .collect();
        f.write_str(&groups.join("\n\n"))
    }
}
