//! Field names and per-field scheme rules.
//!
//! RFC 9116 constrains the URI schemes each field may carry. The rules
//! live in one table ([`FieldName::scheme_rule`]) consumed by a single
//! checker ([`SchemeRule::check`]), so every setter validates the same
//! way.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FieldError, Result};

/// Scheme prefixes accepted for the Contact field.
pub const CONTACT_PREFIXES: [&str; 3] = ["https://", "mailto:", "tel:"];

/// The seven security.txt fields, in canonical output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Acknowledgments,
    Canonical,
    Contact,
    Encryption,
    Expires,
    Hiring,
    PreferredLanguages,
}

impl FieldName {
    /// All fields, in the fixed order used for rendered output.
    pub const ALL: [FieldName; 7] = [
        FieldName::Acknowledgments,
        FieldName::Canonical,
        FieldName::Contact,
        FieldName::Encryption,
        FieldName::Expires,
        FieldName::Hiring,
        FieldName::PreferredLanguages,
    ];

    /// RFC 9116 label used in rendered output.
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Acknowledgments => "Acknowledgments",
            FieldName::Canonical => "Canonical",
            FieldName::Contact => "Contact",
            FieldName::Encryption => "Encryption",
            FieldName::Expires => "Expires",
            FieldName::Hiring => "Hiring",
            FieldName::PreferredLanguages => "Preferred-Languages",
        }
    }

    /// Scheme constraint applied to this field's values.
    pub fn scheme_rule(&self) -> SchemeRule {
        match self {
            FieldName::Acknowledgments | FieldName::Canonical => SchemeRule::HttpsOnly,
            FieldName::Contact => SchemeRule::ContactSchemes,
            FieldName::Encryption | FieldName::Hiring => SchemeRule::NoPlainHttp,
            FieldName::Expires | FieldName::PreferredLanguages => SchemeRule::Unrestricted,
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// URI scheme constraint for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeRule {
    /// Every value must start with `https://` (Acknowledgments, Canonical).
    HttpsOnly,
    /// Every value must start with one of [`CONTACT_PREFIXES`] (Contact).
    ContactSchemes,
    /// No value may start with plain `http://`; any other scheme passes
    /// (Encryption, Hiring).
    NoPlainHttp,
    /// No scheme constraint (Expires, Preferred-Languages).
    Unrestricted,
}

impl SchemeRule {
    /// Check every value against this rule, naming `field` in any error.
    ///
    /// Prefix matching is case-sensitive and the first offending value
    /// wins; the caller stores nothing on failure.
    pub fn check(&self, field: FieldName, values: &[String]) -> Result<()> {
        for uri in values {
            let ok = match self {
                SchemeRule::HttpsOnly => uri.starts_with("https://"),
                SchemeRule::ContactSchemes => {
                    CONTACT_PREFIXES.iter().any(|prefix| uri.starts_with(prefix))
                }
                SchemeRule::NoPlainHttp => !uri.starts_with("http://"),
                SchemeRule::Unrestricted => true,
            };
            if !ok {
                debug!(field = %field, uri = %uri, "rejected field value");
                return Err(FieldError::InvalidScheme {
                    field,
                    uri: uri.clone(),
                    expected: self.expected(),
                });
            }
        }
        Ok(())
    }

    /// Human-readable description of what this rule accepts.
    fn expected(&self) -> &'static str {
        match self {
            SchemeRule::HttpsOnly => "an https:// URI",
            SchemeRule::ContactSchemes => "an https://, mailto:, or tel: URI",
            SchemeRule::NoPlainHttp => "any URI other than plain http://",
            SchemeRule::Unrestricted => "any value",
        }
    }
}
