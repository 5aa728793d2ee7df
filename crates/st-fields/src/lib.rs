//! security.txt field model, validation, and text rendering.
//!
//! This crate models the fields of an RFC 9116 security.txt document:
//! - Typed accessors for the seven fields, validated on every mutation
//! - URI scheme-prefix rules per field (https-only, contact schemes,
//!   plain-http rejection)
//! - Deterministic rendering of the file body, with fixed field order
//!
//! # Example
//!
//! ```
//! use st_fields::Fields;
//!
//! let mut fields = Fields::new();
//! fields.configure(|f| {
//!     f.set_contact(Some("mailto:security@example.com"))?;
//!     f.set_canonical(Some("https://example.com/.well-known/security.txt"))?;
//!     f.set_expires(Some("2030-01-01T00:00:00Z"))
//! })?;
//!
//! assert!(fields.valid());
//! assert_eq!(
//!     fields.to_string(),
//!     "Canonical: https://example.com/.well-known/security.txt\n\n\
//!      Contact: mailto:security@example.com\n\n\
//!      Expires: 2030-01-01T00:00:00Z"
//! );
//! # Ok::<(), st_fields::FieldError>(())
//! ```

pub mod config;
pub mod error;
pub mod field;
pub mod fields;
pub mod render;
pub mod value;

pub use config::Config;
pub use error::{FieldError, Result};
pub use field::{FieldName, SchemeRule, CONTACT_PREFIXES};
pub use fields::Fields;
pub use render::FieldValue;
pub use value::{ExpiresValue, ValueList};
