//! The security.txt field set: typed accessors and validation.
//!
//! Every mutation goes through validation; a rejected value leaves the
//! field untouched. There is no constructor that bypasses the setters.

use chrono::{DateTime, FixedOffset};

use crate::error::{FieldError, Result};
use crate::field::FieldName;
use crate::value::{ExpiresValue, ValueList};

/// The fields of one security.txt document.
///
/// List-valued setters accept a single value or a sequence; `None`
/// clears the field so it is omitted from output.
///
/// ```
/// use st_fields::Fields;
///
/// let mut fields = Fields::new();
/// fields.set_contact(Some("mailto:security@example.com"))?;
/// fields.set_expires(Some("2030-01-01T00:00:00Z"))?;
/// assert!(fields.valid());
///
/// // Clearing takes an explicit None
/// fields.set_contact(None::<&str>)?;
/// assert!(!fields.valid());
/// # Ok::<(), st_fields::FieldError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    acknowledgments: Option<Vec<String>>,
    canonical: Option<Vec<String>>,
    contact: Option<Vec<String>>,
    encryption: Option<Vec<String>>,
    expires: Option<DateTime<FixedOffset>>,
    hiring: Option<Vec<String>>,
    preferred_languages: Option<Vec<String>>,
}

/// Coerce and validate one list-valued input.
fn validated(
    field: FieldName,
    val: Option<impl Into<ValueList>>,
) -> Result<Option<Vec<String>>> {
    match val {
        None => Ok(None),
        Some(v) => {
            let values = v.into().into_vec();
            field.scheme_rule().check(field, &values)?;
            Ok(Some(values))
        }
    }
}

impl Fields {
    /// An empty field set; nothing is rendered until fields are set.
    pub fn new() -> Self {
        Self::default()
    }

    /// URIs of the acknowledgments page. Each must be an `https://` URI.
    pub fn acknowledgments(&self) -> Option<&[String]> {
        self.acknowledgments.as_deref()
    }

    pub fn set_acknowledgments(&mut self, val: Option<impl Into<ValueList>>) -> Result<()> {
        self.acknowledgments = validated(FieldName::Acknowledgments, val)?;
        Ok(())
    }

    /// URIs where this security.txt is located. Each must be an
    /// `https://` URI.
    pub fn canonical(&self) -> Option<&[String]> {
        self.canonical.as_deref()
    }

    pub fn set_canonical(&mut self, val: Option<impl Into<ValueList>>) -> Result<()> {
        self.canonical = validated(FieldName::Canonical, val)?;
        Ok(())
    }

    /// Contact URIs for security reports. Each must be an `https://`,
    /// `mailto:`, or `tel:` URI. Required for [`valid`](Self::valid).
    pub fn contact(&self) -> Option<&[String]> {
        self.contact.as_deref()
    }

    pub fn set_contact(&mut self, val: Option<impl Into<ValueList>>) -> Result<()> {
        self.contact = validated(FieldName::Contact, val)?;
        Ok(())
    }

    /// URIs of the encryption key. Plain `http://` URIs are rejected.
    pub fn encryption(&self) -> Option<&[String]> {
        self.encryption.as_deref()
    }

    pub fn set_encryption(&mut self, val: Option<impl Into<ValueList>>) -> Result<()> {
        self.encryption = validated(FieldName::Encryption, val)?;
        Ok(())
    }

    /// Expiry instant of the document. Required for [`valid`](Self::valid).
    pub fn expires(&self) -> Option<DateTime<FixedOffset>> {
        self.expires
    }

    /// Set the expiry from a typed timestamp or an RFC 3339 string.
    ///
    /// A string that fails to parse returns
    /// [`FieldError::InvalidTimestamp`] and leaves the prior value in
    /// place.
    pub fn set_expires(&mut self, val: Option<impl Into<ExpiresValue>>) -> Result<()> {
        self.expires = match val.map(Into::into) {
            None => None,
            Some(ExpiresValue::Timestamp(ts)) => Some(ts),
            Some(ExpiresValue::Text(text)) => Some(
                DateTime::parse_from_rfc3339(&text)
                    .map_err(|_| FieldError::InvalidTimestamp(text))?,
            ),
        };
        Ok(())
    }

    /// URIs of the hiring page. Plain `http://` URIs are rejected.
    pub fn hiring(&self) -> Option<&[String]> {
        self.hiring.as_deref()
    }

    pub fn set_hiring(&mut self, val: Option<impl Into<ValueList>>) -> Result<()> {
        self.hiring = validated(FieldName::Hiring, val)?;
        Ok(())
    }

    /// Preferred languages for reports, as locale tags. Not validated.
    pub fn preferred_languages(&self) -> Option<&[String]> {
        self.preferred_languages.as_deref()
    }

    pub fn set_preferred_languages(&mut self, val: Option<impl Into<ValueList>>) -> Result<()> {
        self.preferred_languages = validated(FieldName::PreferredLanguages, val)?;
        Ok(())
    }

    /// Whether this field set satisfies RFC 9116's mandatory fields:
    /// Expires present and Contact present and non-empty.
    pub fn valid(&self) -> bool {
        self.expires.is_some() && self.contact.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Apply a batch of mutations, returning `self` for chaining.
    ///
    /// Not transactional: setters applied before a failing one keep
    /// their new values.
    ///
    /// ```
    /// use st_fields::Fields;
    ///
    /// let mut fields = Fields::new();
    /// fields.configure(|f| {
    ///     f.set_canonical(Some("https://example.com/.well-known/security.txt"))?;
    ///     f.set_contact(Some(vec!["mailto:security@example.com"]))
    /// })?;
    /// # Ok::<(), st_fields::FieldError>(())
    /// ```
    pub fn configure<F>(&mut self, f: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Fields) -> Result<()>,
    {
        f(self)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn scalar_input_is_stored_as_singleton() {
        let mut fields = Fields::new();
        fields.set_acknowledgments(Some("https://example.com/thanks")).unwrap();
        assert_eq!(
            fields.acknowledgments(),
            Some(&["https://example.com/thanks".to_string()][..])
        );
    }

    #[test]
    fn rejected_set_keeps_prior_value() {
        let mut fields = Fields::new();
        fields.set_canonical(Some("https://example.com/security.txt")).unwrap();

        let err = fields
            .set_canonical(Some(vec!["https://ok.example", "http://bad.example"]))
            .unwrap_err();
        assert_eq!(err.code(), 10);
        assert_eq!(
            fields.canonical(),
            Some(&["https://example.com/security.txt".to_string()][..])
        );
    }

    #[test]
    fn contact_accepts_mailto_tel_and_https() {
        let mut fields = Fields::new();
        fields
            .set_contact(Some(vec![
                "mailto:security@example.com",
                "tel:+1-201-555-0123",
                "https://example.com/report",
            ]))
            .unwrap();
        assert_eq!(fields.contact().map(<[String]>::len), Some(3));

        assert!(fields.set_contact(Some("ftp://example.com")).is_err());
    }

    #[test]
    fn encryption_rejects_plain_http_only() {
        let mut fields = Fields::new();
        assert!(fields.set_encryption(Some("http://example.com/key.asc")).is_err());
        assert!(fields.set_encryption(Some("https://example.com/key.asc")).is_ok());
        assert!(fields
            .set_encryption(Some("dns:5d2d37ab76d47d36._openpgpkey.example.com?type=OPENPGPKEY"))
            .is_ok());
    }

    #[test]
    fn hiring_rejects_plain_http_only() {
        let mut fields = Fields::new();
        assert!(fields.set_hiring(Some("http://example.com/jobs")).is_err());
        assert!(fields.set_hiring(Some("https://example.com/jobs")).is_ok());
    }

    #[test]
    fn none_clears_a_field() {
        let mut fields = Fields::new();
        fields.set_acknowledgments(Some("https://example.com/thanks")).unwrap();
        fields.set_acknowledgments(None::<&str>).unwrap();
        assert_eq!(fields.acknowledgments(), None);
    }

    #[test]
    fn expires_parses_rfc3339_strings() {
        let mut fields = Fields::new();
        fields.set_expires(Some("2022-01-01T12:34:56.0123Z")).unwrap();
        assert!(fields.expires().is_some());

        let err = fields.set_expires(Some("not-a-date")).unwrap_err();
        assert_eq!(err, FieldError::InvalidTimestamp("not-a-date".to_string()));
        // prior value survives the failed set
        assert!(fields.expires().is_some());
    }

    #[test]
    fn expires_accepts_typed_timestamps() {
        let mut fields = Fields::new();
        let now = Utc::now();
        fields.set_expires(Some(now)).unwrap();
        assert_eq!(fields.expires(), Some(now.fixed_offset()));

        fields.set_expires(None::<&str>).unwrap();
        assert_eq!(fields.expires(), None);
    }

    #[test]
    fn preferred_languages_are_not_validated() {
        let mut fields = Fields::new();
        fields.set_preferred_languages(Some(vec!["en", "es", "fr"])).unwrap();
        assert_eq!(fields.preferred_languages().map(<[String]>::len), Some(3));
    }

    #[test]
    fn valid_requires_expires_and_nonempty_contact() {
        let mut fields = Fields::new();
        assert!(!fields.valid());

        fields.set_contact(Some("mailto:security@example.com")).unwrap();
        assert!(!fields.valid());

        fields.set_expires(Some("2030-01-01T00:00:00Z")).unwrap();
        assert!(fields.valid());

        // empty contact sequence does not count
        fields.set_contact(Some(Vec::<String>::new())).unwrap();
        assert!(!fields.valid());

        fields.set_contact(None::<&str>).unwrap();
        assert!(!fields.valid());
    }

    #[test]
    fn configure_chains_and_propagates_errors() {
        let mut fields = Fields::new();
        let result = fields.configure(|f| {
            f.set_acknowledgments(Some("https://example.com/thanks"))?;
            f.set_canonical(Some("http://insecure.example"))
        });
        assert!(result.is_err());
        // not transactional: the first set stuck
        assert!(fields.acknowledgments().is_some());
        assert!(fields.canonical().is_none());
    }
}
