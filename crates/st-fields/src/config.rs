//! Lazily-initialized holder for a single field set.

use crate::error::Result;
use crate::fields::Fields;

/// Owns at most one [`Fields`] instance, created empty on first access.
///
/// ```
/// use st_fields::Config;
///
/// let mut config = Config::new();
/// config.configure(|f| {
///     f.set_contact(Some("mailto:security@example.com"))?;
///     f.set_expires(Some("2030-01-01T00:00:00Z"))
/// })?;
/// assert!(config.fields().valid());
/// # Ok::<(), st_fields::FieldError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    fields: Option<Fields>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// The held field set, created on first access and returned on
    /// every call thereafter.
    pub fn fields(&mut self) -> &mut Fields {
        self.fields.get_or_insert_with(Fields::new)
    }

    /// Apply a batch of mutations to the held field set, creating it
    /// if needed. Same contract as [`Fields::configure`].
    pub fn configure<F>(&mut self, f: F) -> Result<&mut Fields>
    where
        F: FnOnce(&mut Fields) -> Result<()>,
    {
        let fields = self.fields.get_or_insert_with(Fields::new);
        f(fields)?;
        Ok(fields)
    }
}
