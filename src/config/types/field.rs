//! Config field path used to point diagnostics at a `site.toml` key.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A dotted path to a config field, e.g. `site.email` or `socials[2].href`.
///
/// Static paths are declared as constants next to their section:
///
/// ```ignore
/// impl Site {
///     pub const EMAIL: FieldPath = FieldPath::new("site.email");
/// }
/// diag.error(Site::EMAIL, "must not be empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Path to a field of an array-of-tables entry: `socials[2].href`.
    pub fn indexed(array: &str, index: usize, field: &str) -> Self {
        Self(Cow::Owned(format!("{array}[{index}].{field}")))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
