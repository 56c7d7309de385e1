//! Identity wrappers for the organization being reported on and the
//! credentials used to query it.

use super::error::ReportError;

/// Organization login wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationLogin(String);

impl OrganizationLogin {
    /// Validates that the login is non-blank and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Configuration`] when the login is blank.
    pub fn new(value: &str) -> Result<Self, ReportError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ReportError::Configuration {
                message: "organization login is required (use --org or -o)".to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the login value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Wraps a token, trimming whitespace.
    ///
    /// Returns `None` for a blank token so that callers fall back to
    /// unauthenticated access.
    #[must_use]
    pub fn new(token: impl AsRef<str>) -> Option<Self> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl std::fmt::Debug for PersonalAccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PersonalAccessToken(***)")
    }
}
