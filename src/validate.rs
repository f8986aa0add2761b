//! Credential validation — structural rules applied before any network call.
//!
//! Validation is synchronous and side-effect free. Every field is checked
//! on every run and all failures are reported together, so the form can
//! show both messages at once instead of one at a time.

/// Minimum username length, in characters.
pub const USERNAME_MIN_CHARS: usize = 3;
/// Minimum password length, in characters.
pub const PASSWORD_MIN_CHARS: usize = 6;

pub const USERNAME_TOO_SHORT: &str = "Username must be at least 3 characters";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

/// Validated credentials, ready for submission.
///
/// Ephemeral: created per submission attempt and dropped after the
/// provider call completes.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Field-scoped validation failures. Both fields may be populated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

/// Validate raw form input against the structural rules.
///
/// Lengths are counted in characters, not bytes.
///
/// # Errors
///
/// Returns [`FieldErrors`] with one message per failing field; submission
/// must be blocked while any field fails.
pub fn validate(username: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let mut errors = FieldErrors::default();
    if username.chars().count() < USERNAME_MIN_CHARS {
        errors.username = Some(USERNAME_TOO_SHORT.to_owned());
    }
    if password.chars().count() < PASSWORD_MIN_CHARS {
        errors.password = Some(PASSWORD_TOO_SHORT.to_owned());
    }
    if errors.is_empty() {
        Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
    } else {
        Err(errors)
    }
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
