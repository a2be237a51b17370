use thiserror::Error;

use super::user::Username;

/// Shortest password accepted at sign-in, in characters.
pub const MIN_PASSWORD_LEN: usize = 4;

/// Sign-in input as typed on the login screen.
#[derive(Clone, Debug, Default)]
pub struct SignInDraft {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CredentialsError {
    #[error("username and password are required")]
    MissingFields,
    #[error("password too short (minimum {min} characters)")]
    PasswordTooShort { min: usize },
}

impl SignInDraft {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Validate the draft and return the normalized username.
    ///
    /// There is no password store; the password is only checked for presence and length.
    ///
    /// # Errors
    ///
    /// Returns `CredentialsError::MissingFields` if either field is empty, or
    /// `CredentialsError::PasswordTooShort` if the password has fewer than
    /// [`MIN_PASSWORD_LEN`] characters.
    pub fn validate(&self) -> Result<Username, CredentialsError> {
        if self.password.is_empty() {
            return Err(CredentialsError::MissingFields);
        }
        let username =
            Username::parse(self.username.as_str()).map_err(|_| CredentialsError::MissingFields)?;

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CredentialsError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }

        Ok(username)
    }
}
