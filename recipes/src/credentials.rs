//! Register and login form models with local validation.
//!
//! DESIGN
//! ======
//! Forms hold raw input exactly as typed. Validation runs before any network
//! call and produces the request body only when every rule passes, so the
//! submit handlers cannot send an unvalidated payload.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use serde::{Deserialize, Serialize};

/// Minimum username length, counted in characters.
pub const MIN_USERNAME_LEN: usize = 3;
/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A failed local validation. `Display` is the message shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("Invalid email address.")]
    InvalidEmail,
    #[error("Username must be at least 3 characters.")]
    UsernameTooShort,
    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,
    #[error("Enter both username and password.")]
    MissingLogin,
}

/// Raw register form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Response of `POST /auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
}

impl RegisterResponse {
    /// Message to show after a successful registration.
    #[must_use]
    pub fn display_message(&self) -> &str {
        if self.message.trim().is_empty() {
            "User registered successfully."
        } else {
            &self.message
        }
    }
}

impl RegisterForm {
    /// Check email, then username, then password; stop at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first [`CredentialError`] encountered.
    pub fn validate(&self) -> Result<RegisterRequest, CredentialError> {
        if !self.email.contains('@') {
            return Err(CredentialError::InvalidEmail);
        }
        if self.username.chars().count() < MIN_USERNAME_LEN {
            return Err(CredentialError::UsernameTooShort);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CredentialError::PasswordTooShort);
        }
        Ok(RegisterRequest {
            email: self.email.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }
}

/// Raw login form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response of `POST /auth/login`. The token is not used by this client.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "userID")]
    pub user_id: String,
}

impl LoginForm {
    /// Both fields must be non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::MissingLogin`] when either field is blank.
    pub fn validate(&self) -> Result<LoginRequest, CredentialError> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(CredentialError::MissingLogin);
        }
        Ok(LoginRequest {
            username: self.username.trim().to_owned(),
            password: self.password.clone(),
        })
    }
}
