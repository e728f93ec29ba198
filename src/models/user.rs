use std::fmt;

use thiserror::Error;

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MIN_FULL_NAME_LENGTH: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsernameError {
    #[error("username must have at least 3 letters")]
    TooShort,
    #[error("username may only contain letters and hyphens")]
    InvalidCharacters,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error(transparent)]
    Username(#[from] UsernameError),
    #[error("full name must have at least 3 letters")]
    NameTooShort,
}

/// A claimed public handle, always lower case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    pub fn parse(raw: &str) -> Result<Self, UsernameError> {
        if raw.chars().count() < MIN_USERNAME_LENGTH {
            return Err(UsernameError::TooShort);
        }

        if !raw.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
            return Err(UsernameError::InvalidCharacters);
        }

        Ok(Self(raw.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Where the visitor continues after claiming the handle.
    pub fn register_path(&self) -> String {
        format!("/register?username={}", self.0)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// First registration step: the handle plus the display name.
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: Username,
    pub name: String,
}

impl Registration {
    pub fn new(username: &str, name: &str) -> Result<Self, RegistrationError> {
        let username = Username::parse(username)?;

        let name = name.trim();
        if name.chars().count() < MIN_FULL_NAME_LENGTH {
            return Err(RegistrationError::NameTooShort);
        }

        Ok(Self {
            username,
            name: name.to_string(),
        })
    }
}
