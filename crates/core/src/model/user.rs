use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::area::InterestArea;
use super::progress::Progress;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserError {
    #[error("username cannot be empty")]
    EmptyUsername,
    #[error("progress {0} is outside 0..=100")]
    ProgressOutOfRange(i64),
    #[error("unknown interest area: {0}")]
    UnknownArea(String),
}

/// User identifier, kept exactly as typed. Whitespace-only names are rejected.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// # Errors
    ///
    /// Returns `UserError::EmptyUsername` if the value is blank.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, UserError> {
        let raw = raw.as_ref();
        if raw.trim().is_empty() {
            return Err(UserError::EmptyUsername);
        }
        Ok(Self(raw.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl fmt::Debug for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Username({})", self.0)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub area: InterestArea,
}

impl Preferences {
    #[must_use]
    pub fn with_area(area: InterestArea) -> Self {
        Self { area }
    }
}

/// The signed-in user. At most one exists at a time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    username: Username,
    preferences: Preferences,
    progress: Progress,
}

impl User {
    /// A fresh session record: default preferences and initial progress.
    #[must_use]
    pub fn new(username: Username) -> Self {
        Self {
            username,
            preferences: Preferences::default(),
            progress: Progress::INITIAL,
        }
    }

    #[must_use]
    pub fn from_parts(username: Username, preferences: Preferences, progress: Progress) -> Self {
        Self {
            username,
            preferences,
            progress,
        }
    }

    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    #[must_use]
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    #[must_use]
    pub fn area(&self) -> InterestArea {
        self.preferences.area
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Returns a copy with `patch` applied as a shallow merge.
    ///
    /// Each `Some` field of the patch overwrites the matching top-level field.
    /// `preferences` is replaced as a whole, never merged field by field.
    #[must_use]
    pub fn merged(&self, patch: &UserPatch) -> Self {
        Self {
            username: patch
                .username
                .clone()
                .unwrap_or_else(|| self.username.clone()),
            preferences: patch
                .preferences
                .clone()
                .unwrap_or_else(|| self.preferences.clone()),
            progress: patch.progress.unwrap_or(self.progress),
        }
    }
}

/// Partial update for [`User`], applied with [`User::merged`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub username: Option<Username>,
    /// Replaces the whole preferences object.
    pub preferences: Option<Preferences>,
    pub progress: Option<Progress>,
}

impl UserPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = Some(preferences);
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: Progress) -> Self {
        self.progress = Some(progress);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.preferences.is_none() && self.progress.is_none()
    }
}
