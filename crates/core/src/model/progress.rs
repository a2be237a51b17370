use serde::{Deserialize, Serialize};
use std::fmt;

use super::user::UserError;

/// Completion percentage of a user's learning track, always within `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Progress(u8);

impl Progress {
    pub const MIN: Progress = Progress(0);
    pub const MAX: Progress = Progress(100);

    /// Progress granted to every new session.
    pub const INITIAL: Progress = Progress(25);

    /// Increment applied when a course module is marked as completed.
    pub const MODULE_STEP: u8 = 15;

    /// Creates a progress value.
    ///
    /// # Errors
    ///
    /// Returns `UserError::ProgressOutOfRange` if `value` exceeds 100.
    pub fn new(value: u8) -> Result<Self, UserError> {
        Self::try_from(i64::from(value))
    }

    /// Creates a progress value, clamping anything outside `0..=100`.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        let clamped = value.clamp(0, i64::from(Self::MAX.0));
        // In range after the clamp above.
        Self(u8::try_from(clamped).unwrap_or(Self::MAX.0))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Adds `step`, saturating at 100.
    #[must_use]
    pub fn advanced_by(self, step: u8) -> Self {
        Self::clamped(i64::from(self.0) + i64::from(step))
    }

    #[must_use]
    pub fn after_module_completion(self) -> Self {
        self.advanced_by(Self::MODULE_STEP)
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self == Self::MAX
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<i64> for Progress {
    type Error = UserError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(v) if v <= Self::MAX.0 => Ok(Self(v)),
            _ => Err(UserError::ProgressOutOfRange(value)),
        }
    }
}

impl From<Progress> for u8 {
    fn from(value: Progress) -> Self {
        value.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
