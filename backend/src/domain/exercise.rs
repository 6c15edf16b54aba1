//! Exercise records logged against a user.
//!
//! An exercise references its owner by the username captured at creation,
//! not by user id. Queries match on that copied value.

use std::fmt;

use serde::{Serialize, Serializer};
use uuid::Uuid;

use super::exercise_date::{ExerciseDate, INVALID_DATE_MESSAGE};
use super::user::Username;

/// Validation errors returned by the exercise constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseValidationError {
    EmptyDescription,
    MissingDuration,
    InvalidDuration,
    InvalidDate,
}

impl fmt::Display for ExerciseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "description is required"),
            Self::MissingDuration => write!(f, "duration is required"),
            Self::InvalidDuration => write!(f, "duration must be a number"),
            Self::InvalidDate => f.write_str(INVALID_DATE_MESSAGE),
        }
    }
}

impl std::error::Error for ExerciseValidationError {}

/// Stable exercise identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExerciseId(Uuid);

impl ExerciseId {
    /// Wrap a stored UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Free-text description of the exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    /// Validate and construct a [`Description`]; empty text is rejected.
    pub fn new(description: impl Into<String>) -> Result<Self, ExerciseValidationError> {
        let description = description.into();
        if description.is_empty() {
            return Err(ExerciseValidationError::EmptyDescription);
        }
        Ok(Self(description))
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Description> for String {
    fn from(value: Description) -> Self {
        value.0
    }
}

/// Exercise duration in minutes.
///
/// Whole values serialise as JSON integers (`60`), fractional values as
/// floats (`12.5`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minutes(f64);

/// Largest magnitude at which every whole `f64` is exactly representable.
const MAX_EXACT_WHOLE: f64 = 9_007_199_254_740_992.0;

impl Minutes {
    /// Construct from a number, rejecting NaN and infinities.
    pub fn new(value: f64) -> Result<Self, ExerciseValidationError> {
        if !value.is_finite() {
            return Err(ExerciseValidationError::InvalidDuration);
        }
        Ok(Self(value))
    }

    /// Parse a form value such as `"60"` or `"12.5"`.
    pub fn parse(raw: &str) -> Result<Self, ExerciseValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ExerciseValidationError::MissingDuration);
        }
        let value = trimmed
            .parse::<f64>()
            .map_err(|_| ExerciseValidationError::InvalidDuration)?;
        Self::new(value)
    }

    /// Raw numeric value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Serialize for Minutes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.0.fract() == 0.0 && self.0.abs() < MAX_EXACT_WHOLE {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

/// Validated input for a new exercise; the repository assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseDraft {
    pub username: Username,
    pub description: Description,
    pub duration: Minutes,
    pub date: ExerciseDate,
}

/// Stored exercise.
///
/// ## Invariants
/// - `username` equals the owning user's username at creation time.
/// - `description` is non-empty and `duration` is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    id: ExerciseId,
    username: Username,
    description: Description,
    duration: Minutes,
    date: ExerciseDate,
}

impl Exercise {
    /// Attach a repository-assigned identifier to a draft.
    pub fn from_draft(id: ExerciseId, draft: ExerciseDraft) -> Self {
        let ExerciseDraft {
            username,
            description,
            duration,
            date,
        } = draft;
        Self {
            id,
            username,
            description,
            duration,
            date,
        }
    }

    /// Stable exercise identifier.
    pub fn id(&self) -> ExerciseId {
        self.id
    }

    /// Username copied from the owner at creation.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Free-text description.
    pub fn description(&self) -> &Description {
        &self.description
    }

    /// Duration in minutes.
    pub fn duration(&self) -> Minutes {
        self.duration
    }

    /// When the exercise took place.
    pub fn date(&self) -> ExerciseDate {
        self.date
    }
}
