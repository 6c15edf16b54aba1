//! Driving port for logging exercises and reading a user's log.

use async_trait::async_trait;

use crate::domain::{Error, Exercise, User};

/// Request to add an exercise to a user's log.
///
/// Fields other than `user_id` are the raw form values; `None` means the
/// field was absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddExerciseRequest {
    pub user_id: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
}

/// The stored exercise together with its owner.
#[derive(Debug, Clone, PartialEq)]
pub struct AddExerciseResponse {
    pub user: User,
    pub exercise: Exercise,
}

/// Request to read a user's exercise log.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogRequest {
    pub user_id: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// A user's filtered log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogResponse {
    pub user: User,
    pub entries: Vec<Exercise>,
}

impl LogResponse {
    /// Number of returned entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// Driving port for exercise logging.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseLog: Send + Sync {
    /// Validate and store an exercise for an existing user.
    ///
    /// A missing date defaults to the current instant.
    async fn add_exercise(
        &self,
        request: AddExerciseRequest,
    ) -> Result<AddExerciseResponse, Error>;

    /// Read a user's log, optionally bounded by date and capped in length.
    async fn get_log(&self, request: LogRequest) -> Result<LogResponse, Error>;
}
