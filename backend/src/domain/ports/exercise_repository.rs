//! Port for exercise persistence.

use async_trait::async_trait;

use crate::domain::{Exercise, ExerciseDraft, LogFilter};

use super::define_port_error;

define_port_error! {
    /// Errors raised by exercise repository adapters.
    pub enum ExerciseRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "exercise repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "exercise repository query failed: {message}",
    }
}

/// Storage for logged exercises.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Store a new exercise and return it with its assigned id.
    async fn create(&self, draft: &ExerciseDraft) -> Result<Exercise, ExerciseRepositoryError>;

    /// Exercises matching `filter`, in insertion order, truncated to the
    /// filter's cap.
    async fn find(&self, filter: &LogFilter) -> Result<Vec<Exercise>, ExerciseRepositoryError>;
}
