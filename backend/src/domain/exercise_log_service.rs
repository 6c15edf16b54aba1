//! Exercise logging service.
//!
//! Resolves the owning user first, then validates the remaining input, so an
//! unknown user always wins over a malformed field.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{
    AddExerciseRequest, AddExerciseResponse, ExerciseLog, ExerciseRepository,
    ExerciseRepositoryError, LogRequest, LogResponse, UserRepository,
};
use crate::domain::user_directory_service::map_user_repository_error;
use crate::domain::{
    Description, Error, ExerciseDate, ExerciseDraft, LogFilter, LogLimit, Minutes, User, UserId,
};

fn map_exercise_repository_error(error: ExerciseRepositoryError) -> Error {
    match error {
        ExerciseRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("exercise repository unavailable: {message}"))
        }
        ExerciseRepositoryError::Query { message } => {
            Error::internal(format!("exercise repository error: {message}"))
        }
    }
}

fn user_not_found(raw_id: &str) -> Error {
    Error::not_found(format!("user {raw_id} not found"))
}

fn invalid_date(err: impl std::fmt::Display) -> Error {
    Error::invalid_request(err.to_string())
}

/// Exercise service implementing [`ExerciseLog`].
#[derive(Clone)]
pub struct ExerciseLogService<U, E> {
    user_repo: Arc<U>,
    exercise_repo: Arc<E>,
    clock: Arc<dyn Clock>,
}

impl<U, E> ExerciseLogService<U, E> {
    /// Create a new service; `clock` supplies the default exercise date.
    pub fn new(user_repo: Arc<U>, exercise_repo: Arc<E>, clock: Arc<dyn Clock>) -> Self {
        Self {
            user_repo,
            exercise_repo,
            clock,
        }
    }
}

impl<U, E> ExerciseLogService<U, E>
where
    U: UserRepository,
{
    async fn resolve_user(&self, raw_id: &str) -> Result<User, Error> {
        let Ok(user_id) = UserId::new(raw_id) else {
            debug!(user_id = raw_id, "rejected malformed user id");
            return Err(user_not_found(raw_id));
        };

        self.user_repo
            .find_by_id(&user_id)
            .await
            .map_err(map_user_repository_error)?
            .ok_or_else(|| user_not_found(raw_id))
    }
}

#[async_trait]
impl<U, E> ExerciseLog for ExerciseLogService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn add_exercise(
        &self,
        request: AddExerciseRequest,
    ) -> Result<AddExerciseResponse, Error> {
        let user = self.resolve_user(&request.user_id).await?;

        let date = ExerciseDate::parse_optional(request.date.as_deref())
            .map_err(invalid_date)?
            .unwrap_or_else(|| ExerciseDate::new(self.clock.utc()));
        let description = Description::new(request.description.unwrap_or_default())
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        let duration = Minutes::parse(request.duration.as_deref().unwrap_or_default())
            .map_err(|err| Error::invalid_request(err.to_string()))?;

        let draft = ExerciseDraft {
            username: user.username().clone(),
            description,
            duration,
            date,
        };
        let exercise = self
            .exercise_repo
            .create(&draft)
            .await
            .map_err(map_exercise_repository_error)?;

        info!(
            user_id = %user.id(),
            exercise_id = %exercise.id(),
            "logged exercise"
        );
        Ok(AddExerciseResponse { user, exercise })
    }

    async fn get_log(&self, request: LogRequest) -> Result<LogResponse, Error> {
        let user = self.resolve_user(&request.user_id).await?;

        let from = ExerciseDate::parse_optional(request.from.as_deref()).map_err(invalid_date)?;
        let to = ExerciseDate::parse_optional(request.to.as_deref()).map_err(invalid_date)?;
        let filter = LogFilter::for_username(user.username().clone())
            .with_from(from)
            .with_to(to)
            .with_limit(LogLimit::parse(request.limit.as_deref()));

        let entries = self
            .exercise_repo
            .find(&filter)
            .await
            .map_err(map_exercise_repository_error)?;

        debug!(user_id = %user.id(), count = entries.len(), "read exercise log");
        Ok(LogResponse { user, entries })
    }
}

#[cfg(test)]
#[path = "exercise_log_service_tests.rs"]
mod tests;
