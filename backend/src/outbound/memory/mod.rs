//! Process-local storage used when no database is configured.
//!
//! Both repositories live behind one [`InMemoryStore`], so a single
//! `Arc<InMemoryStore>` can back the user and exercise services at once.
//! Records are kept in insertion order and nothing survives a restart.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{
    ExerciseRepository, ExerciseRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::{Exercise, ExerciseDraft, ExerciseId, LogFilter, User, UserId, Username};

/// In-memory user and exercise storage.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<User>>,
    exercises: RwLock<Vec<Exercise>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned_users<T>(_: PoisonError<T>) -> UserRepositoryError {
    UserRepositoryError::query("user store lock poisoned")
}

fn poisoned_exercises<T>(_: PoisonError<T>) -> ExerciseRepositoryError {
    ExerciseRepositoryError::query("exercise store lock poisoned")
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, username: &Username) -> Result<User, UserRepositoryError> {
        let user = User::new(UserId::from_uuid(Uuid::new_v4()), username.clone());
        self.users
            .write()
            .map_err(poisoned_users)?
            .push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let users = self.users.read().map_err(poisoned_users)?;
        Ok(users
            .iter()
            .find(|user| user.id().as_uuid() == id.as_uuid())
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(self.users.read().map_err(poisoned_users)?.clone())
    }
}

#[async_trait]
impl ExerciseRepository for InMemoryStore {
    async fn create(&self, draft: &ExerciseDraft) -> Result<Exercise, ExerciseRepositoryError> {
        let exercise = Exercise::from_draft(ExerciseId::random(), draft.clone());
        self.exercises
            .write()
            .map_err(poisoned_exercises)?
            .push(exercise.clone());
        Ok(exercise)
    }

    async fn find(&self, filter: &LogFilter) -> Result<Vec<Exercise>, ExerciseRepositoryError> {
        let exercises = self.exercises.read().map_err(poisoned_exercises)?;
        let matching = exercises
            .iter()
            .filter(|exercise| filter.matches(exercise))
            .take(filter.limit.cap().unwrap_or(usize::MAX))
            .cloned()
            .collect();
        Ok(matching)
    }
}
