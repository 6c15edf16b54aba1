//! User registration service.
//!
//! Implements the [`UserDirectory`] driving port over a [`UserRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{CreateUserRequest, UserDirectory, UserRepository, UserRepositoryError};
use crate::domain::{Error, User, Username};

pub(crate) fn map_user_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

/// User service implementing [`UserDirectory`].
#[derive(Clone)]
pub struct UserDirectoryService<R> {
    user_repo: Arc<R>,
}

impl<R> UserDirectoryService<R> {
    /// Create a new service with the user repository.
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> UserDirectory for UserDirectoryService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error> {
        let username = Username::new(request.username.unwrap_or_default())
            .map_err(|err| Error::invalid_request(err.to_string()))?;

        let user = self
            .user_repo
            .create(&username)
            .await
            .map_err(map_user_repository_error)?;

        info!(user_id = %user.id(), "registered user");
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.user_repo
            .list()
            .await
            .map_err(map_user_repository_error)
    }
}

#[cfg(test)]
#[path = "user_directory_service_tests.rs"]
mod tests;
