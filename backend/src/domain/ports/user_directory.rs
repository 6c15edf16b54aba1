//! Driving port for user registration and listing.
//!
//! Inbound adapters pass raw client input; validation happens behind the
//! port so every adapter reports the same messages.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Request to register a user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateUserRequest {
    /// Raw username as submitted; `None` when the field was absent.
    pub username: Option<String>,
}

/// Driving port for user registration.
///
/// # Examples
///
/// ```rust,no_run
/// # async fn example(
/// #     directory: &dyn exercise_tracker::domain::ports::UserDirectory,
/// # ) -> Result<(), exercise_tracker::domain::Error> {
/// use exercise_tracker::domain::ports::CreateUserRequest;
///
/// let user = directory
///     .create_user(CreateUserRequest {
///         username: Some("fcc_test".to_owned()),
///     })
///     .await?;
/// assert_eq!(user.username().as_ref(), "fcc_test");
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Validate the username and store a new user.
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error>;

    /// Every registered user in creation order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
