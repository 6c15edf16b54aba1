//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod exercise_log;
mod exercise_repository;
mod user_directory;
mod user_repository;

#[cfg(test)]
pub use exercise_log::MockExerciseLog;
pub use exercise_log::{
    AddExerciseRequest, AddExerciseResponse, ExerciseLog, LogRequest, LogResponse,
};
#[cfg(test)]
pub use exercise_repository::MockExerciseRepository;
pub use exercise_repository::{ExerciseRepository, ExerciseRepositoryError};
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::{CreateUserRequest, UserDirectory};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
