//! Domain primitives, ports and services.
//!
//! Purpose: define the user and exercise model, the validation rules applied
//! to client input, and the services that sit between the inbound HTTP
//! adapter and the storage adapters.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User, UserId, Username: registered users.
//! - Exercise, ExerciseDraft, ExerciseDate, Minutes: logged exercises.
//! - LogFilter, LogLimit: log query parameters.
//! - UserDirectoryService, ExerciseLogService: driving port implementations.

pub mod error;
pub mod exercise;
pub mod exercise_date;
pub mod exercise_log_service;
pub mod log_query;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_directory_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::exercise::{
    Description, Exercise, ExerciseDraft, ExerciseId, ExerciseValidationError, Minutes,
};
pub use self::exercise_date::{ExerciseDate, INVALID_DATE_MESSAGE, InvalidDate};
pub use self::exercise_log_service::ExerciseLogService;
pub use self::log_query::{LogFilter, LogLimit};
pub use self::trace_id::TraceId;
pub use self::user::{User, UserId, UserValidationError, Username};
pub use self::user_directory_service::UserDirectoryService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use exercise_tracker::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("no such user"))
/// }
/// # assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
