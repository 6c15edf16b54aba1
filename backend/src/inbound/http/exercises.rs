//! Exercise logging handler.
//!
//! ```text
//! POST /api/users/{_id}/exercises   (form: description, duration, date?)
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Minutes;
use crate::domain::ports::{AddExerciseRequest, AddExerciseResponse};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Form body for `POST /api/users/{_id}/exercises`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct AddExerciseForm {
    #[schema(example = "test")]
    pub description: Option<String>,
    /// Minutes, as a decimal number.
    #[schema(example = "60")]
    pub duration: Option<String>,
    /// Defaults to now when absent or empty.
    #[schema(example = "1990-01-01")]
    pub date: Option<String>,
}

/// A logged exercise with its owner, as returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExerciseBody {
    #[schema(example = "fcc_test")]
    pub username: String,
    /// The owner's id.
    #[serde(rename = "_id")]
    #[schema(format = "uuid")]
    pub id: String,
    #[schema(example = "test")]
    pub description: String,
    #[schema(value_type = f64, example = 60)]
    pub duration: Minutes,
    #[schema(example = "Mon Jan 01 1990")]
    pub date: String,
}

impl From<AddExerciseResponse> for ExerciseBody {
    fn from(value: AddExerciseResponse) -> Self {
        let AddExerciseResponse { user, exercise } = value;
        Self {
            username: user.username().to_string(),
            id: user.id().to_string(),
            description: exercise.description().as_ref().to_owned(),
            duration: exercise.duration(),
            date: exercise.date().calendar_string(),
        }
    }
}

/// Add an exercise to a user's log.
///
/// Unknown users, invalid dates and missing fields answer with the error
/// envelope; nothing is stored in those cases.
#[utoipa::path(
    post,
    path = "/api/users/{_id}/exercises",
    params(("_id" = String, Path, description = "User id")),
    request_body(content = AddExerciseForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Exercise logged", body = ExerciseBody),
        (status = "default", description = "Failure envelope (sent with status 200)", body = ErrorSchema)
    ),
    tags = ["exercises"],
    operation_id = "addExercise"
)]
#[post("/users/{_id}/exercises")]
pub async fn add_exercise(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    form: web::Form<AddExerciseForm>,
) -> ApiResult<web::Json<ExerciseBody>> {
    let AddExerciseForm {
        description,
        duration,
        date,
    } = form.into_inner();
    let response = state
        .exercises
        .add_exercise(AddExerciseRequest {
            user_id: path.into_inner(),
            description,
            duration,
            date,
        })
        .await?;
    Ok(web::Json(ExerciseBody::from(response)))
}

#[cfg(test)]
#[path = "exercises_tests.rs"]
mod tests;
