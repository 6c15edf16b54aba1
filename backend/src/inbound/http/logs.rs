//! Exercise log handler.
//!
//! ```text
//! GET /api/users/{_id}/logs?from=YYYY-MM-DD&to=YYYY-MM-DD&limit=N
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{LogRequest, LogResponse};
use crate::domain::{Exercise, Minutes};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Optional log filters.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogQuery {
    /// Earliest date to include.
    pub from: Option<String>,
    /// Latest date to include.
    pub to: Option<String>,
    /// Maximum entries; `0` or a non-numeric value means no cap.
    pub limit: Option<String>,
}

/// One entry of a user's log.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LogEntryBody {
    #[schema(example = "test")]
    pub description: String,
    #[schema(value_type = f64, example = 60)]
    pub duration: Minutes,
    #[schema(example = "Mon Jan 01 1990")]
    pub date: String,
}

impl From<Exercise> for LogEntryBody {
    fn from(exercise: Exercise) -> Self {
        Self {
            description: exercise.description().as_ref().to_owned(),
            duration: exercise.duration(),
            date: exercise.date().calendar_string(),
        }
    }
}

/// A user's filtered exercise log.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LogBody {
    #[schema(example = "fcc_test")]
    pub username: String,
    /// Number of entries in `log`.
    pub count: usize,
    #[serde(rename = "_id")]
    #[schema(format = "uuid")]
    pub id: String,
    pub log: Vec<LogEntryBody>,
}

impl From<LogResponse> for LogBody {
    fn from(value: LogResponse) -> Self {
        let count = value.count();
        let LogResponse { user, entries } = value;
        Self {
            username: user.username().to_string(),
            count,
            id: user.id().to_string(),
            log: entries.into_iter().map(LogEntryBody::from).collect(),
        }
    }
}

/// Read a user's exercise log.
#[utoipa::path(
    get,
    path = "/api/users/{_id}/logs",
    params(("_id" = String, Path, description = "User id"), LogQuery),
    responses(
        (status = 200, description = "Exercise log", body = LogBody),
        (status = "default", description = "Failure envelope (sent with status 200)", body = ErrorSchema)
    ),
    tags = ["exercises"],
    operation_id = "getLog"
)]
#[get("/users/{_id}/logs")]
pub async fn get_log(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<LogQuery>,
) -> ApiResult<web::Json<LogBody>> {
    let LogQuery { from, to, limit } = query.into_inner();
    let response = state
        .exercises
        .get_log(LogRequest {
            user_id: path.into_inner(),
            from,
            to,
            limit,
        })
        .await?;
    Ok(web::Json(LogBody::from(response)))
}

#[cfg(test)]
#[path = "logs_tests.rs"]
mod tests;
