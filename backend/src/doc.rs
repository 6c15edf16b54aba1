//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every `/api` endpoint plus the health probes, and the
//! form, body and error envelope schemas they use. Swagger UI serves it in
//! debug builds; `cargo run --bin openapi-dump` prints it for tooling.

use crate::inbound::http::exercises::{AddExerciseForm, ExerciseBody};
use crate::inbound::http::logs::{LogBody, LogEntryBody};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::users::{CreateUserForm, UserBody};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Exercise tracker API",
        description = "Register users, log exercises against them and read filtered logs. \
                       Failures are reported with HTTP 200 and an `{\"error\": ...}` body.",
        license(name = "ISC", url = "https://opensource.org/license/isc-license-txt")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::exercises::add_exercise,
        crate::inbound::http::logs::get_log,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateUserForm,
        UserBody,
        AddExerciseForm,
        ExerciseBody,
        LogBody,
        LogEntryBody,
        ErrorSchema
    )),
    tags(
        (name = "users", description = "User registration"),
        (name = "exercises", description = "Exercise logging and log queries"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
