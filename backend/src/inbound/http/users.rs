//! User registration handlers.
//!
//! ```text
//! POST /api/users   (form: username)
//! GET  /api/users
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::User;
use crate::domain::ports::CreateUserRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Form body for `POST /api/users`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateUserForm {
    /// Username to register; required and non-blank.
    #[schema(example = "fcc_test")]
    pub username: Option<String>,
}

/// A registered user as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UserBody {
    #[schema(example = "fcc_test")]
    pub username: String,
    #[serde(rename = "_id")]
    #[schema(format = "uuid", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
}

impl From<User> for UserBody {
    fn from(user: User) -> Self {
        Self {
            username: user.username().to_string(),
            id: user.id().to_string(),
        }
    }
}

/// Register a user.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body(content = CreateUserForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "User registered", body = UserBody),
        (status = "default", description = "Failure envelope (sent with status 200)", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    form: web::Form<CreateUserForm>,
) -> ApiResult<web::Json<UserBody>> {
    let CreateUserForm { username } = form.into_inner();
    let user = state
        .users
        .create_user(CreateUserRequest { username })
        .await?;
    Ok(web::Json(UserBody::from(user)))
}

/// List every registered user in creation order.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Registered users", body = [UserBody]),
        (status = "default", description = "Failure envelope (sent with status 200)", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserBody>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users.into_iter().map(UserBody::from).collect()))
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
