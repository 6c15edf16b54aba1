//! HTTP inbound adapter exposing the `/api` endpoints.

pub mod error;
pub mod exercises;
pub mod health;
pub mod logs;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

use actix_web::web;

pub use error::ApiResult;

/// Build the `/api` scope with the extractor settings every handler relies
/// on. Callers supply [`state::HttpState`] through `app_data`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use exercise_tracker::inbound::http::api_scope;
///
/// let _app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> actix_web::Scope {
    web::scope("/api")
        .app_data(web::FormConfig::default().error_handler(error::extraction_error_handler))
        .app_data(web::QueryConfig::default().error_handler(error::extraction_error_handler))
        .service(users::create_user)
        .service(users::list_users)
        .service(exercises::add_exercise)
        .service(logs::get_log)
}
