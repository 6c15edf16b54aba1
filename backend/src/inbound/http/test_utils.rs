//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use serde_json::Value;

use super::api_scope;
use super::state::HttpState;
use crate::domain::{ExerciseLogService, UserDirectoryService};
use crate::outbound::memory::InMemoryStore;

/// Instant reported by [`FixtureClock`].
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0)
        .single()
        .expect("valid fixture instant")
}

/// Clock frozen at [`fixture_now`].
pub struct FixtureClock;

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        fixture_now().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        fixture_now()
    }
}

/// State wired to a fresh in-memory store and the fixture clock.
pub fn memory_state() -> HttpState {
    let store = Arc::new(InMemoryStore::new());
    HttpState::new(
        Arc::new(UserDirectoryService::new(store.clone())),
        Arc::new(ExerciseLogService::new(
            store.clone(),
            store,
            Arc::new(FixtureClock),
        )),
    )
}

/// Initialise the `/api` scope over `state`.
pub async fn init_api(
    state: HttpState,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(api_scope()),
    )
    .await
}

/// POST a urlencoded form and decode the JSON reply.
pub async fn post_form<S>(app: &S, uri: &str, form: &[(&str, &str)]) -> Value
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri(uri)
        .set_form(form)
        .to_request();
    test::call_and_read_body_json(app, req).await
}

/// GET `uri` and decode the JSON reply.
pub async fn get_json<S>(app: &S, uri: &str) -> Value
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = test::TestRequest::get().uri(uri).to_request();
    test::call_and_read_body_json(app, req).await
}
