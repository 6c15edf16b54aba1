//! Builders for the HTTP state from configured storage.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use exercise_tracker::domain::ports::{
    ExerciseLog, ExerciseRepository, UserDirectory, UserRepository,
};
use exercise_tracker::domain::{ExerciseLogService, UserDirectoryService};
use exercise_tracker::inbound::http::state::HttpState;
use exercise_tracker::outbound::memory::InMemoryStore;
use exercise_tracker::outbound::persistence::{DieselExerciseRepository, DieselUserRepository};

use super::ServerConfig;

/// Wire both services over one pair of repositories.
fn build_services<U, E>(
    users: Arc<U>,
    exercises: Arc<E>,
    clock: Arc<dyn Clock>,
) -> (Arc<dyn UserDirectory>, Arc<dyn ExerciseLog>)
where
    U: UserRepository + 'static,
    E: ExerciseRepository + 'static,
{
    (
        Arc::new(UserDirectoryService::new(users.clone())),
        Arc::new(ExerciseLogService::new(users, exercises, clock)),
    )
}

/// Build the shared HTTP state, using Diesel adapters when a pool is
/// configured and the in-memory store otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    build_http_state_with_clock(config, Arc::new(DefaultClock))
}

fn build_http_state_with_clock(
    config: &ServerConfig,
    clock: Arc<dyn Clock>,
) -> web::Data<HttpState> {
    let (users, exercises) = match &config.db_pool {
        Some(pool) => build_services(
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselExerciseRepository::new(pool.clone())),
            clock,
        ),
        None => {
            let store = Arc::new(InMemoryStore::new());
            build_services(store.clone(), store, clock)
        }
    };
    web::Data::new(HttpState::new(users, exercises))
}
