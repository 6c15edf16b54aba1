//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the driving
//! ports, so the storage behind them can be swapped without touching HTTP
//! code.

use std::sync::Arc;

use crate::domain::ports::{ExerciseLog, UserDirectory};

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use exercise_tracker::domain::{ExerciseLogService, UserDirectoryService};
/// use exercise_tracker::inbound::http::state::HttpState;
/// use exercise_tracker::outbound::memory::InMemoryStore;
/// use mockable::DefaultClock;
///
/// let store = Arc::new(InMemoryStore::new());
/// let state = HttpState::new(
///     Arc::new(UserDirectoryService::new(store.clone())),
///     Arc::new(ExerciseLogService::new(
///         store.clone(),
///         store,
///         Arc::new(DefaultClock),
///     )),
/// );
/// let _users = state.users.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserDirectory>,
    pub exercises: Arc<dyn ExerciseLog>,
}

impl HttpState {
    /// Bundle the driving ports.
    pub fn new(users: Arc<dyn UserDirectory>, exercises: Arc<dyn ExerciseLog>) -> Self {
        Self { users, exercises }
    }
}
