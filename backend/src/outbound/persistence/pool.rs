//! Shared PostgreSQL connections for the Diesel repositories.
//!
//! [`DbPool`] wraps a bb8 pool of `diesel-async` connections. The user and
//! exercise repositories map [`PoolError`] onto their `Connection` variants.

use std::time::Duration;

use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::AsyncPgConnection;

/// Pool startup or checkout failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection could be handed out.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// The pool could not be created at startup.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    pub(crate) fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    pub(crate) fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Pool size used when no explicit limit is configured.
pub const DEFAULT_MAX_SIZE: u32 = 10;

/// Connections kept open while the service is idle.
const MIN_IDLE: u32 = 1;

/// How long a request waits for a free connection before failing.
const CHECKOUT_TIMEOUT: Duration = Duration::from_secs(30);

/// Database URL and size limit for [`DbPool`].
///
/// ```
/// use exercise_tracker::outbound::persistence::{PoolConfig, DEFAULT_MAX_SIZE};
///
/// let config = PoolConfig::new("postgres://tracker@localhost/exercises");
/// assert_eq!(config.max_size(), DEFAULT_MAX_SIZE);
/// assert_eq!(config.with_max_size(4).max_size(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
}

impl PoolConfig {
    /// Target `database_url` with [`DEFAULT_MAX_SIZE`] connections.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: DEFAULT_MAX_SIZE,
        }
    }

    /// Cap the pool at `max_size` connections.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// PostgreSQL connection URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Connection cap.
    pub fn max_size(&self) -> u32 {
        self.max_size
    }
}

/// Cloneable handle to the connection pool.
///
/// ```no_run
/// # async fn example() -> Result<(), exercise_tracker::outbound::persistence::PoolError> {
/// use exercise_tracker::outbound::persistence::{DbPool, PoolConfig};
///
/// let pool = DbPool::new(PoolConfig::new("postgres://localhost/exercises")).await?;
/// let _conn = pool.get().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Open the pool and its first idle connection.
    ///
    /// # Errors
    /// Returns [`PoolError::Build`] for a malformed URL or an unreachable
    /// server.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(config.max_size)
            .min_idle(Some(MIN_IDLE.min(config.max_size)))
            .connection_timeout(CHECKOUT_TIMEOUT)
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Borrow a connection for one repository call.
    ///
    /// # Errors
    /// Returns [`PoolError::Checkout`] when no connection frees up within 30
    /// seconds or a new one cannot be opened.
    pub async fn get(
        &self,
    ) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}
