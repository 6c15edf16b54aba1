//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `EXERCISE_TRACKER_*` environment variables or
//! a config file, in that order of precedence.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use exercise_tracker::outbound::persistence::DEFAULT_MAX_SIZE;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Runtime settings for the HTTP server and its storage.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXERCISE_TRACKER")]
pub struct AppSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to listen on.
    #[ortho_config(default = 3000)]
    pub port: u16,
    /// PostgreSQL URL; the in-memory store is used when unset.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
}

impl AppSettings {
    /// Configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Database URL when one is configured and non-blank.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }

    /// Configured pool size, falling back to the pool default.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_MAX_SIZE)
    }

    /// Resolve `host:port` to the first matching socket address.
    ///
    /// # Errors
    /// Returns [`io::Error`] when the host does not resolve.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        (self.host(), self.port())
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| io::Error::other(format!("host {} did not resolve", self.host())))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "EXERCISE_TRACKER_HOST",
        "EXERCISE_TRACKER_PORT",
        "EXERCISE_TRACKER_DATABASE_URL",
        "EXERCISE_TRACKER_POOL_MAX_SIZE",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("exercise-tracker")])
            .expect("config should load")
    }

    const DEFAULT_PORT: u16 = 3000;

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert_eq!(settings.database_url(), None);
        assert_eq!(settings.pool_max_size(), DEFAULT_MAX_SIZE);
        assert_eq!(
            settings.bind_addr().expect("default address"),
            SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("EXERCISE_TRACKER_HOST", Some("127.0.0.1".to_owned())),
            ("EXERCISE_TRACKER_PORT", Some("8081".to_owned())),
            (
                "EXERCISE_TRACKER_DATABASE_URL",
                Some("postgres://tracker@localhost/tracker".to_owned()),
            ),
            ("EXERCISE_TRACKER_POOL_MAX_SIZE", Some("4".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("loopback address"),
            SocketAddr::from(([127, 0, 0, 1], 8081))
        );
        assert_eq!(
            settings.database_url(),
            Some("postgres://tracker@localhost/tracker")
        );
        assert_eq!(settings.pool_max_size(), 4);
    }

    #[rstest]
    fn blank_database_url_selects_memory_store() {
        let _guard = lock_env([
            ("EXERCISE_TRACKER_HOST", None::<String>),
            ("EXERCISE_TRACKER_PORT", None::<String>),
            ("EXERCISE_TRACKER_DATABASE_URL", Some("  ".to_owned())),
            ("EXERCISE_TRACKER_POOL_MAX_SIZE", None::<String>),
        ]);

        assert_eq!(load_from_empty_args().database_url(), None);
    }

    #[rstest]
    fn port_override_keeps_other_defaults() {
        let _guard = lock_env([
            ("EXERCISE_TRACKER_HOST", None::<String>),
            ("EXERCISE_TRACKER_PORT", Some("4000".to_owned())),
            ("EXERCISE_TRACKER_DATABASE_URL", None::<String>),
            ("EXERCISE_TRACKER_POOL_MAX_SIZE", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.port, 4000);
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.pool_max_size(), DEFAULT_MAX_SIZE);
    }
}
