//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `SCHOOLS_*` environment variables or a
//! configuration file. Everything except the database URL has a default.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::outbound::persistence::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DEFAULT_MIN_IDLE, PoolConfig,
};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Problems with otherwise well-formed settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("SCHOOLS_DATABASE_URL must be set")]
    MissingDatabaseUrl,
    #[error("invalid listen host `{host}`")]
    InvalidHost { host: String },
}

/// Configuration for the HTTP server and its database pool.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SCHOOLS")]
pub struct ServerSettings {
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Listen address.
    pub host: Option<String>,
    /// Listen port.
    pub port: Option<u16>,
    /// Upper bound on pooled connections.
    pub pool_max_size: Option<u32>,
    /// Idle connections kept warm.
    pub pool_min_idle: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub pool_connect_timeout_secs: Option<u64>,
    /// Apply embedded migrations before serving.
    pub run_migrations: Option<bool>,
}

impl ServerSettings {
    /// Return the database URL.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingDatabaseUrl`] when unset or blank.
    pub fn database_url(&self) -> Result<&str, SettingsError> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(SettingsError::MissingDatabaseUrl)
    }

    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Socket address the server binds to.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidHost`] when the host is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host();
        let ip: IpAddr = host.parse().map_err(|_| SettingsError::InvalidHost {
            host: host.to_owned(),
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }

    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }

    /// Build the pool configuration from these settings.
    ///
    /// # Errors
    ///
    /// Fails when no database URL is configured.
    pub fn pool_config(&self) -> Result<PoolConfig, SettingsError> {
        let timeout = self
            .pool_connect_timeout_secs
            .map_or(DEFAULT_CONNECTION_TIMEOUT, Duration::from_secs);
        Ok(PoolConfig::new(self.database_url()?)
            .with_max_size(self.pool_max_size.unwrap_or(DEFAULT_MAX_SIZE))
            .with_min_idle(Some(self.pool_min_idle.unwrap_or(DEFAULT_MIN_IDLE)))
            .with_connection_timeout(timeout))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const KEYS: [&str; 7] = [
        "SCHOOLS_DATABASE_URL",
        "SCHOOLS_HOST",
        "SCHOOLS_PORT",
        "SCHOOLS_POOL_MAX_SIZE",
        "SCHOOLS_POOL_MIN_IDLE",
        "SCHOOLS_POOL_CONNECT_TIMEOUT_SECS",
        "SCHOOLS_RUN_MIGRATIONS",
    ];

    fn unset() -> ServerSettings {
        ServerSettings {
            database_url: None,
            host: None,
            port: None,
            pool_max_size: None,
            pool_min_idle: None,
            pool_connect_timeout_secs: None,
            run_migrations: None,
        }
    }

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("school-directory")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(KEYS.map(|key| (key, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), "0.0.0.0");
        assert_eq!(settings.port(), 3000);
        assert!(settings.run_migrations());
        assert_eq!(
            settings.database_url(),
            Err(SettingsError::MissingDatabaseUrl)
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "SCHOOLS_DATABASE_URL",
                Some("postgres://localhost/schools".to_owned()),
            ),
            ("SCHOOLS_HOST", Some("127.0.0.1".to_owned())),
            ("SCHOOLS_PORT", Some("8081".to_owned())),
            ("SCHOOLS_POOL_MAX_SIZE", Some("4".to_owned())),
            ("SCHOOLS_POOL_MIN_IDLE", Some("1".to_owned())),
            ("SCHOOLS_POOL_CONNECT_TIMEOUT_SECS", Some("5".to_owned())),
            ("SCHOOLS_RUN_MIGRATIONS", Some("false".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr(),
            Ok("127.0.0.1:8081".parse().expect("valid address"))
        );
        assert!(!settings.run_migrations());

        let pool = settings.pool_config().expect("database url is set");
        assert_eq!(pool.database_url(), "postgres://localhost/schools");
        assert_eq!(pool.max_size(), 4);
        assert_eq!(pool.min_idle(), Some(1));
        assert_eq!(pool.connection_timeout(), Duration::from_secs(5));
    }

    #[rstest]
    fn pool_defaults_follow_the_persistence_layer() {
        let settings = ServerSettings {
            database_url: Some("postgres://db/schools".into()),
            ..unset()
        };
        let pool = settings.pool_config().expect("database url is set");
        assert_eq!(pool.max_size(), DEFAULT_MAX_SIZE);
        assert_eq!(pool.min_idle(), Some(DEFAULT_MIN_IDLE));
        assert_eq!(pool.connection_timeout(), DEFAULT_CONNECTION_TIMEOUT);
    }

    #[rstest]
    #[case(Some("   "))]
    #[case(None)]
    fn blank_database_url_is_missing(#[case] url: Option<&str>) {
        let settings = ServerSettings {
            database_url: url.map(str::to_owned),
            ..unset()
        };
        assert!(settings.pool_config().is_err());
    }

    #[rstest]
    fn hostnames_are_rejected_as_bind_hosts() {
        let settings = ServerSettings {
            host: Some("schools.internal".into()),
            ..unset()
        };
        assert_eq!(
            settings.bind_addr(),
            Err(SettingsError::InvalidHost {
                host: "schools.internal".into()
            })
        );
    }
}
