use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use sqlx::{
    MySqlPool,
    mysql::{MySqlConnectOptions, MySqlPoolOptions, MySqlSslMode},
};

/// Handle to the relational database. The pool type is opaque to callers.
#[derive(Clone, Debug)]
pub struct Database {
    database_pool: MySqlPool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub db: String,
    pub credentials: DatabaseCredentials,
    pub connection: DatabaseConnection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConnection {
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseCredentials {
    pub username: String,
    pub password: String,
}

impl Default for DatabaseSettings {
    /// The local development instance: `root` with an empty password
    /// against the `dsa` database.
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3306,
            db: "dsa".to_string(),
            credentials: DatabaseCredentials {
                username: "root".to_string(),
                password: String::new(),
            },
            connection: DatabaseConnection {
                min_connections: 1,
                max_connections: 5,
                acquire_timeout_seconds: 3,
            },
        }
    }
}

impl Database {
    /// Opens a pool against the instance described by `settings`. The first
    /// connection is established eagerly, so an unreachable server fails here
    /// rather than on first use.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, anyhow::Error> {
        let credentials = &settings.credentials;
        let connect_options = MySqlConnectOptions::new()
            .host(&settings.host)
            .port(settings.port)
            .username(&credentials.username)
            .password(&credentials.password)
            .database(&settings.db)
            .ssl_mode(MySqlSslMode::Preferred);

        let connection = &settings.connection;
        let pool = MySqlPoolOptions::new()
            .min_connections(connection.min_connections)
            .max_connections(connection.max_connections)
            .acquire_timeout(Duration::from_secs(connection.acquire_timeout_seconds))
            .connect_with(connect_options)
            .await
            .with_context(|| {
                format!(
                    "failed to open database at {}/{}",
                    settings.host, settings.db
                )
            })?;

        Ok(Self {
            database_pool: pool,
        })
    }

    pub fn database_pool(&self) -> &MySqlPool {
        &self.database_pool
    }
}

/// Attempts a connection to the local instance with the default credentials.
/// Failures are logged and swallowed; the caller gets `None` instead of an
/// error.
pub async fn create_connection() -> Option<Database> {
    let settings = DatabaseSettings::default();
    match Database::connect(&settings).await {
        Ok(database) => {
            tracing::info!("connected to mysql database {}", settings.db);
            Some(database)
        }
        Err(e) => {
            tracing::error!("error while connecting to mysql: {:#}", e);
            None
        }
    }
}
