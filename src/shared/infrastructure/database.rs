use crate::log_info;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::env;
use std::time::Duration;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the customer store, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_size: u32,
    pub min_idle: u32,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    /// Load `DATABASE_URL` and the optional `DATABASE_POOL_*` overrides.
    /// A `.env` file in the working directory is honoured.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let url = env::var("DATABASE_URL").map_err(|_| {
            AppError::ConfigError("DATABASE_URL environment variable not found".to_string())
        })?;

        Self::from_parts(
            url,
            env::var("DATABASE_POOL_MAX_SIZE").ok(),
            env::var("DATABASE_POOL_MIN_IDLE").ok(),
            env::var("DATABASE_CONNECT_TIMEOUT_SECS").ok(),
        )
    }

    fn from_parts(
        url: String,
        max_size: Option<String>,
        min_idle: Option<String>,
        connect_timeout_secs: Option<String>,
    ) -> AppResult<Self> {
        let url = Self::validate_database_url(url)?;
        let defaults = PoolSizing::for_available_cpus();

        let max_size = parse_setting("DATABASE_POOL_MAX_SIZE", max_size)?.unwrap_or(defaults.max_size);
        if max_size == 0 {
            return Err(AppError::ConfigError(
                "DATABASE_POOL_MAX_SIZE must be at least 1".to_string(),
            ));
        }
        let min_idle = parse_setting("DATABASE_POOL_MIN_IDLE", min_idle)?
            .unwrap_or_else(|| std::cmp::max(2, max_size / 4))
            .min(max_size);
        let connect_timeout = parse_setting::<u64>("DATABASE_CONNECT_TIMEOUT_SECS", connect_timeout_secs)?
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS);

        Ok(Self {
            url,
            max_size,
            min_idle,
            connect_timeout: Duration::from_secs(connect_timeout),
        })
    }

    /// Validate database URL format
    fn validate_database_url(url: String) -> AppResult<String> {
        if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
            return Err(AppError::ConfigError(
                "Invalid database URL format. Must start with postgres:// or postgresql://"
                    .to_string(),
            ));
        }
        Ok(url)
    }

    /// Host part of the URL, safe to log
    pub fn redacted_host(&self) -> &str {
        self.url.rsplit('@').next().unwrap_or("unknown_host")
    }
}

fn parse_setting<T>(name: &str, raw: Option<String>) -> AppResult<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.map(|value| {
        value
            .trim()
            .parse::<T>()
            .map_err(|e| AppError::ConfigError(format!("Invalid {}: {}", name, e)))
    })
    .transpose()
}

#[derive(Debug)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    pub fn new(config: &DatabaseConfig) -> AppResult<Self> {
        log_info!("Initializing database connection to: {}", config.redacted_host());

        let manager = ConnectionManager::<PgConnection>::new(config.url.clone());

        let pool = r2d2::Pool::builder()
            .max_size(config.max_size)
            .min_idle(Some(config.min_idle))
            // The only timeout at this layer; queries inherit the server's settings
            .connection_timeout(config.connect_timeout)
            .idle_timeout(Some(Duration::from_secs(300)))
            .max_lifetime(Some(Duration::from_secs(1800)))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to create connection pool: {}", e))
            })?;

        log_info!(
            "Database connection pool initialized with max_size: {}, min_idle: {}",
            pool.max_size(),
            config.min_idle
        );

        Ok(Self { pool })
    }

    /// Build from `DatabaseConfig::from_env()`
    pub fn from_env() -> AppResult<Self> {
        Self::new(&DatabaseConfig::from_env()?)
    }

    /// Create a Database instance from an existing pool (useful for testing)
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn get_connection(&self) -> AppResult<DbConnection> {
        let start = std::time::Instant::now();

        match self.pool.get() {
            Ok(conn) => {
                let duration = start.elapsed().as_millis() as u64;
                if duration > 100 {
                    LogContext::performance_metric("db_connection_acquire", duration, Some("slow"));
                }
                Ok(conn)
            }
            Err(e) => {
                LogContext::error_with_context(
                    &e,
                    "Failed to acquire database connection from pool",
                );
                Err(AppError::from(e))
            }
        }
    }

    /// Apply any embedded migrations that have not run yet.
    pub fn run_migrations(&self) -> AppResult<usize> {
        let mut conn = self.get_connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::DatabaseError(format!("Failed to run migrations: {}", e)))?;

        if applied.is_empty() {
            log::debug!("Database schema is up to date");
        } else {
            log_info!("Applied {} database migration(s)", applied.len());
        }
        Ok(applied.len())
    }
}

#[derive(Debug)]
struct PoolSizing {
    max_size: u32,
}

impl PoolSizing {
    fn for_available_cpus() -> Self {
        let cpu_count = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);

        Self {
            max_size: std::cmp::min(cpu_count * 2, 20) as u32,
        }
    }
}
