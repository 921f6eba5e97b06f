/// Database test utilities with singleton pattern
///
/// Provides thread-safe access to the test database with proper isolation.
/// TEST_DATABASE_URL must point at a disposable PostgreSQL database.
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use lunchly_lib::build_customer_service;
use lunchly_lib::modules::customer::CustomerService;
use lunchly_lib::shared::Database;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

static DB: OnceLock<Arc<Database>> = OnceLock::new();

/// Get or create the shared test database, migrated once per process
pub fn get_test_db() -> Arc<Database> {
    DB.get_or_init(|| {
        dotenvy::dotenv().ok();
        let test_db_url = std::env::var("TEST_DATABASE_URL")
            .expect("TEST_DATABASE_URL must be set in .env for tests");

        let manager = ConnectionManager::<PgConnection>::new(test_db_url);
        let pool = r2d2::Pool::builder()
            .max_size(10)
            .build(manager)
            .expect("Failed to create test database pool");

        let db = Database::from_pool(pool);
        db.run_migrations()
            .expect("Unable to migrate the test database");
        Arc::new(db)
    })
    .clone()
}

/// Clean all test tables - use at the start of each test
pub fn clean_test_db(db: &Database) {
    let mut conn = db.get_connection().expect("Failed to get DB connection");

    diesel::sql_query("TRUNCATE TABLE reservations, customers RESTART IDENTITY CASCADE")
        .execute(&mut conn)
        .expect("Failed to clean customer tables");
}

/// Global test mutex for serialization
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Acquire test lock to ensure tests run serially
/// Returns a guard that releases the lock when dropped
pub fn acquire_test_lock() -> MutexGuard<'static, ()> {
    // Handle poisoned mutex by recovering from panic
    match TEST_LOCK.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Everything a database test needs; holds the test lock while alive
pub struct TestContext {
    pub db: Arc<Database>,
    pub service: CustomerService,
    _guard: MutexGuard<'static, ()>,
}

/// Lock, truncate and wire a fresh service
pub fn setup() -> TestContext {
    let guard = acquire_test_lock();

    let db = get_test_db();
    clean_test_db(&db);

    TestContext {
        service: build_customer_service(Arc::clone(&db)),
        db,
        _guard: guard,
    }
}
