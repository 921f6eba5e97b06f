pub mod modules;
mod schema;
pub mod shared;

use modules::{
    customer::{CustomerRepositoryImpl, CustomerService},
    reservation::ReservationRepositoryImpl,
};
use shared::{errors::AppResult, utils::logger::init_logger, Database};
use std::sync::Arc;

/// Wire the customer service onto an existing database handle.
///
/// The handle is passed in explicitly; nothing in this crate keeps a global connection.
pub fn build_customer_service(db: Arc<Database>) -> CustomerService {
    let customer_repo = Arc::new(CustomerRepositoryImpl::new(Arc::clone(&db)));
    let reservation_repo = Arc::new(ReservationRepositoryImpl::new(db));

    CustomerService::new(customer_repo, reservation_repo)
}

/// Convenience bootstrap for host applications: logging, pool from the
/// environment, pending migrations, then the wired service.
pub fn bootstrap() -> AppResult<(Arc<Database>, CustomerService)> {
    init_logger();

    let db = Arc::new(Database::from_env()?);
    db.run_migrations()?;

    let service = build_customer_service(Arc::clone(&db));
    Ok((db, service))
}
