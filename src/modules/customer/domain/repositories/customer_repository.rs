/// Repository trait for customer persistence
///
/// Every method is a single round trip to the store. Store failures surface
/// as `AppError::DatabaseError` and are never retried here.
use crate::modules::customer::domain::{
    entities::customer::Customer,
    value_objects::{CustomerId, NameQuery},
};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Maximum number of customers returned by `top_by_reservations` callers
pub const TOP_RESERVATION_HOLDERS_LIMIT: i64 = 10;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// All customers ordered by last name, then first name
    async fn find_all(&self) -> AppResult<Vec<Customer>>;

    /// Get customer by ID
    async fn find_by_id(&self, id: CustomerId) -> AppResult<Option<Customer>>;

    /// Insert a new customer and return the id assigned by the store
    async fn insert(&self, customer: &Customer) -> AppResult<CustomerId>;

    /// Overwrite every mutable field of an existing customer.
    /// Returns the number of rows touched (0 when the id is unknown).
    async fn update(&self, id: CustomerId, customer: &Customer) -> AppResult<usize>;

    /// Substring match on names; order is whatever the store returns
    async fn search_by_name(&self, query: &NameQuery) -> AppResult<Vec<Customer>>;

    /// Customers with at least one reservation, most reservations first
    async fn top_by_reservations(&self, limit: i64) -> AppResult<Vec<RankedCustomer>>;
}

/// Customer paired with its reservation count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCustomer {
    pub customer: Customer,
    pub reservation_count: i64,
}
