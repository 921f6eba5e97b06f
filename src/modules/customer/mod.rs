pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::CustomerService;
pub use domain::{Customer, CustomerId, CustomerRepository, NameQuery, RankedCustomer};
pub use infrastructure::CustomerRepositoryImpl;
