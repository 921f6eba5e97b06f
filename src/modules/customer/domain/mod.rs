pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::customer::Customer;
pub use repositories::customer_repository::{CustomerRepository, RankedCustomer};
pub use value_objects::{CustomerId, NameQuery};
