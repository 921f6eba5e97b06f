//! Customer-specific value objects

pub mod customer_id;
pub mod name_query;

pub use customer_id::CustomerId;
pub use name_query::NameQuery;
