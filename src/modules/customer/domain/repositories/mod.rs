pub mod customer_repository;

pub use customer_repository::{
    CustomerRepository, RankedCustomer, TOP_RESERVATION_HOLDERS_LIMIT,
};
