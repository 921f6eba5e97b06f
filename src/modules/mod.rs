// Bounded contexts
pub mod customer;
pub mod reservation;
