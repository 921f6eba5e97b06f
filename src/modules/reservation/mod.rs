/// Reservation collaborator
///
/// Read-only view of the reservations table used by the customer module.
/// Creating and editing reservations belongs to a separate component.
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use domain::{entities::Reservation, repository::ReservationRepository};
pub use infrastructure::ReservationRepositoryImpl;
